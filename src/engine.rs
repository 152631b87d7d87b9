//! Synthesis coordinator
//!
//! Orchestrates the consensus summary, agreement clustering, gap detection,
//! and expert alignment into one structured result for a council of
//! perspectives. Each invocation is an independent, stateless computation
//! over the supplied mapping.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alignment::{check_alignment, AlignmentResult};
use crate::cluster::cluster_perspectives;
use crate::collaborators::{ConsensusSummarizer, LessonStore};
use crate::errors::Result;
use crate::gaps::{find_unique_insights, GapInsight};

/// Thresholds for the synthesis pipeline
///
/// The defaults are calibrated against the character-sequence similarity
/// metric in [`crate::similarity`]; change them together with the metric or
/// not at all.
#[derive(Clone, Debug)]
pub struct SynthesisConfig {
    /// Minimum seed similarity (exclusive) for joining a cluster (default: 0.70)
    pub cluster_threshold: f64,
    /// Maximum rest similarity (exclusive) for flagging an outlier (default: 0.40)
    pub gap_threshold: f64,
    /// Minimum lesson similarity (exclusive) for an aligned verdict (default: 0.75)
    pub alignment_threshold: f64,
    /// Character cap for gap insight excerpts (default: 240)
    pub max_insight_chars: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            cluster_threshold: 0.70,
            gap_threshold: 0.40,
            alignment_threshold: 0.75,
            max_insight_chars: 240,
        }
    }
}

/// Full structured result of one synthesis pass
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SynthesisResult {
    /// Consensus string produced by the summarizer collaborator
    pub consensus: String,
    /// Member names of the largest cluster
    pub major_opinion: Vec<String>,
    /// All clusters, in seed-first-seen order
    pub clusters: Vec<Vec<String>>,
    /// Outlier perspectives, in perspective order
    pub logical_gaps: Vec<GapInsight>,
    /// How the consensus compares to retained lessons
    pub expert_alignment: AlignmentResult,
}

impl SynthesisResult {
    /// Serialize to the caller-facing JSON shape
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Gap-finding synthesis engine
///
/// Holds the two injected collaborators and the threshold configuration.
/// Concurrent calls are independent; the engine keeps no state between
/// invocations beyond what the lesson store supplies.
pub struct SynthesisEngine {
    summarizer: Arc<dyn ConsensusSummarizer>,
    lesson_store: Arc<dyn LessonStore>,
    config: SynthesisConfig,
}

impl SynthesisEngine {
    /// Create an engine with default thresholds
    pub fn new(
        summarizer: Arc<dyn ConsensusSummarizer>,
        lesson_store: Arc<dyn LessonStore>,
    ) -> Self {
        Self {
            summarizer,
            lesson_store,
            config: SynthesisConfig::default(),
        }
    }

    /// Set custom thresholds (builder pattern)
    pub fn with_config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the full synthesis over an ordered perspective mapping.
    ///
    /// The consensus summary and retained lessons are fetched concurrently;
    /// clustering, gap detection, and alignment then run over the same fixed
    /// input. If either collaborator fails, the whole call fails and no
    /// partial result is returned.
    pub async fn find_the_gap(
        &self,
        perspectives: &IndexMap<String, String>,
    ) -> Result<SynthesisResult> {
        let texts: Vec<String> = perspectives.values().cloned().collect();

        // The two collaborator calls have no data dependency on each other
        let (consensus, lessons) = tokio::try_join!(
            self.summarizer.summarize(&texts),
            self.lesson_store.get_retained_lessons(),
        )?;

        let (clusters, major_opinion) =
            cluster_perspectives(perspectives, self.config.cluster_threshold);
        let logical_gaps = find_unique_insights(
            perspectives,
            self.config.gap_threshold,
            self.config.max_insight_chars,
        );
        let expert_alignment =
            check_alignment(&consensus, &lessons, self.config.alignment_threshold);

        debug!(
            perspectives = perspectives.len(),
            clusters = clusters.len(),
            gaps = logical_gaps.len(),
            alignment = ?expert_alignment.status,
            "synthesis complete"
        );

        Ok(SynthesisResult {
            consensus,
            major_opinion,
            clusters,
            logical_gaps,
            expert_alignment,
        })
    }
}

//! Logical gap detection
//!
//! A perspective is a "logical gap" when its text is an outlier relative to
//! the aggregate of every other perspective's text. Gaps carry a truncated
//! excerpt of the outlier so callers can show it without re-fetching.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::similarity::similarity;

/// One outlier perspective and how dissimilar it is from the rest
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GapInsight {
    /// Name of the perspective that diverged
    pub source: String,
    /// Excerpt of the outlier text, capped with a trailing `"..."`
    pub insight: String,
    /// Similarity of the outlier against all other texts joined together
    pub similarity_score: f64,
}

/// Detect perspectives that diverge from the aggregate of the others.
///
/// For each perspective, `rest` is the space-joined concatenation of every
/// *other* perspective's text; a [`GapInsight`] is emitted when
/// `similarity(text, rest)` is strictly below `threshold`. Emission order
/// follows the mapping's iteration order.
///
/// With a single perspective, `rest` is empty, so any non-empty text scores
/// 0.0 against it and is always flagged.
pub fn find_unique_insights(
    perspectives: &IndexMap<String, String>,
    threshold: f64,
    max_insight_chars: usize,
) -> Vec<GapInsight> {
    let mut gaps = Vec::new();

    for (name, text) in perspectives {
        let rest = perspectives
            .iter()
            .filter(|(other, _)| *other != name)
            .map(|(_, other_text)| other_text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let score = similarity(text, &rest);
        if score < threshold {
            gaps.push(GapInsight {
                source: name.clone(),
                insight: truncate_insight(text, max_insight_chars),
                similarity_score: score,
            });
        }
    }

    gaps
}

/// Cap an insight at `max_chars` characters, appending `"..."` only when
/// the text was actually longer.
fn truncate_insight(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut excerpt: String = text.chars().take(max_chars).collect();
        excerpt.push_str("...");
        excerpt
    } else {
        text.to_string()
    }
}

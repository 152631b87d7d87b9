//! Expert alignment against retained lessons
//!
//! Compares a consensus string with the ordered lessons a deployment has
//! retained from past decisions, reporting the closest lesson and whether
//! the match clears the alignment threshold.

use serde::{Deserialize, Serialize};

use crate::similarity::similarity;

/// Verdict of the alignment check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentStatus {
    /// Best lesson similarity cleared the threshold
    Aligned,
    /// Lessons exist but none matched closely enough
    Divergent,
    /// No retained lessons to compare against
    Unknown,
}

/// Outcome of comparing a consensus against retained lessons
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AlignmentResult {
    pub status: AlignmentStatus,
    /// Best similarity across all lessons (0.0 when there are none)
    pub similarity: f64,
    /// The lesson achieving the best similarity; absent when no lessons exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closest_lesson: Option<String>,
}

/// Compare `consensus` against each lesson in order.
///
/// The first lesson achieving the maximum similarity wins ties. Status is
/// [`AlignmentStatus::Aligned`] when that maximum strictly exceeds
/// `threshold`, [`AlignmentStatus::Divergent`] otherwise, and
/// [`AlignmentStatus::Unknown`] when `lessons` is empty.
pub fn check_alignment(consensus: &str, lessons: &[String], threshold: f64) -> AlignmentResult {
    if lessons.is_empty() {
        return AlignmentResult {
            status: AlignmentStatus::Unknown,
            similarity: 0.0,
            closest_lesson: None,
        };
    }

    let mut best_similarity = f64::NEG_INFINITY;
    let mut closest_lesson: Option<&String> = None;

    for lesson in lessons {
        let sim = similarity(consensus, lesson);
        // Strict comparison keeps the earliest lesson on ties
        if sim > best_similarity {
            best_similarity = sim;
            closest_lesson = Some(lesson);
        }
    }

    let status = if best_similarity > threshold {
        AlignmentStatus::Aligned
    } else {
        AlignmentStatus::Divergent
    };

    AlignmentResult {
        status,
        similarity: best_similarity,
        closest_lesson: closest_lesson.cloned(),
    }
}

//! Character-sequence similarity scoring
//!
//! The whole pipeline is calibrated against a matching-block ratio over
//! character sequences (the thresholds in [`SynthesisConfig`] assume it), so
//! this must stay sequence-based rather than token-set or embedding-based.
//!
//! [`SynthesisConfig`]: crate::engine::SynthesisConfig

use similar::TextDiff;

/// Similarity between two strings in `[0.0, 1.0]`.
///
/// Computed as `2 * M / T` where `M` is the number of matched characters and
/// `T` the combined length. Symmetric, and `1.0` for identical inputs.
///
/// Edge cases: two empty strings score `1.0`; empty against non-empty
/// scores `0.0`. Total over arbitrary strings, never fails.
pub fn similarity(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

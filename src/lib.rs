//! Mirror Synthesis
//!
//! Gap-finding synthesis over a council of independently produced
//! textual perspectives:
//! - Agreement Clustering: group perspectives that say the same thing
//! - Logical Gaps: surface outlier perspectives the rest of the council missed
//! - Expert Alignment: compare the consensus against retained lessons

// Module declarations
pub mod alignment;
pub mod cluster;
pub mod collaborators;
pub mod engine;
pub mod errors;
pub mod gaps;
pub mod similarity;

// Re-export main types
pub use alignment::{check_alignment, AlignmentResult, AlignmentStatus};

pub use cluster::cluster_perspectives;

pub use collaborators::{
    ConsensusSummarizer, InMemoryLessonStore, LessonStore, StaticSummarizer,
};

pub use engine::{SynthesisConfig, SynthesisEngine, SynthesisResult};

pub use errors::{Result, SynthesisError};

pub use gaps::{find_unique_insights, GapInsight};

pub use similarity::similarity;

/// Version of the synthesis crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the synthesis system
pub fn init() {
    tracing::info!("Mirror Synthesis v{}", VERSION);
}

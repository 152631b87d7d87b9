//! External collaborator traits
//!
//! The synthesis engine depends on two injected collaborators: a consensus
//! summarizer and a retained-lesson store. Both are trait objects so tests
//! and deployments can substitute implementations without touching the
//! coordinator. Collaborator errors are `anyhow::Error` at this boundary and
//! surface as [`SynthesisError::Collaborator`](crate::errors::SynthesisError)
//! from the engine.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Store of lessons retained from past decisions (allows test mocks)
#[async_trait]
pub trait LessonStore: Send + Sync {
    /// Ordered retained lessons, possibly empty. Must not mutate on read.
    async fn get_retained_lessons(&self) -> anyhow::Result<Vec<String>>;
}

/// Produces a single consensus string from a sequence of perspective texts
#[async_trait]
pub trait ConsensusSummarizer: Send + Sync {
    /// Summarize the texts into one consensus string.
    ///
    /// Deterministic output is not required; the caller never retries on a
    /// non-failure result.
    async fn summarize(&self, texts: &[String]) -> anyhow::Result<String>;
}

/// In-memory lesson store for testing and single-process deployments
pub struct InMemoryLessonStore {
    lessons: Arc<RwLock<Vec<String>>>,
}

impl InMemoryLessonStore {
    pub fn new() -> Self {
        Self {
            lessons: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with lessons
    pub fn with_lessons(lessons: Vec<String>) -> Self {
        Self {
            lessons: Arc::new(RwLock::new(lessons)),
        }
    }

    /// Append a lesson, preserving insertion order
    pub async fn retain_lesson(&self, lesson: impl Into<String>) {
        let mut lessons = self.lessons.write().await;
        lessons.push(lesson.into());
    }
}

impl Default for InMemoryLessonStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LessonStore for InMemoryLessonStore {
    async fn get_retained_lessons(&self) -> anyhow::Result<Vec<String>> {
        let lessons = self.lessons.read().await;
        Ok(lessons.clone())
    }
}

/// Canned summarizer that ignores its input.
///
/// Stands in until an LLM-backed summarizer is wired in; any implementation
/// of [`ConsensusSummarizer`] can replace it without touching the engine.
pub struct StaticSummarizer {
    text: String,
}

impl StaticSummarizer {
    pub fn new() -> Self {
        Self {
            text: "The primary agreement across models centers on shared themes \
                   and overlapping logic."
                .to_string(),
        }
    }

    /// Use a specific canned consensus instead of the default sentence
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for StaticSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsensusSummarizer for StaticSummarizer {
    async fn summarize(&self, _texts: &[String]) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }
}

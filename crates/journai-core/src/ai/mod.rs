//! Pluggable mood analysis backend
//!
//! # Architecture
//!
//! - `MoodAnalyzer` trait: the interface every backend implements
//! - `AIClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `GeminiBackend`, `MockBackend`
//!
//! # Usage
//!
//! ```rust,ignore
//! let ai = AIClient::from_env();
//!
//! if let Some(ref client) = ai {
//!     let analysis = client.analyze_or_fallback(text).await;
//!     println!("Mood: {}", analysis.mood);
//! }
//! ```
//!
//! # Configuration
//!
//! Environment variables:
//! - `AI_BACKEND`: Backend to use (gemini, mock). Default: gemini
//! - `GEMINI_API_KEY`: API key (required for the gemini backend)
//! - `GEMINI_MODEL`: Model name (default: gemini-1.5-flash)
//! - `GEMINI_HOST`: API base URL (default: the public Google endpoint)

mod gemini;
mod mock;
pub mod parsing;
pub mod types;

pub use gemini::{GeminiBackend, DEFAULT_GEMINI_HOST, DEFAULT_GEMINI_MODEL};
pub use mock::MockBackend;
pub use types::*;

use async_trait::async_trait;

use crate::error::Result;

/// Interface for mood analysis backends
#[async_trait]
pub trait MoodAnalyzer: Send + Sync {
    /// Classify the mood of a journal entry and summarize it
    async fn analyze_journal(&self, text: &str) -> Result<MoodAnalysis>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete AI client
#[derive(Clone)]
pub enum AIClient {
    Gemini(GeminiBackend),
    Mock(MockBackend),
}

impl AIClient {
    /// Create a client from environment variables
    ///
    /// Returns `None` when the selected backend is not configured.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("AI_BACKEND").unwrap_or_else(|_| "gemini".to_string());

        match backend.to_lowercase().as_str() {
            "gemini" => GeminiBackend::from_env().map(AIClient::Gemini),
            "mock" => Some(AIClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown AI_BACKEND, falling back to gemini");
                GeminiBackend::from_env().map(AIClient::Gemini)
            }
        }
    }

    pub fn gemini(host: &str, model: &str, api_key: &str) -> Self {
        AIClient::Gemini(GeminiBackend::new(host, model, api_key))
    }

    pub fn mock() -> Self {
        AIClient::Mock(MockBackend::new())
    }

    /// Analyze an entry, returning the neutral fallback if the backend fails
    pub async fn analyze_or_fallback(&self, text: &str) -> MoodAnalysis {
        match self.analyze_journal(text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    model = self.model(),
                    "Mood analysis failed, returning fallback"
                );
                MoodAnalysis::fallback()
            }
        }
    }
}

#[async_trait]
impl MoodAnalyzer for AIClient {
    async fn analyze_journal(&self, text: &str) -> Result<MoodAnalysis> {
        match self {
            AIClient::Gemini(b) => b.analyze_journal(text).await,
            AIClient::Mock(b) => b.analyze_journal(text).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AIClient::Gemini(b) => b.health_check().await,
            AIClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AIClient::Gemini(b) => b.model(),
            AIClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AIClient::Gemini(b) => b.host(),
            AIClient::Mock(b) => b.host(),
        }
    }
}

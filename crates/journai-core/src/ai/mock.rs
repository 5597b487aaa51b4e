//! Mock backend for testing
//!
//! Keyword-based mood detection so tests and local development work without
//! a Gemini API key.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::Mood;

use super::types::MoodAnalysis;
use super::MoodAnalyzer;

/// Mock mood analyzer
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Whether health_check should return true
    pub healthy: bool,
    /// Whether analyze_journal should fail
    pub failing: bool,
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self {
            healthy: true,
            failing: false,
        }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            failing: false,
        }
    }

    /// Create a mock backend whose analysis always errors
    pub fn failing() -> Self {
        Self {
            healthy: false,
            failing: true,
        }
    }
}

fn detect_mood(text: &str) -> Mood {
    let lower = text.to_lowercase();
    let keywords: [(&[&str], Mood); 8] = [
        (&["exhausted", "tired", "drained", "sleepy"], Mood::Tired),
        (&["grateful", "thankful"], Mood::Grateful),
        (&["anxious", "nervous", "panic"], Mood::Anxious),
        (&["worried", "worry"], Mood::Worried),
        (&["angry", "furious"], Mood::Angry),
        (&["frustrated", "annoyed"], Mood::Frustrated),
        (&["sad", "lonely", "cried"], Mood::Sad),
        (&["happy", "celebrated", "great day", "joy"], Mood::Happy),
    ];

    keywords
        .iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
        .map(|(_, mood)| *mood)
        .unwrap_or(Mood::Neutral)
}

#[async_trait]
impl MoodAnalyzer for MockBackend {
    async fn analyze_journal(&self, text: &str) -> Result<MoodAnalysis> {
        if self.failing {
            return Err(Error::Analysis("Mock analyzer configured to fail".into()));
        }

        let mood = detect_mood(text);
        Ok(MoodAnalysis {
            mood,
            summary: format!("A {} entry of {} words.", mood, crate::journal::count_words(text)),
            reason: format!("Keyword match for '{}'.", mood),
        })
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_detects_keywords() {
        let mock = MockBackend::new();
        let analysis = mock
            .analyze_journal("Completely exhausted after the night shift")
            .await
            .unwrap();
        assert_eq!(analysis.mood, Mood::Tired);

        let analysis = mock.analyze_journal("Nothing much happened today").await.unwrap();
        assert_eq!(analysis.mood, Mood::Neutral);
    }

    #[tokio::test]
    async fn test_mock_health_and_failure() {
        assert!(MockBackend::new().health_check().await);
        assert!(!MockBackend::unhealthy().health_check().await);
        assert!(MockBackend::failing()
            .analyze_journal("anything at all")
            .await
            .is_err());
    }
}

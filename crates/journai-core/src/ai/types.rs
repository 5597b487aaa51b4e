//! Mood analysis result types

use serde::{Deserialize, Serialize};

use crate::models::Mood;

/// Mood, one-line summary and reasoning for a journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub mood: Mood,
    pub summary: String,
    pub reason: String,
}

impl MoodAnalysis {
    /// Neutral analysis returned when the analyzer fails
    pub fn fallback() -> Self {
        Self {
            mood: Mood::Neutral,
            summary: "Please share your journal thoughts and experiences for analysis".to_string(),
            reason: "Unable to analyze the provided content. Please write about your day, \
                     feelings, or experiences."
                .to_string(),
        }
    }
}

/// Raw fields as the model returns them
#[derive(Debug, Deserialize)]
pub(crate) struct RawAnalysis {
    #[serde(default)]
    pub mood: Option<serde_json::Value>,
    #[serde(default)]
    pub summary: Option<serde_json::Value>,
    #[serde(default)]
    pub reason: Option<serde_json::Value>,
}

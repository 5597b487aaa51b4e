//! Gemini backend implementation
//!
//! HTTP client for the Gemini `generateContent` API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::Mood;

use super::parsing::parse_mood_analysis;
use super::types::MoodAnalysis;
use super::MoodAnalyzer;

/// Public Gemini API endpoint
pub const DEFAULT_GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";

/// Model used when `GEMINI_MODEL` is not set
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Gemini backend
#[derive(Clone)]
pub struct GeminiBackend {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create from environment variables
    ///
    /// Returns `None` when `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())?;
        if !looks_like_api_key(&api_key) {
            warn!("GEMINI_API_KEY does not look like a Google API key");
        }
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let host = std::env::var("GEMINI_HOST").unwrap_or_else(|_| DEFAULT_GEMINI_HOST.to_string());
        Some(Self::new(&host, &model, &api_key))
    }

    fn model_url(&self) -> String {
        format!("{}/v1beta/models/{}", self.base_url, self.model)
    }
}

fn looks_like_api_key(key: &str) -> bool {
    key.len() > 10 && key.starts_with("AI")
}

fn analysis_prompt(text: &str) -> String {
    let moods = Mood::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Read the journal entry below and describe the writer's emotional state.

JOURNAL ENTRY:
"""
{text}
"""

Reply with a single JSON object and nothing else:
{{
  "mood": "<exactly one of: {moods}>",
  "summary": "<one sentence of 15 to 30 words about the day or emotional state>",
  "reason": "<short explanation quoting words or signals from the entry>"
}}

Use "neutral" for matter-of-fact entries and "tired" for exhaustion or fatigue."#
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[async_trait]
impl MoodAnalyzer for GeminiBackend {
    async fn analyze_journal(&self, text: &str) -> Result<MoodAnalysis> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: analysis_prompt(text),
                }],
            }],
        };

        info!(
            text_length = text.len(),
            model = %self.model,
            "Sending journal analysis request to Gemini"
        );

        let response = self
            .http_client
            .post(format!("{}:generateContent", self.model_url()))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        let text = body
            .text()
            .ok_or_else(|| Error::Analysis("Gemini returned no candidates".into()))?;
        debug!("Gemini response: {}", text);

        parse_mood_analysis(&text)
    }

    async fn health_check(&self) -> bool {
        match self
            .http_client
            .get(self.model_url())
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockGeminiServer;

    #[test]
    fn test_prompt_lists_vocabulary() {
        let prompt = analysis_prompt("Went hiking.");
        assert!(prompt.contains("Went hiking."));
        for mood in Mood::ALL {
            assert!(prompt.contains(mood.as_str()));
        }
    }

    #[test]
    fn test_api_key_shape() {
        assert!(looks_like_api_key("AIzaSyExampleKey123"));
        assert!(!looks_like_api_key("short"));
        assert!(!looks_like_api_key("sk-0123456789abcdef"));
    }

    #[tokio::test]
    async fn test_analyze_journal_against_mock_server() {
        let server = MockGeminiServer::start().await;
        let backend = GeminiBackend::new(&server.url(), "gemini-test", "AIzaTestKey000");

        let analysis = backend
            .analyze_journal("I finally finished the project and celebrated with friends.")
            .await
            .unwrap();
        assert_eq!(analysis.mood, Mood::Happy);
        assert!(!analysis.summary.is_empty());
        assert!(backend.health_check().await);
    }

    #[tokio::test]
    async fn test_analyze_journal_surfaces_http_errors() {
        let server = MockGeminiServer::start_failing().await;
        let backend = GeminiBackend::new(&server.url(), "gemini-test", "AIzaTestKey000");

        let err = backend.analyze_journal("Some text here").await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(!backend.health_check().await);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unhealthy() {
        let backend = GeminiBackend::new("http://127.0.0.1:1", "gemini-test", "AIzaTestKey000");
        assert!(!backend.health_check().await);
    }
}

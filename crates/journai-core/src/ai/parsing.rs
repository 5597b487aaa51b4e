//! JSON parsing helpers for model responses
//!
//! Models often wrap the JSON payload in markdown fences or surrounding prose.

use crate::error::{Error, Result};
use crate::models::Mood;

use super::types::{MoodAnalysis, RawAnalysis};

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Remove markdown code fences (```json ... ```) from a response
fn strip_code_fences(response: &str) -> String {
    response
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix("```") {
                Some(rest) => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn required_string(value: Option<serde_json::Value>, field: &str) -> Result<String> {
    match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(serde_json::Value::String(_)) | None | Some(serde_json::Value::Null) => Err(
            Error::Analysis(format!("Missing required field '{}' in model response", field)),
        ),
        Some(_) => Err(Error::Analysis(format!(
            "Field '{}' in model response is not a string",
            field
        ))),
    }
}

/// Parse a mood analysis from a model response
pub fn parse_mood_analysis(response: &str) -> Result<MoodAnalysis> {
    let cleaned = strip_code_fences(response.trim());
    let start = cleaned.find('{');
    let end = cleaned.rfind('}');

    let json_str = match (start, end) {
        (Some(s), Some(e)) if s < e => &cleaned[s..=e],
        _ => {
            return Err(Error::InvalidData(format!(
                "No JSON found in model response | Raw: {}",
                truncate(&cleaned, 200)
            )))
        }
    };

    let raw: RawAnalysis = serde_json::from_str(json_str).map_err(|e| {
        Error::InvalidData(format!(
            "Invalid JSON from model: {} | Raw: {}",
            e,
            truncate(json_str, 200)
        ))
    })?;

    let mood_raw = required_string(raw.mood, "mood")?.to_lowercase();
    let summary = required_string(raw.summary, "summary")?;
    let reason = required_string(raw.reason, "reason")?;

    let words: Vec<&str> = mood_raw.split_whitespace().collect();
    let mood_label = if words.len() > 2 {
        tracing::warn!(mood = %mood_raw, "Model returned a multi-word mood, using first word");
        words[0]
    } else {
        mood_raw.as_str()
    };

    let mood = Mood::normalize(mood_label);
    if mood.as_str() != mood_label {
        tracing::debug!(mood = %mood_label, normalized = %mood, "Normalized model mood");
    }

    Ok(MoodAnalysis {
        mood,
        summary,
        reason,
    })
}

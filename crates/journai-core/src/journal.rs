//! Journal text helpers: word counts, titles and analysis input validation

use std::sync::LazyLock;

use regex::RegexSet;

use crate::error::{Error, Result};

/// Number of leading words used for a generated title
const TITLE_WORDS: usize = 8;

/// Titles longer than this are cut and given an ellipsis
const TITLE_MAX_CHARS: usize = 50;

/// Minimum trimmed length of text submitted for analysis
pub const MIN_ANALYSIS_CHARS: usize = 10;

/// Maximum trimmed length of text submitted for analysis
pub const MAX_ANALYSIS_CHARS: usize = 10_000;

/// Script tags, frames, `javascript:` URLs and inline event handlers
static SUSPICIOUS_PATTERNS: LazyLock<std::result::Result<RegexSet, regex::Error>> =
    LazyLock::new(|| {
        RegexSet::new([
            r"(?is)<script\b.*?</script\s*>",
            r"(?is)<iframe\b.*?</iframe\s*>",
            r"(?i)javascript:",
            r"(?i)\bon\w+\s*=",
        ])
    });

/// Count whitespace-separated words (0 for blank text)
pub fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Generate an entry title from its text
///
/// Takes the first eight words; anything over 50 characters is cut to 47
/// characters plus "...". Blank text gets a generic title.
pub fn generate_title(text: &str) -> String {
    let title = text
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        return "Journal Entry".to_string();
    }

    if title.chars().count() > TITLE_MAX_CHARS {
        let cut: String = title.chars().take(TITLE_MAX_CHARS - 3).collect();
        format!("{}...", cut)
    } else {
        title
    }
}

/// Validate text before it is sent to the mood analyzer
///
/// Returns the trimmed text on success.
pub fn validate_analysis_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(Error::Validation("Text field cannot be empty".into()));
    }
    if len < MIN_ANALYSIS_CHARS {
        return Err(Error::Validation(format!(
            "Text must be at least {} characters long for meaningful analysis",
            MIN_ANALYSIS_CHARS
        )));
    }
    if len > MAX_ANALYSIS_CHARS {
        return Err(Error::Validation(format!(
            "Text must be at most {} characters",
            MAX_ANALYSIS_CHARS
        )));
    }

    let suspicious = SUSPICIOUS_PATTERNS.as_ref().map_err(|e| e.clone())?;
    if suspicious.is_match(trimmed) {
        return Err(Error::Validation(
            "Text contains potentially harmful content".into(),
        ));
    }

    Ok(trimmed)
}

//! Domain models for JournAI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::count_words;

/// The fixed mood vocabulary produced by analysis and stored with each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Excited,
    Angry,
    Peaceful,
    Grateful,
    Frustrated,
    Worried,
    Content,
    Neutral,
    Tired,
}

impl Mood {
    /// Every mood in vocabulary order
    pub const ALL: [Mood; 12] = [
        Self::Happy,
        Self::Sad,
        Self::Anxious,
        Self::Excited,
        Self::Angry,
        Self::Peaceful,
        Self::Grateful,
        Self::Frustrated,
        Self::Worried,
        Self::Content,
        Self::Neutral,
        Self::Tired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Excited => "excited",
            Self::Angry => "angry",
            Self::Peaceful => "peaceful",
            Self::Grateful => "grateful",
            Self::Frustrated => "frustrated",
            Self::Worried => "worried",
            Self::Content => "content",
            Self::Neutral => "neutral",
            Self::Tired => "tired",
        }
    }

    /// Map arbitrary input onto the vocabulary (case-insensitive), defaulting to `Neutral`
    pub fn normalize(input: &str) -> Self {
        input.parse().unwrap_or(Self::Neutral)
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "anxious" => Ok(Self::Anxious),
            "excited" => Ok(Self::Excited),
            "angry" => Ok(Self::Angry),
            "peaceful" => Ok(Self::Peaceful),
            // Older rows were written with the misspelled label
            "grateful" | "greatful" => Ok(Self::Grateful),
            "frustrated" => Ok(Self::Frustrated),
            "worried" => Ok(Self::Worried),
            "content" => Ok(Self::Content),
            "neutral" => Ok(Self::Neutral),
            "tired" => Ok(Self::Tired),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user known to the service (identity comes from the external auth provider)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with the ids of their journal entries (newest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(flatten)]
    pub user: User,
    pub journal_ids: Vec<i64>,
}

/// Mood analysis attached to an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub reason: String,
}

/// Derived metadata computed when an entry is written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalMetadata {
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub character_count: u32,
}

/// The JSON blob stored in `journals.content`
///
/// Missing fields decode to their defaults so partially written blobs still
/// yield a usable projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalContent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub analysis: JournalAnalysis,
    #[serde(default)]
    pub metadata: JournalMetadata,
}

impl JournalContent {
    /// Build content for new or updated text, deriving word and character counts
    pub fn new(text: &str, analysis: JournalAnalysis) -> Self {
        Self {
            text: text.to_string(),
            analysis,
            metadata: JournalMetadata {
                word_count: count_words(text),
                character_count: text.chars().count() as u32,
            },
        }
    }

    /// Decode a stored blob
    pub fn decode(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode a stored blob, falling back to an empty projection when it is corrupt
    pub fn decode_or_default(raw: &str, journal_id: i64) -> Self {
        match Self::decode(raw) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    journal_id,
                    error = %e,
                    "Unreadable journal content, using empty projection"
                );
                Self::default()
            }
        }
    }
}

/// Input for creating a journal entry
#[derive(Debug, Clone)]
pub struct NewJournal {
    pub user_id: String,
    pub text: String,
    pub mood: String,
    pub summary: String,
    pub reason: String,
    /// Generated from the text when absent
    pub title: Option<String>,
    /// Defaults to now; explicit values are used by imports and tests
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for updating a journal entry
#[derive(Debug, Clone)]
pub struct JournalUpdate {
    pub text: String,
    pub mood: String,
    pub summary: String,
    pub reason: String,
}

/// A journal entry as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalView {
    pub id: i64,
    pub title: String,
    /// Entry text
    pub content: String,
    pub mood: Mood,
    pub summary: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub word_count: u32,
}

/// The projection of a stored entry consumed by the insights engine
#[derive(Debug, Clone, PartialEq)]
pub struct JournalRecord {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub mood: Mood,
    pub word_count: u32,
}

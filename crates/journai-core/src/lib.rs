//! JournAI Core Library
//!
//! Shared functionality for the JournAI journaling service:
//! - Database access and migrations (users, journals, audit log)
//! - Journal text helpers (word counts, titles, input validation)
//! - Pluggable mood analysis backends (Gemini, mock)
//! - Insights engine: mood distribution, word-count trends, streaks

pub mod ai;
pub mod db;
pub mod error;
pub mod insights;
pub mod journal;
pub mod models;

/// Test utilities including mock Gemini server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ai::{AIClient, GeminiBackend, MockBackend, MoodAnalysis, MoodAnalyzer};
pub use db::{AuditEntry, Database};
pub use error::{Error, Result};
pub use insights::{InsightResult, InsightsEngine, RecordStore, TimeRange};
pub use models::{
    JournalContent, JournalRecord, JournalUpdate, JournalView, Mood, NewJournal, User, UserSummary,
};

//! Core types for the insights engine

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Mood;

/// Rolling lookback window selected by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
        }
    }

    /// Length of the window in days
    pub fn days(&self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }

    pub fn lookback(&self) -> Duration {
        Duration::days(self.days())
    }

    /// Parse a query value, falling back to `Month` when absent or unrecognized
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "quarter" => Ok(TimeRange::Quarter),
            "year" => Ok(TimeRange::Year),
            _ => Err(format!("Unknown time range: {}", s)),
        }
    }
}

/// Entry count for one mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: u32,
    /// Rounded independently per mood, so the total may drift from 100
    pub percentage: u32,
}

/// One calendar day of the word-count trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub word_count: u32,
    pub entry_count: u32,
}

/// Entries written on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayActivity {
    pub day: String,
    pub entries: u32,
}

/// Aggregated journaling metrics for one user and window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    pub total_entries: u32,
    pub average_words_per_entry: u32,
    /// Sorted by count, descending
    pub mood_distribution: Vec<MoodCount>,
    /// Ascending by date, at most 30 days
    pub word_count_trend: Vec<TrendPoint>,
    /// Always Mon..Sun
    pub weekly_activity: Vec<WeekdayActivity>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

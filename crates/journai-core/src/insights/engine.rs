//! Insights engine - derives journaling metrics from a user's records

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::Error;
use crate::models::{JournalRecord, Mood};
use crate::Result;

use super::streaks::calculate_streaks;
use super::types::{InsightResult, MoodCount, TimeRange, TrendPoint, WeekdayActivity};

/// Maximum number of days kept in the word-count trend
pub const TREND_DAYS: usize = 30;

/// Weekday labels in output order
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Source of journal records for insight queries
pub trait RecordStore {
    /// Fetch `user_id`'s records created within `range` (inclusive), optionally
    /// only those with the given mood
    fn find_records(
        &self,
        user_id: &str,
        range: (DateTime<Utc>, DateTime<Utc>),
        mood: Option<Mood>,
    ) -> Result<Vec<JournalRecord>>;
}

/// Computes [`InsightResult`]s against an injected record store
pub struct InsightsEngine<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> InsightsEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Compute insights for the window ending now
    pub fn compute(
        &self,
        user_id: &str,
        range: TimeRange,
        mood_filter: Option<&str>,
    ) -> Result<InsightResult> {
        self.compute_at(Utc::now(), user_id, range, mood_filter)
    }

    /// Compute insights with an explicit "now"
    ///
    /// `now` bounds the window and anchors the current-streak grace period.
    pub fn compute_at(
        &self,
        now: DateTime<Utc>,
        user_id: &str,
        range: TimeRange,
        mood_filter: Option<&str>,
    ) -> Result<InsightResult> {
        let mood = mood_filter.map(Mood::normalize);
        let window = (now - range.lookback(), now);

        let records = self
            .store
            .find_records(user_id, window, mood)
            .map_err(|e| match e {
                Error::Retrieval(_) => e,
                other => Error::retrieval(other),
            })?;

        tracing::debug!(
            user_id,
            range = %range,
            mood = ?mood,
            records = records.len(),
            "Computing journal insights"
        );

        let owned: Vec<&JournalRecord> = records
            .iter()
            .filter(|r| {
                let mine = r.user_id == user_id;
                if !mine {
                    tracing::warn!(journal_id = r.id, "Record store returned another user's journal");
                }
                mine
            })
            .collect();

        Ok(aggregate(&owned, now.date_naive()))
    }
}

/// Single pass over the records followed by result assembly
fn aggregate(records: &[&JournalRecord], today: NaiveDate) -> InsightResult {
    let mut total_words: u64 = 0;
    // Vec keeps first-seen order for stable tie-breaking
    let mut mood_counts: Vec<(Mood, u32)> = Vec::new();
    let mut days: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    let mut weekdays = [0u32; 7];

    for record in records {
        total_words += u64::from(record.word_count);

        match mood_counts.iter_mut().find(|(m, _)| *m == record.mood) {
            Some((_, count)) => *count += 1,
            None => mood_counts.push((record.mood, 1)),
        }

        let day = record.created_at.date_naive();
        let bucket = days.entry(day).or_insert((0, 0));
        bucket.0 += record.word_count;
        bucket.1 += 1;

        weekdays[day.weekday().num_days_from_monday() as usize] += 1;
    }

    let total = records.len() as u32;
    if total == 0 {
        return InsightResult {
            weekly_activity: weekly_activity(&weekdays),
            ..Default::default()
        };
    }

    let average_words_per_entry = (total_words as f64 / f64::from(total)).round() as u32;

    let mut mood_distribution: Vec<MoodCount> = mood_counts
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood,
            count,
            percentage: (f64::from(count) / f64::from(total) * 100.0).round() as u32,
        })
        .collect();
    mood_distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let skip = days.len().saturating_sub(TREND_DAYS);
    let word_count_trend = days
        .iter()
        .skip(skip)
        .map(|(date, (words, entries))| TrendPoint {
            date: date.format("%Y-%m-%d").to_string(),
            word_count: *words,
            entry_count: *entries,
        })
        .collect();

    let dates: Vec<NaiveDate> = days.keys().copied().collect();
    let streaks = calculate_streaks(&dates, today);

    InsightResult {
        total_entries: total,
        average_words_per_entry,
        mood_distribution,
        word_count_trend,
        weekly_activity: weekly_activity(&weekdays),
        current_streak: streaks.current,
        longest_streak: streaks.longest,
    }
}

fn weekly_activity(counts: &[u32; 7]) -> Vec<WeekdayActivity> {
    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(day, entries)| WeekdayActivity {
            day: day.to_string(),
            entries: *entries,
        })
        .collect()
}

//! Journal entry operations

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::{format_datetime, parse_datetime, try_parse_datetime, Database};
use crate::error::{Error, Result};
use crate::insights::RecordStore;
use crate::journal::generate_title;
use crate::models::{
    JournalAnalysis, JournalContent, JournalRecord, JournalUpdate, JournalView, Mood, NewJournal,
};

/// Default number of entries returned by [`Database::list_user_journals`]
pub const DEFAULT_JOURNAL_LIMIT: i64 = 31;

/// Upper bound on a single journal listing page
pub const MAX_JOURNAL_LIMIT: i64 = 1000;

const JOURNAL_COLUMNS: &str = "id, title, content, mood, summary, created_at";

/// Resolve a `YYYY-MM` month into a half-open `[start, end)` UTC interval
pub fn month_bounds(month: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let invalid = || Error::Validation(format!("Invalid month '{}', expected YYYY-MM", month));

    let start = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .map_err(|_| invalid())?;
    let end = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((
        start.and_time(chrono::NaiveTime::MIN).and_utc(),
        end.and_time(chrono::NaiveTime::MIN).and_utc(),
    ))
}

fn row_to_view(row: &Row) -> rusqlite::Result<JournalView> {
    let id: i64 = row.get(0)?;
    let content_raw: String = row.get(2)?;
    let mood_str: String = row.get(3)?;
    let created_at_str: String = row.get(5)?;

    let content = JournalContent::decode_or_default(&content_raw, id);

    Ok(JournalView {
        id,
        title: row.get(1)?,
        content: content.text,
        mood: Mood::normalize(&mood_str),
        summary: row.get(4)?,
        reason: content.analysis.reason,
        created_at: parse_datetime(&created_at_str),
        word_count: content.metadata.word_count,
    })
}

impl Database {
    /// Insert a journal entry, returning its ID
    ///
    /// The mood is normalized to the vocabulary before storage; the raw label
    /// stays in the content blob.
    pub fn insert_journal(&self, journal: &NewJournal) -> Result<i64> {
        let conn = self.conn()?;

        let content = JournalContent::new(
            &journal.text,
            JournalAnalysis {
                mood: journal.mood.clone(),
                summary: journal.summary.clone(),
                reason: journal.reason.clone(),
            },
        );
        let title = journal
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| generate_title(&journal.text));
        let created_at = format_datetime(&journal.created_at.unwrap_or_else(Utc::now));

        conn.execute(
            r#"
            INSERT INTO journals (user_id, title, content, mood, summary, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            "#,
            params![
                journal.user_id,
                title,
                serde_json::to_string(&content)?,
                Mood::normalize(&journal.mood).as_str(),
                journal.summary,
                created_at,
            ],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!(journal_id = id, user_id = %journal.user_id, "Saved journal entry");
        Ok(id)
    }

    /// Get a journal entry owned by `user_id`
    pub fn get_journal(&self, id: i64, user_id: &str) -> Result<Option<JournalView>> {
        let conn = self.conn()?;

        let view = conn
            .query_row(
                &format!(
                    "SELECT {} FROM journals WHERE id = ? AND user_id = ?",
                    JOURNAL_COLUMNS
                ),
                params![id, user_id],
                row_to_view,
            )
            .optional()?;

        Ok(view)
    }

    /// List a user's journals, newest first
    ///
    /// `month` (`YYYY-MM`) restricts the listing to that calendar month (UTC).
    /// `limit` is clamped to `1..=MAX_JOURNAL_LIMIT`.
    pub fn list_user_journals(
        &self,
        user_id: &str,
        month: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JournalView>> {
        let (start, end) = match month {
            Some(m) => {
                let (start, end) = month_bounds(m)?;
                (Some(format_datetime(&start)), Some(format_datetime(&end)))
            }
            None => (None, None),
        };
        let limit = limit.clamp(1, MAX_JOURNAL_LIMIT);
        let offset = offset.max(0);

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {}
            FROM journals
            WHERE user_id = ?1
              AND (?2 IS NULL OR created_at >= ?2)
              AND (?3 IS NULL OR created_at < ?3)
            ORDER BY created_at DESC, id DESC
            LIMIT ?4 OFFSET ?5
            "#,
            JOURNAL_COLUMNS
        ))?;

        let journals = stmt
            .query_map(params![user_id, start, end, limit, offset], row_to_view)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(journals)
    }

    /// Replace an entry's text and analysis, regenerating its title and metadata
    ///
    /// Returns `None` when the entry does not exist or belongs to another user.
    pub fn update_journal(
        &self,
        id: i64,
        user_id: &str,
        update: &JournalUpdate,
    ) -> Result<Option<JournalView>> {
        let content = JournalContent::new(
            &update.text,
            JournalAnalysis {
                mood: update.mood.clone(),
                summary: update.summary.clone(),
                reason: update.reason.clone(),
            },
        );

        let updated = {
            let conn = self.conn()?;
            conn.execute(
                r#"
                UPDATE journals
                SET title = ?, content = ?, mood = ?, summary = ?, updated_at = ?
                WHERE id = ? AND user_id = ?
                "#,
                params![
                    generate_title(&update.text),
                    serde_json::to_string(&content)?,
                    Mood::normalize(&update.mood).as_str(),
                    update.summary,
                    format_datetime(&Utc::now()),
                    id,
                    user_id,
                ],
            )?
        };

        if updated == 0 {
            return Ok(None);
        }

        tracing::info!(journal_id = id, user_id, "Updated journal entry");
        self.get_journal(id, user_id)
    }

    /// Delete an entry owned by `user_id`, returning whether a row was removed
    pub fn delete_journal(&self, id: i64, user_id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM journals WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;

        if deleted > 0 {
            tracing::info!(journal_id = id, user_id, "Deleted journal entry");
        }
        Ok(deleted > 0)
    }

    fn query_records(
        &self,
        user_id: &str,
        range: (DateTime<Utc>, DateTime<Utc>),
        mood: Option<Mood>,
    ) -> Result<Vec<JournalRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, created_at, mood, content
            FROM journals
            WHERE user_id = ?1
              AND created_at BETWEEN ?2 AND ?3
              AND (?4 IS NULL OR mood = ?4)
            "#,
        )?;

        let rows = stmt
            .query_map(
                params![
                    user_id,
                    format_datetime(&range.0),
                    format_datetime(&range.1),
                    mood.map(|m| m.as_str()),
                ],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(rows.len());
        for (id, owner, created_at_str, mood_str, content_raw) in rows {
            let Some(created_at) = try_parse_datetime(&created_at_str) else {
                tracing::warn!(journal_id = id, created_at = %created_at_str, "Skipping journal with unreadable timestamp");
                continue;
            };

            let mood = match mood_str.parse::<Mood>() {
                Ok(mood) => mood,
                Err(_) => {
                    tracing::warn!(journal_id = id, mood = %mood_str, "Out-of-vocabulary mood, using neutral");
                    Mood::Neutral
                }
            };

            let content = JournalContent::decode_or_default(&content_raw, id);

            records.push(JournalRecord {
                id,
                user_id: owner,
                created_at,
                mood,
                word_count: content.metadata.word_count,
            });
        }

        Ok(records)
    }
}

impl RecordStore for Database {
    fn find_records(
        &self,
        user_id: &str,
        range: (DateTime<Utc>, DateTime<Utc>),
        mood: Option<Mood>,
    ) -> Result<Vec<JournalRecord>> {
        self.query_records(user_id, range, mood)
            .map_err(Error::retrieval)
    }
}

//! User operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{User, UserSummary};

impl Database {
    /// Create the user row if it does not exist yet
    pub fn ensure_user(&self, id: &str) -> Result<()> {
        let conn = self.conn()?;
        let inserted = conn.execute("INSERT OR IGNORE INTO users (id) VALUES (?)", params![id])?;
        if inserted > 0 {
            tracing::info!(user_id = id, "Provisioned user");
        }
        Ok(())
    }

    /// Create or update a user's profile fields
    ///
    /// `None` values leave the stored field untouched.
    pub fn upsert_user(
        &self,
        id: &str,
        email: Option<&str>,
        name: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO users (id, email, name, image_url)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                email = COALESCE(?2, email),
                name = COALESCE(?3, name),
                image_url = COALESCE(?4, image_url),
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![id, email, name, image_url],
        )?;

        Ok(())
    }

    /// Get a user by ID
    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        let conn = self.conn()?;

        let user = conn
            .query_row(
                "SELECT id, email, name, image_url, created_at, updated_at FROM users WHERE id = ?",
                params![id],
                |row| {
                    let created_at_str: String = row.get(4)?;
                    let updated_at_str: String = row.get(5)?;
                    Ok(User {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        name: row.get(2)?,
                        image_url: row.get(3)?,
                        created_at: parse_datetime(&created_at_str),
                        updated_at: parse_datetime(&updated_at_str),
                    })
                },
            )
            .optional()?;

        Ok(user)
    }

    /// Get a user with the ids of their journals, newest first
    pub fn get_user_summary(&self, id: &str) -> Result<Option<UserSummary>> {
        let Some(user) = self.get_user(id)? else {
            return Ok(None);
        };

        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id FROM journals WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )?;
        let journal_ids = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;

        Ok(Some(UserSummary { user, journal_ids }))
    }
}

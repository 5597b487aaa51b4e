//! Audit log command

use anyhow::Result;
use journai_core::db::Database;

use super::truncate;

pub fn cmd_audit(db: &Database, user: Option<&str>, limit: i64) -> Result<()> {
    let entries = db.list_audit_log(user, limit.max(1))?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for e in &entries {
        let entity = match (&e.entity_type, e.entity_id) {
            (Some(t), Some(id)) => format!("{}#{}", t, id),
            (Some(t), None) => t.clone(),
            _ => "-".to_string(),
        };
        println!(
            "{}  {:<20}  {:<8}  {:<14}  {}",
            e.timestamp,
            truncate(&e.user_id, 20),
            e.action,
            entity,
            e.details.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

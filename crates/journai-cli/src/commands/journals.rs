//! Journal entry commands

use anyhow::{bail, Result};
use journai_core::db::Database;

use super::truncate;

pub fn cmd_journals_list(
    db: &Database,
    user: &str,
    month: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<()> {
    let journals = db.list_user_journals(user, month, limit, offset)?;

    if journals.is_empty() {
        println!("No journal entries found.");
        return Ok(());
    }

    println!(
        "{:>6}  {:<16}  {:<10}  {:>5}  Title",
        "ID", "Created", "Mood", "Words"
    );
    println!("{}", "─".repeat(80));
    for j in &journals {
        println!(
            "{:>6}  {:<16}  {:<10}  {:>5}  {}",
            j.id,
            j.created_at.format("%Y-%m-%d %H:%M"),
            j.mood.as_str(),
            j.word_count,
            truncate(&j.title, 40)
        );
    }
    println!();
    println!("{} entr{}", journals.len(), if journals.len() == 1 { "y" } else { "ies" });

    Ok(())
}

pub fn cmd_journals_show(db: &Database, user: &str, id: i64) -> Result<()> {
    let Some(journal) = db.get_journal(id, user)? else {
        bail!("Journal {} not found", id);
    };

    println!();
    println!("📝 {}", journal.title);
    println!("   ─────────────────────────────────────────────");
    println!(
        "   {} · {} · {} words",
        journal.created_at.format("%Y-%m-%d %H:%M UTC"),
        journal.mood,
        journal.word_count
    );
    println!();
    println!("{}", journal.content);
    println!();
    println!("   Summary: {}", journal.summary);
    println!("   Why:     {}", journal.reason);

    Ok(())
}

pub fn cmd_journals_delete(db: &Database, user: &str, id: i64) -> Result<()> {
    if !db.delete_journal(id, user)? {
        bail!("Journal {} not found", id);
    }
    db.log_audit(user, "delete", Some("journal"), Some(id), Some("source=cli"))?;
    println!("✓ Deleted journal {}", id);
    Ok(())
}

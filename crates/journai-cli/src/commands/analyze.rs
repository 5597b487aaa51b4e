//! Mood analysis command

use std::path::Path;

use anyhow::{bail, Context, Result};
use journai_core::ai::{AIClient, MoodAnalyzer};
use journai_core::db::Database;
use journai_core::journal::validate_analysis_text;
use journai_core::models::NewJournal;

/// Where and as whom to save an analyzed entry
pub struct SaveTarget<'a> {
    pub db: &'a Database,
    pub user: &'a str,
    pub title: Option<&'a str>,
}

/// Resolve the journal text from `--text` or `--file`
pub fn read_journal_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => bail!("Provide journal text with --text or --file"),
    }
}

/// Analyze `text`, print the result and optionally save it as an entry
///
/// Returns the saved journal id, if any.
pub async fn cmd_analyze(
    ai: &AIClient,
    text: &str,
    save_to: Option<SaveTarget<'_>>,
) -> Result<Option<i64>> {
    let text = validate_analysis_text(text)?;

    println!("🤖 Analyzing with {} ({})...", ai.model(), ai.host());
    let analysis = ai.analyze_or_fallback(text).await;

    println!();
    println!("   Mood:    {}", analysis.mood);
    println!("   Summary: {}", analysis.summary);
    println!("   Why:     {}", analysis.reason);

    let Some(target) = save_to else {
        return Ok(None);
    };

    tracing::debug!("Saving analyzed entry for {}", target.user);
    target.db.ensure_user(target.user)?;
    let id = target.db.insert_journal(&NewJournal {
        user_id: target.user.to_string(),
        text: text.to_string(),
        mood: analysis.mood.to_string(),
        summary: analysis.summary,
        reason: analysis.reason,
        title: target.title.map(str::to_string),
        created_at: None,
    })?;
    target.db.log_audit(
        target.user,
        "create",
        Some("journal"),
        Some(id),
        Some("source=cli"),
    )?;

    println!();
    println!("✓ Saved as journal {}", id);
    Ok(Some(id))
}

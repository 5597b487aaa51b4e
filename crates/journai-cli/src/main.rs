//! JournAI CLI - Journaling with mood analysis and insights
//!
//! Usage:
//!   journai init                        Initialize database
//!   journai analyze --text "..." --save Analyze and save an entry
//!   journai insights --range week       Show journaling insights
//!   journai serve --port 3000           Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Serve {
            port,
            host,
            no_auth,
            static_dir,
        } => {
            commands::cmd_serve(
                &cli.db,
                &host,
                port,
                no_auth,
                cli.no_encrypt,
                static_dir.as_deref(),
            )
            .await
        }
        Commands::Insights {
            user,
            range,
            mood,
            json,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_insights(&db, &user, &range, mood.as_deref(), json)
        }
        Commands::Journals { user, action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_journals_list(&db, &user, None, 20, 0),
                Some(JournalsAction::List {
                    month,
                    limit,
                    offset,
                }) => commands::cmd_journals_list(&db, &user, month.as_deref(), limit, offset),
                Some(JournalsAction::Show { id }) => commands::cmd_journals_show(&db, &user, id),
                Some(JournalsAction::Delete { id }) => {
                    commands::cmd_journals_delete(&db, &user, id)
                }
            }
        }
        Commands::Analyze {
            text,
            file,
            save,
            user,
            title,
        } => {
            let text = commands::read_journal_text(text, file.as_deref())?;
            let ai = journai_core::AIClient::from_env().ok_or_else(|| {
                anyhow::anyhow!(
                    "No AI backend configured. Set GEMINI_API_KEY, or AI_BACKEND=mock for local testing"
                )
            })?;
            let db = if save {
                Some(commands::open_db(&cli.db, cli.no_encrypt)?)
            } else {
                None
            };
            let save_to = db.as_ref().map(|db| commands::SaveTarget {
                db,
                user: &user,
                title: title.as_deref(),
            });
            commands::cmd_analyze(&ai, &text, save_to).await?;
            Ok(())
        }
        Commands::Audit { user, limit } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_audit(&db, user.as_deref(), limit)
        }
    }
}

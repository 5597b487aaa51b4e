//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// User id used by local commands when none is given
pub const DEFAULT_USER: &str = journai_server::LOCAL_DEV_USER;

/// JournAI - Journaling with mood analysis and insights
#[derive(Parser)]
#[command(name = "journai")]
#[command(about = "Self-hosted journaling service with mood insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "journai.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set JOURNAI_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires a bearer JWT from the identity
        /// provider configured via JOURNAI_AUTH_ISSUER and JOURNAI_AUTH_JWKS_URL.
        #[arg(long)]
        no_auth: bool,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show journaling insights for a user
    Insights {
        /// User id
        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,

        /// Time range: week, month, quarter, year
        #[arg(short, long, default_value = "month")]
        range: String,

        /// Only count entries with this mood
        #[arg(short, long)]
        mood: Option<String>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Manage journal entries (list, show, delete)
    Journals {
        /// User id
        #[arg(short, long, default_value = DEFAULT_USER, global = true)]
        user: String,

        #[command(subcommand)]
        action: Option<JournalsAction>,
    },

    /// Analyze the mood of journal text, optionally saving it as an entry
    Analyze {
        /// Journal text to analyze
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the journal text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Save the text and its analysis as a new entry
        #[arg(long)]
        save: bool,

        /// Owner of the saved entry
        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,

        /// Title for the saved entry (generated from the text if omitted)
        #[arg(long)]
        title: Option<String>,
    },

    /// Show the audit log
    Audit {
        /// Only show entries for this user
        #[arg(short, long)]
        user: Option<String>,

        /// Maximum entries to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },
}

#[derive(Subcommand)]
pub enum JournalsAction {
    /// List entries, newest first
    List {
        /// Calendar month to show (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Maximum entries to show
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Entries to skip
        #[arg(long, default_value = "0")]
        offset: i64,
    },

    /// Show a single entry
    Show {
        /// Journal ID
        id: i64,
    },

    /// Delete an entry
    Delete {
        /// Journal ID
        id: i64,
    },
}

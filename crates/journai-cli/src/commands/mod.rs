//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Mood analysis of journal text, with optional save
//! - `audit` - Audit log listing
//! - `core` - Init command and shared utilities (open_db)
//! - `insights` - Journaling insights report
//! - `journals` - Journal entry commands (list, show, delete)
//! - `serve` - Web server command

pub mod analyze;
pub mod audit;
pub mod core;
pub mod insights;
pub mod journals;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use audit::*;
pub use core::*;
pub use insights::*;
pub use journals::*;
pub use serve::*;

/// Truncate a string to at most `max` characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

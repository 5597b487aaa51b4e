//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use journai_server::{parse_allowed_origins, JwtConfig, ServerConfig};

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    no_auth: bool,
    no_encrypt: bool,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting JournAI web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    let allowed_origins =
        parse_allowed_origins(&std::env::var("JOURNAI_ALLOWED_ORIGINS").unwrap_or_default());
    let jwt = JwtConfig::from_env();

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
        println!("      Requests act as the x-user-id header, or local-dev");
    } else if jwt.is_configured() {
        println!(
            "   🔐 Authentication: JWT ({})",
            jwt.issuer.as_deref().unwrap_or_default()
        );
    } else {
        println!("   ❌ Authentication required but no identity provider configured");
        println!("      Set JOURNAI_AUTH_ISSUER and JOURNAI_AUTH_JWKS_URL, or use --no-auth");
    }
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (JOURNAI_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    if no_encrypt {
        println!("   ⚠️  Encryption DISABLED (--no-encrypt)");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path, no_encrypt)?;

    let config = ServerConfig {
        require_auth: !no_auth,
        allowed_origins,
        jwt,
        ..Default::default()
    };

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    journai_server::serve_with_config(db, host, port, static_dir_str, config).await?;

    Ok(())
}

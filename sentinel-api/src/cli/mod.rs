//! CLI module for sentinel-api

pub mod serve;

use clap::{Parser, Subcommand};

/// Sentinel API - token-protected HTTP API with request auditing
#[derive(Parser, Debug)]
#[command(name = "sentinel-api")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SENTINEL_HOST                  Bind address (default: 0.0.0.0)
    SENTINEL_PORT                  Listen port (default: 8080)
    SENTINEL_DATABASE_URL          Database URL (default: sqlite:data/sentinel.db)
    SENTINEL_JWT_SECRET            JWT signing key (auto-generated if not set)
    SENTINEL_JWT_EXPIRATION_HOURS  Token lifetime in hours (default: 24)
    SENTINEL_LOG_LEVEL             Log filter (default: info)
    SENTINEL_LOG_FORMAT            Set to "json" for JSON logs
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),
}

use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables (and `.env`
/// when present). Everything has a sensible default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where exported artifacts are written.
    pub output_dir: PathBuf,
    /// Explicit path to the wkhtmltopdf binary, overriding PATH lookup.
    pub wkhtmltopdf_bin: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            wkhtmltopdf_bin: std::env::var("WKHTMLTOPDF_BIN").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

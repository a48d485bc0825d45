use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::theme::AccentColor;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub accent: AccentColor,
    /// Directory served for unmatched paths and checked for image existence.
    pub static_dir: PathBuf,
    /// Optional TOML file overriding the built-in page content.
    pub content_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let accent_name = lookup("ACCENT_COLOR").unwrap_or_else(|| "indigo".to_string());

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            accent: AccentColor::parse(&accent_name)
                .with_context(|| format!("ACCENT_COLOR '{accent_name}' is not a palette colour"))?,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            content_path: lookup("CONTENT_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

use anyhow::{Context, Result};

use crate::store::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_SHORT_JD_THRESHOLD: usize = 200;

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, analyses live in the in-memory store.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub history_limit: usize,
    pub short_jd_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            short_jd_threshold: DEFAULT_SHORT_JD_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            history_limit: parse_env("HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?,
            short_jd_threshold: parse_env("SHORT_JD_THRESHOLD", DEFAULT_SHORT_JD_THRESHOLD)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

// src/config.rs

use crate::errors::ServerError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1RQ2PZMRKjBVHpG0ettmuiDjjxzpF7OfFDfXlJDT0ElE/gviz/tq";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FEED_MAX_ATTEMPTS: u64 = 3;

/// Runtime settings, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheet_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub feed_timeout: Duration,
    pub feed_max_attempts: u64,
    /// `None` disables the background refresh thread.
    pub refresh_interval: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
            feed_timeout: Duration::from_secs(DEFAULT_FEED_TIMEOUT_SECS),
            feed_max_attempts: DEFAULT_FEED_MAX_ATTEMPTS,
            refresh_interval: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sheet_url = lookup("SHEET_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET_URL.to_string());

        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let max_workers = parse_var(&lookup, "MAX_WORKERS", Some(DEFAULT_MAX_WORKERS))?;
        let timeout_secs = parse_var(&lookup, "FEED_TIMEOUT_SECS", Some(DEFAULT_FEED_TIMEOUT_SECS))?;
        let feed_max_attempts =
            parse_var(&lookup, "FEED_MAX_ATTEMPTS", Some(DEFAULT_FEED_MAX_ATTEMPTS))?;
        let refresh_secs: u64 = parse_var(&lookup, "REFRESH_INTERVAL_SECS", Some(0))?;

        if max_workers == 0 {
            return Err(ServerError::ConfigError("MAX_WORKERS must be at least 1".into()));
        }
        if feed_max_attempts == 0 {
            return Err(ServerError::ConfigError(
                "FEED_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            sheet_url,
            bind_addr,
            max_workers,
            feed_timeout: Duration::from_secs(timeout_secs),
            feed_max_attempts,
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: Option<T>) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ServerError::ConfigError(format!("{key}={raw:?}: {e}"))),
        None => default.ok_or_else(|| ServerError::ConfigError(format!("{key} is not set"))),
    }
}

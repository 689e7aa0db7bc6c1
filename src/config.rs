//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there act as
//! defaults that the real environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SEED_FILE: &str = "seed/fixtures.yaml";
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 24;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub seed_file: PathBuf,
    pub session_ttl: Duration,
    pub session_sweep_interval: Duration,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SEED_FILE`: default `seed/fixtures.yaml`
    /// - `SESSION_TTL_HOURS`: default 24
    /// - `SESSION_SWEEP_SECS`: default 300
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            seed_file: std::env::var("SEED_FILE").map_or_else(|_| PathBuf::from(DEFAULT_SEED_FILE), PathBuf::from),
            session_ttl: Duration::from_secs(env_parse("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS) * 3600),
            session_sweep_interval: Duration::from_secs(env_parse("SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS).max(1)),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 3600),
            session_sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
            cookie_secure: false,
        }
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

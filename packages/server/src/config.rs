//! Environment-driven server configuration.
//!
//! Host and port come from the command line (see the binary); everything
//! that selects a backend lives here so deployments switch stores and
//! caches without rebuilding.

use std::{env, time::Duration};

use tracing::info;

use crate::usecase::DEFAULT_CACHE_TTL;

/// Backend selection and tuning knobs.
///
/// - `AGORA_DATABASE_URL`: SQLite URL; unset selects the in-memory store
/// - `AGORA_REDIS_URL`: Redis URL; unset selects the in-memory cache
/// - `AGORA_CACHE_TTL_SECS`: message list snapshot lifetime (default 30)
/// - `AGORA_TOKENS`: comma-separated `author=token` session seeds
pub struct Config {
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub cache_ttl: Duration,
    /// Pre-shared `(token, author)` pairs for the session store.
    pub tokens: Vec<(String, String)>,
}

impl Config {
    pub fn load() -> Self {
        let cache_ttl = var("AGORA_CACHE_TTL_SECS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CACHE_TTL);

        Self {
            database_url: var("AGORA_DATABASE_URL"),
            redis_url: var("AGORA_REDIS_URL"),
            cache_ttl,
            tokens: parse_tokens(&var("AGORA_TOKENS").unwrap_or_default()),
        }
    }
}

fn var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            info!("{key} not set, using default");
            None
        }
    }
}

/// Parse `author=token` pairs into `(token, author)` tuples. Malformed
/// entries are skipped.
fn parse_tokens(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|pair| {
            let (author, token) = pair.split_once('=')?;
            let (author, token) = (author.trim(), token.trim());
            if author.is_empty() || token.is_empty() {
                return None;
            }
            Some((token.to_string(), author.to_string()))
        })
        .collect()
}

//! In-memory MessageListCache implementation.
//!
//! Entries carry an expiry instant checked on read; expired entries are
//! dropped lazily by the `get` that finds them.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{CacheError, MessageListCache};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory TTL cache.
pub struct InMemoryMessageCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryMessageCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMessageCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageListCache for InMemoryMessageCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        Ok(())
    }
}

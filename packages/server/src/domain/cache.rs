//! MessageListCache trait definition.
//!
//! Look-aside cache in front of the store for the "list all messages"
//! query. The cache is a disposable, regenerable view and never a source
//! of truth: every caller must treat a `CacheError` as a miss.

use std::time::Duration;

use async_trait::async_trait;

use super::CacheError;

/// Cache key for the full message list. Versioned so a change to the
/// serialized shape invalidates by key rotation instead of serving
/// undecodable entries.
pub const MESSAGE_LIST_CACHE_KEY: &str = "chat:messages:v1";

/// Look-aside cache with TTL and explicit invalidation.
#[async_trait]
pub trait MessageListCache: Send + Sync {
    /// Fetch a cached value, `None` on miss or expiry.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value with a fixed time-to-live.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Remove a cached value. Idempotent no-op when absent.
    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;
}

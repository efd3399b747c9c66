//! Redis MessageListCache implementation.
//!
//! Uses a `ConnectionManager` so reconnects are handled by the client
//! library. Every error maps to `CacheError`; callers degrade to a store
//! read, so an unreachable Redis never fails a request.

use std::time::Duration;

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::domain::{CacheError, MessageListCache};

/// Redis-backed look-aside cache.
pub struct RedisMessageCache {
    connection: ConnectionManager,
}

impl RedisMessageCache {
    /// Connect to the given Redis URL with a short connect timeout and a
    /// single retry, matching the "cache is optional" posture.
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_millis(500));

        let client = Client::open(redis_url).map_err(cache_error)?;
        let connection = client
            .get_connection_manager_with_config(config)
            .await
            .map_err(cache_error)?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl MessageListCache for RedisMessageCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection.clone();
        let value: Option<String> = connection.get(key).await.map_err(cache_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        let ttl_secs = ttl.as_secs().max(1);
        let _: () = connection
            .set_ex(key, value, ttl_secs)
            .await
            .map_err(cache_error)?;
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        let _: () = connection.del(key).await.map_err(cache_error)?;
        Ok(())
    }
}

fn cache_error(e: redis::RedisError) -> CacheError {
    CacheError::Unavailable(e.to_string())
}

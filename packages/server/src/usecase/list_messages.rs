//! UseCase: list all messages through the read-through cache.

use std::sync::Arc;
use std::time::Duration;

use agora_shared::protocol::MessageDto;

use crate::domain::{MESSAGE_LIST_CACHE_KEY, MessageListCache, MessageStore};

use super::error::ListMessagesError;

/// Default snapshot lifetime for the cached message list.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Listing messages: cache hit, or store read plus best-effort populate.
///
/// The cache is a performance optimization, never a correctness
/// dependency: any cache failure, and any cached value that no longer
/// decodes, degrades to a store read.
pub struct ListMessagesUseCase {
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageListCache>,
    cache_ttl: Duration,
}

impl ListMessagesUseCase {
    pub fn new(
        store: Arc<dyn MessageStore>,
        cache: Arc<dyn MessageListCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            cache_ttl,
        }
    }

    pub async fn execute(&self) -> Result<Vec<MessageDto>, ListMessagesError> {
        match self.cache.get(MESSAGE_LIST_CACHE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<MessageDto>>(&raw) {
                Ok(messages) => {
                    tracing::debug!("Message list served from cache");
                    return Ok(messages);
                }
                Err(e) => {
                    // Stale shape from an older build. Drop it and fall
                    // through to the store.
                    tracing::warn!("Cached message list no longer decodes: {}", e);
                    if let Err(e) = self.cache.invalidate(MESSAGE_LIST_CACHE_KEY).await {
                        tracing::warn!("Failed to drop undecodable cache entry: {}", e);
                    }
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Cache read failed, falling through to store: {}", e);
            }
        }

        let messages: Vec<MessageDto> = self
            .store
            .list_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        match serde_json::to_string(&messages) {
            Ok(serialized) => {
                if let Err(e) = self
                    .cache
                    .set(MESSAGE_LIST_CACHE_KEY, serialized, self.cache_ttl)
                    .await
                {
                    tracing::warn!("Failed to populate message list cache: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to serialize message list for cache: {}", e);
            }
        }

        Ok(messages)
    }
}

//! UseCase: delete all messages by the calling author.

use std::sync::Arc;

use agora_shared::protocol::ServerEvent;

use crate::domain::{
    AuthorId, EventBroadcaster, MESSAGE_LIST_CACHE_KEY, MessageListCache, MessageStore,
    TaskPublisher,
};

use super::error::DeleteOwnMessagesError;

/// Deleting one author's messages: delete, invalidate, publish, broadcast.
///
/// A concurrent append by the same author races this at the store's
/// natural commit order (last write wins); no stronger ordering is
/// promised.
pub struct DeleteOwnMessagesUseCase {
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageListCache>,
    broadcaster: Arc<dyn EventBroadcaster>,
    tasks: Arc<dyn TaskPublisher>,
}

impl DeleteOwnMessagesUseCase {
    pub fn new(
        store: Arc<dyn MessageStore>,
        cache: Arc<dyn MessageListCache>,
        broadcaster: Arc<dyn EventBroadcaster>,
        tasks: Arc<dyn TaskPublisher>,
    ) -> Self {
        Self {
            store,
            cache,
            broadcaster,
            tasks,
        }
    }

    pub async fn execute(&self, author_id: AuthorId) -> Result<(), DeleteOwnMessagesError> {
        self.store.delete_by_author(&author_id).await?;

        if let Err(e) = self.cache.invalidate(MESSAGE_LIST_CACHE_KEY).await {
            tracing::warn!("Cache invalidation failed after author delete: {}", e);
        }

        if let Err(e) = self
            .tasks
            .publish(
                "chat.author_messages_removed",
                serde_json::json!({ "author_id": author_id.as_str() }),
            )
            .await
        {
            tracing::warn!("Task publish failed: {}", e);
        }

        self.broadcaster
            .broadcast(&ServerEvent::AuthorMessagesRemoved {
                author_id: author_id.into_string(),
            })
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CacheError, ConnectionId, EventSink, MessageContent};
    use crate::infrastructure::cache::InMemoryMessageCache;
    use crate::infrastructure::store::InMemoryMessageStore;
    use crate::infrastructure::tasks::LoggingTaskPublisher;
    use agora_shared::time::SystemClock;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    struct RecordingBroadcaster {
        events: Arc<StdMutex<Vec<ServerEvent>>>,
    }

    #[async_trait]
    impl EventBroadcaster for RecordingBroadcaster {
        async fn register(&self, _connection_id: ConnectionId, _sink: EventSink) {}

        async fn unregister(&self, _connection_id: ConnectionId) {}

        async fn broadcast(&self, event: &ServerEvent) {
            self.events.lock().unwrap().push(event.clone());
        }

        async fn send_to(&self, _connection_id: ConnectionId, _event: &ServerEvent) {}

        async fn connection_count(&self) -> usize {
            0
        }
    }

    fn author(id: &str) -> AuthorId {
        AuthorId::new(id.to_string()).unwrap()
    }

    fn content(text: &str) -> MessageContent {
        MessageContent::new(text.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_delete_own_removes_author_rows_and_broadcasts() {
        // given:
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
        store.append(author("alice"), content("a1")).await.unwrap();
        store.append(author("bob"), content("b1")).await.unwrap();
        store.append(author("alice"), content("a2")).await.unwrap();
        let cache = Arc::new(InMemoryMessageCache::new());
        cache
            .set(
                MESSAGE_LIST_CACHE_KEY,
                "stale".to_string(),
                Duration::from_secs(30),
            )
            .await
            .unwrap();
        let events = Arc::new(StdMutex::new(Vec::new()));
        let usecase = DeleteOwnMessagesUseCase::new(
            store.clone(),
            cache.clone(),
            Arc::new(RecordingBroadcaster {
                events: events.clone(),
            }),
            Arc::new(LoggingTaskPublisher),
        );

        // when:
        usecase.execute(author("alice")).await.unwrap();

        // then:
        let remaining = store.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].author_id.as_str(), "bob");
        assert_eq!(cache.get(MESSAGE_LIST_CACHE_KEY).await.unwrap(), None);
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[ServerEvent::AuthorMessagesRemoved {
                author_id: "alice".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_delete_own_with_no_messages_still_notifies() {
        // given: idempotent delete for an author with zero rows
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
        let events = Arc::new(StdMutex::new(Vec::new()));
        let usecase = DeleteOwnMessagesUseCase::new(
            store,
            Arc::new(InMemoryMessageCache::new()),
            Arc::new(RecordingBroadcaster {
                events: events.clone(),
            }),
            Arc::new(LoggingTaskPublisher),
        );

        // when:
        let result = usecase.execute(author("alice")).await;

        // then:
        assert!(result.is_ok());
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cache_invalidation_failure_is_swallowed() {
        // given:
        struct DownCache;

        #[async_trait]
        impl MessageListCache for DownCache {
            async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
                Err(CacheError::Unavailable("down".to_string()))
            }

            async fn set(
                &self,
                _key: &str,
                _value: String,
                _ttl: Duration,
            ) -> Result<(), CacheError> {
                Err(CacheError::Unavailable("down".to_string()))
            }

            async fn invalidate(&self, _key: &str) -> Result<(), CacheError> {
                Err(CacheError::Unavailable("down".to_string()))
            }
        }

        let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
        store.append(author("alice"), content("a1")).await.unwrap();
        let events = Arc::new(StdMutex::new(Vec::new()));
        let usecase = DeleteOwnMessagesUseCase::new(
            store.clone(),
            Arc::new(DownCache),
            Arc::new(RecordingBroadcaster {
                events: events.clone(),
            }),
            Arc::new(LoggingTaskPublisher),
        );

        // when:
        let result = usecase.execute(author("alice")).await;

        // then:
        assert!(result.is_ok());
        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(events.lock().unwrap().len(), 1);
    }
}

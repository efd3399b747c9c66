//! UseCase: clear the whole room history.

use std::sync::Arc;

use agora_shared::protocol::ServerEvent;

use crate::domain::{
    EventBroadcaster, MESSAGE_LIST_CACHE_KEY, MessageListCache, MessageStore, TaskPublisher,
};

use super::error::ClearMessagesError;

/// Clearing all messages: clear, invalidate, publish, broadcast.
pub struct ClearMessagesUseCase {
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageListCache>,
    broadcaster: Arc<dyn EventBroadcaster>,
    tasks: Arc<dyn TaskPublisher>,
}

impl ClearMessagesUseCase {
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

    pub async fn execute(&self) -> Result<(), ClearMessagesError> {
        self.store.clear_all().await?;

        if let Err(e) = self.cache.invalidate(MESSAGE_LIST_CACHE_KEY).await {
            tracing::warn!("Cache invalidation failed after clear: {}", e);
        }

        if let Err(e) = self
            .tasks
            .publish("chat.messages_cleared", serde_json::json!({}))
            .await
        {
            tracing::warn!("Task publish failed: {}", e);
        }

        self.broadcaster
            .broadcast(&ServerEvent::MessagesCleared)
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AuthorId, ConnectionId, EventSink, MessageContent, MockMessageStore, StoreError,
    };
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
    async fn test_clear_empties_store_invalidates_cache_and_broadcasts() {
        // given: populated store and a warm cache entry
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
        store.append(author("alice"), content("one")).await.unwrap();
        store.append(author("bob"), content("two")).await.unwrap();
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
        let usecase = ClearMessagesUseCase::new(
            store.clone(),
            cache.clone(),
            Arc::new(RecordingBroadcaster {
                events: events.clone(),
            }),
            Arc::new(LoggingTaskPublisher),
        );

        // when:
        usecase.execute().await.unwrap();

        // then:
        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(cache.get(MESSAGE_LIST_CACHE_KEY).await.unwrap(), None);
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[ServerEvent::MessagesCleared]
        );
    }

    #[tokio::test]
    async fn test_clear_on_empty_store_still_succeeds() {
        // given:
        let store = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));
        let events = Arc::new(StdMutex::new(Vec::new()));
        let usecase = ClearMessagesUseCase::new(
            store,
            Arc::new(InMemoryMessageCache::new()),
            Arc::new(RecordingBroadcaster {
                events: events.clone(),
            }),
            Arc::new(LoggingTaskPublisher),
        );

        // when:
        let result = usecase.execute().await;

        // then: idempotent, and observers are still told
        assert!(result.is_ok());
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_skips_broadcast() {
        // given:
        let mut store = MockMessageStore::new();
        store
            .expect_clear_all()
            .returning(|| Err(StoreError::Unavailable("down".to_string())));
        let events = Arc::new(StdMutex::new(Vec::new()));
        let cache = Arc::new(InMemoryMessageCache::new());
        cache
            .set(
                MESSAGE_LIST_CACHE_KEY,
                "snapshot".to_string(),
                Duration::from_secs(30),
            )
            .await
            .unwrap();
        let usecase = ClearMessagesUseCase::new(
            Arc::new(store),
            cache.clone(),
            Arc::new(RecordingBroadcaster {
                events: events.clone(),
            }),
            Arc::new(LoggingTaskPublisher),
        );

        // when:
        let result = usecase.execute().await;

        // then: no partial effects
        assert!(matches!(result, Err(ClearMessagesError::Store(_))));
        assert!(events.lock().unwrap().is_empty());
        assert!(
            cache
                .get(MESSAGE_LIST_CACHE_KEY)
                .await
                .unwrap()
                .is_some()
        );
    }
}

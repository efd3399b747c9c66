//! UseCase: post a chat message.

use std::sync::Arc;

use agora_shared::protocol::ServerEvent;

use crate::domain::{
    AuthorId, ChatMessage, EventBroadcaster, MESSAGE_LIST_CACHE_KEY, MessageContent,
    MessageListCache, MessageStore, TaskPublisher,
};

use super::error::PostMessageError;

/// Posting a message: validate, append, invalidate, publish, broadcast.
pub struct PostMessageUseCase {
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageListCache>,
    broadcaster: Arc<dyn EventBroadcaster>,
    tasks: Arc<dyn TaskPublisher>,
}

impl PostMessageUseCase {
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

    /// Execute the post.
    ///
    /// Content is validated here, so a rejected payload never reaches the
    /// store. A store failure aborts before invalidation and broadcast:
    /// the caller sees all-or-nothing. Cache invalidation runs before the
    /// broadcast so no notified client can re-read a pre-mutation cache
    /// entry.
    pub async fn execute(
        &self,
        author_id: AuthorId,
        content: String,
    ) -> Result<ChatMessage, PostMessageError> {
        let content = MessageContent::new(content)?;

        let message = self.store.append(author_id, content).await?;

        if let Err(e) = self.cache.invalidate(MESSAGE_LIST_CACHE_KEY).await {
            tracing::warn!("Cache invalidation failed after append: {}", e);
        }

        if let Err(e) = self
            .tasks
            .publish(
                "chat.message_created",
                serde_json::json!({
                    "message_id": message.id,
                    "author_id": message.author_id.as_str(),
                }),
            )
            .await
        {
            tracing::warn!("Task publish failed: {}", e);
        }

        self.broadcaster
            .broadcast(&ServerEvent::MessageCreated {
                message: message.clone().into(),
            })
            .await;

        Ok(message)
    }
}

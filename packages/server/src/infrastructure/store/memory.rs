//! In-memory MessageStore implementation.
//!
//! A Mutex-guarded Vec used as the default backend. The Vec is kept in
//! insertion order, which together with monotonically assigned ids and
//! store-side timestamps satisfies the ordering invariant without sorting.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use agora_shared::time::Clock;

use crate::domain::{AuthorId, ChatMessage, MessageContent, MessageStore, StoreError};

struct Inner {
    messages: Vec<ChatMessage>,
    next_id: i64,
}

/// In-memory message store.
pub struct InMemoryMessageStore {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMessageStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                messages: Vec::new(),
                next_id: 1,
            }),
            clock,
        }
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(
        &self,
        author_id: AuthorId,
        content: MessageContent,
    ) -> Result<ChatMessage, StoreError> {
        let mut inner = self.inner.lock().await;
        let message = ChatMessage {
            id: inner.next_id,
            author_id,
            content,
            created_at: self.clock.now_utc_millis(),
        };
        inner.next_id += 1;
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.messages.clone())
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.messages.clear();
        Ok(())
    }

    async fn delete_by_author(&self, author_id: &AuthorId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.messages.retain(|m| &m.author_id != author_id);
        Ok(())
    }
}

//! MessageStore trait definition.
//!
//! The durable, ordered, append-only log of chat messages. The use case
//! layer depends on this trait only; `infrastructure` provides an
//! in-memory and a SQLite implementation selected at startup.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{AuthorId, ChatMessage, MessageContent, StoreError};

/// Durable chat message store.
///
/// Ordering invariant: `list_all` returns messages in nondecreasing
/// `created_at` order with ties broken by ascending `id`, which is
/// consistent with insertion order. The store is the single serialization
/// point between concurrent mutations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message. The store assigns `id` and `created_at`.
    async fn append(
        &self,
        author_id: AuthorId,
        content: MessageContent,
    ) -> Result<ChatMessage, StoreError>;

    /// Full ordered history. An empty room yields an empty vec, not an error.
    async fn list_all(&self) -> Result<Vec<ChatMessage>, StoreError>;

    /// Remove every message. Idempotent.
    async fn clear_all(&self) -> Result<(), StoreError>;

    /// Remove exactly the messages whose author matches. Idempotent; no
    /// error when the author has zero messages.
    async fn delete_by_author(&self, author_id: &AuthorId) -> Result<(), StoreError>;
}

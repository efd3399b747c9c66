//! Use case layer: one struct per operation.
//!
//! The mutation use cases are the gateway that keeps store, cache, and
//! live clients in agreement. Every mutation follows the same strict
//! sequence: store commit, cache invalidation, fire-and-forget task
//! publish, broadcast, respond. No step is skipped and none runs before
//! the store write commits.

mod clear_messages;
mod delete_own_messages;
mod error;
mod list_messages;
mod post_message;

pub use clear_messages::ClearMessagesUseCase;
pub use delete_own_messages::DeleteOwnMessagesUseCase;
pub use error::{ClearMessagesError, DeleteOwnMessagesError, ListMessagesError, PostMessageError};
pub use list_messages::{DEFAULT_CACHE_TTL, ListMessagesUseCase};
pub use post_message::PostMessageUseCase;

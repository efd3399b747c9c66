//! Domain layer: entities, value objects, and trait seams.
//!
//! The rest of the server depends only on the traits defined here; the
//! concrete backends live in the `infrastructure` layer (dependency
//! inversion, same shape as the repository/pusher split in the rest of
//! the codebase).

mod broadcaster;
mod cache;
mod error;
mod message;
mod session;
mod store;
mod tasks;

pub use broadcaster::{ConnectionId, EventBroadcaster, EventSink};
pub use cache::{MESSAGE_LIST_CACHE_KEY, MessageListCache};
pub use error::{CacheError, StoreError, TaskPublishError};
pub use message::{AuthorId, ChatMessage, MessageContent, ValidationError};
pub use session::SessionVerifier;
pub use store::MessageStore;
#[cfg(test)]
pub use store::MockMessageStore;
pub use tasks::TaskPublisher;

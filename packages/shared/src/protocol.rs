//! Wire protocol between the Agora server and its clients.
//!
//! Server-to-client events carry a `type` discriminator and describe *what
//! changed*, not the full new state. Clients treat them as hints and
//! reconcile by re-fetching the authoritative message list over HTTP.

use serde::{Deserialize, Serialize};

/// A chat message as it appears on the wire (HTTP responses and
/// `message_created` events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i64,
    pub author_id: String,
    pub content: String,
    /// Unix timestamp in UTC milliseconds, assigned by the store.
    pub created_at: i64,
}

/// Events pushed from the server to every live connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// One-time acknowledgment sent to a newly opened channel.
    Connected,
    /// A message was appended to the room.
    MessageCreated { message: MessageDto },
    /// The whole room history was cleared.
    MessagesCleared,
    /// All messages by one author were removed.
    AuthorMessagesRemoved { author_id: String },
    /// Liveness reply to a client `ping`.
    Pong,
}

impl ServerEvent {
    /// Whether a client should re-fetch the message list after receiving
    /// this event. `connected` and `pong` carry no state change.
    pub fn invalidates_local_state(&self) -> bool {
        matches!(
            self,
            ServerEvent::MessageCreated { .. }
                | ServerEvent::MessagesCleared
                | ServerEvent::AuthorMessagesRemoved { .. }
        )
    }
}

/// Commands a client may send over the push channel. Only liveness probing
/// is supported; all mutations go through HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    Ping,
}

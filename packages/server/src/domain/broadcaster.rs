//! EventBroadcaster trait definition.
//!
//! The connection registry: the set of currently live push channels, one
//! per connected client. Owned by the server process lifecycle and
//! injected into the use case layer; there is no ambient global state.

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use agora_shared::protocol::ServerEvent;

/// Opaque handle for one open push channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Sender half of one client's outbound channel. The WebSocket write task
/// drains the receiver half; a send error means the channel is dead.
pub type EventSink = mpsc::UnboundedSender<String>;

/// Registry of live connections with broadcast-to-all.
///
/// Registry membership exists iff the channel is open: `unregister` runs
/// synchronously on close or send error, so a broadcast never observes a
/// dead channel twice. Broadcast order equals call order; delivery itself
/// is best-effort and clients reconcile by re-reading.
#[async_trait]
pub trait EventBroadcaster: Send + Sync {
    /// Add an open channel.
    async fn register(&self, connection_id: ConnectionId, sink: EventSink);

    /// Remove a channel. Idempotent.
    async fn unregister(&self, connection_id: ConnectionId);

    /// Send the event to every registered channel. A failure sending to
    /// one channel removes that channel and never blocks the others.
    async fn broadcast(&self, event: &ServerEvent);

    /// Send the event to a single channel, used for the `connected`
    /// acknowledgment and `pong` replies.
    async fn send_to(&self, connection_id: ConnectionId, event: &ServerEvent);

    /// Number of currently registered channels.
    async fn connection_count(&self) -> usize;
}

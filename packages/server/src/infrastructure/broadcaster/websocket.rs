//! WebSocket-backed EventBroadcaster implementation.
//!
//! Manages the `UnboundedSender` half of each connection's outbound
//! channel. Socket creation stays in the UI layer; this type only
//! registers senders and pushes serialized events through them.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use agora_shared::protocol::ServerEvent;

use crate::domain::{ConnectionId, EventBroadcaster, EventSink};

/// Connection registry over WebSocket outbound channels.
///
/// Membership is mutated only through `register`/`unregister` and the
/// dead-channel cleanup inside `broadcast`, all behind one Mutex, so a
/// broadcast never observes a half-removed channel.
pub struct WebSocketBroadcaster {
    connections: Mutex<HashMap<ConnectionId, EventSink>>,
}

impl WebSocketBroadcaster {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for WebSocketBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBroadcaster for WebSocketBroadcaster {
    async fn register(&self, connection_id: ConnectionId, sink: EventSink) {
        let mut connections = self.connections.lock().await;
        connections.insert(connection_id, sink);
        tracing::debug!("Connection '{}' registered", connection_id);
    }

    async fn unregister(&self, connection_id: ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections.remove(&connection_id);
        tracing::debug!("Connection '{}' unregistered", connection_id);
    }

    async fn broadcast(&self, event: &ServerEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize event for broadcast: {}", e);
                return;
            }
        };

        let mut connections = self.connections.lock().await;
        let mut dead = Vec::new();

        for (connection_id, sink) in connections.iter() {
            if sink.send(payload.clone()).is_err() {
                tracing::warn!(
                    "Failed to push event to connection '{}', dropping it",
                    connection_id
                );
                dead.push(*connection_id);
            }
        }

        // A send error means the receiver is gone; remove the channel so
        // the next broadcast never retries a dead one.
        for connection_id in dead {
            connections.remove(&connection_id);
        }
    }

    async fn send_to(&self, connection_id: ConnectionId, event: &ServerEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize event: {}", e);
                return;
            }
        };

        let mut connections = self.connections.lock().await;
        if let Some(sink) = connections.get(&connection_id) {
            if sink.send(payload).is_err() {
                tracing::warn!(
                    "Failed to push event to connection '{}', dropping it",
                    connection_id
                );
                connections.remove(&connection_id);
            }
        }
    }

    async fn connection_count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn registered_pair() -> (ConnectionId, mpsc::UnboundedReceiver<String>, EventSink) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ConnectionId::generate(), rx, tx)
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_registered_connection() {
        // given:
        let broadcaster = WebSocketBroadcaster::new();
        let (id_a, mut rx_a, tx_a) = registered_pair();
        let (id_b, mut rx_b, tx_b) = registered_pair();
        broadcaster.register(id_a, tx_a).await;
        broadcaster.register(id_b, tx_b).await;

        // when:
        broadcaster.broadcast(&ServerEvent::MessagesCleared).await;

        // then:
        assert_eq!(
            rx_a.recv().await,
            Some(r#"{"type":"messages_cleared"}"#.to_string())
        );
        assert_eq!(
            rx_b.recv().await,
            Some(r#"{"type":"messages_cleared"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_broadcast_survives_a_dead_channel_and_cleans_it_up() {
        // given: three connections, the middle one already torn down
        let broadcaster = WebSocketBroadcaster::new();
        let (id_a, mut rx_a, tx_a) = registered_pair();
        let (id_dead, rx_dead, tx_dead) = registered_pair();
        let (id_c, mut rx_c, tx_c) = registered_pair();
        broadcaster.register(id_a, tx_a).await;
        broadcaster.register(id_dead, tx_dead).await;
        broadcaster.register(id_c, tx_c).await;
        drop(rx_dead);

        // when:
        broadcaster.broadcast(&ServerEvent::MessagesCleared).await;

        // then: the two live connections still receive the event and the
        // dead one is gone from the registry
        assert!(rx_a.recv().await.is_some());
        assert!(rx_c.recv().await.is_some());
        assert_eq!(broadcaster.connection_count().await, 2);
    }

    #[tokio::test]
    async fn test_unregister_is_idempotent() {
        // given:
        let broadcaster = WebSocketBroadcaster::new();
        let (id, _rx, tx) = registered_pair();
        broadcaster.register(id, tx).await;

        // when:
        broadcaster.unregister(id).await;
        broadcaster.unregister(id).await;

        // then:
        assert_eq!(broadcaster.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_send_to_targets_a_single_connection() {
        // given:
        let broadcaster = WebSocketBroadcaster::new();
        let (id_a, mut rx_a, tx_a) = registered_pair();
        let (id_b, mut rx_b, tx_b) = registered_pair();
        broadcaster.register(id_a, tx_a).await;
        broadcaster.register(id_b, tx_b).await;

        // when:
        broadcaster.send_to(id_a, &ServerEvent::Pong).await;

        // then:
        assert_eq!(rx_a.recv().await, Some(r#"{"type":"pong"}"#.to_string()));
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_send_to_unknown_connection_is_a_no_op() {
        // given:
        let broadcaster = WebSocketBroadcaster::new();

        // when / then: no panic, nothing to deliver
        broadcaster
            .send_to(ConnectionId::generate(), &ServerEvent::Pong)
            .await;
        assert_eq!(broadcaster.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_connections_is_a_no_op() {
        // given:
        let broadcaster = WebSocketBroadcaster::new();

        // when / then:
        broadcaster.broadcast(&ServerEvent::MessagesCleared).await;
        assert_eq!(broadcaster.connection_count().await, 0);
    }
}

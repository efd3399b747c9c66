//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use agora_shared::protocol::{ClientCommand, ServerEvent};

use crate::domain::ConnectionId;
use crate::ui::state::AppState;

/// Upgrade to a push channel. The channel carries no resume state: a
/// reconnecting client starts clean and bulk-fetches over HTTP.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Spawns a task that drains the connection's outbound channel into the
/// WebSocket sink. A failed socket write ends the task, which tears the
/// connection down.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();

    state.broadcaster.register(connection_id, tx).await;
    tracing::info!("Connection '{}' opened and registered", connection_id);

    // One-time acknowledgment on this channel only.
    state
        .broadcaster
        .send_to(connection_id, &ServerEvent::Connected)
        .await;

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientCommand>(&text) {
                    Ok(ClientCommand::Ping) => {
                        tracing::debug!("Ping from '{}'", connection_id);
                        state_for_recv
                            .broadcaster
                            .send_to(connection_id, &ServerEvent::Pong)
                            .await;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Unsupported message from '{}', ignoring: {}",
                            connection_id,
                            e
                        );
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Synchronous removal: the registry must never hold a dead channel
    // once this socket is gone.
    state.broadcaster.unregister(connection_id).await;
    tracing::info!("Connection '{}' closed and unregistered", connection_id);
}

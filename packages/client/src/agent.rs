//! Reconnection agent: push channel lifecycle and reconciliation.
//!
//! The channel is advisory, never required for correctness: every
//! received state-changing event is only a cue to re-fetch the
//! authoritative list over HTTP, and a fixed-interval poll covers the
//! window where push is unavailable. Reconnects retry forever with a
//! fixed backoff.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::time::{Instant, interval_at};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use agora_shared::protocol::{ClientCommand, MessageDto, ServerEvent};

use crate::view::MessageFormatter;

/// Fixed delay before a reconnect attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(3);
/// Fallback poll period while a channel is open.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Application-level liveness probe period.
pub const PING_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Where the agent connects.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// HTTP base URL of the server, e.g. `http://127.0.0.1:8080`.
    pub server_url: String,
}

impl AgentConfig {
    /// Push channel URL derived from the HTTP base URL.
    pub fn ws_url(&self) -> String {
        let base = self.server_url.trim_end_matches('/');
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            format!("ws://{base}")
        };
        format!("{ws_base}/ws")
    }

    /// Bulk-fetch endpoint for the authoritative message list.
    pub fn messages_url(&self) -> String {
        format!("{}/api/messages", self.server_url.trim_end_matches('/'))
    }
}

/// Run the agent until interrupted.
///
/// Does the initial bulk fetch once at startup, then cycles:
/// connect, pump events, and on any drop wait [`RECONNECT_DELAY`] and
/// connect again.
pub async fn run_agent(config: AgentConfig) {
    let http = reqwest::Client::new();

    if let Err(e) = fetch_and_render(&http, &config).await {
        tracing::warn!("Initial fetch failed: {}", e);
    }

    loop {
        match run_session(&http, &config).await {
            Ok(()) => tracing::info!("Server closed the connection"),
            Err(e) => tracing::warn!("Session ended: {}", e),
        }

        tracing::info!("Reconnecting in {:?}", RECONNECT_DELAY);
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

/// One channel lifetime: connect, then pump events, pings, and the
/// fallback poll until the channel drops.
async fn run_session(http: &reqwest::Client, config: &AgentConfig) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(config.ws_url())
        .await
        .map_err(|e| ClientError::Connection(e.to_string()))?;

    tracing::info!("Connected to {}", config.ws_url());

    let (mut write, mut read) = ws_stream.split();

    let start = Instant::now();
    let mut poll = interval_at(start + POLL_INTERVAL, POLL_INTERVAL);
    let mut ping = interval_at(start + PING_INTERVAL, PING_INTERVAL);

    loop {
        tokio::select! {
            message = read.next() => {
                match message {
                    Some(Ok(Message::Text(text))) => {
                        handle_event(http, config, &text).await;
                    }
                    Some(Ok(Message::Close(_))) | None => return Ok(()),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(ClientError::Connection(e.to_string())),
                }
            }
            _ = poll.tick() => {
                // Safety net for missed or dropped events.
                if let Err(e) = fetch_and_render(http, config).await {
                    tracing::warn!("Fallback poll failed: {}", e);
                }
            }
            _ = ping.tick() => {
                let payload = serde_json::to_string(&ClientCommand::Ping)
                    .expect("ping serializes");
                if let Err(e) = write.send(Message::Text(payload.into())).await {
                    return Err(ClientError::Connection(e.to_string()));
                }
            }
        }
    }
}

/// Events are hints, not state: anything state-changing triggers a
/// re-fetch of the authoritative list.
async fn handle_event(http: &reqwest::Client, config: &AgentConfig, raw: &str) {
    let event = match serde_json::from_str::<ServerEvent>(raw) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Unparseable event, ignoring: {}", e);
            return;
        }
    };

    match &event {
        ServerEvent::Connected => tracing::info!("Channel acknowledged"),
        ServerEvent::Pong => tracing::debug!("Pong"),
        _ => {}
    }

    if event.invalidates_local_state() {
        tracing::debug!("State-changing event received, re-fetching");
        if let Err(e) = fetch_and_render(http, config).await {
            tracing::warn!("Re-fetch after event failed: {}", e);
        }
    }
}

async fn fetch_and_render(http: &reqwest::Client, config: &AgentConfig) -> Result<(), ClientError> {
    let messages = fetch_messages(http, config).await?;
    print!("{}", MessageFormatter::format_message_list(&messages));
    Ok(())
}

async fn fetch_messages(
    http: &reqwest::Client,
    config: &AgentConfig,
) -> Result<Vec<MessageDto>, ClientError> {
    http.get(config.messages_url())
        .send()
        .await
        .map_err(|e| ClientError::Fetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| ClientError::Fetch(e.to_string()))?
        .json()
        .await
        .map_err(|e| ClientError::Fetch(e.to_string()))
}

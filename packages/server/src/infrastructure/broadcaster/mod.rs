//! EventBroadcaster implementations.

mod websocket;

pub use websocket::WebSocketBroadcaster;

//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::{EventBroadcaster, SessionVerifier};
use crate::usecase::{
    ClearMessagesUseCase, DeleteOwnMessagesUseCase, ListMessagesUseCase, PostMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub list_messages_usecase: Arc<ListMessagesUseCase>,
    pub post_message_usecase: Arc<PostMessageUseCase>,
    pub clear_messages_usecase: Arc<ClearMessagesUseCase>,
    pub delete_own_messages_usecase: Arc<DeleteOwnMessagesUseCase>,
    /// Connection registry, used directly by the WebSocket handler for
    /// channel lifecycle.
    pub broadcaster: Arc<dyn EventBroadcaster>,
    /// Narrow seam to the authentication subsystem.
    pub sessions: Arc<dyn SessionVerifier>,
}

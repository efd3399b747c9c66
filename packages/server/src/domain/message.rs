//! Chat message entity and its value objects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for caller-supplied values. These are caller-visible
/// and non-retryable (mapped to 400 at the HTTP boundary).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message content must not be empty")]
    EmptyContent,
    #[error("author id must not be empty")]
    EmptyAuthorId,
}

/// Identity of a message author, owned by the authentication subsystem.
/// The core treats it as an opaque non-empty string and does not enforce
/// it as a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyAuthorId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Non-empty message text. No length ceiling is enforced here; that is
/// input-validation policy, not a store concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// A persisted chat message. Created by the store on append, never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonically assigned by the store, immutable once created.
    pub id: i64,
    pub author_id: AuthorId,
    pub content: MessageContent,
    /// Unix timestamp in UTC milliseconds, assigned by the store at
    /// insertion, never client-supplied.
    pub created_at: i64,
}

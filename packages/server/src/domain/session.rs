//! SessionVerifier trait definition.
//!
//! Credential storage and session issuance belong to the authentication
//! subsystem; the core only needs "current caller identity or none".

use async_trait::async_trait;

use super::AuthorId;

/// Narrow contract against the authentication subsystem.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Resolve a bearer token to a caller identity, `None` when the token
    /// is unknown or expired.
    async fn verify(&self, token: &str) -> Option<AuthorId>;
}

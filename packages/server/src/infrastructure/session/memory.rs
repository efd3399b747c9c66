//! In-memory SessionVerifier implementation.
//!
//! Stands in for the real authentication subsystem: a token-to-author map
//! seeded from configuration at startup. Tests mint tokens through
//! `issue`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{AuthorId, SessionVerifier};

/// Token-to-author session map.
pub struct InMemorySessionStore {
    tokens: Mutex<HashMap<String, AuthorId>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            tokens: Mutex::new(HashMap::new()),
        }
    }

    /// Seed with pre-shared `(token, author)` pairs from configuration.
    pub async fn seed(&self, pairs: Vec<(String, AuthorId)>) {
        let mut tokens = self.tokens.lock().await;
        for (token, author_id) in pairs {
            tokens.insert(token, author_id);
        }
    }

    /// Mint a fresh token for the given author.
    pub async fn issue(&self, author_id: AuthorId) -> String {
        let token = Uuid::new_v4().to_string();
        let mut tokens = self.tokens.lock().await;
        tokens.insert(token.clone(), author_id);
        token
    }

    /// Drop a token. Idempotent.
    pub async fn revoke(&self, token: &str) {
        let mut tokens = self.tokens.lock().await;
        tokens.remove(token);
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionVerifier for InMemorySessionStore {
    async fn verify(&self, token: &str) -> Option<AuthorId> {
        let tokens = self.tokens.lock().await;
        tokens.get(token).cloned()
    }
}

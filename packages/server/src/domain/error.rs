//! Errors surfaced by the infrastructure trait seams.

use thiserror::Error;

/// Message store failures. Fatal to the request that hit them (mapped to
/// 500 at the HTTP boundary).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("message store unavailable: {0}")]
    Unavailable(String),
}

/// Cache failures. Never fatal: every caller treats them as a miss and
/// falls through to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// Task sink failures. The gateway publishes fire-and-forget and only logs
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskPublishError {
    #[error("task publish failed: {0}")]
    PublishFailed(String),
}

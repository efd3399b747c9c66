//! Use case error types.

use thiserror::Error;

use crate::domain::{StoreError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListMessagesError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClearMessagesError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteOwnMessagesError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

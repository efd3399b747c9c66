//! Agora chat server library.
//!
//! Layered like the rest of the workspace expects to consume it:
//!
//! - `domain`: entities, value objects, and the trait seams the rest of the
//!   server depends on (store, cache, broadcaster, sessions, task sink)
//! - `infrastructure`: concrete implementations of the domain traits
//! - `usecase`: one struct per operation; the mutation gateway lives here
//! - `ui`: axum router, HTTP and WebSocket handlers, shared state

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

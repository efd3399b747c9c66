//! Agora live-view client library.
//!
//! Implements the reconnection agent: one push channel per session,
//! fixed-delay reconnect on drop, and reconciliation by re-fetching the
//! authoritative message list instead of trusting push payloads.

pub mod agent;
pub mod view;

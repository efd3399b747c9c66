//! Shared library for the Agora chat application.
//!
//! Contains the wire protocol spoken between server and client, plus
//! time and logging utilities used by both binaries.

pub mod logger;
pub mod protocol;
pub mod time;

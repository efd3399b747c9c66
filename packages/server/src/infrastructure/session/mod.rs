//! SessionVerifier implementations.

mod memory;

pub use memory::InMemorySessionStore;

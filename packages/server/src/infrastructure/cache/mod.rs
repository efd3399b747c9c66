//! MessageListCache implementations.
//!
//! - `memory`: per-entry expiry instants in a Mutex-guarded map
//! - `redis`: ConnectionManager-backed look-aside cache, selected when a
//!   Redis URL is configured

mod memory;
mod redis;

pub use memory::InMemoryMessageCache;
pub use redis::RedisMessageCache;

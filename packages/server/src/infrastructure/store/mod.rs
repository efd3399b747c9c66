//! MessageStore implementations.
//!
//! - `memory`: Mutex-guarded Vec, the default backend
//! - `sqlite`: sqlx-backed relational backend, selected when a database
//!   URL is configured

mod memory;
mod sqlite;

pub use memory::InMemoryMessageStore;
pub use sqlite::SqliteMessageStore;

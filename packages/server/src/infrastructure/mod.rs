//! Infrastructure layer: concrete implementations of the domain traits
//! plus DTO conversion between domain entities and wire types.

pub mod broadcaster;
pub mod cache;
pub mod dto;
pub mod session;
pub mod store;
pub mod tasks;

//! # Newsroom Infrastructure
//!
//! Concrete implementations of the repository ports defined in `newsroom-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM; without it only
//!   the in-memory store is compiled

pub mod database;
pub mod memory;

pub use database::DatabaseConnections;
pub use memory::InMemoryStore;

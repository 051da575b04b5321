//! # Forum Infrastructure
//!
//! Concrete implementations of the storage port defined in `forum-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL backend via SeaORM

pub mod storage;

#[cfg(feature = "postgres")]
pub mod database;

// Re-exports - In-Memory
pub use storage::{DeadlineStorage, InMemoryStorage};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresStorage};

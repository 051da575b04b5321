//! Relational storage: connection management, schema bootstrap, and the
//! PostgreSQL backend.

mod connections;
mod postgres_storage;

pub mod entity;
pub mod schema;

pub use connections::DatabaseConfig;
pub use postgres_storage::PostgresStorage;

#[cfg(test)]
mod tests;

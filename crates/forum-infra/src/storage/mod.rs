//! Backend-agnostic storage implementations.

mod deadline;
mod memory;

pub use deadline::DeadlineStorage;
pub use memory::InMemoryStorage;

//! # Forum Core
//!
//! The domain layer of the article forum.
//! This crate contains the post/comment model and the storage contract, with
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Comment, CommentCreation, Post};
pub use error::StorageError;
pub use ports::{Pagination, Storage, StorageKind};

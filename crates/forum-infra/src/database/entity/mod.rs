//! SeaORM entities mirroring the `posts` and `comments` tables.

pub mod comment;
pub mod post;

//! SQLite storage implementation for comments.

mod model;
mod repository;

pub use model::{CommentDB, NewCommentDB};
pub use repository::CommentRepository;

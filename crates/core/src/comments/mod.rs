//! Comments module - threaded comments and the reply-tree builder.

mod comment_tree;
mod comments_model;
mod comments_service;
mod comments_traits;

pub use comment_tree::build_comment_tree;
pub use comments_model::{Comment, CommentNode, CommentThread, NewComment};
pub use comments_service::CommentService;
pub use comments_traits::{CommentRepositoryTrait, CommentServiceTrait};

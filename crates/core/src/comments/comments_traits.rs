use crate::comments::comments_model::{Comment, NewComment};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for comment repository operations
#[async_trait]
pub trait CommentRepositoryTrait: Send + Sync {
    async fn insert_comment(&self, goal_id: i32, new_comment: NewComment) -> Result<Comment>;
    /// Whether `comment_id` exists and is attached to `goal_id`.
    fn comment_belongs_to_goal(&self, comment_id: i32, goal_id: i32) -> Result<bool>;
    /// All comments for a goal, ordered by `created_at` ascending.
    fn load_comments_for_goal(&self, goal_id: i32) -> Result<Vec<Comment>>;
}

/// Trait for comment service operations
#[async_trait]
pub trait CommentServiceTrait: Send + Sync {
    async fn create_comment(&self, goal_id: i32, new_comment: NewComment) -> Result<Comment>;
    fn get_comment_thread(&self, goal_id: i32) -> Result<crate::comments::CommentThread>;
}

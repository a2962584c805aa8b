//! Comment domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A comment attached to a goal. `parent_id` is `None` for top-level
/// comments and otherwise references another comment on the same goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub goal_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a comment
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewComment {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
}

/// A comment together with its replies, in ascending creation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentNode {
    pub id: i32,
    pub goal_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub children: Vec<CommentNode>,
}

impl From<Comment> for CommentNode {
    fn from(comment: Comment) -> Self {
        CommentNode {
            id: comment.id,
            goal_id: comment.goal_id,
            parent_id: comment.parent_id,
            content: comment.content,
            created_at: comment.created_at,
            children: Vec::new(),
        }
    }
}

/// The rendered comment forest for a goal plus the stored comment count.
///
/// `total` reflects storage state: it counts every stored comment, including
/// any orphans that were dropped while assembling the tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentThread {
    pub comments: Vec<CommentNode>,
    pub total: usize,
}

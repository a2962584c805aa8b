use crate::comments::comment_tree::build_comment_tree;
use crate::comments::comments_model::{Comment, CommentThread, NewComment};
use crate::comments::comments_traits::{CommentRepositoryTrait, CommentServiceTrait};
use crate::errors::{Error, Result};
use crate::goals::GoalRepositoryTrait;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CommentService<C: CommentRepositoryTrait, G: GoalRepositoryTrait> {
    comment_repo: Arc<C>,
    goal_repo: Arc<G>,
}

impl<C: CommentRepositoryTrait, G: GoalRepositoryTrait> CommentService<C, G> {
    pub fn new(comment_repo: Arc<C>, goal_repo: Arc<G>) -> Self {
        CommentService {
            comment_repo,
            goal_repo,
        }
    }

    fn ensure_goal_exists(&self, goal_id: i32) -> Result<()> {
        if !self.goal_repo.goal_exists(goal_id)? {
            return Err(Error::not_found(format!("goal {}", goal_id)));
        }
        Ok(())
    }
}

#[async_trait]
impl<C: CommentRepositoryTrait, G: GoalRepositoryTrait> CommentServiceTrait
    for CommentService<C, G>
{
    async fn create_comment(&self, goal_id: i32, new_comment: NewComment) -> Result<Comment> {
        self.ensure_goal_exists(goal_id)?;
        if let Some(parent_id) = new_comment.parent_id {
            // A parent on another goal surfaces as the same not-found kind
            // as a missing parent.
            if !self
                .comment_repo
                .comment_belongs_to_goal(parent_id, goal_id)?
            {
                return Err(Error::not_found(format!(
                    "parent comment {} on goal {}",
                    parent_id, goal_id
                )));
            }
        }
        self.comment_repo.insert_comment(goal_id, new_comment).await
    }

    fn get_comment_thread(&self, goal_id: i32) -> Result<CommentThread> {
        self.ensure_goal_exists(goal_id)?;
        let flat = self.comment_repo.load_comments_for_goal(goal_id)?;
        let (comments, total) = build_comment_tree(flat);
        Ok(CommentThread { comments, total })
    }
}

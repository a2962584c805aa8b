use starpool_core::comments::{Comment, CommentRepositoryTrait, NewComment};
use starpool_core::Result;

use super::model::{CommentDB, NewCommentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::comments;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

pub struct CommentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CommentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CommentRepository { pool, writer }
    }
}

#[async_trait]
impl CommentRepositoryTrait for CommentRepository {
    async fn insert_comment(&self, goal_id: i32, new_comment: NewComment) -> Result<Comment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Comment> {
                let new_row = NewCommentDB {
                    goal_id,
                    parent_id: new_comment.parent_id,
                    content: new_comment.content,
                    created_at: Utc::now().naive_utc(),
                };
                let result_db = diesel::insert_into(comments::table)
                    .values(&new_row)
                    .returning(CommentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Comment::from(result_db))
            })
            .await
    }

    fn comment_belongs_to_goal(&self, comment_id: i32, goal_id: i32) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        diesel::select(diesel::dsl::exists(
            comments::table
                .filter(comments::id.eq(comment_id))
                .filter(comments::goal_id.eq(goal_id)),
        ))
        .get_result::<bool>(&mut conn)
        .into_core()
    }

    fn load_comments_for_goal(&self, goal_id: i32) -> Result<Vec<Comment>> {
        let mut conn = get_connection(&self.pool)?;
        let comments_db = comments::table
            .filter(comments::goal_id.eq(goal_id))
            .order(comments::created_at.asc())
            .then_order_by(comments::id.asc())
            .load::<CommentDB>(&mut conn)
            .into_core()?;
        Ok(comments_db.into_iter().map(Comment::from).collect())
    }
}

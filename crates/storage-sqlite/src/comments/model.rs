//! Database models for comments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for comments
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentDB {
    pub id: i32,
    pub goal_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a comment
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewCommentDB {
    pub goal_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<CommentDB> for starpool_core::comments::Comment {
    fn from(db: CommentDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            parent_id: db.parent_id,
            content: db.content,
            created_at: db.created_at,
        }
    }
}

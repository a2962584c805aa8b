//! Database models for daily ratings.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for daily ratings
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
#[diesel(table_name = crate::schema::daily_ratings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyRatingDB {
    pub id: i32,
    pub goal_id: i32,
    pub rating: i32,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a daily rating
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_ratings)]
pub struct NewDailyRatingDB {
    pub goal_id: i32,
    pub rating: i32,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<DailyRatingDB> for starpool_core::ratings::DailyRating {
    fn from(db: DailyRatingDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            rating: db.rating,
            date: db.date,
            created_at: db.created_at,
        }
    }
}

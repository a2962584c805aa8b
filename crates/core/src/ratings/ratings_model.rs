//! Daily rating domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Valid rating range, inclusive on both ends.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A 1-5 score recorded for a goal on a specific calendar date.
/// At most one row exists per (goal_id, date).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRating {
    pub id: i32,
    pub goal_id: i32,
    pub rating: i32,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a daily rating
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewDailyRating {
    pub rating: i32,
    pub date: NaiveDate,
}

//! Goals domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a goal.
///
/// `stars` is a derived total: once any daily rating exists for the goal it
/// always equals the sum of those ratings. Before the first rating it holds
/// whatever initial value the caller supplied at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub stars: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stars: i32,
}

/// Input model for a wholesale goal update (title/description/category/stars)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GoalUpdate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stars: i32,
}

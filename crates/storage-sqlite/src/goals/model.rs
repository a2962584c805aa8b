//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub stars: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub title: String,
    pub description: String,
    pub category: String,
    pub stars: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for the wholesale goal update
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct GoalUpdateDB {
    pub title: String,
    pub description: String,
    pub category: String,
    pub stars: i32,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for starpool_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            category: db.category,
            stars: db.stars,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewGoalDB {
    pub fn from_domain(domain: starpool_core::goals::NewGoal, now: NaiveDateTime) -> Self {
        Self {
            title: domain.title,
            description: domain.description,
            category: domain.category,
            stars: domain.stars,
            created_at: now,
            updated_at: now,
        }
    }
}

impl GoalUpdateDB {
    pub fn from_domain(domain: starpool_core::goals::GoalUpdate, now: NaiveDateTime) -> Self {
        Self {
            title: domain.title,
            description: domain.description,
            category: domain.category,
            stars: domain.stars,
            updated_at: now,
        }
    }
}

use crate::errors::Result;
use crate::ratings::ratings_model::DailyRating;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for daily rating repository operations
#[async_trait]
pub trait RatingRepositoryTrait: Send + Sync {
    /// Upserts the rating keyed on (goal_id, date), recomputes the goal's
    /// star total from all of its ratings, writes it back, and returns the
    /// new total.
    async fn upsert_rating(&self, goal_id: i32, date: NaiveDate, rating: i32) -> Result<i32>;

    /// Loads the most recent ratings for a goal, newest date first,
    /// capped at [`RECENT_RATINGS_LIMIT`](crate::ratings::RECENT_RATINGS_LIMIT) entries.
    fn load_recent_ratings(&self, goal_id: i32) -> Result<Vec<DailyRating>>;
}

/// Trait for daily rating service operations
#[async_trait]
pub trait RatingServiceTrait: Send + Sync {
    async fn record_daily_rating(&self, goal_id: i32, rating: i32, date: NaiveDate) -> Result<i32>;
    fn get_daily_ratings(&self, goal_id: i32) -> Result<Vec<DailyRating>>;
}

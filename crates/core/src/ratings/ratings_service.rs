use crate::errors::{Error, Result};
use crate::goals::GoalRepositoryTrait;
use crate::ratings::ratings_model::{DailyRating, MAX_RATING, MIN_RATING};
use crate::ratings::ratings_traits::{RatingRepositoryTrait, RatingServiceTrait};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Score aggregator: validates ratings, upserts them by natural key and keeps
/// the owning goal's star total equal to the sum of its daily ratings.
pub struct RatingService<R: RatingRepositoryTrait, G: GoalRepositoryTrait> {
    rating_repo: Arc<R>,
    goal_repo: Arc<G>,
}

impl<R: RatingRepositoryTrait, G: GoalRepositoryTrait> RatingService<R, G> {
    pub fn new(rating_repo: Arc<R>, goal_repo: Arc<G>) -> Self {
        RatingService {
            rating_repo,
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
impl<R: RatingRepositoryTrait, G: GoalRepositoryTrait> RatingServiceTrait for RatingService<R, G> {
    async fn record_daily_rating(&self, goal_id: i32, rating: i32, date: NaiveDate) -> Result<i32> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(Error::validation(format!(
                "rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }
        self.ensure_goal_exists(goal_id)?;
        self.rating_repo.upsert_rating(goal_id, date, rating).await
    }

    fn get_daily_ratings(&self, goal_id: i32) -> Result<Vec<DailyRating>> {
        self.ensure_goal_exists(goal_id)?;
        self.rating_repo.load_recent_ratings(goal_id)
    }
}

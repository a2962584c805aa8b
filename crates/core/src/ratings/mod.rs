//! Daily ratings module - the score aggregator.

mod ratings_model;
mod ratings_service;
mod ratings_traits;

/// How many recent ratings a listing returns.
pub const RECENT_RATINGS_LIMIT: i64 = 7;

pub use ratings_model::{DailyRating, NewDailyRating, MAX_RATING, MIN_RATING};
pub use ratings_service::RatingService;
pub use ratings_traits::{RatingRepositoryTrait, RatingServiceTrait};

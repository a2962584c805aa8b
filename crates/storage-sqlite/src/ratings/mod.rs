//! SQLite storage implementation for daily ratings.

mod model;
mod repository;

pub use model::{DailyRatingDB, NewDailyRatingDB};
pub use repository::RatingRepository;

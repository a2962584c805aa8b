//! SQLite storage implementation for goals.

mod model;
mod repository;

pub use model::{GoalDB, GoalUpdateDB, NewGoalDB};
pub use repository::GoalRepository;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i32) -> Result<Goal>;
    fn load_goals_by_category(&self, category: &str) -> Result<Vec<Goal>>;
    fn goal_exists(&self, goal_id: i32) -> Result<bool>;
    fn total_stars(&self) -> Result<i64>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Applies the update and returns the affected-row count (0 when the id is absent).
    async fn update_goal(&self, goal_id: i32, update: GoalUpdate) -> Result<usize>;
    async fn delete_goal(&self, goal_id: i32) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i32) -> Result<Goal>;
    fn get_goals_by_category(&self, category: &str) -> Result<Vec<Goal>>;
    fn get_total_stars(&self) -> Result<i64>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: i32, update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i32) -> Result<()>;
}

use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GoalService<R: GoalRepositoryTrait> {
    goal_repo: Arc<R>,
}

impl<R: GoalRepositoryTrait> GoalService<R> {
    pub fn new(goal_repo: Arc<R>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<R: GoalRepositoryTrait> GoalServiceTrait for GoalService<R> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, goal_id: i32) -> Result<Goal> {
        self.goal_repo.get_goal(goal_id)
    }

    fn get_goals_by_category(&self, category: &str) -> Result<Vec<Goal>> {
        // Exact string match; an empty result set is a valid response.
        self.goal_repo.load_goals_by_category(category)
    }

    fn get_total_stars(&self) -> Result<i64> {
        self.goal_repo.total_stars()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, goal_id: i32, update: GoalUpdate) -> Result<Goal> {
        // Existence is verified post-hoc through the affected-row count.
        let affected = self.goal_repo.update_goal(goal_id, update).await?;
        if affected == 0 {
            return Err(Error::not_found(format!("goal {}", goal_id)));
        }
        self.goal_repo.get_goal(goal_id)
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<()> {
        let affected = self.goal_repo.delete_goal(goal_id).await?;
        if affected == 0 {
            return Err(Error::not_found(format!("goal {}", goal_id)));
        }
        Ok(())
    }
}

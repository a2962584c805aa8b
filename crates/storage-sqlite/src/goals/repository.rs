use starpool_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use starpool_core::Result;

use super::model::{GoalDB, GoalUpdateDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::goals;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .order(goals::id.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_goal(&self, goal_id: i32) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::from(goal_db))
    }

    fn load_goals_by_category(&self, category: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .filter(goals::category.eq(category))
            .order(goals::id.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn goal_exists(&self, goal_id: i32) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        diesel::select(diesel::dsl::exists(goals::table.find(goal_id)))
            .get_result::<bool>(&mut conn)
            .into_core()
    }

    fn total_stars(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<i64> = goals::table
            .select(diesel::dsl::sum(goals::stars))
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total.unwrap_or(0))
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db = NewGoalDB::from_domain(new_goal, Utc::now().naive_utc());
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_id: i32, update: GoalUpdate) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let changeset = GoalUpdateDB::from_domain(update, Utc::now().naive_utc());
                diesel::update(goals::table.find(goal_id))
                    .set(&changeset)
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Ratings and comments go with the goal via ON DELETE CASCADE.
                diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

use starpool_core::ratings::{DailyRating, RatingRepositoryTrait, RECENT_RATINGS_LIMIT};
use starpool_core::Result;

use super::model::{DailyRatingDB, NewDailyRatingDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{daily_ratings, goals};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

pub struct RatingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RatingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RatingRepository { pool, writer }
    }
}

#[async_trait]
impl RatingRepositoryTrait for RatingRepository {
    /// Upsert keyed on (goal_id, date), then an authoritative recompute of the
    /// goal's star total. The whole job runs on the writer actor inside one
    /// immediate transaction, so a concurrent upsert for the same goal cannot
    /// interleave between the sum and the write-back.
    async fn upsert_rating(&self, goal_id: i32, date: NaiveDate, rating: i32) -> Result<i32> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<i32> {
                let now = Utc::now().naive_utc();
                let new_row = NewDailyRatingDB {
                    goal_id,
                    rating,
                    date,
                    created_at: now,
                };
                diesel::insert_into(daily_ratings::table)
                    .values(&new_row)
                    .on_conflict((daily_ratings::goal_id, daily_ratings::date))
                    .do_update()
                    .set((
                        daily_ratings::rating.eq(rating),
                        daily_ratings::created_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                // Never adjust incrementally; the stored total is always the
                // full sum, which cannot drift after a partial failure.
                let total: Option<i64> = daily_ratings::table
                    .filter(daily_ratings::goal_id.eq(goal_id))
                    .select(diesel::dsl::sum(daily_ratings::rating))
                    .first(conn)
                    .map_err(StorageError::from)?;
                let total = i32::try_from(total.unwrap_or(0)).unwrap_or(i32::MAX);

                diesel::update(goals::table.find(goal_id))
                    .set((goals::stars.eq(total), goals::updated_at.eq(now)))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(total)
            })
            .await
    }

    fn load_recent_ratings(&self, goal_id: i32) -> Result<Vec<DailyRating>> {
        let mut conn = get_connection(&self.pool)?;
        let ratings_db = daily_ratings::table
            .filter(daily_ratings::goal_id.eq(goal_id))
            .order(daily_ratings::date.desc())
            .limit(RECENT_RATINGS_LIMIT)
            .load::<DailyRatingDB>(&mut conn)
            .into_core()?;
        Ok(ratings_db.into_iter().map(DailyRating::from).collect())
    }
}

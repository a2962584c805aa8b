use std::sync::Arc;

use crate::{error::ApiResult, extract::Json, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use starpool_core::ratings::{DailyRating, NewDailyRating};

#[derive(Serialize)]
struct RatingRecordedResponse {
    message: String,
}

async fn add_daily_rating(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewDailyRating>,
) -> ApiResult<Json<RatingRecordedResponse>> {
    let total = state
        .rating_service
        .record_daily_rating(id, payload.rating, payload.date)
        .await?;
    tracing::debug!(goal_id = id, total, "daily rating recorded");
    Ok(Json(RatingRecordedResponse {
        message: "rating recorded".to_string(),
    }))
}

async fn get_daily_ratings(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DailyRating>>> {
    let ratings = state.rating_service.get_daily_ratings(id)?;
    Ok(Json(ratings))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/{id}/daily-rating", post(add_daily_rating))
        .route("/goals/{id}/daily-ratings", get(get_daily_ratings))
}

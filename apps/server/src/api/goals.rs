use std::sync::Arc;

use crate::{error::ApiResult, extract::Json, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Serialize;
use starpool_core::goals::{Goal, GoalUpdate, NewGoal};

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let g = state.goal_service.create_goal(goal).await?;
    Ok((StatusCode::CREATED, Json(g)))
}

async fn get_goal(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.get_goal(id)?;
    Ok(Json(g))
}

async fn update_goal(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.update_goal(id, update).await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_goals_by_category(
    Path(category): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals_by_category(&category)?;
    Ok(Json(goals))
}

#[derive(Serialize)]
struct TotalStarsResponse {
    total_stars: i64,
}

async fn get_total_stars(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TotalStarsResponse>> {
    let total_stars = state.goal_service.get_total_stars()?;
    Ok(Json(TotalStarsResponse { total_stars }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/category/{category}", get(get_goals_by_category))
        .route("/stars", get(get_total_stars))
}

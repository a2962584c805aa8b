use std::sync::Arc;

use crate::{error::ApiResult, extract::Json, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use starpool_core::comments::{Comment, CommentThread, NewComment};

async fn create_comment(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewComment>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let comment = state.comment_service.create_comment(id, payload).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn get_comments(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CommentThread>> {
    let thread = state.comment_service.get_comment_thread(id)?;
    Ok(Json(thread))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/goals/{id}/comments", get(get_comments).post(create_comment))
}

use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use starpool_core::{
    comments::{CommentService, CommentServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    ratings::{RatingService, RatingServiceTrait},
};
use starpool_storage_sqlite::{
    comments::CommentRepository,
    db::{self, write_actor},
    goals::GoalRepository,
    ratings::RatingRepository,
};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub rating_service: Arc<dyn RatingServiceTrait + Send + Sync>,
    pub comment_service: Arc<dyn CommentServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("STARPOOL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let rating_repo = Arc::new(RatingRepository::new(pool.clone(), writer.clone()));
    let comment_repo = Arc::new(CommentRepository::new(pool.clone(), writer));

    let goal_service = Arc::new(GoalService::new(goal_repo.clone()));
    let rating_service = Arc::new(RatingService::new(rating_repo, goal_repo.clone()));
    let comment_service = Arc::new(CommentService::new(comment_repo, goal_repo));

    Ok(Arc::new(AppState {
        goal_service,
        rating_service,
        comment_service,
        db_path,
    }))
}

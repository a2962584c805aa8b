//! Starpool HTTP server - axum surface over the core services.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod main_lib;

pub use api::app_router;
pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};

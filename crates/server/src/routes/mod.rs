use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub mod health;
pub mod skill;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/skill", post(skill::handle_skill_request))
        .with_state(state)
}

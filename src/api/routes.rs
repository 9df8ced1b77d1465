use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{teams::{generate_teams, hello}, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/generate-teams", post(generate_teams))
        .with_state(state)
}

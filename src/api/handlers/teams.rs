use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, warn};
use std::sync::Arc;

use crate::api::models::{GenerateTeamsRequest, StatusMessage};
use crate::errors::SelectionError;
use crate::services::generation::GenerationService;
use super::AppState;

pub async fn hello() -> impl IntoResponse {
    Json(StatusMessage {
        message: "Fantasy XI generator is running".to_string(),
    })
}

pub async fn generate_teams(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateTeamsRequest>,
) -> impl IntoResponse {
    let service = GenerationService::new(state.config.clone());

    // Enumeration is CPU bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || service.generate(request)).await;

    match result {
        Ok(Ok(response)) => Json(response).into_response(),
        Ok(Err(e @ SelectionError::PoolTooLarge { .. })) => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        Ok(Err(e @ SelectionError::DeadlineExceeded { .. })) => {
            warn!("{}", e);
            (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response()
        }
        Err(e) => {
            error!("Lineup generation task failed: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Generation Error").into_response()
        }
    }
}

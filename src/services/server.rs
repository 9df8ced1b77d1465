use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::{AppConfig, ServerSettings};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let app = build_app(self.config.clone())?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);
        info!("Allowed origins: {}", self.config.server.allowed_origins.join(", "));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Router with CORS and request tracing applied.
pub fn build_app(config: AppConfig) -> Result<Router> {
    let cors = build_cors(&config.server)?;
    let state = Arc::new(AppState { config });

    Ok(create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn build_cors(settings: &ServerSettings) -> Result<CorsLayer> {
    // Credentialed CORS forbids wildcards, so "*" mirrors the caller instead.
    let origin = if settings.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = settings
            .allowed_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>().with_context(|| format!("Invalid CORS origin: {}", o)))
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

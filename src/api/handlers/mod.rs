use crate::config::settings::AppConfig;

pub mod teams;

/// Shared, read-only server state. Each request builds its own pool.
pub struct AppState {
    pub config: AppConfig,
}

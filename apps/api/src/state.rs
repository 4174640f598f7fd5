use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The planner itself is stateless; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

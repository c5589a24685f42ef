use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The prompt engine is pure, so only config lives here.
#[derive(Clone)]
pub struct AppState {
    /// Retained for handlers that grow runtime configuration needs.
    #[allow(dead_code)]
    pub config: Config,
}

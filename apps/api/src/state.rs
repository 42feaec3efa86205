use crate::config::Config;
use crate::resume::service::ResumeService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub service: ResumeService,
    /// Not read by any current handler; main uses it for bind address.
    #[allow(dead_code)]
    pub config: Config,
}

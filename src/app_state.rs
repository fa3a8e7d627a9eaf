//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::Detector;
use crate::service::MonitorService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Everything here is constructed explicitly in `main` and injected;
/// there are no process-wide singletons.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Monitor service for all business logic.
    pub service: Arc<MonitorService>,
    /// Detection seam used by the live-frame endpoint.
    pub detector: Arc<dyn Detector>,
}

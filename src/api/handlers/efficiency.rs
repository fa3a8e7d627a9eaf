//! Efficiency query handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{EfficiencyResponse, PackerIdQuery};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, MonitorError};

/// `GET /efficiency?packer_id=` — Rolling efficiency metrics for a packer.
///
/// # Errors
///
/// Returns [`MonitorError::PackerNotFound`] for an unknown packer.
#[utoipa::path(
    get,
    path = "/api/efficiency",
    tag = "Efficiency",
    summary = "Compute efficiency metrics",
    description = "Computes availability, efficiency score, and throughput over the packer's events inside the configured trailing window.",
    params(PackerIdQuery),
    responses(
        (status = 200, description = "Metrics summary", body = EfficiencyResponse),
        (status = 404, description = "Packer not found", body = ErrorResponse),
    )
)]
pub async fn get_efficiency(
    State(state): State<AppState>,
    Query(query): Query<PackerIdQuery>,
) -> Result<impl IntoResponse, MonitorError> {
    let metrics = state.service.efficiency(query.packer_id).await?;
    Ok(Json(EfficiencyResponse::from(metrics)))
}

/// Efficiency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/efficiency", get(get_efficiency))
}

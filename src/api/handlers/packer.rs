//! Packer handlers: create and list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreatePackerRequest, PackerResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, MonitorError};

/// `POST /packers` — Create a new packer configuration.
///
/// # Errors
///
/// Returns [`MonitorError::DuplicateName`] when the name is taken, or
/// [`MonitorError::InvalidRequest`] on out-of-range fields.
#[utoipa::path(
    post,
    path = "/api/packers",
    tag = "Packers",
    summary = "Create a packer configuration",
    description = "Registers a packer with its spout count and carousel speed. Names are unique; configurations are immutable after creation.",
    request_body = CreatePackerRequest,
    responses(
        (status = 200, description = "Packer created", body = PackerResponse),
        (status = 400, description = "Duplicate name or invalid fields", body = ErrorResponse),
    )
)]
pub async fn create_packer(
    State(state): State<AppState>,
    Json(req): Json<CreatePackerRequest>,
) -> Result<impl IntoResponse, MonitorError> {
    req.validate()?;

    let packer = state
        .service
        .create_packer(&req.name, req.spout_count, req.rpm)
        .await?;

    Ok(Json(PackerResponse::from(packer)))
}

/// `GET /packers` — List all packers, newest-created first.
///
/// # Errors
///
/// Returns a [`MonitorError`] on store failures.
#[utoipa::path(
    get,
    path = "/api/packers",
    tag = "Packers",
    summary = "List packers",
    description = "Returns every configured packer, newest-created first.",
    responses(
        (status = 200, description = "Packer list", body = Vec<PackerResponse>),
    )
)]
pub async fn list_packers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, MonitorError> {
    let packers: Vec<PackerResponse> = state
        .service
        .list_packers()
        .await?
        .into_iter()
        .map(PackerResponse::from)
        .collect();

    Ok(Json(packers))
}

/// Packer routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/packers", post(create_packer).get(list_packers))
}

//! Nozzle event handlers: record and list.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreateEventRequest, EventResponse, PackerIdQuery};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, MonitorError};

/// `POST /events` — Record a nozzle event.
///
/// # Errors
///
/// Returns [`MonitorError::PackerNotFound`] for an unknown packer, or
/// [`MonitorError::InvalidSpoutNumber`] when the spout is out of range.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    summary = "Record a nozzle event",
    description = "Appends one spout outcome to a packer's event log. The spout number must be within the packer's configured range.",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event recorded", body = EventResponse),
        (status = 400, description = "Spout number out of range", body = ErrorResponse),
        (status = 404, description = "Packer not found", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, MonitorError> {
    let event = state
        .service
        .record_event(
            req.packer_id,
            req.spout_number,
            req.event_type,
            req.frame_id.as_deref(),
        )
        .await?;

    Ok(Json(EventResponse::from(event)))
}

/// `GET /events?packer_id=` — Most recent events for a packer.
///
/// # Errors
///
/// Returns [`MonitorError::PackerNotFound`] for an unknown packer.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    summary = "List recent events",
    description = "Returns up to 250 most recent events for the packer, newest first.",
    params(PackerIdQuery),
    responses(
        (status = 200, description = "Recent events", body = Vec<EventResponse>),
        (status = 404, description = "Packer not found", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<PackerIdQuery>,
) -> Result<impl IntoResponse, MonitorError> {
    let events: Vec<EventResponse> = state
        .service
        .recent_events(query.packer_id)
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    Ok(Json(events))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/events", post(create_event).get(list_events))
}

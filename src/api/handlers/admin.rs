//! Admin endpoints: demo data seeding.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::MonitorError;

/// Response body for `POST /api/demo-seed`.
#[derive(Debug, Serialize, ToSchema)]
struct SeedResponse {
    message: String,
    packer_id: i64,
}

/// `POST /demo-seed` — Seed sample packers and events.
///
/// Seeds two sample packers only when none exist, then always appends four
/// sample events to the first packer. Demo-only behavior; not a contract.
///
/// # Errors
///
/// Returns a [`MonitorError`] on store failures.
#[utoipa::path(
    post,
    path = "/api/demo-seed",
    tag = "Admin",
    summary = "Seed demo data",
    description = "Creates two sample packers when the database is empty, then appends four sample events to the first packer. Returns the packer id that received the events.",
    responses(
        (status = 200, description = "Demo data seeded", body = SeedResponse),
    )
)]
pub async fn demo_seed(State(state): State<AppState>) -> Result<impl IntoResponse, MonitorError> {
    let packer_id = state.service.seed_demo().await?;

    Ok(Json(SeedResponse {
        message: "Seeded demo data".to_string(),
        packer_id,
    }))
}

/// Admin routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/demo-seed", post(demo_seed))
}

//! Nozzle event DTOs for create and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::EventType;
use crate::persistence::models::NozzleEvent;

/// Request body for `POST /api/events`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Packer the event belongs to.
    pub packer_id: i64,
    /// Spout the event occurred on, `1 ..= packer.spout_count`.
    pub spout_number: i64,
    /// Outcome of the spout pass.
    pub event_type: EventType,
    /// Optional correlation key to a camera frame.
    #[serde(default)]
    pub frame_id: Option<String>,
}

/// A nozzle event as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    /// Event identifier.
    pub id: i64,
    /// Owning packer.
    pub packer_id: i64,
    /// Spout the event occurred on.
    pub spout_number: i64,
    /// Outcome of the spout pass.
    pub event_type: EventType,
    /// Optional camera frame correlation key.
    pub frame_id: Option<String>,
    /// Server creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<NozzleEvent> for EventResponse {
    fn from(e: NozzleEvent) -> Self {
        Self {
            id: e.id,
            packer_id: e.packer_id,
            spout_number: e.spout_number,
            event_type: e.event_type,
            frame_id: e.frame_id,
            created_at: e.created_at,
        }
    }
}

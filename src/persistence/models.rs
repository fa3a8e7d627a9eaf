//! Database models for packer configurations and nozzle events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::EventType;

/// A packer configuration row from the `packer_configs` table.
///
/// Immutable after creation; there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Packer {
    /// Auto-increment row ID.
    pub id: i64,
    /// Unique human-readable name.
    pub name: String,
    /// Number of spouts on the carousel (at least 1).
    pub spout_count: i64,
    /// Carousel revolutions per minute (positive).
    pub rpm: f64,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A nozzle event row from the `nozzle_events` table. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NozzleEvent {
    /// Auto-increment row ID.
    pub id: i64,
    /// Packer that produced the event.
    pub packer_id: i64,
    /// Spout the event occurred on, `1 ..= packer.spout_count`.
    pub spout_number: i64,
    /// Outcome of the spout pass.
    pub event_type: EventType,
    /// Optional correlation key to a camera frame.
    pub frame_id: Option<String>,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

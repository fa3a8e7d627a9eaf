//! Nozzle event classification.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a single spout pass during a packaging cycle.
///
/// Stored as its snake_case wire name in the `nozzle_events` table and
/// serialized identically over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EventType {
    /// The nozzle cycled but released no product.
    EmptyNozzle,
    /// A bag was filled but never dropped from the spout.
    UndroppedBag,
    /// A bag was filled and dropped normally.
    NormalDrop,
}

impl EventType {
    /// Wire name of this event type (matches the serialized form).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyNozzle => "empty_nozzle",
            Self::UndroppedBag => "undropped_bag",
            Self::NormalDrop => "normal_drop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for kind in [
            EventType::EmptyNozzle,
            EventType::UndroppedBag,
            EventType::NormalDrop,
        ] {
            let json = serde_json::to_string(&kind).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn deserializes_from_wire_name() {
        let parsed: Result<EventType, _> = serde_json::from_str("\"undropped_bag\"");
        assert!(matches!(parsed, Ok(EventType::UndroppedBag)));
    }
}

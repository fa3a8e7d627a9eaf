//! Packer-related DTOs for create and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::MonitorError;
use crate::persistence::models::Packer;

/// Request body for `POST /api/packers`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePackerRequest {
    /// Unique human-readable name.
    pub name: String,
    /// Number of spouts on the carousel, at least 1.
    pub spout_count: i64,
    /// Carousel revolutions per minute, strictly positive.
    pub rpm: f64,
}

impl CreatePackerRequest {
    /// Validates field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::InvalidRequest`] on an empty name, a spout
    /// count below 1, or a non-positive rpm.
    pub fn validate(&self) -> Result<(), MonitorError> {
        if self.name.trim().is_empty() {
            return Err(MonitorError::InvalidRequest(
                "name must not be empty".to_string(),
            ));
        }
        if self.spout_count < 1 {
            return Err(MonitorError::InvalidRequest(
                "spout_count must be at least 1".to_string(),
            ));
        }
        if self.rpm <= 0.0 {
            return Err(MonitorError::InvalidRequest(
                "rpm must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A packer configuration as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct PackerResponse {
    /// Packer identifier.
    pub id: i64,
    /// Unique name.
    pub name: String,
    /// Number of spouts.
    pub spout_count: i64,
    /// Carousel revolutions per minute.
    pub rpm: f64,
    /// Server creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Packer> for PackerResponse {
    fn from(p: Packer) -> Self {
        Self {
            id: p.id,
            name: p.name,
            spout_count: p.spout_count,
            rpm: p.rpm,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, spout_count: i64, rpm: f64) -> CreatePackerRequest {
        CreatePackerRequest {
            name: name.to_string(),
            spout_count,
            rpm,
        }
    }

    #[test]
    fn accepts_well_formed_request() {
        assert!(request("line-a", 8, 5.0).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(request("", 8, 5.0).validate().is_err());
        assert!(request("   ", 8, 5.0).validate().is_err());
        assert!(request("line-a", 0, 5.0).validate().is_err());
        assert!(request("line-a", 8, 0.0).validate().is_err());
        assert!(request("line-a", 8, -2.5).validate().is_err());
    }
}

//! Shared DTO types used across multiple endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters selecting a packer, used by the event and efficiency
/// listings.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PackerIdQuery {
    /// Packer identifier.
    pub packer_id: i64,
}

//! Efficiency metrics DTO.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::EfficiencyMetrics;

/// Efficiency summary for `GET /api/efficiency`.
///
/// Mirrors [`EfficiencyMetrics`] field for field; the domain type stays
/// free of API concerns.
#[derive(Debug, Serialize, ToSchema)]
pub struct EfficiencyResponse {
    /// Events inside the trailing window.
    pub total_events: u64,
    /// Windowed empty-nozzle count.
    pub empty_nozzles: u64,
    /// Windowed undropped-bag count.
    pub undropped_bags: u64,
    /// Windowed normal-drop count.
    pub normal_drops: u64,
    /// Fraction of spout passes not lost, in `[0.0, 1.0]`.
    pub availability_ratio: f64,
    /// Availability as a percentage, rounded to two decimals.
    pub efficiency_score: f64,
    /// Estimated bags completed per minute.
    pub throughput_bags_per_minute: f64,
    /// Human-readable summary of the window.
    pub description: String,
}

impl From<EfficiencyMetrics> for EfficiencyResponse {
    fn from(m: EfficiencyMetrics) -> Self {
        Self {
            total_events: m.total_events,
            empty_nozzles: m.empty_nozzles,
            undropped_bags: m.undropped_bags,
            normal_drops: m.normal_drops,
            availability_ratio: m.availability_ratio,
            efficiency_score: m.efficiency_score,
            throughput_bags_per_minute: m.throughput_bags_per_minute,
            description: m.description,
        }
    }
}

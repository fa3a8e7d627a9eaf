//! Rolling efficiency metrics over the nozzle event log.
//!
//! [`EfficiencyCalculator`] is a pure function over a packer configuration
//! and a set of events: it never touches stored state, and the reference
//! instant is an explicit parameter so results are deterministic under test.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::EventType;
use crate::persistence::models::{NozzleEvent, Packer};

/// Metrics summary produced by [`EfficiencyCalculator::calculate`].
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyMetrics {
    /// Events inside the trailing window.
    pub total_events: u64,
    /// Windowed events classified as empty nozzles.
    pub empty_nozzles: u64,
    /// Windowed events classified as undropped bags.
    pub undropped_bags: u64,
    /// Windowed events classified as normal drops.
    pub normal_drops: u64,
    /// Fraction of spout passes not lost to empty or undropped conditions,
    /// in `[0.0, 1.0]`.
    pub availability_ratio: f64,
    /// Availability as a percentage, rounded to two decimals.
    pub efficiency_score: f64,
    /// Estimated bags completed per minute at current availability.
    pub throughput_bags_per_minute: f64,
    /// Human-readable summary of the window.
    pub description: String,
}

/// Computes availability and throughput over a trailing time window.
#[derive(Debug, Clone)]
pub struct EfficiencyCalculator {
    window: Duration,
}

impl EfficiencyCalculator {
    /// Fixed description returned when no events fall inside the window.
    pub const EMPTY_WINDOW_DESCRIPTION: &'static str = "No events within the selected window.";

    /// Creates a calculator with the given trailing window in minutes.
    #[must_use]
    pub fn new(window_minutes: i64) -> Self {
        Self {
            window: Duration::minutes(window_minutes),
        }
    }

    /// Computes metrics for `packer` from `events`, considering only events
    /// whose `created_at` falls within the trailing window ending at `now`.
    ///
    /// Events outside the window are ignored entirely. An empty window
    /// yields a zero-valued summary rather than dividing by zero.
    #[must_use]
    pub fn calculate(
        &self,
        packer: &Packer,
        events: &[NozzleEvent],
        now: DateTime<Utc>,
    ) -> EfficiencyMetrics {
        let cutoff = now - self.window;
        let scoped: Vec<&NozzleEvent> = events.iter().filter(|e| e.created_at >= cutoff).collect();

        let total_events = scoped.len() as u64;
        let count_of =
            |kind: EventType| scoped.iter().filter(|e| e.event_type == kind).count() as u64;
        let empty_nozzles = count_of(EventType::EmptyNozzle);
        let undropped_bags = count_of(EventType::UndroppedBag);
        let normal_drops = count_of(EventType::NormalDrop);

        if total_events == 0 {
            return EfficiencyMetrics {
                total_events: 0,
                empty_nozzles: 0,
                undropped_bags: 0,
                normal_drops: 0,
                availability_ratio: 0.0,
                efficiency_score: 0.0,
                throughput_bags_per_minute: 0.0,
                description: Self::EMPTY_WINDOW_DESCRIPTION.to_string(),
            };
        }

        // Loss cannot exceed total by construction, but floor at zero anyway.
        let total_loss = empty_nozzles + undropped_bags;
        let availability_ratio = (1.0 - total_loss as f64 / total_events as f64).max(0.0);

        let cycles_per_minute = packer.rpm * packer.spout_count as f64;
        let throughput_bags_per_minute = (cycles_per_minute * availability_ratio).max(0.0);

        let efficiency_score = (availability_ratio * 100.0 * 100.0).round() / 100.0;
        let description = format!(
            "{efficiency_score}% availability based on {total_events} spout passes \
             (empty: {empty_nozzles}, undropped: {undropped_bags})."
        );

        EfficiencyMetrics {
            total_events,
            empty_nozzles,
            undropped_bags,
            normal_drops,
            availability_ratio,
            efficiency_score,
            throughput_bags_per_minute,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn packer(spout_count: i64, rpm: f64) -> Packer {
        Packer {
            id: 1,
            name: "test packer".to_string(),
            spout_count,
            rpm,
            created_at: Utc::now(),
        }
    }

    fn event(kind: EventType, minutes_ago: i64, now: DateTime<Utc>) -> NozzleEvent {
        NozzleEvent {
            id: 0,
            packer_id: 1,
            spout_number: 1,
            event_type: kind,
            frame_id: None,
            created_at: now - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn mixed_window_scenario() {
        let now = Utc::now();
        let events = vec![
            event(EventType::EmptyNozzle, 1, now),
            event(EventType::UndroppedBag, 2, now),
            event(EventType::NormalDrop, 3, now),
            event(EventType::NormalDrop, 4, now),
        ];

        let metrics = EfficiencyCalculator::new(120).calculate(&packer(8, 5.0), &events, now);

        assert_eq!(metrics.total_events, 4);
        assert_eq!(metrics.empty_nozzles, 1);
        assert_eq!(metrics.undropped_bags, 1);
        assert_eq!(metrics.normal_drops, 2);
        assert!((metrics.availability_ratio - 0.5).abs() < EPS);
        assert!((metrics.efficiency_score - 50.0).abs() < EPS);
        assert!((metrics.throughput_bags_per_minute - 20.0).abs() < EPS);
    }

    #[test]
    fn empty_window_returns_zeroes() {
        let now = Utc::now();
        let metrics = EfficiencyCalculator::new(120).calculate(&packer(16, 2.5), &[], now);

        assert_eq!(metrics.total_events, 0);
        assert!((metrics.availability_ratio).abs() < EPS);
        assert!((metrics.efficiency_score).abs() < EPS);
        assert!((metrics.throughput_bags_per_minute).abs() < EPS);
        assert_eq!(
            metrics.description,
            EfficiencyCalculator::EMPTY_WINDOW_DESCRIPTION
        );
    }

    #[test]
    fn stale_events_are_ignored() {
        let now = Utc::now();
        let events = vec![
            event(EventType::NormalDrop, 5, now),
            // Well outside a 60-minute window; must not affect any count.
            event(EventType::EmptyNozzle, 90, now),
            event(EventType::EmptyNozzle, 600, now),
            event(EventType::UndroppedBag, 1440, now),
        ];

        let metrics = EfficiencyCalculator::new(60).calculate(&packer(8, 5.0), &events, now);

        assert_eq!(metrics.total_events, 1);
        assert_eq!(metrics.empty_nozzles, 0);
        assert_eq!(metrics.undropped_bags, 0);
        assert!((metrics.availability_ratio - 1.0).abs() < EPS);
        assert!((metrics.throughput_bags_per_minute - 40.0).abs() < EPS);
    }

    #[test]
    fn only_stale_events_counts_as_empty_window() {
        let now = Utc::now();
        let events = vec![event(EventType::NormalDrop, 500, now)];

        let metrics = EfficiencyCalculator::new(60).calculate(&packer(8, 5.0), &events, now);

        assert_eq!(metrics.total_events, 0);
        assert_eq!(
            metrics.description,
            EfficiencyCalculator::EMPTY_WINDOW_DESCRIPTION
        );
    }

    #[test]
    fn counts_partition_the_window() {
        let now = Utc::now();
        let events = vec![
            event(EventType::EmptyNozzle, 1, now),
            event(EventType::EmptyNozzle, 2, now),
            event(EventType::UndroppedBag, 3, now),
            event(EventType::NormalDrop, 4, now),
            event(EventType::NormalDrop, 5, now),
            event(EventType::NormalDrop, 6, now),
        ];

        let metrics = EfficiencyCalculator::new(120).calculate(&packer(8, 5.0), &events, now);

        assert_eq!(
            metrics.empty_nozzles + metrics.undropped_bags + metrics.normal_drops,
            metrics.total_events
        );
    }

    #[test]
    fn all_loss_floors_at_zero() {
        let now = Utc::now();
        let events = vec![
            event(EventType::EmptyNozzle, 1, now),
            event(EventType::UndroppedBag, 2, now),
        ];

        let metrics = EfficiencyCalculator::new(120).calculate(&packer(8, 5.0), &events, now);

        assert!((metrics.availability_ratio).abs() < EPS);
        assert!((metrics.throughput_bags_per_minute).abs() < EPS);
        assert!(metrics.availability_ratio >= 0.0);
    }

    #[test]
    fn ratio_stays_in_unit_interval() {
        let now = Utc::now();
        let events = vec![
            event(EventType::NormalDrop, 1, now),
            event(EventType::NormalDrop, 2, now),
            event(EventType::EmptyNozzle, 3, now),
        ];

        let metrics = EfficiencyCalculator::new(120).calculate(&packer(4, 3.0), &events, now);

        assert!(metrics.availability_ratio >= 0.0);
        assert!(metrics.availability_ratio <= 1.0);
        assert!(metrics.throughput_bags_per_minute >= 0.0);
        assert!((metrics.efficiency_score - 66.67).abs() < EPS);
    }

    #[test]
    fn description_embeds_counts() {
        let now = Utc::now();
        let events = vec![
            event(EventType::EmptyNozzle, 1, now),
            event(EventType::NormalDrop, 2, now),
        ];

        let metrics = EfficiencyCalculator::new(120).calculate(&packer(8, 5.0), &events, now);

        assert!(metrics.description.contains("2 spout passes"));
        assert!(metrics.description.contains("empty: 1"));
        assert!(metrics.description.contains("undropped: 0"));
    }
}

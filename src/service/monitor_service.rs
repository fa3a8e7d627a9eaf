//! Monitor service: orchestrates the event store and efficiency calculator.

use chrono::Utc;

use crate::domain::{EfficiencyCalculator, EfficiencyMetrics, EventType};
use crate::error::MonitorError;
use crate::persistence::models::{NozzleEvent, Packer};
use crate::persistence::sqlite::SqliteEventStore;

/// Maximum number of rows returned by the recent-events listing.
pub const RECENT_EVENTS_CAP: i64 = 250;

/// Orchestration layer for packer and event operations.
///
/// Stateless coordinator: owns the [`SqliteEventStore`] for persistence and
/// an [`EfficiencyCalculator`] for metrics. Handlers carry no business
/// logic; existence checks and the spout-number bound check live here.
#[derive(Debug, Clone)]
pub struct MonitorService {
    store: SqliteEventStore,
    calculator: EfficiencyCalculator,
}

impl MonitorService {
    /// Creates a new `MonitorService`.
    #[must_use]
    pub fn new(store: SqliteEventStore, calculator: EfficiencyCalculator) -> Self {
        Self { store, calculator }
    }

    /// Returns a reference to the inner [`SqliteEventStore`].
    #[must_use]
    pub fn store(&self) -> &SqliteEventStore {
        &self.store
    }

    /// Creates a packer configuration, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::DuplicateName`] when the name is taken, or a
    /// persistence error on store failure.
    pub async fn create_packer(
        &self,
        name: &str,
        spout_count: i64,
        rpm: f64,
    ) -> Result<Packer, MonitorError> {
        if self.store.packer_by_name(name).await?.is_some() {
            return Err(MonitorError::DuplicateName(name.to_string()));
        }

        let packer = self
            .store
            .insert_packer(name, spout_count, rpm, Utc::now())
            .await?;
        tracing::info!(packer_id = packer.id, name, "packer created");
        Ok(packer)
    }

    /// Lists all packers, newest-created first.
    ///
    /// # Errors
    ///
    /// Returns a persistence error on store failure.
    pub async fn list_packers(&self) -> Result<Vec<Packer>, MonitorError> {
        self.store.list_packers().await
    }

    /// Records a nozzle event after validating the packer and spout number.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::PackerNotFound`] for an unknown packer,
    /// [`MonitorError::InvalidSpoutNumber`] when the spout is out of range,
    /// or a persistence error on store failure.
    pub async fn record_event(
        &self,
        packer_id: i64,
        spout_number: i64,
        event_type: EventType,
        frame_id: Option<&str>,
    ) -> Result<NozzleEvent, MonitorError> {
        let packer = self.require_packer(packer_id).await?;
        if spout_number <= 0 || spout_number > packer.spout_count {
            return Err(MonitorError::InvalidSpoutNumber {
                spout_number,
                spout_count: packer.spout_count,
            });
        }

        let event = self
            .store
            .insert_event(packer.id, spout_number, event_type, frame_id, Utc::now())
            .await?;
        tracing::debug!(
            packer_id,
            spout_number,
            event_type = event_type.as_str(),
            "nozzle event recorded"
        );
        Ok(event)
    }

    /// Lists the most recent events for a packer, newest first, capped at
    /// [`RECENT_EVENTS_CAP`] rows.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::PackerNotFound`] for an unknown packer, or a
    /// persistence error on store failure.
    pub async fn recent_events(&self, packer_id: i64) -> Result<Vec<NozzleEvent>, MonitorError> {
        self.require_packer(packer_id).await?;
        self.store.recent_events(packer_id, RECENT_EVENTS_CAP).await
    }

    /// Computes efficiency metrics over every stored event for the packer.
    /// Window filtering happens inside the calculator.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::PackerNotFound`] for an unknown packer, or a
    /// persistence error on store failure.
    pub async fn efficiency(&self, packer_id: i64) -> Result<EfficiencyMetrics, MonitorError> {
        let packer = self.require_packer(packer_id).await?;
        let events = self.store.events_for_packer(packer.id).await?;
        Ok(self.calculator.calculate(&packer, &events, Utc::now()))
    }

    /// Seeds demo data: two sample packers when none exist, then four
    /// sample events appended to the first packer. Returns the id of the
    /// packer that received the events. Demo-only behavior.
    ///
    /// # Errors
    ///
    /// Returns a persistence error on store failure.
    pub async fn seed_demo(&self) -> Result<i64, MonitorError> {
        if self.store.count_packers().await? == 0 {
            let now = Utc::now();
            self.store.insert_packer("8-spout packer", 8, 5.0, now).await?;
            self.store
                .insert_packer("16-spout packer", 16, 2.5, now)
                .await?;
        }

        let packer = self.store.first_packer().await?.ok_or_else(|| {
            MonitorError::Internal("demo seed found no packer to attach events to".to_string())
        })?;

        let samples = [
            (1, EventType::NormalDrop),
            (2, EventType::EmptyNozzle),
            (3, EventType::UndroppedBag),
            (4, EventType::NormalDrop),
        ];
        for (spout_number, event_type) in samples {
            self.store
                .insert_event(packer.id, spout_number, event_type, None, Utc::now())
                .await?;
        }

        tracing::info!(packer_id = packer.id, "demo data seeded");
        Ok(packer.id)
    }

    async fn require_packer(&self, packer_id: i64) -> Result<Packer, MonitorError> {
        self.store
            .packer_by_id(packer_id)
            .await?
            .ok_or(MonitorError::PackerNotFound(packer_id))
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::persistence::MIGRATOR;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    async fn service() -> Result<MonitorService, Box<dyn std::error::Error>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        MIGRATOR.run(&pool).await?;
        Ok(MonitorService::new(
            SqliteEventStore::new(pool),
            EfficiencyCalculator::new(120),
        ))
    }

    #[tokio::test]
    async fn duplicate_packer_name_is_rejected() -> TestResult {
        let svc = service().await?;
        svc.create_packer("line-a", 8, 5.0).await?;

        let second = svc.create_packer("line-a", 16, 2.5).await;
        assert!(matches!(second, Err(MonitorError::DuplicateName(_))));
        Ok(())
    }

    #[tokio::test]
    async fn event_requires_existing_packer() -> TestResult {
        let svc = service().await?;
        let result = svc
            .record_event(404, 1, EventType::NormalDrop, None)
            .await;
        assert!(matches!(result, Err(MonitorError::PackerNotFound(404))));
        Ok(())
    }

    #[tokio::test]
    async fn spout_number_bounds_are_enforced() -> TestResult {
        let svc = service().await?;
        let packer = svc.create_packer("line-a", 8, 5.0).await?;

        for bad in [0, -3, 9] {
            let result = svc
                .record_event(packer.id, bad, EventType::NormalDrop, None)
                .await;
            assert!(matches!(
                result,
                Err(MonitorError::InvalidSpoutNumber { .. })
            ));
        }

        // Boundary spouts are valid.
        assert!(
            svc.record_event(packer.id, 1, EventType::NormalDrop, None)
                .await
                .is_ok()
        );
        assert!(
            svc.record_event(packer.id, 8, EventType::NormalDrop, None)
                .await
                .is_ok()
        );
        Ok(())
    }

    #[tokio::test]
    async fn efficiency_counts_fresh_events() -> TestResult {
        let svc = service().await?;
        let packer = svc.create_packer("line-a", 8, 5.0).await?;

        svc.record_event(packer.id, 1, EventType::EmptyNozzle, None).await?;
        svc.record_event(packer.id, 2, EventType::UndroppedBag, None).await?;
        svc.record_event(packer.id, 3, EventType::NormalDrop, None).await?;
        svc.record_event(packer.id, 4, EventType::NormalDrop, None).await?;

        let metrics = svc.efficiency(packer.id).await?;
        assert_eq!(metrics.total_events, 4);
        assert!((metrics.availability_ratio - 0.5).abs() < 1e-9);
        assert!((metrics.throughput_bags_per_minute - 20.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn seed_demo_is_stable_on_packers() -> TestResult {
        let svc = service().await?;

        let first = svc.seed_demo().await?;
        let second = svc.seed_demo().await?;
        assert_eq!(first, second);

        // Packers are only seeded once; events accumulate per call.
        assert_eq!(svc.list_packers().await?.len(), 2);
        assert_eq!(svc.recent_events(first).await?.len(), 8);
        Ok(())
    }
}

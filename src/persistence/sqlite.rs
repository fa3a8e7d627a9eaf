//! SQLite implementation of the event store.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::models::{NozzleEvent, Packer};
use crate::domain::EventType;
use crate::error::MonitorError;

type PackerRow = (i64, String, i64, f64, DateTime<Utc>);
type EventRow = (i64, i64, i64, EventType, Option<String>, DateTime<Utc>);

/// SQLite-backed event store using `sqlx::SqlitePool`.
///
/// Every method is a single round-trip; no transactions span more than one
/// insert. Concurrent callers are isolated by SQLite's own locking.
#[derive(Debug, Clone)]
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Creates a new event store with the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a packer configuration and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure,
    /// including a violated name uniqueness constraint.
    pub async fn insert_packer(
        &self,
        name: &str,
        spout_count: i64,
        rpm: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Packer, MonitorError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO packer_configs (name, spout_count, rpm, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(spout_count)
        .bind(rpm)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(Packer {
            id,
            name: name.to_string(),
            spout_count,
            rpm,
            created_at,
        })
    }

    /// Fetches a packer by ID.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn packer_by_id(&self, packer_id: i64) -> Result<Option<Packer>, MonitorError> {
        let row = sqlx::query_as::<_, PackerRow>(
            "SELECT id, name, spout_count, rpm, created_at FROM packer_configs WHERE id = $1",
        )
        .bind(packer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(row.map(into_packer))
    }

    /// Fetches a packer by its unique name.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn packer_by_name(&self, name: &str) -> Result<Option<Packer>, MonitorError> {
        let row = sqlx::query_as::<_, PackerRow>(
            "SELECT id, name, spout_count, rpm, created_at FROM packer_configs WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(row.map(into_packer))
    }

    /// Lists all packers, newest-created first.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn list_packers(&self) -> Result<Vec<Packer>, MonitorError> {
        let rows = sqlx::query_as::<_, PackerRow>(
            "SELECT id, name, spout_count, rpm, created_at FROM packer_configs \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(into_packer).collect())
    }

    /// Counts stored packer configurations.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn count_packers(&self) -> Result<i64, MonitorError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM packer_configs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MonitorError::Persistence(e.to_string()))
    }

    /// Fetches the earliest-inserted packer, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn first_packer(&self) -> Result<Option<Packer>, MonitorError> {
        let row = sqlx::query_as::<_, PackerRow>(
            "SELECT id, name, spout_count, rpm, created_at FROM packer_configs \
             ORDER BY id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(row.map(into_packer))
    }

    /// Appends a nozzle event and returns the stored row.
    ///
    /// Spout bounds are validated by the service layer before this call;
    /// the store itself only guarantees the packer foreign key.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn insert_event(
        &self,
        packer_id: i64,
        spout_number: i64,
        event_type: EventType,
        frame_id: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<NozzleEvent, MonitorError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO nozzle_events (packer_id, spout_number, event_type, frame_id, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(packer_id)
        .bind(spout_number)
        .bind(event_type)
        .bind(frame_id)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(NozzleEvent {
            id,
            packer_id,
            spout_number,
            event_type,
            frame_id: frame_id.map(str::to_string),
            created_at,
        })
    }

    /// Lists the most recent events for a packer, newest first, capped at
    /// `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn recent_events(
        &self,
        packer_id: i64,
        limit: i64,
    ) -> Result<Vec<NozzleEvent>, MonitorError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, packer_id, spout_number, event_type, frame_id, created_at \
             FROM nozzle_events WHERE packer_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2",
        )
        .bind(packer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(into_event).collect())
    }

    /// Lists every event for a packer in chronological order, unbounded.
    /// Used by the efficiency computation, which applies its own window.
    ///
    /// # Errors
    ///
    /// Returns a [`MonitorError::Persistence`] on database failure.
    pub async fn events_for_packer(
        &self,
        packer_id: i64,
    ) -> Result<Vec<NozzleEvent>, MonitorError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, packer_id, spout_number, event_type, frame_id, created_at \
             FROM nozzle_events WHERE packer_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(packer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MonitorError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(into_event).collect())
    }
}

fn into_packer((id, name, spout_count, rpm, created_at): PackerRow) -> Packer {
    Packer {
        id,
        name,
        spout_count,
        rpm,
        created_at,
    }
}

fn into_event(
    (id, packer_id, spout_number, event_type, frame_id, created_at): EventRow,
) -> NozzleEvent {
    NozzleEvent {
        id,
        packer_id,
        spout_number,
        event_type,
        frame_id,
        created_at,
    }
}

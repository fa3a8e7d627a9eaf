//! Service layer: business logic orchestration.
//!
//! [`MonitorService`] coordinates packer and event operations, delegates
//! metric computation to the [`crate::domain::EfficiencyCalculator`], and
//! owns the existence and bound checks the API layer relies on.

pub mod monitor_service;

pub use monitor_service::MonitorService;

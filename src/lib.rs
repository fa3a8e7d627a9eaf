//! # packer-monitor
//!
//! Monitoring backend for industrial bag packers. Records per-spout nozzle
//! events (normal drop, empty nozzle, undropped bag), computes a rolling
//! efficiency metric over a trailing time window, and exposes a mock
//! object-detection feed meant to eventually source events from a camera.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, static dashboard)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── MonitorService (service/)
//!     │
//!     ├── EfficiencyCalculator, Detector seam (domain/)
//!     │
//!     └── SQLite Event Store (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

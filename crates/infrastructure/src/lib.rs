//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer over the
//! geocoding integration, and hosts configuration loading and
//! telemetry setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::GeocoderAdapter;
pub use config::{AppConfig, SearchConfig};
pub use telemetry::init_telemetry;

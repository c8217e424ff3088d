//! Telemetry initialization for fleet services.

pub mod tracing;

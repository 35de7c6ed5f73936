//! Decode and validate OBIS coded meter readings
//!
//! This library parses OBIS identifiers (IEC 62056), decodes raw
//! line-oriented meter text into typed values and validates them against
//! per-code and meter-wide range rules before packaging them as
//! measurements.

pub mod config;
pub mod logging;
pub mod metering_obis;
pub mod models;

// Re-export common types for easier access
pub use config::{Config, MeterConfig};
pub use logging::{LogForwarder, ReadingLogger, Severity, StdoutLogger};
pub use metering_obis::{read_obis_data, ObisError, ObisReader, ReaderStats, ReaderStatus};
pub use models::{Measurement, MeasurementQuality, MeterKind, ReadingValue, ValueKind};

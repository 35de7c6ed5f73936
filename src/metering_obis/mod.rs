use crate::config::MeterConfig;
use crate::logging::{ReadingLogger, Severity, StdoutLogger};
use crate::models::Measurement;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

pub mod meter_definitions;
pub mod obis_parser;
pub mod parser;
pub mod registry;
pub mod structs;
pub mod validator;

use registry::CodeRegistry;
use structs::CodeDefinition;

const LOG_TAG: &str = "OBISReader";
const LOG_VISIBILITY: &str = "TD";

#[derive(Error, Debug)]
pub enum ObisError {
    #[error("Invalid OBIS code format: {0}")]
    InvalidFormat(String),
    #[error("Non-numeric value for {code} cannot be checked against numeric bounds: {value}")]
    IncomparableValue { code: String, value: String },
}

/// Counters accumulated over the life of a reader
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReaderStats {
    pub total_reads: u64,
    pub successful_reads: u64,
    pub failed_reads: u64,
    pub validation_errors: u64,
    pub last_error: Option<String>,
}

/// Point-in-time view of a reader; the counters are copied out, so holding
/// a snapshot never aliases live state.
#[derive(Debug, Clone, Serialize)]
pub struct ReaderStatus {
    pub device_id: String,
    pub device_type: String,
    pub meter_type: String,
    pub timeout: f64,
    pub retry_count: u32,
    pub retry_delay: f64,
    pub obis_codes_count: usize,
    pub code_mappings_count: usize,
    pub stats: ReaderStats,
}

/// Decodes raw meter text into validated measurements for one device.
///
/// The reader owns its code registry and counters; one instance per meter.
/// `timeout`, `retry_count` and `retry_delay` are carried configuration for
/// transport layers wrapped around the reader and drive nothing here.
pub struct ObisReader {
    device_id: String,
    device_type: String,
    meter_type: String,
    timeout: f64,
    retry_count: u32,
    retry_delay: f64,
    logger: Box<dyn ReadingLogger>,
    registry: CodeRegistry,
    stats: ReaderStats,
}

impl ObisReader {
    pub fn new(device_id: &str, meter_type: &str) -> Self {
        ObisReader::with_logger(device_id, meter_type, Box::new(StdoutLogger::new()))
    }

    pub fn with_logger(device_id: &str, meter_type: &str, logger: Box<dyn ReadingLogger>) -> Self {
        let mut reader = ObisReader {
            device_id: device_id.to_string(),
            device_type: "obis_meter".to_string(),
            meter_type: meter_type.to_string(),
            timeout: 5.0,
            retry_count: 3,
            retry_delay: 1.0,
            logger,
            registry: CodeRegistry::new(),
            stats: ReaderStats::default(),
        };
        reader.load_default_codes();
        reader
    }

    pub fn from_config(config: &MeterConfig, logger: Box<dyn ReadingLogger>) -> Self {
        let mut reader = ObisReader {
            device_id: config.device_id.clone(),
            device_type: "obis_meter".to_string(),
            meter_type: config.meter_type.clone(),
            timeout: config.timeout,
            retry_count: config.retry_count,
            retry_delay: config.retry_delay,
            logger,
            registry: CodeRegistry::new(),
            stats: ReaderStats::default(),
        };
        reader.load_default_codes();
        reader
    }

    fn load_default_codes(&mut self) {
        let defaults = meter_definitions::default_codes(&self.meter_type);
        self.add_codes(defaults);
    }

    /// Register a code. A malformed identifier is logged and dropped, it
    /// never aborts the caller.
    pub fn add_code(&mut self, def: CodeDefinition) -> bool {
        let label = format!("{} ({})", def.code, def.name);
        match self.registry.insert(def) {
            Ok(()) => {
                self.logger.log(
                    &format!("Added OBIS code: {}", label),
                    Severity::Info,
                    LOG_VISIBILITY,
                    LOG_TAG,
                );
                true
            }
            Err(e) => {
                self.logger
                    .log(&e.to_string(), Severity::Error, LOG_VISIBILITY, LOG_TAG);
                false
            }
        }
    }

    pub fn add_codes(&mut self, defs: Vec<CodeDefinition>) {
        for def in defs {
            self.add_code(def);
        }
    }

    /// Decode, validate and package one raw read cycle.
    ///
    /// Per-code problems show up in the counters and the log; an unexpected
    /// failure empties the whole cycle. The call itself never errors
    /// outward.
    pub fn read_readings(&mut self, raw: &str) -> HashMap<String, Measurement> {
        self.stats.total_reads += 1;

        match self.try_read(raw) {
            Ok(results) => results,
            Err(e) => {
                self.stats.failed_reads += 1;
                self.stats.last_error = Some(e.to_string());
                self.logger.log(
                    &format!("Failed to read OBIS data: {}", e),
                    Severity::Error,
                    LOG_VISIBILITY,
                    LOG_TAG,
                );
                HashMap::new()
            }
        }
    }

    fn try_read(&mut self, raw: &str) -> Result<HashMap<String, Measurement>, ObisError> {
        let mut results = HashMap::new();

        for (code, value) in parser::parse_raw_readings(raw) {
            let unit = match self.registry.lookup(&code) {
                Some(def) => def.unit.clone(),
                None => {
                    self.logger.log(
                        &format!("Unknown OBIS code: {}", code),
                        Severity::Warning,
                        LOG_VISIBILITY,
                        LOG_TAG,
                    );
                    continue;
                }
            };

            if validator::validate_reading(&code, &value, &self.registry, &self.meter_type)? {
                self.stats.successful_reads += 1;
                let measurement = Measurement::new(self.device_id.clone(), code.clone(), value, unit);
                results.insert(code, measurement);
            } else {
                self.stats.validation_errors += 1;
                self.logger.log(
                    &format!("Data validation failed for {}: {}", code, value),
                    Severity::Error,
                    LOG_VISIBILITY,
                    LOG_TAG,
                );
            }
        }

        Ok(results)
    }

    pub fn status(&self) -> ReaderStatus {
        ReaderStatus {
            device_id: self.device_id.clone(),
            device_type: self.device_type.clone(),
            meter_type: self.meter_type.clone(),
            timeout: self.timeout,
            retry_count: self.retry_count,
            retry_delay: self.retry_delay,
            obis_codes_count: self.registry.len(),
            code_mappings_count: self.registry.name_count(),
            stats: self.stats.clone(),
        }
    }

    pub fn registry(&self) -> &CodeRegistry {
        &self.registry
    }

    pub fn meter_type(&self) -> &str {
        &self.meter_type
    }
}

/// One-shot convenience: build a reader with the default table for the
/// meter type and decode a single raw block.
pub fn read_obis_data(device_id: &str, meter_type: &str, raw: &str) -> HashMap<String, Measurement> {
    let mut reader = ObisReader::new(device_id, meter_type);
    reader.read_readings(raw)
}

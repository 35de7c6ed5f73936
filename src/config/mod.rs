use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;

fn meter_type_default() -> String { return "electricity".to_string() }
fn timeout_default() -> f64 { return 5.0 }
fn retry_count_default() -> u32 { return 3 }
fn retry_delay_default() -> f64 { return 1.0 }

/// Configuration of a single OBIS meter reader.
///
/// `timeout`, `retry_count` and `retry_delay` are carried for callers that
/// wrap the reader with an actual transport; the decoding core itself never
/// acts on them.
#[derive(Deserialize, Serialize, Clone)]
pub struct MeterConfig {
    pub device_id: String,
    #[serde(default="meter_type_default")]
    pub meter_type: String,
    #[serde(default="timeout_default")]
    pub timeout: f64,
    #[serde(default="retry_count_default")]
    pub retry_count: u32,
    #[serde(default="retry_delay_default")]
    pub retry_delay: f64,
}

impl MeterConfig {
    pub fn new(device_id: &str, meter_type: &str) -> Self {
        return MeterConfig {
            device_id: device_id.to_string(),
            meter_type: meter_type.to_string(),
            timeout: timeout_default(),
            retry_count: retry_count_default(),
            retry_delay: retry_delay_default(),
        };
    }
}

fn meters_default() -> Vec<MeterConfig> { return Vec::new() }

#[derive(Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default="meters_default")]
    pub meters: Vec<MeterConfig>,
}

impl Config {
    /// Load the configuration, checking the two usual paths.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let file = File::open("config/obis2data.yaml").or_else(|_| File::open("obis2data.yaml"))?;
        return Config::from_file(file);
    }

    pub fn load_from(path: &str) -> Result<Self, Box<dyn Error>> {
        return Config::from_file(File::open(path)?);
    }

    fn from_file(mut file: File) -> Result<Self, Box<dyn Error>> {
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let c: Config = serde_yml::from_str(&contents)?;
        debug!("Loaded configuration with {} meter(s)", c.meters.len());
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_meter_defaults_applied() {
        let yaml = "meters:\n  - device_id: METER001\n";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.meters.len(), 1);
        let meter = &config.meters[0];
        assert_eq!(meter.device_id, "METER001");
        assert_eq!(meter.meter_type, "electricity");
        assert_eq!(meter.timeout, 5.0);
        assert_eq!(meter.retry_count, 3);
        assert_eq!(meter.retry_delay, 1.0);
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let yaml = "meters:\n  - device_id: GAS01\n    meter_type: gas\n    timeout: 2.5\n    retry_count: 1\n";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        let meter = &config.meters[0];
        assert_eq!(meter.meter_type, "gas");
        assert_eq!(meter.timeout, 2.5);
        assert_eq!(meter.retry_count, 1);
        assert_eq!(meter.retry_delay, 1.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "meters:").unwrap();
        writeln!(file, "  - device_id: WATER01").unwrap();
        writeln!(file, "    meter_type: water").unwrap();
        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.meters.len(), 1);
        assert_eq!(config.meters[0].meter_type, "water");
    }
}

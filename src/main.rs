use log::info;
use obis2data::metering_obis::meter_definitions;
use obis2data::{Config, LogForwarder, MeterConfig, ObisReader};

fn main() {
    // Initialize logging
    let default_filter = std::env::var("O2D_LOG_LEVEL").unwrap_or("info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    // A missing config file falls back to one demo meter per supported type.
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            info!("No configuration found ({}), using built-in demo meters", e);
            demo_config()
        }
    };

    for meter in &config.meters {
        let mut reader = ObisReader::from_config(meter, Box::new(LogForwarder));
        let raw = meter_definitions::sample_readings(&meter.meter_type);
        let measurements = reader.read_readings(raw);

        info!("{}: {} reading(s) accepted", meter.device_id, measurements.len());
        for measurement in measurements.values() {
            println!("{}", serde_json::to_string(measurement).unwrap());
        }
        println!("{}", serde_json::to_string_pretty(&reader.status()).unwrap());
    }
}

fn demo_config() -> Config {
    return Config {
        meters: vec![
            MeterConfig::new("DEMO-ELECTRICITY", "electricity"),
            MeterConfig::new("DEMO-GAS", "gas"),
            MeterConfig::new("DEMO-WATER", "water"),
        ],
    };
}

use super::structs::{CodeDefinition, QuantityRule};
use crate::models::ValueKind;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Meter-wide validation rules keyed by meter type. A rule carries the
    /// plausible range of its quantity in the unit the default tables use.
    static ref QUANTITY_RULES: HashMap<&'static str, Vec<QuantityRule>> = {
        let mut map = HashMap::new();
        map.insert("electricity", vec![
            QuantityRule { quantity: "voltage", min: 0.0, max: 500.0, unit: "V" },
            QuantityRule { quantity: "current", min: 0.0, max: 1000.0, unit: "A" },
            QuantityRule { quantity: "power", min: 0.0, max: 100000.0, unit: "W" },
            QuantityRule { quantity: "energy", min: 0.0, max: 999999999.0, unit: "kWh" },
        ]);
        map.insert("gas", vec![
            QuantityRule { quantity: "flow", min: 0.0, max: 1000.0, unit: "m³/h" },
            QuantityRule { quantity: "volume", min: 0.0, max: 999999999.0, unit: "m³" },
        ]);
        map.insert("water", vec![
            QuantityRule { quantity: "flow", min: 0.0, max: 1000.0, unit: "m³/h" },
            QuantityRule { quantity: "volume", min: 0.0, max: 999999999.0, unit: "m³" },
        ]);
        map
    };
}

pub fn quantity_rules(meter_type: &str) -> &'static [QuantityRule] {
    match QUANTITY_RULES.get(meter_type) {
        Some(rules) => rules,
        None => &[],
    }
}

/// Default OBIS code tables per meter type.
///
/// Deployed meters are matched against these exact code/name/unit triples,
/// so the entries must not drift. Unknown meter types get no defaults.
pub fn default_codes(meter_type: &str) -> Vec<CodeDefinition> {
    match meter_type {
        "electricity" => vec![
            CodeDefinition::new("1.0.0.0.0.255", "meter_id", "Meter ID", "", ValueKind::Text),
            CodeDefinition::new("1.0.1.7.0.255", "current_power", "Current Power", "W", ValueKind::Float),
            CodeDefinition::new("1.0.1.8.0.255", "total_energy", "Total Energy", "kWh", ValueKind::Float),
            CodeDefinition::new("1.0.21.7.0.255", "l1_power", "L1 Power", "W", ValueKind::Float),
            CodeDefinition::new("1.0.22.7.0.255", "l2_power", "L2 Power", "W", ValueKind::Float),
            CodeDefinition::new("1.0.23.7.0.255", "l3_power", "L3 Power", "W", ValueKind::Float),
            CodeDefinition::new("1.0.32.7.0.255", "l1_voltage", "L1 Voltage", "V", ValueKind::Float),
            CodeDefinition::new("1.0.52.7.0.255", "l2_voltage", "L2 Voltage", "V", ValueKind::Float),
            CodeDefinition::new("1.0.72.7.0.255", "l3_voltage", "L3 Voltage", "V", ValueKind::Float),
            CodeDefinition::new("1.0.31.7.0.255", "l1_current", "L1 Current", "A", ValueKind::Float),
            CodeDefinition::new("1.0.51.7.0.255", "l2_current", "L2 Current", "A", ValueKind::Float),
            CodeDefinition::new("1.0.71.7.0.255", "l3_current", "L3 Current", "A", ValueKind::Float),
        ],
        "gas" => vec![
            CodeDefinition::new("7.0.0.0.0.255", "meter_id", "Meter ID", "", ValueKind::Text),
            CodeDefinition::new("7.0.1.7.0.255", "current_flow", "Current Flow", "m³/h", ValueKind::Float),
            CodeDefinition::new("7.0.1.8.0.255", "total_volume", "Total Volume", "m³", ValueKind::Float),
        ],
        "water" => vec![
            CodeDefinition::new("8.0.0.0.0.255", "meter_id", "Meter ID", "", ValueKind::Text),
            CodeDefinition::new("8.0.1.7.0.255", "current_flow", "Current Flow", "m³/h", ValueKind::Float),
            CodeDefinition::new("8.0.1.8.0.255", "total_volume", "Total Volume", "m³", ValueKind::Float),
        ],
        _ => Vec::new(),
    }
}

/// Example raw blocks in the shape meters push them, one per meter type.
pub fn sample_readings(meter_type: &str) -> &'static str {
    match meter_type {
        "electricity" => {
            "
1.0.0.0.0.255:12345678
1.0.1.7.0.255:2500.5
1.0.1.8.0.255:12345.67
1.0.21.7.0.255:850.2
1.0.22.7.0.255:820.1
1.0.23.7.0.255:830.2
1.0.32.7.0.255:230.5
1.0.52.7.0.255:228.3
1.0.72.7.0.255:232.1
1.0.31.7.0.255:3.7
1.0.51.7.0.255:3.6
1.0.71.7.0.255:3.6
"
        }
        "gas" => {
            "
7.0.0.0.0.255:87654321
7.0.1.7.0.255:2.5
7.0.1.8.0.255:1234.56
"
        }
        "water" => {
            "
8.0.0.0.0.255:11223344
8.0.1.7.0.255:1.2
8.0.1.8.0.255:567.89
"
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metering_obis::parser::parse_raw_readings;

    #[test]
    fn test_default_table_sizes() {
        assert_eq!(default_codes("electricity").len(), 12);
        assert_eq!(default_codes("gas").len(), 3);
        assert_eq!(default_codes("water").len(), 3);
        assert!(default_codes("steam").is_empty());
    }

    #[test]
    fn test_electricity_triples() {
        let codes = default_codes("electricity");
        let voltage = codes.iter().find(|d| d.code == "1.0.32.7.0.255").unwrap();
        assert_eq!(voltage.name, "l1_voltage");
        assert_eq!(voltage.unit, "V");
        assert_eq!(voltage.value_kind, ValueKind::Float);

        let meter_id = codes.iter().find(|d| d.name == "meter_id").unwrap();
        assert_eq!(meter_id.code, "1.0.0.0.0.255");
        assert_eq!(meter_id.unit, "");
        assert_eq!(meter_id.value_kind, ValueKind::Text);
    }

    #[test]
    fn test_gas_and_water_triples() {
        let gas = default_codes("gas");
        let flow = gas.iter().find(|d| d.name == "current_flow").unwrap();
        assert_eq!(flow.code, "7.0.1.7.0.255");
        assert_eq!(flow.unit, "m³/h");

        let water = default_codes("water");
        let volume = water.iter().find(|d| d.name == "total_volume").unwrap();
        assert_eq!(volume.code, "8.0.1.8.0.255");
        assert_eq!(volume.unit, "m³");
    }

    #[test]
    fn test_quantity_rule_tables() {
        let rules = quantity_rules("electricity");
        assert_eq!(rules.len(), 4);
        let power = rules.iter().find(|r| r.quantity == "power").unwrap();
        assert_eq!(power.max, 100000.0);
        assert_eq!(power.unit, "W");

        assert_eq!(quantity_rules("gas").len(), 2);
        assert_eq!(quantity_rules("water").len(), 2);
        assert!(quantity_rules("steam").is_empty());
    }

    #[test]
    fn test_sample_readings_cover_default_tables() {
        for meter_type in ["electricity", "gas", "water"] {
            let decoded = parse_raw_readings(sample_readings(meter_type));
            let codes = default_codes(meter_type);
            assert_eq!(decoded.len(), codes.len());
            for def in &codes {
                assert!(decoded.contains_key(&def.code), "missing sample for {}", def.code);
            }
        }
        assert_eq!(sample_readings("steam"), "");
    }
}

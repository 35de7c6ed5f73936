use super::meter_definitions;
use super::registry::CodeRegistry;
use super::ObisError;
use crate::models::{ReadingValue, ValueKind};
use log::debug;

/// Check one decoded value against its registered definition and the
/// meter-wide quantity rules.
///
/// Steps, each of which short-circuits to `Ok(false)`:
/// 1. the code must be registered,
/// 2. the value must match the declared kind (float accepts int-valued
///    numbers),
/// 3. an explicit per-code range rule must hold, bounds inclusive,
/// 4. every matching meter-wide quantity rule must hold.
///
/// A non-numeric value that a numeric bound would have to be applied to is
/// an error, not a plain rejection; the read cycle treats it as an
/// unexpected failure.
pub fn validate_reading(
    code: &str,
    value: &ReadingValue,
    registry: &CodeRegistry,
    meter_type: &str,
) -> Result<bool, ObisError> {
    let def = match registry.lookup(code) {
        Some(def) => def,
        None => return Ok(false),
    };

    let kind_ok = match def.value_kind {
        ValueKind::Float => value.is_numeric(),
        ValueKind::Int => matches!(value, ReadingValue::Int(_)),
        ValueKind::Text => matches!(value, ReadingValue::Text(_)),
    };
    if !kind_ok {
        debug!(
            "Kind mismatch for {}: declared {}, decoded {}",
            code,
            def.value_kind.to_string(),
            value.type_name()
        );
        return Ok(false);
    }

    if let Some(range) = &def.range {
        if range.min.is_some() || range.max.is_some() {
            let v = numeric_or_error(code, value)?;
            if !range.contains(v) {
                debug!("Range rule failed for {}: {}", code, v);
                return Ok(false);
            }
        }
    }

    // Quantity rules are matched by plain text against the code and its
    // registered name, never against the OBIS fields; the unit has to
    // agree for a textual match to count. Several rules may match one
    // code and each of them must hold.
    for rule in meter_definitions::quantity_rules(meter_type) {
        let matches_text = code.contains(rule.quantity) || def.name.contains(rule.quantity);
        if !matches_text || def.unit != rule.unit {
            continue;
        }
        let v = numeric_or_error(code, value)?;
        if v < rule.min || v > rule.max {
            debug!(
                "Quantity rule '{}' failed for {}: {} outside [{}, {}]",
                rule.quantity, code, v, rule.min, rule.max
            );
            return Ok(false);
        }
    }

    Ok(true)
}

fn numeric_or_error(code: &str, value: &ReadingValue) -> Result<f64, ObisError> {
    value.as_f64().ok_or_else(|| ObisError::IncomparableValue {
        code: code.to_string(),
        value: value.to_string(),
    })
}

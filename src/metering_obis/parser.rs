use crate::models::ReadingValue;
use log::debug;
use std::collections::HashMap;

/// Decode line-oriented `<obis-code>:<value>` meter text into typed values.
///
/// Lines without a `:` are skipped without comment. The value is whatever
/// sits between the first and second `:`, so a value containing a colon is
/// truncated there. Existing meter deployments depend on that behavior.
pub fn parse_raw_readings(raw: &str) -> HashMap<String, ReadingValue> {
    let mut readings = HashMap::new();

    for line in raw.trim().lines() {
        if !line.contains(':') {
            continue;
        }
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() < 2 {
            continue;
        }
        let code = parts[0].trim().to_string();
        let value = infer_value(parts[1].trim());
        debug!("Decoded reading {} = {:?}", code, value);
        readings.insert(code, value);
    }

    readings
}

/// A literal with a decimal point is tried as f64, everything else as i64;
/// failing both, the trimmed text is kept verbatim.
fn infer_value(text: &str) -> ReadingValue {
    if text.contains('.') {
        if let Ok(v) = text.parse::<f64>() {
            return ReadingValue::Float(v);
        }
    } else if let Ok(v) = text.parse::<i64>() {
        return ReadingValue::Int(v);
    }
    ReadingValue::Text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_lines() {
        let raw = "1.0.1.7.0.255:2500.5\n1.0.1.8.0.255:12345\nnotaline\n";
        let readings = parse_raw_readings(raw);
        assert_eq!(readings.len(), 2);
        assert_eq!(readings.get("1.0.1.7.0.255"), Some(&ReadingValue::Float(2500.5)));
        assert_eq!(readings.get("1.0.1.8.0.255"), Some(&ReadingValue::Int(12345)));
        assert!(!readings.contains_key("notaline"));
    }

    #[test]
    fn test_dotted_non_number_stays_text() {
        // Looks numeric but is not: must fall through to text, not int.
        let readings = parse_raw_readings("1.0.0.0.0.255:1.2.3\n");
        assert_eq!(
            readings.get("1.0.0.0.0.255"),
            Some(&ReadingValue::Text("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_value_truncated_at_second_colon() {
        let readings = parse_raw_readings("1.0.1.8.0.255:12:34\n");
        assert_eq!(readings.get("1.0.1.8.0.255"), Some(&ReadingValue::Int(12)));
    }

    #[test]
    fn test_surrounding_blank_lines_ignored() {
        let raw = "\n\n1.0.32.7.0.255:230.5\n\n";
        let readings = parse_raw_readings(raw);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings.get("1.0.32.7.0.255"), Some(&ReadingValue::Float(230.5)));
    }

    #[test]
    fn test_whitespace_trimmed_around_code_and_value() {
        let readings = parse_raw_readings("  1.0.31.7.0.255 : 3.7 \n");
        assert_eq!(readings.get("1.0.31.7.0.255"), Some(&ReadingValue::Float(3.7)));
    }

    #[test]
    fn test_unparseable_literals_kept_as_text() {
        let readings = parse_raw_readings("1.0.0.0.0.255:SN 4711\n7.0.0.0.0.255:\n");
        assert_eq!(
            readings.get("1.0.0.0.0.255"),
            Some(&ReadingValue::Text("SN 4711".to_string()))
        );
        assert_eq!(
            readings.get("7.0.0.0.0.255"),
            Some(&ReadingValue::Text("".to_string()))
        );
    }

    #[test]
    fn test_negative_and_signed_values() {
        let readings = parse_raw_readings("a:-5\nb:-2.5\n");
        assert_eq!(readings.get("a"), Some(&ReadingValue::Int(-5)));
        assert_eq!(readings.get("b"), Some(&ReadingValue::Float(-2.5)));
    }
}

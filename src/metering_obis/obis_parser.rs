use super::ObisError;
use crate::models::MeterKind;
use std::fmt;

/// An OBIS identifier split into its six standard components
/// (IEC 62056-61: media, channel, measurement, measurement type,
/// tariff, storage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedObisCode {
    pub media: String,
    pub channel: String,
    pub measurement: String,
    pub measurement_type: String,
    pub tariff: String,
    pub storage: String,
    /// The dotted form exactly as handed in, kept for lookups and logging
    pub original_code: String,
}

impl fmt::Display for ParsedObisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original_code)
    }
}

/// Parse a dotted OBIS code into its components.
///
/// Exactly six non-empty dot separated fields are accepted; anything else
/// is an `InvalidFormat` error naming the offending input.
pub fn parse_obis_code(code: &str) -> Result<ParsedObisCode, ObisError> {
    let parts: Vec<&str> = code.split('.').collect();

    if parts.len() != 6 || parts.iter().any(|p| p.is_empty()) {
        return Err(ObisError::InvalidFormat(code.to_string()));
    }

    Ok(ParsedObisCode {
        media: parts[0].to_string(),
        channel: parts[1].to_string(),
        measurement: parts[2].to_string(),
        measurement_type: parts[3].to_string(),
        tariff: parts[4].to_string(),
        storage: parts[5].to_string(),
        original_code: code.to_string(),
    })
}

/// Classify a parsed code by its media field.
///
/// Anything outside "1".."5" falls back to electricity; that fallback is
/// part of the contract, not an error.
pub fn classify_code(parsed: &ParsedObisCode) -> MeterKind {
    match parsed.media.as_str() {
        "1" => MeterKind::Electricity,
        "2" => MeterKind::Gas,
        "3" => MeterKind::Water,
        "4" => MeterKind::Heat,
        "5" => MeterKind::Cooling,
        _ => MeterKind::Electricity,
    }
}

/// Format guard used before registry insertion.
pub fn is_valid_code(code: &str) -> bool {
    parse_obis_code(code).is_ok()
}

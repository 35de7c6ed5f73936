use crate::models::ValueKind;
use serde::{Deserialize, Serialize};

/// Inclusive bounds attached to a single registered OBIS code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeRule {
    pub fn new(min: f64, max: f64) -> Self {
        RangeRule { min: Some(min), max: Some(max) }
    }

    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// A registered OBIS code with its metadata.
///
/// `scale_factor` comes with meter profiles and is carried through as-is;
/// decoding does not apply it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeDefinition {
    pub code: String,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub value_kind: ValueKind,
    pub scale_factor: f64,
    pub range: Option<RangeRule>,
}

impl CodeDefinition {
    pub fn new(code: &str, name: &str, description: &str, unit: &str, value_kind: ValueKind) -> Self {
        CodeDefinition {
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            unit: unit.to_string(),
            value_kind,
            scale_factor: 1.0,
            range: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(RangeRule::new(min, max));
        self
    }
}

/// Meter-wide range rule, matched by quantity name against the text of a
/// code and its registered name rather than against the OBIS fields.
#[derive(Debug, Clone)]
pub struct QuantityRule {
    pub quantity: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

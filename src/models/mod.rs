use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;


/// Represents the utility type a meter belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MeterKind {
    Electricity,
    Gas,
    Water,
    Heat,
    Cooling,
}

impl MeterKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "electricity" => Some(MeterKind::Electricity),
            "gas" => Some(MeterKind::Gas),
            "water" => Some(MeterKind::Water),
            "heat" => Some(MeterKind::Heat),
            "cooling" => Some(MeterKind::Cooling),
            _ => None,
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            MeterKind::Electricity => "electricity".to_string(),
            MeterKind::Gas => "gas".to_string(),
            MeterKind::Water => "water".to_string(),
            MeterKind::Heat => "heat".to_string(),
            MeterKind::Cooling => "cooling".to_string(),
        }
    }
}

/// Declared value type of a registered OBIS code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Int,
    Text,
}

impl ValueKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "float" => Some(ValueKind::Float),
            "int" => Some(ValueKind::Int),
            "string" => Some(ValueKind::Text),
            _ => None,
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            ValueKind::Float => "float".to_string(),
            ValueKind::Int => "int".to_string(),
            ValueKind::Text => "string".to_string(),
        }
    }
}

/// A reading value with the type inferred while decoding raw meter text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReadingValue {
    Float(f64),
    Int(i64),
    Text(String),
}

impl ReadingValue {
    pub fn is_numeric(&self) -> bool {
        match self {
            ReadingValue::Float(_) | ReadingValue::Int(_) => true,
            ReadingValue::Text(_) => false,
        }
    }

    /// Numeric view of the value, integers widened to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ReadingValue::Float(v) => Some(*v),
            ReadingValue::Int(v) => Some(*v as f64),
            ReadingValue::Text(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ReadingValue::Float(_) => "float",
            ReadingValue::Int(_) => "int",
            ReadingValue::Text(_) => "string",
        }
    }
}

impl fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingValue::Float(v) => write!(f, "{}", v),
            ReadingValue::Int(v) => write!(f, "{}", v),
            ReadingValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Trust level attached to a measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementQuality {
    Good,
}

impl MeasurementQuality {
    pub fn to_string(&self) -> String {
        match self {
            MeasurementQuality::Good => "good".to_string(),
        }
    }
}

/// A single validated meter reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Identifier of the meter the reading came from
    pub meter_id: String,
    /// Wall clock instant the reading was accepted
    pub timestamp: DateTime<Utc>,
    /// OBIS code in its canonical dotted form
    pub obis_code: String,
    pub value: ReadingValue,
    pub unit: String,
    pub quality: MeasurementQuality,
    pub source: String,
}

impl Measurement {
    pub fn new(meter_id: String, obis_code: String, value: ReadingValue, unit: String) -> Self {
        Measurement {
            meter_id,
            timestamp: Utc::now(),
            obis_code,
            value,
            unit,
            quality: MeasurementQuality::Good,
            source: "obis_reader".to_string(),
        }
    }
}

pub mod api;
pub mod db;
pub mod logging;
pub mod matching;
pub mod provider;
pub mod records;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Row identifier as stored by the data provider (serial or text/uuid keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

/// Hour count exactly as the row stored it. Integer and fractional forms are
/// kept apart so `30` renders as `30` and `30.0` as `30.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(Number);

impl Hours {
    /// `None` for NaN or infinity, which JSON cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl From<u32> for Hours {
    fn from(value: u32) -> Self {
        Hours(Number::from(value))
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Commonly used data models for matching functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub react_skill: u8,
    pub python_skill: u8,
    pub hours_available: Hours,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    /// Display-only ordering hint; never used in scoring.
    pub priority: Value,
    pub react_needed: u8,
    pub python_needed: u8,
    pub hours_needed: Hours,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hours_keep_stored_number_form() {
        let whole: Hours = serde_json::from_value(json!(30)).unwrap();
        let float: Hours = serde_json::from_value(json!(30.0)).unwrap();

        assert_eq!(whole.to_string(), "30");
        assert_eq!(float.to_string(), "30.0");
        assert_eq!(whole.as_f64(), float.as_f64());
        assert_eq!(serde_json::to_value(Hours::from(40)).unwrap(), json!(40));
        assert!(Hours::from_f64(f64::NAN).is_none());
    }
}

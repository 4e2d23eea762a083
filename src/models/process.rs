//! Process models.
//!
//! A [`ProcessDescriptor`] is what the caller hands in: a pid plus two
//! number-like fields that may or may not hold a usable value. The
//! normalizer turns valid descriptors into [`CanonicalProcess`] values,
//! which are the only thing the engines ever see.
//!
//! # Time Representation
//! Times are plain `f64` units relative to t=0. The consumer defines
//! the unit (ticks, ms, minutes).

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// A raw process descriptor as supplied by the caller.
///
/// No invariants are enforced: the pid may be blank and the numeric
/// fields may be text, non-finite, negative, or absent. Deserialization
/// never fails on a single bad field; the row is left for the
/// normalizer to drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Process identifier (trimmed during normalization).
    ///
    /// JSON numbers are accepted as text; null, missing, or any other
    /// JSON type becomes an empty pid.
    #[serde(default, deserialize_with = "lenient_pid")]
    pub pid: String,
    /// Arrival time.
    #[serde(default)]
    pub arrival: FieldValue,
    /// CPU burst (service) duration.
    #[serde(default)]
    pub burst: FieldValue,
}

impl ProcessDescriptor {
    /// Creates a descriptor from numeric values.
    pub fn new(pid: impl Into<String>, arrival: f64, burst: f64) -> Self {
        Self {
            pid: pid.into(),
            arrival: FieldValue::Number(arrival),
            burst: FieldValue::Number(burst),
        }
    }

    /// Creates a descriptor from text fields, as collected from a form.
    pub fn from_text(
        pid: impl Into<String>,
        arrival: impl Into<String>,
        burst: impl Into<String>,
    ) -> Self {
        Self {
            pid: pid.into(),
            arrival: FieldValue::Text(arrival.into()),
            burst: FieldValue::Text(burst.into()),
        }
    }

    /// Sets the arrival field.
    pub fn with_arrival(mut self, arrival: impl Into<FieldValue>) -> Self {
        self.arrival = arrival.into();
        self
    }

    /// Sets the burst field.
    pub fn with_burst(mut self, burst: impl Into<FieldValue>) -> Self {
        self.burst = burst.into();
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPid {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

fn lenient_pid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawPid::deserialize(deserializer)? {
        RawPid::Text(s) => s,
        RawPid::Integer(i) => i.to_string(),
        RawPid::Float(f) => f.to_string(),
        RawPid::Other(_) => String::new(),
    })
}

/// A number-like input field.
///
/// Deserializes from a JSON number or a JSON string. Null, a missing
/// key, or any other JSON type becomes [`FieldValue::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Already numeric.
    Number(f64),
    /// Free text, parsed on demand.
    Text(String),
    /// No usable value was supplied.
    #[default]
    Missing,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawField::deserialize(deserializer)? {
            RawField::Number(v) => FieldValue::Number(v),
            RawField::Text(s) => FieldValue::Text(s),
            RawField::Other(_) => FieldValue::Missing,
        })
    }
}

/// Why a [`FieldValue`] failed to produce a usable number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Null or absent.
    #[error("field is missing")]
    Missing,
    /// Blank text.
    #[error("field is empty")]
    Empty,
    /// Text that is not a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// NaN or an infinity.
    #[error("{0} is not finite")]
    NotFinite(f64),
}

impl FieldValue {
    /// Parses the field into a finite number.
    pub fn parse(&self) -> Result<f64, FieldError> {
        let value = match self {
            FieldValue::Number(v) => *v,
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(FieldError::Empty);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| FieldError::NotANumber(trimmed.to_string()))?
            }
            FieldValue::Missing => return Err(FieldError::Missing),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FieldError::NotFinite(value))
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s:?}"),
            FieldValue::Missing => f.write_str("null"),
        }
    }
}

/// A validated, indexed process ready for simulation.
///
/// # Invariants
/// - `pid` is non-empty and trimmed.
/// - `arrival` is finite (negative values are kept as-is).
/// - `burst` is finite and > 0.
/// - `original_index` is the position in the caller's input sequence,
///   used only to break ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalProcess {
    /// Trimmed process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival: f64,
    /// Burst duration.
    pub burst: f64,
    /// 0-based position in the raw input.
    pub original_index: usize,
}

impl CanonicalProcess {
    /// Creates a canonical process.
    ///
    /// Callers outside the normalizer are responsible for upholding the
    /// invariants; this is mainly useful in tests.
    pub fn new(pid: impl Into<String>, arrival: f64, burst: f64, original_index: usize) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            original_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(FieldValue::Number(3.5).parse(), Ok(3.5));
        assert_eq!(FieldValue::Number(-1.0).parse(), Ok(-1.0));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(FieldValue::from(" 2.5 ").parse(), Ok(2.5));
        assert_eq!(FieldValue::from("7").parse(), Ok(7.0));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(FieldValue::from("   ").parse(), Err(FieldError::Empty));
        assert_eq!(
            FieldValue::from("abc").parse(),
            Err(FieldError::NotANumber("abc".into()))
        );
        assert!(matches!(
            FieldValue::Number(f64::INFINITY).parse(),
            Err(FieldError::NotFinite(_))
        ));
        assert!(matches!(
            FieldValue::from("NaN").parse(),
            Err(FieldError::NotFinite(_))
        ));
    }

    #[test]
    fn test_descriptor_builders() {
        let d = ProcessDescriptor::new("P1", 0.0, 3.0).with_burst("4");
        assert_eq!(d.arrival, FieldValue::Number(0.0));
        assert_eq!(d.burst, FieldValue::Text("4".into()));

        let t = ProcessDescriptor::from_text("P2", "1", "x");
        assert_eq!(t.arrival.parse(), Ok(1.0));
        assert!(t.burst.parse().is_err());
    }

    #[test]
    fn test_descriptor_from_json() {
        let json = r#"[
            {"pid": "P1", "arrival": 0, "burst": "3"},
            {"pid": "P2", "arrival": "2", "burst": 6.5}
        ]"#;
        let parsed: Vec<ProcessDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].arrival, FieldValue::Number(0.0));
        assert_eq!(parsed[0].burst, FieldValue::Text("3".into()));
        assert_eq!(parsed[1].burst.parse(), Ok(6.5));
    }

    #[test]
    fn test_descriptor_from_json_tolerates_bad_fields() {
        let json = r#"[
            {"pid": "P1", "arrival": null, "burst": 1},
            {"pid": "P2", "burst": 1},
            {"pid": 7, "arrival": 0, "burst": 2},
            {"pid": null, "arrival": 0, "burst": 2},
            {"arrival": 0, "burst": [1]}
        ]"#;
        let parsed: Vec<ProcessDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0].arrival, FieldValue::Missing);
        assert_eq!(parsed[0].arrival.parse(), Err(FieldError::Missing));
        assert_eq!(parsed[1].arrival, FieldValue::Missing);
        assert_eq!(parsed[2].pid, "7");
        assert_eq!(parsed[3].pid, "");
        assert_eq!(parsed[4].pid, "");
        assert_eq!(parsed[4].burst, FieldValue::Missing);
    }

    #[test]
    fn test_missing_serializes_as_null() {
        let d = ProcessDescriptor::new("P1", 0.0, 1.0).with_burst(FieldValue::Missing);
        let json = serde_json::to_value(&d).unwrap();
        assert!(json["burst"].is_null());
    }
}

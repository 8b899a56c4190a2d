//! Structural validation of inbound JSON payloads.
//!
//! The checks here are purely shape and type level: a required field must be
//! present and must be a JSON number (integers are accepted and widened to
//! `f64`). No range checking is performed, and extra fields are ignored, so
//! a payload carrying `device_id` alongside the expected fields still passes.
//! Validation never touches the [`StateStore`](crate::store::StateStore);
//! a failed check leaves all stored records untouched.

use crate::store::{Reading, Thresholds};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// What went wrong with a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFault {
    /// The field is absent from the payload
    Missing,
    /// The field is present but is not a JSON number
    NotNumeric,
}

/// One offending field and its fault.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub fault: FieldFault,
}

/// Rejection of an inbound payload, listing every offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            match issue.fault {
                FieldFault::Missing => write!(f, "field '{}' is missing", issue.field)?,
                FieldFault::NotNumeric => write!(f, "field '{}' is not numeric", issue.field)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Pull a numeric field out of the payload, recording an issue on failure.
///
/// `Value::get` returns `None` for any non-object payload, so a body that
/// is not a JSON object reports every required field as missing.
fn numeric_field(body: &Value, field: &'static str, issues: &mut Vec<FieldIssue>) -> f64 {
    match body.get(field) {
        None => {
            issues.push(FieldIssue {
                field,
                fault: FieldFault::Missing,
            });
            0.0
        }
        Some(value) => match value.as_f64() {
            Some(number) => number,
            None => {
                issues.push(FieldIssue {
                    field,
                    fault: FieldFault::NotNumeric,
                });
                0.0
            }
        },
    }
}

/// Validate an ingest payload and build the [`Reading`] it carries.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming every field that is missing or
/// non-numeric.
pub fn reading_from_json(body: &Value) -> Result<Reading, ValidationError> {
    let mut issues = Vec::new();
    let temperature = numeric_field(body, "temperature", &mut issues);
    let humidity = numeric_field(body, "humidity", &mut issues);

    if issues.is_empty() {
        Ok(Reading {
            temperature,
            humidity,
        })
    } else {
        Err(ValidationError { issues })
    }
}

/// Validate a configure payload and build the [`Thresholds`] it carries.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming every field that is missing or
/// non-numeric.
pub fn thresholds_from_json(body: &Value) -> Result<Thresholds, ValidationError> {
    let mut issues = Vec::new();
    let temp_min = numeric_field(body, "temp_min", &mut issues);
    let temp_max = numeric_field(body, "temp_max", &mut issues);
    let hum_min = numeric_field(body, "hum_min", &mut issues);
    let hum_max = numeric_field(body, "hum_max", &mut issues);

    if issues.is_empty() {
        Ok(Thresholds {
            temp_min,
            temp_max,
            hum_min,
            hum_max,
        })
    } else {
        Err(ValidationError { issues })
    }
}

//! DICOM value formatting for patient record fields.
//!
//! Source records carry human-entered values: names as `Given Surname`,
//! dates as `DD-MM-YYYY` and times as `HH:MM`. DICOM expects:
//!
//! - Person names (VR `PN`): `Surname^Given^Middle`
//! - Dates (VR `DA`): `YYYYMMDD`
//! - Times (VR `TM`): `HHMMSS`
//!
//! The conversions are textual. Digits are reordered, never re-validated,
//! so a record that is wrong on the way in stays wrong on the way out.

use serde_json::Value;
use tracing::trace;

use trialrepo_ingest::Record;

use crate::error::{Result, TransformError};

/// Separator between name components in a DICOM person name.
pub const NAME_COMPONENT_SEPARATOR: char = '^';

/// DICOM value representation targeted by a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRepresentation {
    /// Person name (`PN`).
    PersonName,
    /// Date (`DA`).
    Date,
    /// Time (`TM`).
    Time,
}

impl ValueRepresentation {
    /// Two-letter DICOM VR code.
    pub fn code(self) -> &'static str {
        match self {
            Self::PersonName => "PN",
            Self::Date => "DA",
            Self::Time => "TM",
        }
    }

    /// Formats a raw value, returning `None` when it does not fit the source layout.
    pub fn format(self, value: &str) -> Option<String> {
        match self {
            Self::PersonName => format_person_name(value),
            Self::Date => format_date(value),
            Self::Time => format_time(value),
        }
    }

    fn expected_layout(self) -> &'static str {
        match self {
            Self::PersonName => "expected space-separated given names and surname",
            Self::Date => "expected DD-MM-YYYY",
            Self::Time => "expected at least 4 characters (HH..MM)",
        }
    }
}

/// Record fields rewritten by [`convert_record_to_dicom`], in processing order.
pub const DICOM_FIELDS: [(&str, ValueRepresentation); 5] = [
    ("PatientName", ValueRepresentation::PersonName),
    ("LeadClinicianName", ValueRepresentation::PersonName),
    ("PatientDOB", ValueRepresentation::Date),
    ("ScanDate", ValueRepresentation::Date),
    ("ScanTime", ValueRepresentation::Time),
];

/// Converts `Given Middle Surname` to `Surname^Given^Middle`.
///
/// Names are split on single spaces, so repeated spaces produce empty
/// components. A single-token name is returned unchanged.
/// Returns `None` for an empty string.
pub fn format_person_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = value.split(' ').collect();
    let (surname, given) = tokens.split_last()?;
    let mut formatted = String::with_capacity(value.len());
    formatted.push_str(surname);
    for name in given {
        formatted.push(NAME_COMPONENT_SEPARATOR);
        formatted.push_str(name);
    }
    Some(formatted)
}

/// Converts `DD-MM-YYYY` to `YYYYMMDD`.
///
/// Returns `None` unless the value splits into exactly three `-` separated parts.
pub fn format_date(value: &str) -> Option<String> {
    let parts: Vec<&str> = value.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    Some(format!("{year}{month}{day}"))
}

/// Converts a time such as `HH:MM` or `HHMM` to `HHMMSS` with zero seconds.
///
/// Keeps the first two and last two characters. Returns `None` when the
/// value has fewer than four characters.
pub fn format_time(value: &str) -> Option<String> {
    let count = value.chars().count();
    if count < 4 {
        return None;
    }
    let hours: String = value.chars().take(2).collect();
    let minutes: String = value.chars().skip(count - 2).collect();
    Some(format!("{hours}{minutes}00"))
}

/// Rewrites the five DICOM fields of a record.
///
/// Returns a new record equal to the input except for the rewritten
/// fields, which keep their original position.
///
/// # Errors
///
/// - [`TransformError::MissingField`] for the first absent required field.
/// - [`TransformError::MalformedField`] when a required value is not a
///   string or does not match its source layout.
pub fn convert_record_to_dicom(record: &Record) -> Result<Record> {
    let mut converted = record.clone();
    for (field, vr) in DICOM_FIELDS {
        let slot = converted
            .get_mut(field)
            .ok_or(TransformError::MissingField { field })?;
        let raw = match &*slot {
            Value::String(raw) => raw.as_str(),
            other => {
                return Err(TransformError::MalformedField {
                    field,
                    value: other.to_string(),
                    reason: non_string_reason(other),
                });
            }
        };
        let formatted = vr.format(raw).ok_or_else(|| TransformError::MalformedField {
            field,
            value: raw.to_string(),
            reason: vr.expected_layout(),
        })?;
        trace!(field, vr = vr.code(), "formatted field");
        *slot = Value::String(formatted);
    }
    Ok(converted)
}

fn non_string_reason(value: &Value) -> &'static str {
    match value {
        Value::Null => "expected a string, found null",
        Value::Bool(_) => "expected a string, found boolean",
        Value::Number(_) => "expected a string, found number",
        Value::Array(_) => "expected a string, found array",
        Value::Object(_) => "expected a string, found object",
        Value::String(_) => "expected a string",
    }
}

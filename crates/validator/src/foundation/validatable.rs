//! AsValidatable trait with GAT for universal type conversion
//!
//! Validators are typed (`str`, `bool`, `DateTime<Utc>` ...) while form
//! input arrives as `serde_json::Value`. `AsValidatable` bridges the two:
//! a conversion either borrows the typed view or reports a `type_mismatch`.

use std::borrow::Borrow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::error::ValidationError;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// REFLEXIVE IMPLEMENTATIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<bool> for bool {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<i64> for i64 {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<f64> for f64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self)
    }
}

impl<T> AsValidatable<[T]> for Vec<T> {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self.as_slice())
    }
}

impl<T> AsValidatable<[T]> for [T] {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<DateTime<Utc>> for DateTime<Utc> {
    type Output<'a> = DateTime<Utc>;

    #[inline]
    fn as_validatable(&self) -> Result<DateTime<Utc>, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<DateTime<Utc>> for str {
    type Output<'a> = DateTime<Utc>;

    fn as_validatable(&self) -> Result<DateTime<Utc>, ValidationError> {
        parse_datetime(self).ok_or_else(|| {
            ValidationError::new("invalid_datetime", "Please enter a valid date")
                .with_param("expected", "RFC 3339 date-time")
        })
    }
}

/// Parses the date formats forms submit.
///
/// Accepts RFC 3339 (`2025-06-01T10:00:00+02:00`), a naive date-time
/// (`2025-06-01T10:00:00`, `2025-06-01 10:00`) and a bare date
/// (`2025-06-01`). Naive values are read as UTC; a bare date is midnight.
#[must_use]
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl AsValidatable<str> for Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<bool> for Value {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(ValidationError::type_mismatch(
                "boolean",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<i64> for Value {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidationError> {
        match self {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| ValidationError::type_mismatch("integer", "number")),
            other => Err(ValidationError::type_mismatch(
                "integer",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<f64> for Value {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        match self {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| ValidationError::type_mismatch("number", "number")),
            other => Err(ValidationError::type_mismatch(
                "number",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<[Value]> for Value {
    type Output<'a>
        = &'a [Value]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[Value], ValidationError> {
        match self {
            Value::Array(arr) => Ok(arr.as_slice()),
            other => Err(ValidationError::type_mismatch(
                "array",
                json_type_name(other),
            )),
        }
    }
}

impl AsValidatable<DateTime<Utc>> for Value {
    type Output<'a> = DateTime<Utc>;

    fn as_validatable(&self) -> Result<DateTime<Utc>, ValidationError> {
        match self {
            Value::String(s) => AsValidatable::<DateTime<Utc>>::as_validatable(s.as_str()),
            other => Err(ValidationError::type_mismatch(
                "date",
                json_type_name(other),
            )),
        }
    }
}

//! Validation executor
//!
//! Runs a [`Schema`] against a JSON value and returns either the normalized
//! data or a flat [`ErrorMap`]. Constraint failures are values: nothing on
//! this path panics or returns `Err` for bad caller data.
//!
//! Per field, in order:
//!
//! 1. resolve the [`Slot`] (missing, `null` and opted-in blank strings are absent)
//! 2. substitute the default for an absent value
//! 3. fail a required field that is still absent
//! 4. apply transforms
//! 5. check the base kind; a mismatch is the only failure recorded for the field
//! 6. recurse into array elements and nested objects; an absent element fails
//!    as missing
//! 7. run every refinement, recording each failure

use serde::Serialize;
use serde::ser::SerializeStruct;
use serde_json::{Map, Value};

use crate::foundation::{ErrorMap, FieldFailure, FieldPath, ValidationError, json_type_name};
use crate::schema::{FieldKind, FieldSchema, Schema, Slot};

// ============================================================================
// OUTCOMES
// ============================================================================

/// Result of validating a whole form. Exactly one of data or errors.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// The normalized input: transforms and defaults applied, unknown keys kept.
    Success(Value),
    Failure(ErrorMap),
}

impl FormOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, FormOutcome::Success(_))
    }

    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            FormOutcome::Success(data) => Some(data),
            FormOutcome::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            FormOutcome::Success(_) => None,
            FormOutcome::Failure(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<Value, ErrorMap> {
        match self {
            FormOutcome::Success(data) => Ok(data),
            FormOutcome::Failure(errors) => Err(errors),
        }
    }
}

/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "errors": {...}}`.
impl Serialize for FormOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormOutcome", 2)?;
        match self {
            FormOutcome::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            FormOutcome::Failure(errors) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

/// Result of validating one bare value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Valid,
    /// The first failure message.
    Invalid(String),
}

impl FieldOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(message) => Some(message),
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates `data` against `schema`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortlink_validator::prelude::*;
///
/// let schema = Schema::builder("profile")
///     .field("display_name", FieldSchema::string().required().trim().check(length_range(1, 100).unwrap().json()))
///     .build()
///     .unwrap();
///
/// let outcome = validate_form(&schema, &json!({ "display_name": "  Ada  ", "extra": 1 }));
/// assert_eq!(outcome.data(), Some(&json!({ "display_name": "Ada", "extra": 1 })));
///
/// let outcome = validate_form(&schema, &json!({}));
/// assert_eq!(outcome.errors().unwrap().get("display_name"), Some("This field is required"));
/// ```
pub fn validate_form(schema: &Schema, data: &Value) -> FormOutcome {
    let mut failures = Vec::new();
    let normalized = check_object(schema, data, &FieldPath::root(), &mut failures);
    finish(schema, normalized, failures)
}

/// Validates an update of a previously stored record.
///
/// Runs [`validate_form`] and also fails every read-only field that is
/// supplied with a value different from the one in `original`.
pub fn validate_update(schema: &Schema, original: &Value, data: &Value) -> FormOutcome {
    let mut failures = Vec::new();
    let normalized = check_object(schema, data, &FieldPath::root(), &mut failures);

    if let Value::Object(map) = &normalized {
        for (name, field) in schema.fields().filter(|(_, f)| f.is_read_only()) {
            let Some(updated) = Slot::resolve(map.get(name), false).value() else {
                continue;
            };
            let current = original.get(name).filter(|v| !v.is_null());
            if current != Some(updated) {
                failures.push(FieldFailure::new(
                    FieldPath::key(name.to_owned()),
                    ValidationError::new("read_only", "This field cannot be changed"),
                ));
            }
        }
    }

    finish(schema, normalized, failures)
}

/// Validates a single value against a field fragment.
///
/// `null` counts as absent. Reports the first failure only.
pub fn validate_field(field: &FieldSchema, value: &Value) -> FieldOutcome {
    let mut failures = Vec::new();
    check_field(field, Some(value), &FieldPath::root(), &mut failures);
    match failures.into_iter().next() {
        None => FieldOutcome::Valid,
        Some(failure) => FieldOutcome::Invalid(failure.error.message.into_owned()),
    }
}

fn finish(schema: &Schema, normalized: Value, failures: Vec<FieldFailure>) -> FormOutcome {
    if failures.is_empty() {
        tracing::trace!(schema = schema.name(), "form valid");
        return FormOutcome::Success(normalized);
    }
    let errors = ErrorMap::from_failures(failures);
    tracing::debug!(
        schema = schema.name(),
        failures = errors.len(),
        fields = ?errors.keys().collect::<Vec<_>>(),
        "form validation failed"
    );
    FormOutcome::Failure(errors)
}

// ============================================================================
// WALK
// ============================================================================

fn check_object(
    schema: &Schema,
    input: &Value,
    path: &FieldPath,
    failures: &mut Vec<FieldFailure>,
) -> Value {
    let Value::Object(map) = input else {
        failures.push(FieldFailure::new(
            path.clone(),
            ValidationError::type_mismatch("object", json_type_name(input)),
        ));
        return input.clone();
    };

    let mut out: Map<String, Value> = map.clone();
    for (name, field) in schema.fields() {
        let field_path = path.child_key(name.to_owned());
        if let Some(value) = check_field(field, map.get(name), &field_path, failures) {
            out.insert(name.to_owned(), value);
        }
    }
    Value::Object(out)
}

/// Checks one field and returns the value to write back, if any.
fn check_field(
    field: &FieldSchema,
    raw: Option<&Value>,
    path: &FieldPath,
    failures: &mut Vec<FieldFailure>,
) -> Option<Value> {
    let value = match Slot::resolve(raw, field.treats_blank_as_absent()) {
        Slot::Present(value) => value.clone(),
        Slot::Absent => match field.default_value() {
            Some(default) => default.clone(),
            None if field.is_required() => {
                failures.push(FieldFailure::new(path.clone(), field.required_error()));
                return None;
            }
            None => {
                run_refinements(field, Slot::Absent, path, failures);
                return None;
            }
        },
    };

    let value = field.normalize(value);
    if let Err(error) = field.kind().check(&value) {
        failures.push(FieldFailure::new(path.clone(), error));
        return Some(value);
    }

    let value = match (field.kind(), value) {
        (FieldKind::Array(element), Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let path = path.child_index(index);
                    // elements are never optional
                    let slot = Slot::resolve(Some(&item), element.treats_blank_as_absent());
                    if matches!(slot, Slot::Absent) {
                        failures.push(FieldFailure::new(path, element.required_error()));
                        return item;
                    }
                    check_field(element, Some(&item), &path, failures).unwrap_or(item)
                })
                .collect(),
        ),
        (FieldKind::Object(schema), value) => check_object(schema, &value, path, failures),
        (_, value) => value,
    };

    run_refinements(field, Slot::Present(&value), path, failures);
    Some(value)
}

fn run_refinements(
    field: &FieldSchema,
    slot: Slot<'_>,
    path: &FieldPath,
    failures: &mut Vec<FieldFailure>,
) {
    for refinement in field.refinements() {
        if let Err(error) = refinement.evaluate(slot) {
            failures.extend(FieldFailure::expand(path, &error));
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

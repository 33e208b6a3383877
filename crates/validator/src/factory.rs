//! Reusable single-value validators built from field fragments.

use std::sync::Arc;

use serde_json::Value;

use crate::executor::{FieldOutcome, validate_field};
use crate::schema::FieldSchema;

/// A field fragment bound into a validation function.
///
/// Cloning is cheap; clones share the fragment. No state is kept between
/// calls, so one validator can be used from many threads at once.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortlink_validator::prelude::*;
///
/// let password = create_field_validator(
///     FieldSchema::string().required().check(length_range(4, 100).unwrap().json()),
/// );
/// assert!(!password.validate_str("").is_valid());
/// assert!(password.validate_str("abcd").is_valid());
/// assert!(!password.validate(&json!(1234)).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FieldValidator {
    field: Arc<FieldSchema>,
}

impl FieldValidator {
    pub fn validate(&self, value: &Value) -> FieldOutcome {
        validate_field(&self.field, value)
    }

    pub fn validate_str(&self, value: &str) -> FieldOutcome {
        self.validate(&Value::String(value.to_owned()))
    }

    /// The validator as a plain closure.
    pub fn as_fn(&self) -> impl Fn(&Value) -> FieldOutcome + Send + Sync + 'static {
        let field = Arc::clone(&self.field);
        move |value: &Value| validate_field(&field, value)
    }

    pub fn field(&self) -> &FieldSchema {
        &self.field
    }
}

/// Binds a field fragment into a [`FieldValidator`].
#[must_use]
pub fn create_field_validator(field: FieldSchema) -> FieldValidator {
    FieldValidator {
        field: Arc::new(field),
    }
}

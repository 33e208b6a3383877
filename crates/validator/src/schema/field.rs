//! Field schemas

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;

use super::object::Schema;
use super::refinement::Refinement;
use crate::foundation::{Validate, ValidationError, json_type_name, parse_datetime};

// ============================================================================
// KIND
// ============================================================================

/// The base type a present value must have.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Boolean,
    Number,
    /// A string holding a date or date-time.
    DateTime,
    /// An array whose elements are each checked against the element schema.
    Array(Box<FieldSchema>),
    /// A nested object checked against its own schema.
    Object(Arc<Schema>),
    Any,
}

impl FieldKind {
    /// The name used in type mismatch messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::DateTime => "date",
            FieldKind::Array(_) => "array",
            FieldKind::Object(_) => "object",
            FieldKind::Any => "any",
        }
    }

    /// Checks the JSON type of a present value.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let matches = match (self, value) {
            (FieldKind::Any, _)
            | (FieldKind::String, Value::String(_))
            | (FieldKind::Boolean, Value::Bool(_))
            | (FieldKind::Number, Value::Number(_))
            | (FieldKind::Array(_), Value::Array(_))
            | (FieldKind::Object(_), Value::Object(_)) => true,
            (FieldKind::DateTime, Value::String(s)) => {
                return match parse_datetime(s) {
                    Some(_) => Ok(()),
                    None => Err(ValidationError::new(
                        "invalid_datetime",
                        "Please enter a valid date",
                    )),
                };
            }
            _ => false,
        };
        if matches {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(self.name(), json_type_name(value)))
        }
    }
}

// ============================================================================
// TRANSFORMS
// ============================================================================

/// Normalization applied to a present string before it is checked.
///
/// Transforms never fail and leave non-string values alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Trim,
    Lowercase,
}

impl Transform {
    #[must_use]
    pub fn apply(self, value: Value) -> Value {
        match (self, value) {
            (Transform::Trim, Value::String(s)) => {
                if s.trim().len() == s.len() {
                    Value::String(s)
                } else {
                    Value::String(s.trim().to_owned())
                }
            }
            (Transform::Lowercase, Value::String(s)) => Value::String(s.to_lowercase()),
            (_, other) => other,
        }
    }
}

// ============================================================================
// FIELD SCHEMA
// ============================================================================

/// Everything the executor needs to check one field.
///
/// # Examples
///
/// ```
/// use shortlink_validator::prelude::*;
///
/// let display_name = FieldSchema::string()
///     .required_with("Display name is required")
///     .trim()
///     .check(length_range(1, 100).unwrap().json());
/// assert!(display_name.is_required());
/// ```
#[derive(Debug, Clone)]
pub struct FieldSchema {
    kind: FieldKind,
    required: bool,
    required_message: Option<Cow<'static, str>>,
    blank_is_absent: bool,
    transforms: Vec<Transform>,
    refinements: Vec<Refinement>,
    default: Option<Value>,
    read_only: bool,
}

impl FieldSchema {
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            required_message: None,
            blank_is_absent: false,
            transforms: Vec::new(),
            refinements: Vec::new(),
            default: None,
            read_only: false,
        }
    }

    #[must_use]
    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    #[must_use]
    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    #[must_use]
    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    #[must_use]
    pub fn datetime() -> Self {
        Self::new(FieldKind::DateTime)
    }

    #[must_use]
    pub fn array(element: FieldSchema) -> Self {
        Self::new(FieldKind::Array(Box::new(element)))
    }

    #[must_use]
    pub fn object(schema: impl Into<Arc<Schema>>) -> Self {
        Self::new(FieldKind::Object(schema.into()))
    }

    #[must_use]
    pub fn any() -> Self {
        Self::new(FieldKind::Any)
    }

    // ------------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------------

    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field required with a custom absence message.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_with(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    /// Treats empty and whitespace-only strings as absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn blank_is_absent(mut self) -> Self {
        self.blank_is_absent = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn trim(self) -> Self {
        self.transform(Transform::Trim)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn lowercase(self) -> Self {
        self.transform(Transform::Lowercase)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    /// Adds an optional refinement from a validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<V>(self, validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.refine(Refinement::new(validator))
    }

    /// Adds an optional refinement whose failures show `message`.
    #[must_use = "builder methods must be chained or built"]
    pub fn check_with<V>(self, validator: V, message: impl Into<Cow<'static, str>>) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        self.refine(Refinement::new(validator).with_message(message))
    }

    /// Value used when the field is absent. Written into the normalized output.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The field may be supplied but not changed by an update.
    #[must_use = "builder methods must be chained or built"]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The message reported when a required field is absent.
    pub fn required_error(&self) -> ValidationError {
        let error = ValidationError::required();
        match &self.required_message {
            Some(message) => error.with_message(message.clone()),
            None => error,
        }
    }

    pub fn treats_blank_as_absent(&self) -> bool {
        self.blank_is_absent
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn refinements(&self) -> &[Refinement] {
        &self.refinements
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Applies the transforms in declaration order.
    #[must_use]
    pub fn normalize(&self, value: Value) -> Value {
        self.transforms
            .iter()
            .fold(value, |value, transform| transform.apply(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(FieldKind::String, json!("x"), true)]
    #[case(FieldKind::String, json!(1), false)]
    #[case(FieldKind::Boolean, json!(false), true)]
    #[case(FieldKind::Boolean, json!("false"), false)]
    #[case(FieldKind::Number, json!(0), true)]
    #[case(FieldKind::DateTime, json!("2025-01-01"), true)]
    #[case(FieldKind::DateTime, json!("someday"), false)]
    #[case(FieldKind::Any, json!(null), true)]
    fn kind_check(#[case] kind: FieldKind, #[case] value: Value, #[case] ok: bool) {
        assert_eq!(kind.check(&value).is_ok(), ok);
    }

    #[test]
    fn kind_mismatch_message() {
        let err = FieldKind::Boolean.check(&json!("true")).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.message, "Expected boolean, got string");
    }

    #[test]
    fn transforms_apply_in_order() {
        let field = FieldSchema::string().trim().lowercase();
        assert_eq!(field.normalize(json!("  Go2.Video ")), json!("go2.video"));
        assert_eq!(field.normalize(json!(5)), json!(5));
    }

    #[test]
    fn required_message_override() {
        let field = FieldSchema::string().required_with("Please enter a URL");
        assert_eq!(field.required_error().message, "Please enter a URL");
        assert_eq!(FieldSchema::string().required_error().message, "This field is required");
    }
}

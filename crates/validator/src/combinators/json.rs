//! JSON combinator - lifts typed validators onto `serde_json::Value`.
//!
//! Schemas hold their constraints as `Validate<Input = Value>` so that one
//! field can mix string, date and array checks. [`Json`] performs the
//! `AsValidatable` conversion and reports a `type_mismatch` when the value
//! has the wrong JSON type.

use std::borrow::Borrow;

use serde_json::Value;

use crate::foundation::{AsValidatable, Validate, ValidationError};

/// Validates a `serde_json::Value` with a typed inner validator.
///
/// # Examples
///
/// ```
/// use shortlink_validator::combinators::Json;
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::min_length;
/// use serde_json::json;
///
/// let validator = Json::new(min_length(3));
/// assert!(validator.validate(&json!("abc")).is_ok());
/// assert_eq!(validator.validate(&json!(null)).unwrap_err().code, "type_mismatch");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<V> {
    inner: V,
}

impl<V> Json<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Json<V>
where
    V: Validate,
    Value: AsValidatable<V::Input>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let converted = AsValidatable::<V::Input>::as_validatable(input)?;
        self.inner.validate(Borrow::<V::Input>::borrow(&converted))
    }
}

/// Lifts a typed validator onto JSON values.
pub fn json<V>(validator: V) -> Json<V>
where
    V: Validate,
    Value: AsValidatable<V::Input>,
{
    Json::new(validator)
}

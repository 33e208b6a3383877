//! Refinements: a check over a field value plus how to treat absence.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::slot::Slot;
use crate::foundation::{Validate, ValidationError};

/// A shared, type-erased validator over JSON values.
pub type DynValidator = Arc<dyn Validate<Input = Value> + Send + Sync>;

/// A validator attached to a field, with an optional message override and
/// an optionality flag.
///
/// | slot    | optional | outcome                                    |
/// |---------|----------|--------------------------------------------|
/// | absent  | true     | passes, the check does not run             |
/// | absent  | false    | fails with the override (or "required")    |
/// | present | any      | the check runs; override replaces message  |
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortlink_validator::prelude::*;
///
/// let code = Refinement::new(min_length(3).json()).with_message("Code is too short");
/// assert!(code.evaluate(Slot::Absent).is_ok());
/// let err = code.evaluate(Slot::Present(&json!("ab"))).unwrap_err();
/// assert_eq!(err.message, "Code is too short");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Clone)]
pub struct Refinement {
    check: DynValidator,
    message: Option<Cow<'static, str>>,
    optional: bool,
}

impl Refinement {
    /// An optional refinement: skipped when the field is absent.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(validator),
            message: None,
            optional: true,
        }
    }

    /// A refinement from a plain predicate. Failing values report `message`.
    pub fn from_fn<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self {
            check: Arc::new(Predicate {
                predicate,
                message: message.clone(),
            }),
            message: Some(message),
            optional: true,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Makes the refinement fail when the field is absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Evaluates against a resolved slot.
    pub fn evaluate(&self, slot: Slot<'_>) -> Result<(), ValidationError> {
        match slot {
            Slot::Absent if self.optional => Ok(()),
            Slot::Absent => {
                let error = ValidationError::required();
                Err(match &self.message {
                    Some(message) => error.with_message(message.clone()),
                    None => error,
                })
            }
            Slot::Present(value) => self.check.validate(value).map_err(|error| {
                match &self.message {
                    // Element errors keep their own messages so each index
                    // still says what went wrong there.
                    Some(message) if !error.has_nested() => error.with_message(message.clone()),
                    _ => error,
                }
            }),
        }
    }
}

/// Builds a refinement, spelled the way schema tables read.
pub fn refine<V>(validator: V, message: Option<&'static str>, optional: bool) -> Refinement
where
    V: Validate<Input = Value> + Send + Sync + 'static,
{
    let mut refinement = Refinement::new(validator);
    refinement.message = message.map(Cow::Borrowed);
    refinement.optional = optional;
    refinement
}

impl fmt::Debug for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refinement")
            .field("message", &self.message)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

struct Predicate<F> {
    predicate: F,
    message: Cow<'static, str>,
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err(ValidationError::custom(self.message.clone()))
        }
    }
}

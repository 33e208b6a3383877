//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use std::borrow::Borrow;

use crate::foundation::validatable::AsValidatable;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A single validator accepts `&str`, `String` or a JSON string value
    /// without explicit conversion by the caller. A failed conversion is
    /// reported as a `type_mismatch` error.
    ///
    /// ```
    /// use shortlink_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let validator = min_length(3);
    /// assert!(validator.validate_any("hello").is_ok());
    /// assert!(validator.validate_any(&json!("hello")).is_ok());
    /// assert_eq!(validator.validate_any(&json!(7)).unwrap_err().code, "type_mismatch");
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for std::sync::Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`, providing a fluent API for composing validators.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortlink_validator::prelude::*;
///
/// let recipients = email().json().each().json();
///
/// assert!(recipients.validate(&json!(["ops@go2.video"])).is_ok());
/// assert!(recipients.validate(&json!(["ops@go2.video", 7])).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Applies this validator to every element of a slice.
    fn each(self) -> Each<Self> {
        Each::new(self)
    }

    /// Lifts a typed validator onto `serde_json::Value` input.
    ///
    /// Values that cannot be viewed as `Self::Input` fail with
    /// `type_mismatch`.
    fn json(self) -> Json<Self>
    where
        serde_json::Value: AsValidatable<Self::Input>,
    {
        Json::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::each::Each;
pub use crate::combinators::json::Json;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_boxed_and_shared_validators() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysFails);
        assert!(boxed.validate("x").is_err());

        let shared: std::sync::Arc<dyn Validate<Input = str> + Send + Sync> =
            std::sync::Arc::new(AlwaysValid);
        assert!(shared.validate("x").is_ok());
    }

    #[test]
    fn test_validate_any_with_string() {
        let owned = String::from("hello");
        assert!(AlwaysValid.validate_any(&owned).is_ok());
    }
}

//! String length validators
//!
//! Length is measured in Unicode scalar values, so `"héllo"` has length 5
//! even though it is six bytes.

use crate::foundation::{Validate, ValidationError};
use crate::schema::SchemaDefinitionError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content; trim first if it should not.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "This field cannot be empty") }
    fn not_empty();
}

// ============================================================================
// MIN / MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within `min..=max`.
///
/// Reports `min_length` or `max_length` depending on which side was
/// violated, so a form shows "at least 3" for a short value and "at most
/// 50" for a long one.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::LengthRange;
///
/// let code = LengthRange::new(3, 50).unwrap();
/// assert!(code.validate("abc").is_ok());
/// assert_eq!(code.validate("ab").unwrap_err().code, "min_length");
/// assert!(LengthRange::new(5, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthRange {
    /// Creates a new length range validator.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, SchemaDefinitionError> {
        if min > max {
            return Err(SchemaDefinitionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = char_len(input);
        if len < self.min {
            Err(ValidationError::min_length(self.min, len).with_param("max", self.max.to_string()))
        } else if len > self.max {
            Err(ValidationError::max_length(self.max, len).with_param("min", self.min.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Creates a length range validator.
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, SchemaDefinitionError> {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

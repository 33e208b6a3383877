//! Field fragments shared by the form schemas, and the prebuilt validators
//! built from them.
//!
//! A fragment carries constraints only. Schemas decide whether a field is
//! required or optional; the prebuilt validators always use the required
//! form, so an empty string is checked rather than skipped.

use std::sync::LazyLock;

use shortlink_validator::foundation::{Validate, ValidateExt, ValidationError};
use shortlink_validator::prelude::{
    FieldSchema, FieldValidator, MatchesRegex, NotIn, Refinement, create_field_validator, email,
    max_length, min_length, url,
};

pub const URL_MESSAGE: &str = "Please enter a valid URL (including http:// or https://)";
pub const CUSTOM_CODE_CHARSET_MESSAGE: &str =
    "Custom code can only contain letters, numbers, hyphens, and underscores";

pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

pub const CUSTOM_CODE_MIN: usize = 3;
pub const CUSTOM_CODE_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 4;
pub const PASSWORD_MAX: usize = 100;

static CUSTOM_CODE_CHARSET: LazyLock<MatchesRegex> = LazyLock::new(|| {
    MatchesRegex::new("[A-Za-z0-9_-]+").expect("custom code pattern is a valid regex")
});

// ============================================================================
// RESERVED CODES
// ============================================================================

/// Rejects short codes that collide with application routes.
///
/// Matching ignores ASCII case; the message quotes the input as given.
#[derive(Debug, Clone)]
pub struct ReservedCode {
    reserved: NotIn,
}

impl ReservedCode {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: NotIn::new(codes.into_iter().map(Into::<String>::into)),
        }
    }
}

impl Validate for ReservedCode {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.reserved.validate(input).map_err(|err| {
            err.with_message(format!("'{input}' is a reserved code and cannot be used"))
        })
    }
}

// ============================================================================
// FRAGMENTS
// ============================================================================

/// An http(s) URL of at most `max_length_chars` characters.
pub fn url_field(max_length_chars: usize) -> FieldSchema {
    FieldSchema::string()
        .check_with(url().json(), URL_MESSAGE)
        .check(max_length(max_length_chars).json())
}

pub fn email_field() -> FieldSchema {
    FieldSchema::string().check(email().json())
}

/// Letters, digits, hyphens and underscores only.
pub fn custom_code_charset() -> Refinement {
    Refinement::new(CUSTOM_CODE_CHARSET.clone().json()).with_message(CUSTOM_CODE_CHARSET_MESSAGE)
}

/// 3 to 50 letters, digits, hyphens or underscores.
pub fn custom_code_field() -> FieldSchema {
    FieldSchema::string()
        .check(min_length(CUSTOM_CODE_MIN).json())
        .check(max_length(CUSTOM_CODE_MAX).json())
        .refine(custom_code_charset())
}

pub fn password_field() -> FieldSchema {
    FieldSchema::string()
        .check(min_length(PASSWORD_MIN).json())
        .check(max_length(PASSWORD_MAX).json())
}

// ============================================================================
// PREBUILT VALIDATORS
// ============================================================================

#[must_use]
pub fn url_validator() -> FieldValidator {
    create_field_validator(url_field(DEFAULT_MAX_URL_LENGTH).required())
}

#[must_use]
pub fn email_validator() -> FieldValidator {
    create_field_validator(email_field().required())
}

#[must_use]
pub fn custom_code_validator() -> FieldValidator {
    create_field_validator(custom_code_field().required())
}

/// Password of 4 to 100 characters. The empty string fails on length.
///
/// # Examples
///
/// ```
/// use shortlink_forms::prebuilt::password_validator;
///
/// let password = password_validator();
/// assert_eq!(password.validate_str("").message(), Some("Must be at least 4 characters"));
/// assert!(password.validate_str("abcd").is_valid());
/// ```
#[must_use]
pub fn password_validator() -> FieldValidator {
    create_field_validator(password_field().required())
}

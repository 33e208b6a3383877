//! Error types for validation failures
//!
//! [`ValidationError`] is what a single constraint returns when it fails.
//! It carries a stable code, a human-readable message, a path relative to
//! the value that was validated, and optional nested errors (used by
//! collection constraints to report every failing element).
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use super::path::{FieldPath, PathSegment};

/// Message parameters, typically 0-3 entries.
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured constraint failure.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::ValidationError;
///
/// let error = ValidationError::min_length(3, 2);
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "min_length", "invalid_format", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Location of the failure relative to the validated value.
    ///
    /// Empty for failures of the value itself.
    pub path: FieldPath,

    /// Parameters for the error message template.
    pub params: ErrorParams,

    /// Nested failures, one per failing element of a collection.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: FieldPath::root(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the relative path of this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: FieldPath) -> Self {
        self.path = path;
        self
    }

    /// Prefixes the path with an array index.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.prepend(PathSegment::Index(index));
        self
    }

    /// Prefixes the path with an object key.
    #[must_use = "builder methods must be chained or built"]
    pub fn at_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.path.prepend(PathSegment::Key(key.into()));
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code, path and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the leaf errors (those without nested errors), depth-first,
    /// each paired with its path relative to the outermost error.
    #[must_use]
    pub fn leaves(&self) -> Vec<(FieldPath, &ValidationError)> {
        let mut out = Vec::new();
        self.collect_leaves(&FieldPath::root(), &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, base: &FieldPath, out: &mut Vec<(FieldPath, &'a Self)>) {
        let here = base.join(&self.path);
        if self.nested.is_empty() {
            out.push((here, self));
        } else {
            for nested in &self.nested {
                nested.collect_leaves(&here, out);
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}: {}", self.code, self.message)?;
        } else {
            write!(f, "[{}] {}: {}", self.path, self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new("type_mismatch", format!("Expected {expected}, got {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

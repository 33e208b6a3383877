//! EACH combinator - validates each element of a collection

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a collection.
///
/// Applies a validator to every element and collects all failures. Each
/// nested error carries its element index in its path, so an error map
/// built from it reports `field.0`, `field.2` and so on.
///
/// # Examples
///
/// ```
/// use shortlink_validator::combinators::Each;
/// use shortlink_validator::foundation::{Validate, ValidateExt};
/// use shortlink_validator::validators::email;
///
/// let validator = Each::new(email().json()).json();
/// let err = validator
///     .validate(&serde_json::json!(["a@example.com", "nope"]))
///     .unwrap_err();
/// assert_eq!(err.nested[0].path.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator that validates all elements.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failed = Vec::new();

        for (index, element) in input.iter().enumerate() {
            if let Err(e) = self.inner.validate(element) {
                failed.push(e.at_index(index));
            }
        }

        if failed.is_empty() {
            return Ok(());
        }

        let indices: Vec<String> = failed
            .iter()
            .map(|e| e.path.to_string())
            .collect();

        let mut error = ValidationError::new(
            "each_failed",
            format!(
                "{} of {} elements failed validation",
                failed.len(),
                input.len()
            ),
        )
        .with_param("failed_count", failed.len().to_string())
        .with_param("total_count", input.len().to_string())
        .with_param("failed_indices", indices.join(","));

        for e in failed {
            error = error.with_nested_error(e);
        }

        Err(error)
    }
}

/// Creates an EACH combinator that validates all elements.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================

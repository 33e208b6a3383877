//! Boolean flag validators
//!
//! The boolean *type* check belongs to the field kind; these constrain the
//! value once it is known to be a boolean.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a flag is set, e.g. an "I accept" checkbox.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("is_true", "This must be checked") }
    fn is_true();
}

crate::validator! {
    /// Validates that a flag is cleared.
    pub IsFalse for bool;
    rule(input) { !*input }
    error(input) { ValidationError::new("is_false", "This must not be checked") }
    fn is_false();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};
    use serde_json::json;

    #[test]
    fn test_is_true() {
        assert!(is_true().validate(&true).is_ok());
        assert_eq!(is_true().validate(&false).unwrap_err().code, "is_true");
    }

    #[test]
    fn test_is_false() {
        assert!(is_false().validate(&false).is_ok());
        assert!(is_false().validate(&true).is_err());
    }

    #[test]
    fn test_json_false_is_a_value_not_a_missing_one() {
        let v = is_false().json();
        assert!(v.validate(&json!(false)).is_ok());
        assert_eq!(v.validate(&json!(0)).unwrap_err().code, "type_mismatch");
    }
}

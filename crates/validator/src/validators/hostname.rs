//! Hostname validator (RFC 1123).
//!
//! - Total length: 1..=253 characters (excluding optional trailing dot)
//! - Each dot-separated label: 1..=63 characters, `[a-zA-Z0-9-]` only
//! - Labels must not start or end with a hyphen

use crate::foundation::{Validate, ValidationError};

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validates hostnames per RFC 1123.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::Hostname;
///
/// assert!(Hostname.validate("go2.video").is_ok());
/// assert!(Hostname.validate("example.com.").is_ok());
/// assert!(Hostname.validate("").is_err());
/// assert!(Hostname.validate("-bad.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hostname;

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code, message).with_param("expected", "hostname")
}

impl Validate for Hostname {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let hostname = input.strip_suffix('.').unwrap_or(input);

        if hostname.is_empty() {
            return Err(invalid(
                "invalid_hostname",
                "Please enter a valid domain name".to_owned(),
            ));
        }

        if hostname.len() > MAX_HOSTNAME_LEN {
            return Err(invalid(
                "hostname_too_long",
                format!("Domain must be at most {MAX_HOSTNAME_LEN} characters"),
            ));
        }

        for label in hostname.split('.') {
            if label.is_empty() {
                return Err(invalid(
                    "empty_label",
                    "Domain labels must not be empty".to_owned(),
                ));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(invalid(
                    "label_too_long",
                    format!("Domain label '{label}' exceeds {MAX_LABEL_LEN} characters"),
                ));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(invalid(
                    "label_hyphen",
                    format!("Domain label '{label}' must not start or end with a hyphen"),
                ));
            }
            if let Some(ch) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
                return Err(invalid(
                    "invalid_hostname_character",
                    format!("Domain label '{label}' contains invalid character '{ch}'"),
                ));
            }
        }

        Ok(())
    }
}

/// Creates a new [`Hostname`] validator.
#[must_use]
pub const fn hostname() -> Hostname {
    Hostname
}

//! String content validators
//!
//! Regex, email and URL shape checks.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};
use crate::schema::SchemaDefinitionError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that the whole string matches a regular expression.
///
/// The pattern is anchored on both ends when compiled, so `[a-z]+` rejects
/// `"abc!"` rather than finding the `abc` inside it.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::MatchesRegex;
///
/// let code = MatchesRegex::new("[A-Za-z0-9_-]+").unwrap();
/// assert!(code.validate("my-link_1").is_ok());
/// assert!(code.validate("my link").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    source: String,
    compiled: regex::Regex,
}

impl MatchesRegex {
    pub fn new(pattern: &str) -> Result<Self, SchemaDefinitionError> {
        let compiled = regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            SchemaDefinitionError::InvalidRegex {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            source: pattern.to_owned(),
            compiled,
        })
    }

    /// The pattern as written, without the added anchors.
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.compiled.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("pattern")
                .with_message("Value does not match the required format")
                .with_param("pattern", self.source.clone()))
        }
    }
}

pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, SchemaDefinitionError> {
    MatchesRegex::new(pattern)
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Uses a simple but effective regex pattern.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("email").with_message("Please enter a valid email address")
    }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates an absolute URL with an accepted scheme and a host.
///
/// Parsing is done by the `url` crate. The default scheme set is
/// `http`/`https`; `mailto:` or `javascript:` values are rejected even
/// though they parse.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::url;
///
/// assert!(url().validate("https://example.com/path?q=1").is_ok());
/// assert!(url().validate("ftp://example.com").is_err());
/// assert!(url().validate("not-a-url").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    schemes: Vec<String>,
}

impl Url {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schemes: vec!["http".to_owned(), "https".to_owned()],
        }
    }

    /// Accepts exactly the given schemes (compared case-insensitively).
    pub fn with_schemes<I, S>(schemes: I) -> Result<Self, SchemaDefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schemes: Vec<String> = schemes
            .into_iter()
            .map(|s| s.as_ref().to_ascii_lowercase())
            .collect();
        if schemes.is_empty() {
            return Err(SchemaDefinitionError::NoSchemes);
        }
        Ok(Self { schemes })
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }

    fn invalid(&self) -> ValidationError {
        ValidationError::invalid_format("url")
            .with_message("Please enter a valid URL")
            .with_param("schemes", self.schemes.join(","))
    }
}

impl Default for Url {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = ::url::Url::parse(input).map_err(|_| self.invalid())?;
        if !self.schemes.iter().any(|s| s == parsed.scheme()) {
            return Err(self.invalid());
        }
        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(self.invalid()),
        }
    }
}

#[must_use]
pub fn url() -> Url {
    Url::new()
}

// ============================================================================
// TESTS
// ============================================================================

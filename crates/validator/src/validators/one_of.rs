//! Set membership validators

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};
use crate::schema::SchemaDefinitionError;

fn collect_set<I, S>(values: I) -> Vec<Cow<'static, str>>
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    values.into_iter().map(Into::into).collect()
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a string is one of a fixed set of options.
///
/// Matching is exact: `"JSON"` is not a member of `{json, csv}`.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::OneOf;
///
/// let format = OneOf::new(["json", "csv"]).unwrap();
/// assert!(format.validate("csv").is_ok());
/// assert_eq!(format.validate("xml").unwrap_err().code, "one_of");
/// assert!(format.validate("JSON").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    options: Vec<Cow<'static, str>>,
}

impl OneOf {
    pub fn new<I, S>(options: I) -> Result<Self, SchemaDefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let options = collect_set(options);
        if options.is_empty() {
            return Err(SchemaDefinitionError::EmptyValueSet { constraint: "one_of" });
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(AsRef::as_ref)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.contains(input) {
            return Ok(());
        }
        let expected = self.options.join(", ");
        Err(
            ValidationError::new("one_of", format!("Must be one of: {expected}"))
                .with_param("expected", expected)
                .with_param("actual", input.to_owned()),
        )
    }
}

pub fn one_of<I, S>(options: I) -> Result<OneOf, SchemaDefinitionError>
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    OneOf::new(options)
}

// ============================================================================
// NOT IN
// ============================================================================

/// Rejects strings found in a reserved set, ignoring ASCII case.
///
/// An empty set is allowed and rejects nothing.
///
/// # Examples
///
/// ```
/// use shortlink_validator::foundation::Validate;
/// use shortlink_validator::validators::NotIn;
///
/// let code = NotIn::new(["api", "admin"]);
/// assert!(code.validate("my-link").is_ok());
/// assert_eq!(code.validate("Admin").unwrap_err().code, "reserved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotIn {
    reserved: Vec<Cow<'static, str>>,
}

impl NotIn {
    #[must_use]
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            reserved: collect_set(reserved),
        }
    }

    pub fn is_reserved(&self, value: &str) -> bool {
        self.reserved.iter().any(|r| r.eq_ignore_ascii_case(value))
    }
}

impl Validate for NotIn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.is_reserved(input) {
            Err(
                ValidationError::new("reserved", format!("'{input}' is reserved"))
                    .with_param("value", input.to_owned()),
            )
        } else {
            Ok(())
        }
    }
}

#[must_use]
pub fn not_in<I, S>(reserved: I) -> NotIn
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    NotIn::new(reserved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7d", true)]
    #[case("30d", true)]
    #[case("all", true)]
    #[case("7D", false)]
    #[case("ALL", false)]
    #[case(" 7d", false)]
    #[case("", false)]
    #[case("90d", false)]
    fn one_of_is_exact(#[case] input: &str, #[case] ok: bool) {
        let period = one_of(["7d", "30d", "all"]).unwrap();
        assert_eq!(period.validate(input).is_ok(), ok);
    }

    #[test]
    fn one_of_message_lists_options() {
        let err = one_of(["json", "csv"]).unwrap().validate("xml").unwrap_err();
        assert_eq!(err.message, "Must be one of: json, csv");
        assert_eq!(err.param("actual"), Some("xml"));
    }

    #[test]
    fn one_of_accepts_owned_options() {
        let domains = vec!["go2.video".to_owned(), "go2.tools".to_owned()];
        let validator = OneOf::new(domains).unwrap();
        assert!(validator.validate("go2.tools").is_ok());
        assert_eq!(validator.options().count(), 2);
    }

    #[test]
    fn one_of_rejects_empty_set() {
        assert_eq!(
            OneOf::new(Vec::<String>::new()).unwrap_err(),
            SchemaDefinitionError::EmptyValueSet { constraint: "one_of" }
        );
    }

    #[rstest]
    #[case("api")]
    #[case("API")]
    #[case("Dashboard")]
    fn not_in_ignores_case(#[case] input: &str) {
        let reserved = not_in(["api", "dashboard"]);
        assert!(reserved.validate(input).is_err());
    }

    #[test]
    fn not_in_empty_set_passes() {
        assert!(not_in(Vec::<String>::new()).validate("anything").is_ok());
    }
}

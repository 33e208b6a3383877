/// A schema that cannot be built.
///
/// These are programmer errors in a schema definition, reported once when
/// the schema or primitive is constructed. Bad caller data never produces
/// one; that is always a [`ValidationError`](crate::foundation::ValidationError).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaDefinitionError {
    /// Lower bound above upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: usize, max: usize },

    /// The pattern does not compile.
    #[error("invalid regex `{pattern}`: {reason}")]
    InvalidRegex { pattern: String, reason: String },

    /// Two fields with the same name in one schema.
    #[error("duplicate field `{field}` in schema `{schema}`")]
    DuplicateField { schema: String, field: String },

    #[error("empty field name in schema `{schema}`")]
    EmptyFieldName { schema: String },

    /// Field names are path segments, so they cannot contain the separator.
    #[error("field `{field}` in schema `{schema}` contains `.`")]
    DottedFieldName { schema: String, field: String },

    /// An enum constraint with nothing to match against.
    #[error("empty value set for `{constraint}`")]
    EmptyValueSet { constraint: &'static str },

    /// A URL constraint without any accepted scheme.
    #[error("URL constraint accepts no schemes")]
    NoSchemes,
}

impl SchemaDefinitionError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "SCHEMA_INVALID_RANGE",
            Self::InvalidRegex { .. } => "SCHEMA_INVALID_REGEX",
            Self::DuplicateField { .. } => "SCHEMA_DUPLICATE_FIELD",
            Self::EmptyFieldName { .. } => "SCHEMA_EMPTY_FIELD_NAME",
            Self::DottedFieldName { .. } => "SCHEMA_DOTTED_FIELD_NAME",
            Self::EmptyValueSet { .. } => "SCHEMA_EMPTY_VALUE_SET",
            Self::NoSchemes => "SCHEMA_NO_SCHEMES",
        }
    }
}

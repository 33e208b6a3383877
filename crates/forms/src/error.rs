//! Error types for building the form registry.

use shortlink_validator::schema::SchemaDefinitionError;

/// Problems with a [`FormsConfig`](crate::FormsConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The TOML document could not be parsed into a config.
    #[error("failed to parse forms config: {0}")]
    Parse(#[from] toml::de::Error),

    /// No base domain is configured, so no link could ever be created.
    #[error("base domain list is empty")]
    NoBaseDomains,

    /// A base domain is not a valid hostname.
    #[error("invalid base domain `{domain}`: {reason}")]
    InvalidDomain { domain: String, reason: String },

    /// A numeric limit is zero.
    #[error("`{field}` must be greater than zero")]
    ZeroLimit { field: &'static str },
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "CONFIG_PARSE",
            Self::NoBaseDomains => "CONFIG_NO_BASE_DOMAINS",
            Self::InvalidDomain { .. } => "CONFIG_INVALID_DOMAIN",
            Self::ZeroLimit { .. } => "CONFIG_ZERO_LIMIT",
        }
    }
}

/// Error type for the forms crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormsError {
    #[error(transparent)]
    Schema(#[from] SchemaDefinitionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A form name that matches no [`FormKind`](crate::FormKind).
    #[error("unknown form `{name}`")]
    UnknownForm { name: String },
}

impl FormsError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Schema(err) => err.code(),
            Self::Config(err) => err.code(),
            Self::UnknownForm { .. } => "FORMS_UNKNOWN_FORM",
        }
    }
}

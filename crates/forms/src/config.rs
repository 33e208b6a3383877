//! Configuration for the named form schemas.

use serde::{Deserialize, Serialize};
use shortlink_validator::foundation::Validate;
use shortlink_validator::validators::Hostname;

use crate::error::ConfigError;

/// Environment variable holding a comma-separated base domain list.
pub const BASE_DOMAINS_ENV: &str = "SHORTLINK_BASE_DOMAINS";

/// Settings the form schemas depend on.
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// # Examples
///
/// ```
/// use shortlink_forms::FormsConfig;
///
/// let config = FormsConfig::from_toml_str(r#"
///     base_domains = ["go2.video", "Links.Example.COM"]
///     max_expiration_years = 5
/// "#).unwrap();
///
/// assert_eq!(config.base_domains, ["go2.video", "links.example.com"]);
/// assert_eq!(config.max_url_length, 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormsConfig {
    /// Domains a short link may be created under.
    pub base_domains: Vec<String>,
    /// Short codes nobody may claim. Matched case-insensitively.
    pub reserved_codes: Vec<String>,
    /// Upper bound on the length of a destination URL.
    pub max_url_length: usize,
    /// How far ahead an expiration date may be set.
    pub max_expiration_years: u32,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            base_domains: ["go2.video", "go2.reviews", "go2.tools"]
                .map(String::from)
                .to_vec(),
            reserved_codes: [
                "api",
                "admin",
                "www",
                "app",
                "dashboard",
                "login",
                "logout",
                "signup",
                "register",
                "health",
                "status",
                "docs",
                "redoc",
                "qr",
                "stats",
                "analytics",
                "config",
                "settings",
            ]
            .map(String::from)
            .to_vec(),
            max_url_length: 2048,
            max_expiration_years: 10,
        }
    }
}

impl FormsConfig {
    /// Parses and validates a TOML document.
    ///
    /// Base domains are trimmed and lowercased before validation.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    ///
    /// See [`BASE_DOMAINS_ENV`]. Call [`validate`](Self::validate) afterwards.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(BASE_DOMAINS_ENV) {
            tracing::debug!(var = BASE_DOMAINS_ENV, "overriding base domains from environment");
            self.base_domains = raw
                .split(',')
                .map(str::trim)
                .filter(|domain| !domain.is_empty())
                .map(str::to_owned)
                .collect();
        }
        self.normalized()
    }

    /// Checks that the config can back the form schemas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_domains.is_empty() {
            return Err(ConfigError::NoBaseDomains);
        }
        for domain in &self.base_domains {
            Hostname
                .validate(domain)
                .map_err(|err| ConfigError::InvalidDomain {
                    domain: domain.clone(),
                    reason: err.message.into_owned(),
                })?;
        }
        if self.max_url_length == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "max_url_length",
            });
        }
        if self.max_expiration_years == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "max_expiration_years",
            });
        }
        Ok(())
    }

    fn normalized(mut self) -> Self {
        for domain in &mut self.base_domains {
            *domain = domain.trim().to_lowercase();
        }
        self
    }
}

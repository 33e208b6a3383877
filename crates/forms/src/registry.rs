//! Validate-by-name entry point over every named form.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shortlink_validator::prelude::{Clock, FormOutcome, Schema, validate_form, validate_update};

use crate::config::FormsConfig;
use crate::error::FormsError;
use crate::schemas;

/// Every named form the admin knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    CreateLinkRequest,
    LinkCreation,
    AdminLinkUpdate,
    LinkStats,
    UserProfile,
    PasswordProtection,
    PlanUpgrade,
    DailyReport,
    AnalyticsExport,
    UrlCheck,
    CustomCodeCheck,
    PasswordCheck,
    ExpirationCheck,
    DomainCheck,
}

impl FormKind {
    const ALL: [FormKind; 14] = [
        FormKind::CreateLinkRequest,
        FormKind::LinkCreation,
        FormKind::AdminLinkUpdate,
        FormKind::LinkStats,
        FormKind::UserProfile,
        FormKind::PasswordProtection,
        FormKind::PlanUpgrade,
        FormKind::DailyReport,
        FormKind::AnalyticsExport,
        FormKind::UrlCheck,
        FormKind::CustomCodeCheck,
        FormKind::PasswordCheck,
        FormKind::ExpirationCheck,
        FormKind::DomainCheck,
    ];

    pub fn all() -> &'static [FormKind] {
        &Self::ALL
    }

    /// The snake_case name, which is also the schema name.
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::CreateLinkRequest => "create_link_request",
            FormKind::LinkCreation => "link_creation",
            FormKind::AdminLinkUpdate => "admin_link_update",
            FormKind::LinkStats => "link_stats",
            FormKind::UserProfile => "user_profile",
            FormKind::PasswordProtection => "password_protection",
            FormKind::PlanUpgrade => "plan_upgrade",
            FormKind::DailyReport => "daily_report",
            FormKind::AnalyticsExport => "analytics_export",
            FormKind::UrlCheck => "url_check",
            FormKind::CustomCodeCheck => "custom_code_check",
            FormKind::PasswordCheck => "password_check",
            FormKind::ExpirationCheck => "expiration_check",
            FormKind::DomainCheck => "domain_check",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormsError::UnknownForm { name: s.to_owned() })
    }
}

/// All named schemas, built once from a [`FormsConfig`].
///
/// Cloning shares the schemas. The registry is `Send + Sync` and keeps no
/// state between calls.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shortlink_forms::{FormKind, FormRegistry, FormsConfig};
///
/// let registry = FormRegistry::new(&FormsConfig::default()).unwrap();
/// let outcome = registry.validate(
///     FormKind::AnalyticsExport,
///     &json!({ "format": "xml", "period": "7d" }),
/// );
/// assert_eq!(outcome.errors().unwrap().get("format"), Some("Must be one of: json, csv"));
/// ```
#[derive(Debug, Clone)]
pub struct FormRegistry {
    clock: Clock,
    create_link_request: Arc<Schema>,
    link_creation: Arc<Schema>,
    admin_link_update: Arc<Schema>,
    link_stats: Arc<Schema>,
    user_profile: Arc<Schema>,
    password_protection: Arc<Schema>,
    plan_upgrade: Arc<Schema>,
    daily_report: Arc<Schema>,
    analytics_export: Arc<Schema>,
    url_check: Arc<Schema>,
    custom_code_check: Arc<Schema>,
    password_check: Arc<Schema>,
    expiration_check: Arc<Schema>,
    domain_check: Arc<Schema>,
}

impl FormRegistry {
    /// Builds every schema against the system clock.
    pub fn new(config: &FormsConfig) -> Result<Self, FormsError> {
        Self::with_clock(config, Clock::System)
    }

    /// Builds every schema with date rules reading "now" from `clock`.
    pub fn with_clock(config: &FormsConfig, clock: Clock) -> Result<Self, FormsError> {
        config.validate()?;

        let registry = Self {
            clock,
            create_link_request: Arc::new(schemas::create_link_request(config)?),
            link_creation: Arc::new(schemas::link_creation(config, clock)?),
            admin_link_update: Arc::new(schemas::admin_link_update(clock)?),
            link_stats: Arc::new(schemas::link_stats()?),
            user_profile: Arc::new(schemas::user_profile()?),
            password_protection: Arc::new(schemas::password_protection()?),
            plan_upgrade: Arc::new(schemas::plan_upgrade()?),
            daily_report: Arc::new(schemas::daily_report(clock)?),
            analytics_export: Arc::new(schemas::analytics_export()?),
            url_check: Arc::new(schemas::url_check(config)?),
            custom_code_check: Arc::new(schemas::custom_code_check(config)?),
            password_check: Arc::new(schemas::password_check()?),
            expiration_check: Arc::new(schemas::expiration_check(config, clock)?),
            domain_check: Arc::new(schemas::domain_check()?),
        };

        tracing::debug!(
            forms = FormKind::ALL.len(),
            base_domains = ?config.base_domains,
            fixed_clock = matches!(clock, Clock::Fixed(_)),
            "form registry built"
        );
        Ok(registry)
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn schema(&self, kind: FormKind) -> &Schema {
        self.slot(kind)
    }

    /// Shared handle to a schema, for callers that outlive the registry.
    pub fn schema_arc(&self, kind: FormKind) -> Arc<Schema> {
        Arc::clone(self.slot(kind))
    }

    fn slot(&self, kind: FormKind) -> &Arc<Schema> {
        match kind {
            FormKind::CreateLinkRequest => &self.create_link_request,
            FormKind::LinkCreation => &self.link_creation,
            FormKind::AdminLinkUpdate => &self.admin_link_update,
            FormKind::LinkStats => &self.link_stats,
            FormKind::UserProfile => &self.user_profile,
            FormKind::PasswordProtection => &self.password_protection,
            FormKind::PlanUpgrade => &self.plan_upgrade,
            FormKind::DailyReport => &self.daily_report,
            FormKind::AnalyticsExport => &self.analytics_export,
            FormKind::UrlCheck => &self.url_check,
            FormKind::CustomCodeCheck => &self.custom_code_check,
            FormKind::PasswordCheck => &self.password_check,
            FormKind::ExpirationCheck => &self.expiration_check,
            FormKind::DomainCheck => &self.domain_check,
        }
    }

    pub fn validate(&self, kind: FormKind, data: &Value) -> FormOutcome {
        validate_form(self.schema(kind), data)
    }

    /// Validates an edit of a stored record; read-only fields must not change.
    pub fn validate_update(&self, kind: FormKind, original: &Value, data: &Value) -> FormOutcome {
        validate_update(self.schema(kind), original, data)
    }

    /// Looks the form up by its snake_case name.
    pub fn validate_named(&self, name: &str, data: &Value) -> Result<FormOutcome, FormsError> {
        let kind = name.parse::<FormKind>()?;
        Ok(self.validate(kind, data))
    }
}

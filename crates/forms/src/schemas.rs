//! The named link-shortener form schemas.
//!
//! Each builder is a plain function so a schema can be rebuilt against a
//! different config or clock. [`FormRegistry`](crate::FormRegistry) builds
//! all of them once.

use shortlink_validator::prelude::*;

use crate::config::FormsConfig;
use crate::prebuilt::{
    PASSWORD_MIN, ReservedCode, custom_code_charset, custom_code_field, email_field,
    password_field, url_field,
};

pub const EXPIRATION_MESSAGE: &str = "Expiration date must be in the future";
pub const DOMAIN_EMPTY_MESSAGE: &str = "Domain cannot be empty";
pub const DOMAIN_FORMAT_MESSAGE: &str = "Invalid domain format";
pub const CUSTOM_CODE_EMPTY_MESSAGE: &str = "Custom code cannot be empty";
pub const PASSWORD_EMPTY_MESSAGE: &str = "Password cannot be empty";
pub const URL_EMPTY_MESSAGE: &str = "URL cannot be empty";
pub const URL_FORMAT_MESSAGE: &str = "Invalid URL format. Must be a valid HTTP or HTTPS URL";

/// Upper bound for the standalone password check, which is looser than the
/// link password fields.
pub const PASSWORD_CHECK_MAX: usize = 128;

pub const PERIODS: [&str; 3] = ["7d", "30d", "all"];
pub const EXPORT_FORMATS: [&str; 2] = ["json", "csv"];
pub const PLAN_TYPES: [&str; 2] = ["free", "paid"];

fn expires_at(clock: Clock) -> FieldSchema {
    FieldSchema::datetime()
        .blank_is_absent()
        .check_with(in_future(clock).json(), EXPIRATION_MESSAGE)
}

fn base_domain(config: &FormsConfig) -> Result<FieldSchema, SchemaDefinitionError> {
    Ok(FieldSchema::string().check(one_of(config.base_domains.clone())?.json()))
}

// ============================================================================
// LINKS
// ============================================================================

/// The request body shared by every link creation path.
pub fn create_link_request(config: &FormsConfig) -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("create_link_request")
        .field("long_url", FieldSchema::string().required().check(url().json()))
        .field("base_domain", base_domain(config)?.required())
        .build()
}

/// The admin link creation form.
///
/// Extends [`create_link_request`] with a length-capped URL and the
/// optional custom code, password and expiration fields. The base domain
/// is inherited and stays required.
pub fn link_creation(config: &FormsConfig, clock: Clock) -> Result<Schema, SchemaDefinitionError> {
    create_link_request(config)?.extend(
        "link_creation",
        [
            ("long_url", url_field(config.max_url_length).required()),
            ("custom_code", custom_code_field().blank_is_absent()),
            ("password", password_field().blank_is_absent()),
            ("expires_at", expires_at(clock)),
        ],
    )
}

pub fn admin_link_update(clock: Clock) -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("admin_link_update")
        .field("disabled", FieldSchema::boolean())
        .field("expires_at", expires_at(clock))
        .field("password", password_field().blank_is_absent())
        .build()
}

/// Query for per-link statistics. The period defaults to `7d`.
pub fn link_stats() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("link_stats")
        .field(
            "period",
            FieldSchema::string()
                .blank_is_absent()
                .with_default(PERIODS[0])
                .check(one_of(PERIODS)?.json()),
        )
        .build()
}

// ============================================================================
// ACCOUNT
// ============================================================================

/// Profile edits. The email is fixed once the profile exists; use
/// [`validate_update`] to enforce that.
pub fn user_profile() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("user_profile")
        .field(
            "display_name",
            FieldSchema::string()
                .required()
                .blank_is_absent()
                .trim()
                .check(length_range(1, 100)?.json()),
        )
        .field("email", email_field().required().read_only())
        .build()
}

/// The password prompt shown before redirecting to a protected link.
pub fn password_protection() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("password_protection")
        .field(
            "password",
            FieldSchema::string()
                .required_with(PASSWORD_EMPTY_MESSAGE)
                .blank_is_absent()
                .check(length_range(1, 100)?.json()),
        )
        .build()
}

pub fn plan_upgrade() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("plan_upgrade")
        .field(
            "plan_type",
            FieldSchema::string().required().check(one_of(PLAN_TYPES)?.json()),
        )
        .build()
}

// ============================================================================
// REPORTS
// ============================================================================

pub fn daily_report(clock: Clock) -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("daily_report")
        .field(
            "date",
            FieldSchema::datetime()
                .required()
                .check(not_in_future(clock).json()),
        )
        .field("domain_filter", FieldSchema::string().blank_is_absent())
        .field("email_recipients", FieldSchema::array(email_field()))
        .build()
}

pub fn analytics_export() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("analytics_export")
        .field(
            "format",
            FieldSchema::string().required().check(one_of(EXPORT_FORMATS)?.json()),
        )
        .field(
            "period",
            FieldSchema::string().required().check(one_of(PERIODS)?.json()),
        )
        .build()
}

// ============================================================================
// STANDALONE CHECKS
// ============================================================================

/// A URL typed into the shortener before the link is created.
pub fn url_check(config: &FormsConfig) -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("url_check")
        .field(
            "url",
            FieldSchema::string()
                .required_with(URL_EMPTY_MESSAGE)
                .blank_is_absent()
                .trim()
                .check(length_range(1, config.max_url_length)?.json())
                .check_with(url().json(), URL_FORMAT_MESSAGE),
        )
        .build()
}

/// Strength check for a link password. Whitespace is kept as typed.
pub fn password_check() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("password_check")
        .field(
            "password",
            FieldSchema::string()
                .required_with(PASSWORD_EMPTY_MESSAGE)
                .blank_is_absent()
                .check_with(
                    min_length(PASSWORD_MIN).json(),
                    "Password must be at least 4 characters long",
                )
                .check_with(
                    max_length(PASSWORD_CHECK_MAX).json(),
                    "Password cannot be longer than 128 characters",
                ),
        )
        .build()
}

/// Availability check for a custom short code.
///
/// Surrounding whitespace is dropped before checking. Reserved codes are
/// rejected regardless of case.
pub fn custom_code_check(config: &FormsConfig) -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("custom_code_check")
        .field(
            "code",
            FieldSchema::string()
                .required_with(CUSTOM_CODE_EMPTY_MESSAGE)
                .blank_is_absent()
                .trim()
                .check(length_range(1, 50)?.json())
                .refine(custom_code_charset())
                .check(ReservedCode::new(config.reserved_codes.clone()).json()),
        )
        .build()
}

/// An expiration date that is in the future and within the configured
/// horizon.
pub fn expiration_check(config: &FormsConfig, clock: Clock) -> Result<Schema, SchemaDefinitionError> {
    let years = config.max_expiration_years;
    let span = match years {
        1 => "1 year".to_owned(),
        n => format!("{n} years"),
    };
    Schema::builder("expiration_check")
        .field(
            "expires_at",
            FieldSchema::datetime()
                .required()
                .check_with(in_future(clock).json(), EXPIRATION_MESSAGE)
                .check_with(
                    NotAfter::years(years, clock).json(),
                    format!("Expiration date cannot be more than {span} in the future"),
                ),
        )
        .build()
}

/// A domain name, normalized to lowercase.
pub fn domain_check() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("domain_check")
        .field(
            "domain",
            FieldSchema::string()
                .required_with(DOMAIN_EMPTY_MESSAGE)
                .blank_is_absent()
                .trim()
                .lowercase()
                .check(length_range(1, 253)?.json())
                .check_with(Hostname.json(), DOMAIN_FORMAT_MESSAGE),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn clock() -> Clock {
        Clock::Fixed(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn link_creation_extends_the_request() {
        let config = FormsConfig::default();
        let base = create_link_request(&config).unwrap();
        let form = link_creation(&config, clock()).unwrap();

        assert_eq!(
            form.field_names().collect::<Vec<_>>(),
            ["long_url", "base_domain", "custom_code", "password", "expires_at"]
        );
        assert!(base.field("base_domain").unwrap().is_required());
        assert!(form.field("base_domain").unwrap().is_required());
        assert_eq!(base.len(), 2);

        let outcome = validate_form(&form, &json!({ "long_url": "https://example.com" }));
        assert_eq!(
            outcome.errors().unwrap().iter().collect::<Vec<_>>(),
            [("base_domain", "This field is required")]
        );
    }

    #[test]
    fn base_domain_must_be_configured() {
        let form = create_link_request(&FormsConfig::default()).unwrap();
        let outcome = validate_form(
            &form,
            &json!({ "long_url": "https://example.com", "base_domain": "evil.tld" }),
        );
        assert_eq!(
            outcome.errors().unwrap().get("base_domain"),
            Some("Must be one of: go2.video, go2.reviews, go2.tools")
        );
    }

    #[test]
    fn link_stats_period_defaults() {
        let outcome = validate_form(&link_stats().unwrap(), &json!({}));
        assert_eq!(outcome.data(), Some(&json!({ "period": "7d" })));

        let outcome = validate_form(&link_stats().unwrap(), &json!({ "period": "90d" }));
        assert!(!outcome.is_success());
    }

    #[test]
    fn profile_email_is_read_only() {
        let schema = user_profile().unwrap();
        let original = json!({ "display_name": "Ada", "email": "ada@example.com" });

        let same = json!({ "display_name": "Ada L.", "email": "ada@example.com" });
        assert!(validate_update(&schema, &original, &same).is_success());

        let changed = json!({ "display_name": "Ada", "email": "other@example.com" });
        assert_eq!(
            validate_update(&schema, &original, &changed).errors().unwrap().get("email"),
            Some("This field cannot be changed")
        );
    }

    #[test]
    fn blank_display_name_is_missing() {
        let outcome = validate_form(
            &user_profile().unwrap(),
            &json!({ "display_name": "   ", "email": "ada@example.com" }),
        );
        assert_eq!(
            outcome.errors().unwrap().get("display_name"),
            Some("This field is required")
        );
    }

    #[test]
    fn custom_code_check_rejects_reserved_codes() {
        let schema = custom_code_check(&FormsConfig::default()).unwrap();

        let outcome = validate_form(&schema, &json!({ "code": "  Admin " }));
        assert_eq!(
            outcome.errors().unwrap().get("code"),
            Some("'Admin' is a reserved code and cannot be used")
        );

        let outcome = validate_form(&schema, &json!({ "code": "  launch-2025 " }));
        assert_eq!(outcome.data(), Some(&json!({ "code": "launch-2025" })));

        let outcome = validate_form(&schema, &json!({ "code": "" }));
        assert_eq!(outcome.errors().unwrap().get("code"), Some(CUSTOM_CODE_EMPTY_MESSAGE));
    }

    #[test]
    fn expiration_horizon_follows_config() {
        let config = FormsConfig {
            max_expiration_years: 1,
            ..FormsConfig::default()
        };
        let schema = expiration_check(&config, clock()).unwrap();
        let now = clock().now();

        let soon = (now + TimeDelta::days(30)).to_rfc3339();
        assert!(validate_form(&schema, &json!({ "expires_at": soon })).is_success());

        let late = (now + TimeDelta::days(400)).to_rfc3339();
        assert_eq!(
            validate_form(&schema, &json!({ "expires_at": late })).errors().unwrap().get("expires_at"),
            Some("Expiration date cannot be more than 1 year in the future")
        );

        assert_eq!(
            validate_form(&schema, &json!({ "expires_at": now.to_rfc3339() }))
                .errors()
                .unwrap()
                .get("expires_at"),
            Some(EXPIRATION_MESSAGE)
        );
    }

    #[test]
    fn url_check_trims_and_reports_original_messages() {
        let schema = url_check(&FormsConfig::default()).unwrap();

        let outcome = validate_form(&schema, &json!({ "url": "  https://go2.video/docs " }));
        assert_eq!(outcome.data(), Some(&json!({ "url": "https://go2.video/docs" })));

        for (input, message) in [
            ("   ", URL_EMPTY_MESSAGE),
            ("ftp://go2.video", URL_FORMAT_MESSAGE),
            ("go2.video", URL_FORMAT_MESSAGE),
        ] {
            let outcome = validate_form(&schema, &json!({ "url": input }));
            assert_eq!(outcome.errors().unwrap().get("url"), Some(message), "{input}");
        }

        let long = format!("https://go2.video/{}", "a".repeat(2048));
        assert_eq!(
            validate_form(&schema, &json!({ "url": long })).errors().unwrap().get("url"),
            Some("Must be at most 2048 characters")
        );
    }

    #[test]
    fn password_check_bounds() {
        let schema = password_check().unwrap();
        let check = |password: String| validate_form(&schema, &json!({ "password": password }));

        assert!(check("abcd".into()).is_success());
        assert!(check("a".repeat(128)).is_success());
        assert_eq!(
            check("abc".into()).errors().unwrap().get("password"),
            Some("Password must be at least 4 characters long")
        );
        assert_eq!(
            check("a".repeat(129)).errors().unwrap().get("password"),
            Some("Password cannot be longer than 128 characters")
        );
        assert_eq!(
            check("  ".into()).errors().unwrap().get("password"),
            Some(PASSWORD_EMPTY_MESSAGE)
        );
    }

    #[test]
    fn domain_check_normalizes() {
        let schema = domain_check().unwrap();

        let outcome = validate_form(&schema, &json!({ "domain": "  Go2.Video " }));
        assert_eq!(outcome.data(), Some(&json!({ "domain": "go2.video" })));

        for (input, message) in [
            ("", DOMAIN_EMPTY_MESSAGE),
            ("bad_domain.com", DOMAIN_FORMAT_MESSAGE),
            ("-x.com", DOMAIN_FORMAT_MESSAGE),
        ] {
            let outcome = validate_form(&schema, &json!({ "domain": input }));
            assert_eq!(outcome.errors().unwrap().get("domain"), Some(message), "{input}");
        }
    }
}

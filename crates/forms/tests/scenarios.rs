//! End-to-end checks of the named forms through the registry.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use shortlink_forms::{FormKind, FormRegistry, FormsConfig, password_validator};
use shortlink_validator::prelude::{Clock, create_field_validator};

// ============================================================================
// FIXTURES
// ============================================================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn registry() -> FormRegistry {
    init_tracing();
    let config = FormsConfig {
        base_domains: vec!["valid.tld".into(), "go2.video".into()],
        ..FormsConfig::default()
    };
    FormRegistry::with_clock(&config, Clock::Fixed(now())).unwrap()
}

fn errors(outcome: &shortlink_validator::FormOutcome) -> Vec<(&str, &str)> {
    outcome
        .errors()
        .map(|map| map.iter().collect())
        .unwrap_or_default()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[rstest]
fn invalid_url_reports_only_long_url(registry: FormRegistry) {
    let outcome = registry.validate(
        FormKind::LinkCreation,
        &json!({ "long_url": "not-a-url", "base_domain": "valid.tld" }),
    );
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "success": false,
            "errors": { "long_url": "Please enter a valid URL (including http:// or https://)" }
        })
    );
}

#[rstest]
fn short_custom_code_reports_min_length(registry: FormRegistry) {
    let outcome = registry.validate(
        FormKind::LinkCreation,
        &json!({ "long_url": "https://x.com", "base_domain": "valid.tld", "custom_code": "ab" }),
    );
    assert_eq!(
        errors(&outcome),
        vec![("custom_code", "Must be at least 3 characters")]
    );
}

#[rstest]
fn admin_update_password_minimum(registry: FormRegistry) {
    let outcome = registry.validate(FormKind::AdminLinkUpdate, &json!({ "password": "abc" }));
    assert_eq!(errors(&outcome), vec![("password", "Must be at least 4 characters")]);

    let outcome = registry.validate(FormKind::AdminLinkUpdate, &json!({ "password": "abcd" }));
    assert!(outcome.is_success());
}

#[rstest]
fn export_format_outside_enum(registry: FormRegistry) {
    let outcome = registry.validate(
        FormKind::AnalyticsExport,
        &json!({ "format": "xml", "period": "7d" }),
    );
    assert_eq!(errors(&outcome), vec![("format", "Must be one of: json, csv")]);
}

#[test]
fn password_validator_on_bare_values() {
    let password = password_validator();
    assert!(!password.validate_str("").is_valid());
    assert!(password.validate_str("abcd").is_valid());

    // same fragment, rebound
    let rebound = create_field_validator(password.field().clone());
    assert_eq!(rebound.validate_str(""), password.validate_str(""));
}

// ============================================================================
// BOUNDARIES
// ============================================================================

fn link(extra: Value) -> Value {
    let mut data = json!({ "long_url": "https://example.com", "base_domain": "go2.video" });
    if let (Value::Object(map), Value::Object(extra)) = (&mut data, extra) {
        map.extend(extra);
    }
    data
}

#[rstest]
#[case::custom_code_min("custom_code", 3, true)]
#[case::custom_code_max("custom_code", 50, true)]
#[case::custom_code_below("custom_code", 2, false)]
#[case::custom_code_above("custom_code", 51, false)]
#[case::password_min("password", 4, true)]
#[case::password_max("password", 100, true)]
#[case::password_below("password", 3, false)]
#[case::password_above("password", 101, false)]
fn length_bounds_are_inclusive(
    registry: FormRegistry,
    #[case] field: &str,
    #[case] len: usize,
    #[case] valid: bool,
) {
    let outcome = registry.validate(FormKind::LinkCreation, &link(json!({ field: "a".repeat(len) })));
    assert_eq!(outcome.is_success(), valid, "{field} of length {len}");
    if !valid {
        assert_eq!(errors(&outcome).len(), 1);
        assert_eq!(errors(&outcome)[0].0, field);
    }
}

#[rstest]
#[case("json", true)]
#[case("csv", true)]
#[case("JSON", false)]
#[case("Csv", false)]
#[case(" json", false)]
#[case("", false)]
fn export_format_is_case_sensitive(registry: FormRegistry, #[case] format: &str, #[case] valid: bool) {
    let outcome = registry.validate(
        FormKind::AnalyticsExport,
        &json!({ "format": format, "period": "all" }),
    );
    assert_eq!(outcome.is_success(), valid, "{format:?}");
}

#[rstest]
#[case::now(TimeDelta::zero(), false)]
#[case::one_second_later(TimeDelta::seconds(1), true)]
#[case::one_second_earlier(TimeDelta::seconds(-1), false)]
#[case::next_year(TimeDelta::days(365), true)]
fn expiration_must_be_strictly_future(
    registry: FormRegistry,
    #[case] offset: TimeDelta,
    #[case] valid: bool,
) {
    let expires_at = (now() + offset).to_rfc3339();
    for kind in [FormKind::LinkCreation, FormKind::AdminLinkUpdate] {
        let outcome = registry.validate(kind, &link(json!({ "expires_at": expires_at })));
        assert_eq!(outcome.is_success(), valid, "{kind} at {expires_at}");
        if !valid {
            assert_eq!(
                outcome.errors().unwrap().get("expires_at"),
                Some("Expiration date must be in the future")
            );
        }
    }
}

#[rstest]
fn report_date_may_be_now_but_not_later(registry: FormRegistry) {
    let today = json!({ "date": now().to_rfc3339() });
    assert!(registry.validate(FormKind::DailyReport, &today).is_success());

    let tomorrow = json!({ "date": (now() + TimeDelta::days(1)).to_rfc3339() });
    assert_eq!(
        errors(&registry.validate(FormKind::DailyReport, &tomorrow)),
        vec![("date", "Date cannot be in the future")]
    );
}

// ============================================================================
// OPTIONALITY AND PATHS
// ============================================================================

#[rstest]
fn absent_optional_fields_never_fail(registry: FormRegistry) {
    for data in [
        link(json!({})),
        link(json!({ "custom_code": null, "password": null, "expires_at": null })),
        link(json!({ "custom_code": "", "password": "  ", "expires_at": "" })),
    ] {
        let outcome = registry.validate(FormKind::LinkCreation, &data);
        assert!(outcome.is_success(), "{data}");
    }

    assert!(registry.validate(FormKind::AdminLinkUpdate, &json!({})).is_success());
}

#[rstest]
#[case::missing(json!({ "long_url": "https://example.com" }))]
#[case::null(json!({ "long_url": "https://example.com", "base_domain": null }))]
fn link_creation_requires_base_domain(registry: FormRegistry, #[case] data: Value) {
    let outcome = registry.validate(FormKind::LinkCreation, &data);
    assert_eq!(errors(&outcome), vec![("base_domain", "This field is required")]);
}

#[rstest]
fn disabled_false_is_a_value(registry: FormRegistry) {
    let outcome = registry.validate(FormKind::AdminLinkUpdate, &json!({ "disabled": false }));
    assert_eq!(outcome.data(), Some(&json!({ "disabled": false })));

    let outcome = registry.validate(FormKind::AdminLinkUpdate, &json!({ "disabled": "no" }));
    assert_eq!(errors(&outcome), vec![("disabled", "Expected boolean, got string")]);
}

#[rstest]
fn recipient_errors_carry_the_index(registry: FormRegistry) {
    let outcome = registry.validate(
        FormKind::DailyReport,
        &json!({
            "date": "2025-05-31",
            "email_recipients": ["ops@go2.video", "nobody", "team@go2.video", "also bad"]
        }),
    );
    let keys: Vec<&str> = errors(&outcome).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["email_recipients.1", "email_recipients.3"]);
}

#[rstest]
fn null_recipient_is_not_skipped(registry: FormRegistry) {
    let outcome = registry.validate(
        FormKind::DailyReport,
        &json!({ "date": "2020-01-01", "email_recipients": [null, "ok@go2.video"] }),
    );
    assert_eq!(errors(&outcome), vec![("email_recipients.0", "This field is required")]);
}

#[rstest]
fn every_failing_field_is_reported_once(registry: FormRegistry) {
    let outcome = registry.validate(
        FormKind::LinkCreation,
        &json!({
            "long_url": "ftp://example.com",
            "base_domain": "unknown.tld",
            "custom_code": "a b",
            "password": "x",
            "expires_at": "soon"
        }),
    );
    assert_eq!(
        errors(&outcome),
        vec![
            ("long_url", "Please enter a valid URL (including http:// or https://)"),
            ("base_domain", "Must be one of: valid.tld, go2.video"),
            ("custom_code", "Custom code can only contain letters, numbers, hyphens, and underscores"),
            ("password", "Must be at least 4 characters"),
            ("expires_at", "Please enter a valid date"),
        ]
    );
}

#[rstest]
fn non_object_input_is_a_general_error(registry: FormRegistry) {
    let outcome = registry.validate(FormKind::PlanUpgrade, &json!(["free"]));
    assert_eq!(errors(&outcome).len(), 1);
    assert_eq!(errors(&outcome)[0].0, "general");
}

// ============================================================================
// SUPPLEMENTARY FORMS
// ============================================================================

#[rstest]
#[case::plan("plan_upgrade", json!({ "plan_type": "paid" }), true)]
#[case::plan_unknown("plan_upgrade", json!({ "plan_type": "enterprise" }), false)]
#[case::stats_default("link_stats", json!({}), true)]
#[case::protected("password_protection", json!({ "password": "x" }), true)]
#[case::protected_empty("password_protection", json!({ "password": "" }), false)]
#[case::domain("domain_check", json!({ "domain": "Go2.Tools" }), true)]
#[case::reserved("custom_code_check", json!({ "code": "API" }), false)]
#[case::url("url_check", json!({ "url": "https://go2.video" }), true)]
#[case::url_empty("url_check", json!({ "url": "" }), false)]
#[case::password_check("password_check", json!({ "password": "a".repeat(128) }), true)]
#[case::password_check_long("password_check", json!({ "password": "a".repeat(129) }), false)]
fn forms_by_name(
    registry: FormRegistry,
    #[case] name: &str,
    #[case] data: Value,
    #[case] valid: bool,
) {
    let outcome = registry.validate_named(name, &data).unwrap();
    assert_eq!(outcome.is_success(), valid, "{name}: {data}");
}

#[rstest]
fn profile_update_keeps_email(registry: FormRegistry) {
    let original = json!({ "display_name": "Ops", "email": "ops@go2.video" });

    let outcome = registry.validate_update(
        FormKind::UserProfile,
        &original,
        &json!({ "display_name": "  Operations  ", "email": "ops@go2.video" }),
    );
    assert_eq!(
        outcome.data(),
        Some(&json!({ "display_name": "Operations", "email": "ops@go2.video" }))
    );

    let outcome = registry.validate_update(
        FormKind::UserProfile,
        &original,
        &json!({ "display_name": "Ops", "email": "root@go2.video" }),
    );
    assert_eq!(errors(&outcome), vec![("email", "This field cannot be changed")]);
}

#[rstest]
fn expiration_check_uses_the_default_horizon(registry: FormRegistry) {
    let within = json!({ "expires_at": (now() + TimeDelta::days(365 * 9)).to_rfc3339() });
    assert!(registry.validate(FormKind::ExpirationCheck, &within).is_success());

    let beyond = json!({ "expires_at": (now() + TimeDelta::days(365 * 11)).to_rfc3339() });
    assert_eq!(
        errors(&registry.validate(FormKind::ExpirationCheck, &beyond)),
        vec![("expires_at", "Expiration date cannot be more than 10 years in the future")]
    );
}

//! Property-based tests over the named forms.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{Value, json};
use shortlink_forms::{FormKind, FormRegistry, FormsConfig};
use shortlink_validator::prelude::{Clock, FormOutcome};

fn registry() -> FormRegistry {
    let clock = Clock::Fixed(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    FormRegistry::with_clock(&FormsConfig::default(), clock).unwrap()
}

fn optional_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        "[ a-zA-Z0-9_!-]{0,60}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn normalized_output_revalidates_unchanged(
        kind in prop::sample::select(FormKind::all().to_vec()),
        a in optional_text(),
        b in optional_text(),
    ) {
        let registry = registry();
        let input = json!({
            "long_url": a,
            "base_domain": "go2.video",
            "url": b,
            "custom_code": b,
            "display_name": a,
            "email": "ops@go2.video",
            "domain": b,
            "code": a,
            "password": b,
        });
        if let FormOutcome::Success(first) = registry.validate(kind, &input) {
            let second = registry.validate(kind, &first);
            prop_assert_eq!(second, FormOutcome::Success(first));
        }
    }

    #[test]
    fn valid_custom_codes_pass_link_creation(code in "[A-Za-z0-9_-]{3,50}") {
        let outcome = registry().validate(
            FormKind::LinkCreation,
            &json!({ "long_url": "https://example.com", "base_domain": "go2.video", "custom_code": code }),
        );
        prop_assert!(outcome.is_success());
    }

    #[test]
    fn admin_update_only_reports_supplied_fields(password in prop::option::of("[a-z]{0,8}")) {
        let data = match &password {
            Some(p) => json!({ "password": p }),
            None => json!({}),
        };
        let outcome = registry().validate(FormKind::AdminLinkUpdate, &data);
        let expect_failure = password.as_deref().is_some_and(|p| !p.is_empty() && p.len() < 4);
        prop_assert_eq!(!outcome.is_success(), expect_failure);
        if let Some(errors) = outcome.errors() {
            prop_assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["password"]);
        }
    }
}

//! Property-based tests for shortlink-validator.

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use shortlink_validator::prelude::*;

fn profile_schema() -> Schema {
    Schema::builder("profile")
        .field(
            "display_name",
            FieldSchema::string()
                .required()
                .trim()
                .check(length_range(1, 100).unwrap().json()),
        )
        .field(
            "domain",
            FieldSchema::string().trim().lowercase().blank_is_absent(),
        )
        .build()
        .unwrap()
}

fn plain_schema() -> Schema {
    Schema::builder("plain")
        .field("a", FieldSchema::string())
        .field("b", FieldSchema::any())
        .build()
        .unwrap()
}

fn object_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-d]", "[ a-zA-Z0-9]{0,12}", 0..5).prop_map(|entries| {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect::<Map<String, Value>>(),
        )
    })
}

// ============================================================================
// IDEMPOTENCE: validating normalized output yields the same output
// ============================================================================

proptest! {
    #[test]
    fn normalization_is_idempotent(name in "[ a-zA-Z]{1,20}", domain in "[ a-zA-Z.]{0,20}") {
        let schema = profile_schema();
        let input = json!({ "display_name": name, "domain": domain });
        if let FormOutcome::Success(first) = validate_form(&schema, &input) {
            let second = validate_form(&schema, &first);
            prop_assert_eq!(second, FormOutcome::Success(first));
        }
    }

    #[test]
    fn schema_without_transforms_returns_input(input in object_strategy()) {
        let outcome = validate_form(&plain_schema(), &input);
        prop_assert_eq!(outcome, FormOutcome::Success(input));
    }

    #[test]
    fn validation_is_deterministic(input in object_strategy()) {
        let schema = profile_schema();
        prop_assert_eq!(validate_form(&schema, &input), validate_form(&schema, &input));
    }
}

// ============================================================================
// BOUNDARIES: length ranges are inclusive and counted in chars
// ============================================================================

proptest! {
    #[test]
    fn length_range_is_inclusive(len in 0usize..120) {
        let password = length_range(4, 100).unwrap();
        let input = "é".repeat(len);
        prop_assert_eq!(password.validate(input.as_str()).is_ok(), (4..=100).contains(&len));
    }
}

// ============================================================================
// OPTIONALITY: an absent optional field never appears in the error map
// ============================================================================

proptest! {
    #[test]
    fn absent_optional_fields_are_silent(present in any::<bool>(), code in "[a-z!]{0,6}") {
        let schema = Schema::builder("link")
            .field(
                "custom_code",
                FieldSchema::string()
                    .blank_is_absent()
                    .check(length_range(3, 50).unwrap().json())
                    .check(matches_regex("[A-Za-z0-9_-]+").unwrap().json()),
            )
            .build()
            .unwrap();

        let input = if present { json!({ "custom_code": code }) } else { json!({}) };
        let outcome = validate_form(&schema, &input);
        if !present || code.trim().is_empty() {
            prop_assert!(outcome.is_success());
        }
    }
}

// ============================================================================
// COMPOSITION LAWS: a field with refinements a and b fails iff a or b fails
// ============================================================================

proptest! {
    #[test]
    fn refinements_fail_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let field = FieldSchema::string().check(a.json()).check(b.json());

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(validate_field(&field, &json!(s)).is_valid(), a_ok && b_ok);
    }

    #[test]
    fn each_reports_exactly_the_failing_indices(items in prop::collection::vec("[a-z]{0,4}", 0..8)) {
        let validator = min_length(2).json().each().json();
        let value = json!(items);
        let expected: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(_, s)| s.chars().count() < 2)
            .map(|(i, _)| i.to_string())
            .collect();
        let expected_joined = expected.join(",");

        match validator.validate(&value) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => prop_assert_eq!(err.param("failed_indices"), Some(expected_joined.as_str())),
        }
    }
}

//! Tests for the fluent assertion API.

use super::*;
use std::cmp::Ordering;

#[test]
fn test_present_value_is_present() {
    let value = Some("something");

    // Should not panic
    expect(&value).to_be_present();
}

#[test]
fn test_empty_option_is_empty() {
    let value: Option<&str> = None;

    // Should not panic
    expect(&value).to_be_empty();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_present_fails_on_empty() {
    let value: Option<&str> = None;

    expect(&value).to_be_present();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_empty_fails_on_present() {
    let value = Some("something");

    expect(&value).to_be_empty();
}

#[test]
fn test_contains_matching_value() {
    let value = Some("something");

    expect(&value).to_contain(&"something");
}

#[test]
#[should_panic(expected = "Option contained \"something\"")]
fn test_contains_names_both_values_on_mismatch() {
    let value = Some("something");

    // The panic message names the actual contained value; the expected one
    // is part of the description.
    expect(&value).to_contain(&"something else");
}

#[test]
fn test_contains_failure_carries_both_values() {
    let value = Some("something");

    let result = expect(&value).evaluate_contains(&"something else");
    assert!(!result.passed);
    assert_eq!(result.kind, Some(FailureKind::ValueMismatch));
    assert!(result.description.contains("\"something else\""));
    assert!(result.reason.unwrap().contains("\"something\""));
}

#[test]
fn test_has_value_is_an_alias_of_contains() {
    let value = Some(10);

    expect(&value).has_value(&10);
    let result = expect(&value).evaluate_contains(&10);
    assert!(result.passed);
}

#[test]
#[should_panic(expected = "Option was empty")]
fn test_contains_fails_on_empty() {
    let value: Option<i32> = None;

    expect(&value).to_contain(&10);
}

#[test]
fn test_contains_on_empty_is_not_present() {
    let value: Option<i32> = None;

    let result = expect(&value).evaluate_contains(&10);
    assert_eq!(result.kind, Some(FailureKind::NotPresent));
}

#[test]
fn test_chained_assertions() {
    let value = Some(10);

    expect(&value)
        .to_be_present()
        .to_contain(&10)
        .has_value(&10)
        .to_contain_instance_of::<i32>();
}

// =============================================================================
// Comparison strategies
// =============================================================================

#[test]
fn test_custom_comparator_decides_containment() {
    let value = Some(13_u32);

    expect(&value)
        .using_value_comparator(|a: &u32, b: &u32| (a % 10).cmp(&(b % 10)))
        .to_contain(&23);
}

#[test]
fn test_strategy_swap_changes_only_future_evaluations() {
    let value = Some(13_u32);

    let assertion = expect(&value);
    let before = assertion.evaluate_contains(&23);
    assert!(!before.passed);

    let assertion = assertion.using_value_comparator(|a: &u32, b: &u32| (a % 10).cmp(&(b % 10)));
    let after = assertion.evaluate_contains(&23);
    assert!(after.passed);

    // The earlier result is unchanged.
    assert!(!before.passed);
}

#[test]
fn test_default_comparator_restores_standard_equality() {
    let value = Some(13_u32);

    let result = expect(&value)
        .using_value_comparator(|_: &u32, _: &u32| Ordering::Equal)
        .using_default_value_comparator()
        .evaluate_contains(&23);
    assert!(!result.passed);
}

#[test]
fn test_default_comparator_is_idempotent() {
    let value = Some(10_u32);

    expect(&value)
        .using_default_value_comparator()
        .using_default_value_comparator()
        .to_contain(&10);
}

#[test]
fn test_mismatch_reason_names_custom_strategy() {
    let value = Some(1_u32);

    let result = expect(&value)
        .using_value_comparator(|a: &u32, b: &u32| a.cmp(b))
        .evaluate_contains(&2);
    assert!(result.reason.unwrap().contains("custom comparator"));
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_contains_same_instance() {
    let value = Some(String::from("something"));
    let inner = value.as_ref().unwrap();

    expect(&value).to_contain_same(inner);
}

#[test]
fn test_contains_same_rejects_equal_but_distinct_instance() {
    let value = Some(String::from("something"));
    let lookalike = String::from("something");

    let result = expect(&value).evaluate_contains_same(&lookalike);
    assert!(!result.passed);
    assert_eq!(result.kind, Some(FailureKind::IdentityMismatch));
}

#[test]
fn test_contains_same_ignores_active_strategy() {
    let value = Some(String::from("something"));
    let lookalike = String::from("something");

    // A comparator that calls everything equal must not affect identity.
    let result = expect(&value)
        .using_value_comparator(|_: &String, _: &String| Ordering::Equal)
        .evaluate_contains_same(&lookalike);
    assert!(!result.passed);

    let inner = value.as_ref().unwrap();
    expect(&value)
        .using_value_comparator(|_: &String, _: &String| Ordering::Greater)
        .to_contain_same(inner);
}

#[test]
fn test_contains_same_on_empty_is_not_present() {
    let value: Option<String> = None;
    let expected = String::from("something");

    let result = expect(&value).evaluate_contains_same(&expected);
    assert_eq!(result.kind, Some(FailureKind::NotPresent));
}

// =============================================================================
// Runtime type
// =============================================================================

fn holds_i32<T>(value: &Option<T>) -> AssertionResult
where
    T: std::any::Any + PartialEq + std::fmt::Debug,
{
    expect(value).evaluate_contains_instance_of::<i32>()
}

#[test]
fn test_contains_instance_of_matching_type() {
    let value = Some(10_i32);

    expect(&value).to_contain_instance_of::<i32>();
    assert!(holds_i32(&value).passed);
}

#[test]
fn test_contains_instance_of_wrong_type() {
    let value = Some("something");

    let result = holds_i32(&value);
    assert!(!result.passed);
    assert_eq!(result.kind, Some(FailureKind::TypeMismatch));
}

#[test]
#[should_panic(expected = "value of type")]
fn test_contains_instance_of_panics_on_wrong_type() {
    let value = Some(10_i32);

    expect(&value).to_contain_instance_of::<String>();
}

#[test]
fn test_contains_instance_of_on_empty_is_not_present() {
    let value: Option<i32> = None;

    let result = expect(&value).evaluate_contains_instance_of::<i32>();
    assert_eq!(result.kind, Some(FailureKind::NotPresent));
}

// =============================================================================
// Missing container
// =============================================================================

#[test]
fn test_missing_container_fails_every_check() {
    let missing: Option<&Option<i32>> = None;

    assert_eq!(
        expect_maybe(missing).evaluate_present().kind,
        Some(FailureKind::NullActual)
    );
    assert_eq!(
        expect_maybe(missing).evaluate_empty().kind,
        Some(FailureKind::NullActual)
    );
    assert_eq!(
        expect_maybe(missing).evaluate_contains(&10).kind,
        Some(FailureKind::NullActual)
    );
    assert_eq!(
        expect_maybe(missing).evaluate_contains_same(&10).kind,
        Some(FailureKind::NullActual)
    );
    assert_eq!(
        expect_maybe(missing)
            .evaluate_contains_instance_of::<i32>()
            .kind,
        Some(FailureKind::NullActual)
    );
}

#[test]
#[should_panic(expected = "missing container")]
fn test_missing_container_panics() {
    let missing: Option<&Option<i32>> = None;

    expect_maybe(missing).to_be_present();
}

#[test]
fn test_supplied_container_passes_through_expect_maybe() {
    let value = Some(10);

    expect_maybe(Some(&value)).to_be_present().to_contain(&10);
}

// =============================================================================
// Field-by-field comparison
// =============================================================================

#[cfg(feature = "fieldwise")]
mod fieldwise {
    use super::*;
    use serde::Serialize;

    /// Equality includes the bookkeeping `revision`, which serde skips.
    #[derive(Debug, Serialize)]
    struct Profile {
        name: String,
        age: u32,
        #[serde(skip)]
        revision: u64,
    }

    impl PartialEq for Profile {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name && self.age == other.age && self.revision == other.revision
        }
    }

    fn frodo(revision: u64) -> Profile {
        Profile {
            name: "Frodo".to_string(),
            age: 33,
            revision,
        }
    }

    #[test]
    fn test_fieldwise_passes_where_native_equality_fails() {
        let value = Some(frodo(1));
        let expected = frodo(2);

        let native = expect(&value).evaluate_contains(&expected);
        assert!(!native.passed);

        expect(&value)
            .using_field_by_field_value_comparator()
            .to_contain(&expected);
    }

    #[test]
    fn test_fieldwise_mismatch_reason_names_the_strategy() {
        let value = Some(frodo(1));
        let other = Profile {
            name: "Sam".to_string(),
            age: 38,
            revision: 1,
        };

        let result = expect(&value)
            .using_field_by_field_value_comparator()
            .evaluate_contains(&other);
        assert!(!result.passed);
        assert_eq!(result.kind, Some(FailureKind::ValueMismatch));
        assert!(result.reason.unwrap().contains("field-by-field comparison"));
    }

    #[test]
    fn test_fieldwise_on_scalar_is_invalid_argument() {
        let value = Some(10_i64);

        let result = expect(&value)
            .using_field_by_field_value_comparator()
            .evaluate_contains(&10);
        assert!(!result.passed);
        assert_eq!(result.kind, Some(FailureKind::InvalidArgument));
    }

    #[test]
    fn test_custom_strategy_with_ignored_field() {
        #[derive(Debug, PartialEq, Serialize)]
        struct Record {
            id: u64,
            body: String,
        }

        let value = Some(Record {
            id: 7,
            body: "hello".to_string(),
        });
        let expected = Record {
            id: 99,
            body: "hello".to_string(),
        };

        expect(&value)
            .using_comparison_strategy(FieldwiseEquality::new().ignoring("id"))
            .to_contain(&expected);
    }
}

//! Integration tests for `#[derive(Record)]` records.

use fieldguard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Record)]
struct AvengersMember {
    #[validate(required, maxLen = 50, rename = "Name")]
    name: String,
    #[validate(min = 18, max = 100, rename = "Age")]
    age: i32,
    #[validate(required, email, rename = "Email")]
    email: String,
}

fn member(name: &str, age: i32, email: &str) -> AvengersMember {
    AvengersMember {
        name: name.to_owned(),
        age,
        email: email.to_owned(),
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn iron_man_is_valid() {
    let results = validate(&member("Iron Man", 45, "ironman@example.com"));
    assert_eq!(
        results,
        vec![
            ValidationResult::passed("Name"),
            ValidationResult::passed("Age"),
            ValidationResult::passed("Email"),
        ]
    );
}

#[test]
fn broken_member_reports_every_field() {
    let results = validate(&member("", 150, "bad"));
    let messages: Vec<&str> = results.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Name: Field is required",
            "Age: Value exceeds the maximum allowed",
            "Email: Invalid email format",
        ]
    );
    assert!(results.iter().all(|r| !r.valid));
}

#[test]
fn simultaneous_failures_accumulate() {
    #[derive(Record)]
    struct Contact {
        #[validate(required, minLen = 5, email)]
        address: String,
    }

    let results = validate(&Contact {
        address: String::new(),
    });
    insta::assert_snapshot!(
        &results[0].message,
        @"address: Field is required, Below the minimum length allowed, Invalid email format"
    );
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[rstest]
#[case(17, false)]
#[case(18, true)]
#[case(45, true)]
#[case(100, true)]
#[case(101, false)]
#[case(-1, false)]
fn age_bounds_are_inclusive(#[case] age: i32, #[case] valid: bool) {
    let results = validate(&member("Thor", age, "thor@asgard.com"));
    assert_eq!(results[1].valid, valid);
}

#[rstest]
#[case(0, true)]
#[case(50, true)]
#[case(51, false)]
fn name_length_is_inclusive(#[case] len: usize, #[case] valid_len: bool) {
    let name = "x".repeat(len);
    let result = &validate(&member(&name, 30, "a@b.io"))[0];
    // An empty name still fails `required`.
    assert_eq!(result.valid, valid_len && len > 0);
}

#[test]
fn min_len_is_enforced() {
    #[derive(Record)]
    struct Handle {
        #[validate(minLen = 3)]
        handle: String,
    }

    assert!(!validate(&Handle { handle: "ab".into() })[0].valid);
    assert!(validate(&Handle { handle: "abc".into() })[0].valid);
}

// ============================================================================
// ZERO VALUES
// ============================================================================

#[derive(Record)]
struct Zeroes {
    #[validate(required)]
    count: u64,
    #[validate(required)]
    ratio: f64,
    #[validate(required)]
    label: String,
    #[validate(required)]
    nickname: Option<String>,
    #[validate(required)]
    enabled: bool,
    #[validate(required)]
    items: Vec<u8>,
}

#[test]
fn required_rejects_every_zero_value() {
    let results = validate(&Zeroes {
        count: 0,
        ratio: 0.0,
        label: String::new(),
        nickname: None,
        enabled: false,
        items: Vec::new(),
    });
    assert_eq!(failures(&results).count(), 6);
}

#[test]
fn required_accepts_non_zero_values() {
    let results = validate(&Zeroes {
        count: 1,
        ratio: 0.1,
        label: "x".into(),
        nickname: Some(String::new()),
        enabled: true,
        items: vec![0],
    });
    // `Some("")` is transparent: the inner empty string is still zero.
    let failed: Vec<&str> = failures(&results).map(|r| r.field.as_str()).collect();
    assert_eq!(failed, ["nickname"]);
}

// ============================================================================
// LENIENCY
// ============================================================================

#[derive(Record)]
struct Misconfigured {
    #[validate(max = "abc", min = "1.5")]
    level: i32,
    #[validate(maxLen = "ten")]
    title: String,
    #[validate(max = 10, maxLen = 1)]
    mixed: String,
}

#[test]
fn malformed_bounds_are_ignored() {
    let results = validate(&Misconfigured {
        level: i32::MAX,
        title: "a very long title indeed".into(),
        mixed: "x".into(),
    });
    assert!(all_valid(&results));
}

#[test]
fn malformed_bounds_fail_in_strict_mode() {
    let record = Misconfigured {
        level: 1,
        title: String::new(),
        mixed: String::new(),
    };
    let err = Validator::new()
        .strictness(Strictness::Strict)
        .validate(&record)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `level`: tag `max` has non-integer value \"abc\""
    );
}

#[test]
fn numeric_tag_on_text_is_skipped() {
    let results = validate(&Misconfigured {
        level: 0,
        title: String::new(),
        mixed: "12345".into(),
    });
    // `max = 10` does not apply to text; `maxLen = 1` does.
    assert_eq!(results[2].message, "mixed: Exceeds maximum length allowed");
}

// ============================================================================
// SHAPE
// ============================================================================

#[test]
fn unannotated_record_is_valid_with_empty_messages() {
    #[derive(Record)]
    struct Plain {
        a: i32,
        b: String,
        c: Option<bool>,
    }

    let results = validate(&Plain {
        a: 0,
        b: String::new(),
        c: None,
    });
    let fields: Vec<&str> = results.iter().map(|r| r.field.as_str()).collect();
    assert_eq!(fields, ["a", "b", "c"]);
    assert!(results.iter().all(|r| r.valid && r.message.is_empty()));
}

#[test]
fn pointers_to_records_are_transparent() {
    let m = member("", 45, "ironman@example.com");
    let boxed = Box::new(member("", 45, "ironman@example.com"));
    let arc = std::sync::Arc::new(member("", 45, "ironman@example.com"));
    assert_eq!(validate(&m), validate(&&m));
    assert_eq!(validate(&m), validate(&boxed));
    assert_eq!(validate(&m), validate(&arc));
}

#[test]
fn record_name_is_the_struct_name() {
    assert_eq!(member("a", 20, "a@b.io").record_name(), "AvengersMember");
}

#[test]
fn validation_does_not_consume_or_mutate() {
    let m = member("Hulk", 48, "hulk@example.com");
    let first = validate(&m);
    let second = validate(&m);
    assert_eq!(first, second);
    assert_eq!(m.name, "Hulk");
}

#[test]
fn chars_length_mode() {
    #[derive(Record)]
    struct Greeting {
        #[validate(maxLen = 5)]
        text: String,
    }

    let g = Greeting {
        text: "héllo".into(),
    };
    assert!(!validate(&g)[0].valid);
    let chars = Validator::new().length_mode(LengthMode::Chars);
    assert!(chars.validate(&g).unwrap()[0].valid);
}

//! Integration tests for `#[derive(Inspect)]` together with `validate`.
//!
//! Every test goes through the public API only: derive the field table,
//! validate, and inspect the collected failures.

#![allow(dead_code)]

use pretty_assertions::assert_eq;
use rstest::rstest;
use structval::prelude::*;
use structval::ValueKind;

fn messages(err: &Error) -> Vec<String> {
    err.failures().iter().map(ToString::to_string).collect()
}

fn codes(err: &Error) -> Vec<&'static str> {
    err.failures().iter().map(ValidationFailure::code).collect()
}

// ============================================================================
// FIXTURES
// ============================================================================

#[derive(Inspect)]
struct Signup {
    #[validate("min:18", rename = "Age")]
    pub age: i64,

    #[validate("len:4;in:AAAA,BBBB", rename = "Code")]
    pub code: String,
}

#[derive(Inspect)]
struct Account {
    #[validate("len:3")]
    pub handle: String,

    #[validate("min:1")]
    secret: i64,

    pub note: String,
}

#[derive(Inspect)]
struct Audit {
    #[validate("len:8")]
    pub actor: String,
}

#[derive(Inspect)]
struct Order {
    #[validate(flatten)]
    pub audit: Audit,

    #[validate("max:10")]
    pub count: u32,

    #[validate(skip)]
    pub weights: Vec<f64>,
}

#[derive(Inspect)]
struct Plan {
    #[validate("len:2")]
    pub tags: Vec<String>,

    #[validate("in:1,2,3")]
    pub tiers: [u8; 3],

    #[validate("min:0;max:9")]
    pub scores: Vec<i32>,
}

#[derive(Inspect)]
struct Plain {
    pub name: String,
    pub count: i64,
    hidden: bool,
}

#[derive(Inspect)]
struct Marker;

#[derive(Inspect)]
struct Pair(#[validate("min:0")] pub i64, #[validate("max:5")] pub i64);

#[derive(Inspect)]
struct View<'a> {
    #[validate("in:red,green")]
    pub color: &'a str,

    #[validate("min:1")]
    pub ids: &'a [u32],
}

#[derive(Inspect)]
struct Wrapper<T: AsFieldValue> {
    #[validate("min:2")]
    pub inner: T,
}

#[derive(Inspect)]
struct Measurements {
    #[validate("min:1;in:1,2")]
    pub ratio: f64,

    #[validate("max:0")]
    pub flags: Vec<bool>,
}

// ============================================================================
// SCENARIO
// ============================================================================

#[test]
fn reports_every_violation_in_declaration_order() {
    let err = validate(&Signup {
        age: 17,
        code: "CCCC".to_owned(),
    })
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "field Age has value less than min\nfield Code does not occur in [AAAA BBBB]"
    );
    assert_eq!(codes(&err), vec!["min", "in"]);
    assert_eq!(err.failures()[0].field(), "Age");
}

#[test]
fn valid_record_passes() {
    let signup = Signup {
        age: 18,
        code: "BBBB".to_owned(),
    };
    assert!(validate(&signup).is_ok());
}

#[test]
fn references_to_records_are_records() {
    let signup = Signup {
        age: 30,
        code: "AAAA".to_owned(),
    };
    assert!(validate(&&signup).is_ok());
}

// ============================================================================
// NON-RECORDS
// ============================================================================

#[rstest]
#[case::integer(validate(&5_i32), ValueKind::Integer)]
#[case::text(validate("abc"), ValueKind::Text)]
#[case::owned_text(validate(&String::from("abc")), ValueKind::Text)]
#[case::vector(validate(&vec![1_u8, 2]), ValueKind::Sequence)]
#[case::float(validate(&1.5_f64), ValueKind::Other)]
fn non_records_are_rejected(#[case] result: ValidationResult, #[case] kind: ValueKind) {
    let err = result.unwrap_err();
    assert!(err.is_not_a_struct());
    assert_eq!(err, Error::NotAStruct(kind));
    assert!(err.failures().is_empty());
}

#[test]
fn not_a_struct_message() {
    let err = validate(&42_u64).unwrap_err();
    assert_eq!(
        err.to_string(),
        "wrong argument given, should be a struct (got integer)"
    );
}

// ============================================================================
// ACCESSIBILITY
// ============================================================================

#[test]
fn annotated_private_field_fails_once() {
    let err = validate(&Account {
        handle: "bob".to_owned(),
        secret: -5,
        note: String::new(),
    })
    .unwrap_err();

    assert_eq!(
        messages(&err),
        vec!["validation for unexported field secret is not allowed"]
    );
    assert_eq!(codes(&err), vec!["unexported_field"]);
}

#[test]
fn private_failure_does_not_hide_other_fields() {
    let err = validate(&Account {
        handle: "alice".to_owned(),
        secret: 1,
        note: String::new(),
    })
    .unwrap_err();

    assert_eq!(codes(&err), vec!["len", "unexported_field"]);
}

#[test]
fn records_without_specs_always_pass() {
    let plain = Plain {
        name: String::new(),
        count: i64::MIN,
        hidden: true,
    };
    assert!(validate(&plain).is_ok());
    assert!(validate(&Marker).is_ok());
}

// ============================================================================
// COLLECTIONS
// ============================================================================

#[test]
fn collections_pass_when_every_element_passes() {
    let plan = Plan {
        tags: vec!["ab".to_owned(), "cd".to_owned()],
        tiers: [1, 2, 3],
        scores: vec![0, 9, 4],
    };
    assert!(validate(&plan).is_ok());
}

#[test]
fn one_bad_element_fails_the_clause_once() {
    let plan = Plan {
        tags: vec!["ab".to_owned(), "c".to_owned(), "d".to_owned()],
        tiers: [1, 4, 2],
        scores: vec![-1, 10, 3],
    };
    let err = validate(&plan).unwrap_err();

    assert_eq!(
        messages(&err),
        vec![
            "field tags has an invalid length",
            "field tiers does not occur in [1 2 3]",
            "field scores has value less than min",
            "field scores has value bigger than max",
        ]
    );
}

#[test]
fn empty_collections_pass() {
    let plan = Plan {
        tags: Vec::new(),
        tiers: [3, 3, 3],
        scores: Vec::new(),
    };
    assert!(validate(&plan).is_ok());
}

#[test]
fn borrowed_fields() {
    let ids = [1_u32, 2];
    assert!(validate(&View { color: "red", ids: &ids }).is_ok());

    let err = validate(&View {
        color: "blue",
        ids: &[0],
    })
    .unwrap_err();
    assert_eq!(codes(&err), vec!["in", "min"]);
}

#[test]
fn generic_fields() {
    assert!(validate(&Wrapper { inner: 5_i16 }).is_ok());
    assert!(validate(&Wrapper { inner: vec![2_i64, 3] }).is_ok());

    let err = validate(&Wrapper { inner: "a" }).unwrap_err();
    assert_eq!(messages(&err), vec!["field inner has value less than min"]);
}

#[test]
fn unsupported_kinds_are_never_checked() {
    let measurements = Measurements {
        ratio: 0.25,
        flags: vec![true, false],
    };
    assert!(validate(&measurements).is_ok());
}

// ============================================================================
// EMBEDDING AND NAMING
// ============================================================================

#[test]
fn flattened_fields_are_validated_in_place() {
    let order = Order {
        audit: Audit {
            actor: "root".to_owned(),
        },
        count: 11,
        weights: vec![0.5],
    };
    let err = validate(&order).unwrap_err();

    assert_eq!(
        messages(&err),
        vec![
            "field actor has an invalid length",
            "field count has value bigger than max",
        ]
    );
}

#[test]
fn visible_fields_lists_flattened_fields_and_omits_skipped() {
    let order = Order {
        audit: Audit {
            actor: "operator".to_owned(),
        },
        count: 1,
        weights: Vec::new(),
    };
    let fields = visible_fields(&order).unwrap();
    let names: Vec<&str> = fields.iter().map(Field::name).collect();

    assert_eq!(names, vec!["actor", "count"]);
    assert!(fields.iter().all(Field::is_exported));
    assert_eq!(fields[1].spec(), Some("max:10"));
}

#[test]
fn visible_fields_reports_visibility() {
    let account = Account {
        handle: "bob".to_owned(),
        secret: 0,
        note: String::new(),
    };
    let fields = visible_fields(&account).unwrap();
    let visibility: Vec<(&str, Visibility)> = fields
        .iter()
        .map(|field| (field.name(), field.visibility()))
        .collect();

    assert_eq!(
        visibility,
        vec![
            ("handle", Visibility::Exported),
            ("secret", Visibility::Unexported),
            ("note", Visibility::Exported),
        ]
    );
    assert!(fields[1].value().is_none());
    assert_eq!(fields[2].spec(), None);
}

#[test]
fn tuple_struct_fields_are_named_by_position() {
    let err = validate(&Pair(-1, 6)).unwrap_err();
    assert_eq!(
        messages(&err),
        vec![
            "field 0 has value less than min",
            "field 1 has value bigger than max",
        ]
    );
}

#[test]
fn unit_struct_has_no_fields() {
    assert!(visible_fields(&Marker).unwrap().is_empty());
}

// ============================================================================
// SYNTAX
// ============================================================================

#[derive(Inspect)]
struct Sloppy {
    #[validate("min;max:abc;len:3")]
    pub name: String,

    #[validate("regex:^a+$;min:2")]
    pub word: String,

    #[validate("in:1,x,3")]
    pub level: i32,

    #[validate("")]
    pub anything: String,
}

#[test]
fn malformed_clauses_do_not_stop_other_clauses() {
    let sloppy = Sloppy {
        name: "abcd".to_owned(),
        word: "a".to_owned(),
        level: 2,
        anything: String::new(),
    };
    let err = validate(&sloppy).unwrap_err();

    assert_eq!(
        codes(&err),
        vec![
            "invalid_syntax",
            "invalid_syntax",
            "len",
            "min",
            "invalid_syntax",
            "in",
        ]
    );
    assert_eq!(
        err.failures()[5].to_string(),
        "field level does not occur in [1 x 3]"
    );
    assert!(err.failures()[0].is_syntax());
    assert!(
        err.failures()[0]
            .to_string()
            .starts_with("invalid validator syntax in field name: ")
    );
}

#[test]
fn bad_literal_does_not_exclude_the_good_ones() {
    let sloppy = Sloppy {
        name: "abc".to_owned(),
        word: "aa".to_owned(),
        level: 3,
        anything: String::new(),
    };
    let err = validate(&sloppy).unwrap_err();

    assert_eq!(
        codes(&err),
        vec!["invalid_syntax", "invalid_syntax", "invalid_syntax"]
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Inspect)]
struct Word {
    #[validate("len:2")]
    pub word: String,
}

#[test]
fn length_mode_changes_how_text_is_measured() {
    let word = Word {
        word: "é".to_owned(),
    };

    assert!(validate(&word).is_ok());
    assert!(
        Validator::new()
            .with_length_mode(LengthMode::Chars)
            .validate(&word)
            .is_err()
    );
}

#[derive(Inspect)]
struct Quota {
    #[validate("in:0,18446744073709551615")]
    pub limit: u64,
}

#[test]
fn wide_integer_literals_are_accepted() {
    assert!(validate(&Quota { limit: 0 }).is_ok());
    assert!(validate(&Quota { limit: u64::MAX }).is_ok());

    let err = validate(&Quota { limit: 7 }).unwrap_err();
    assert_eq!(
        messages(&err),
        vec!["field limit does not occur in [0 18446744073709551615]"]
    );
}

#[derive(Inspect)]
struct Accented {
    #[validate("len:2;max:1", rename = "Word")]
    pub word: String,
}

#[test]
fn text_length_counts_bytes_by_default() {
    let err = validate(&Accented {
        word: "\u{e9}".to_owned(),
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "field Word has value bigger than max");
}

#[rstest]
#[case(17, false)]
#[case(18, true)]
#[case(19, true)]
fn minimum_boundary(#[case] age: i64, #[case] ok: bool) {
    let signup = Signup {
        age,
        code: "AAAA".to_owned(),
    };
    assert_eq!(validate(&signup).is_ok(), ok);
}

#[rstest]
#[case("abcd", false)]
#[case("abcde", true)]
#[case("abcdef", false)]
fn length_boundary(#[case] actor: &str, #[case] ok: bool) {
    #[derive(Inspect)]
    struct Entry {
        #[validate("len:5")]
        pub actor: String,
    }

    let entry = Entry {
        actor: actor.to_owned(),
    };
    assert_eq!(validate(&entry).is_ok(), ok);
}

#[test]
fn logging_does_not_change_results() {
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish(),
    );

    let err = validate(&Signup {
        age: 1,
        code: "AAAA".to_owned(),
    })
    .unwrap_err();
    assert_eq!(err.failures().len(), 1);
}

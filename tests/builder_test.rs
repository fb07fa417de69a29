//! Tests for TreeBuilder validation policies

use famtree::domain::{DomainError, Gender, TreeBuilder, ValidationPolicy};
use rstest::rstest;

// ============================================================
// Lenient Policy Tests
// ============================================================

#[rstest]
#[case('M')]
#[case('F')]
#[case('x')]
#[case('é')]
fn given_lenient_policy_when_creating_then_accepts_any_gender(#[case] gender: char) {
    let mut builder = TreeBuilder::new(ValidationPolicy::Lenient);
    let idx = builder.person("Someone", "whenever", gender).unwrap();

    assert_eq!(builder.tree().person(idx).unwrap().gender.code(), gender);
}

// ============================================================
// Strict Policy Tests
// ============================================================

#[rstest]
fn given_strict_policy_when_creating_valid_person_then_accepts() {
    let mut builder = TreeBuilder::new(ValidationPolicy::strict());
    let idx = builder.person("Filha", "1998-11-05", 'F').unwrap();

    assert_eq!(builder.tree().person(idx).unwrap().gender, Gender::Female);
}

#[rstest]
#[case('X')]
#[case('m')]
fn given_strict_policy_when_creating_unknown_gender_then_invalid_gender(#[case] gender: char) {
    let mut builder = TreeBuilder::new(ValidationPolicy::strict());

    let result = builder.person("Someone", "1998-11-05", gender);

    assert_eq!(result, Err(DomainError::InvalidGender(gender)));
    assert!(builder.tree().is_empty());
}

#[rstest]
#[case("1998-02-30")]
#[case("05/11/1998")]
#[case("yesterday")]
fn given_strict_policy_when_creating_bad_date_then_invalid_birth_date(#[case] date: &str) {
    let mut builder = TreeBuilder::new(ValidationPolicy::strict());

    let err = builder.person("Someone", date, 'M').unwrap_err();

    match err {
        DomainError::InvalidBirthDate { value, .. } => assert_eq!(value, date),
        other => panic!("expected InvalidBirthDate, got {other:?}"),
    }
    assert_eq!(builder.created(), 0);
}

#[rstest]
fn given_strict_policy_with_custom_format_when_creating_then_uses_format() {
    let policy = ValidationPolicy::Strict {
        date_format: "%d.%m.%Y".to_string(),
    };
    let mut builder = TreeBuilder::new(policy);

    assert!(builder.person("Pai", "15.06.1970", 'M').is_ok());
    assert!(builder.person("Tia", "1972-09-20", 'F').is_err());
}

// ============================================================
// Linking Tests
// ============================================================

#[rstest]
fn given_builder_when_linking_invalid_pair_then_error_propagates() {
    let mut builder = TreeBuilder::default();
    let a = builder.person("A", "1", 'M').unwrap();
    let b = builder.person("B", "2", 'F').unwrap();
    builder.link(a, b).unwrap();

    let result = builder.link(b, a);

    assert!(matches!(result, Err(DomainError::CycleDetected(idx)) if idx == a));
}

#[rstest]
fn given_builder_when_built_then_tree_holds_all_created_persons() {
    let mut builder = TreeBuilder::default();
    let a = builder.person("A", "1", 'M').unwrap();
    let b = builder.person("B", "2", 'F').unwrap();
    builder.link(a, b).unwrap();
    let created = builder.created();

    let tree = builder.build();

    assert_eq!(created, 2);
    assert_eq!(tree.len(), created);
    assert_eq!(tree.roots(), vec![a]);
}

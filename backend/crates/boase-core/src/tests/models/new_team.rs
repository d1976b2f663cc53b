use crate::{CoreError, NewTeam, slugify};

#[test]
fn test_slugify_collapses_whitespace_and_drops_symbols() {
    assert_eq!(slugify("My  Cool Team!"), "my-cool-team");
    assert_eq!(slugify("  Design\tCrew  "), "design-crew");
    assert_eq!(slugify("Rust & Go"), "rust--go");
    assert_eq!(slugify("already-a-slug-42"), "already-a-slug-42");
}

#[test]
fn test_slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Café Crew"), "caf-crew");
}

#[test]
fn given_valid_name_when_from_name_then_trims_and_derives_slug() {
    let team = NewTeam::from_name("  Blockchain Builders ").unwrap();

    assert_eq!(team.name, "Blockchain Builders");
    assert_eq!(team.slug, "blockchain-builders");
}

#[test]
fn given_blank_name_when_from_name_then_validation_error() {
    let result = NewTeam::from_name("   ");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_symbol_only_name_when_from_name_then_validation_error() {
    let err = NewTeam::from_name("!!!").unwrap_err();

    assert!(err.user_message().contains("letter or digit"));
}

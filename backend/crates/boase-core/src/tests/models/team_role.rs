use crate::{CoreError, TeamRole};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{eq, ok};

#[test]
fn test_team_role_as_str() {
    assert_eq!(TeamRole::Owner.as_str(), "owner");
    assert_eq!(TeamRole::Admin.as_str(), "admin");
    assert_eq!(TeamRole::Member.as_str(), "member");
}

#[test]
fn test_team_role_from_str() {
    assert_that!(TeamRole::from_str("owner"), ok(eq(&TeamRole::Owner)));
    assert_that!(TeamRole::from_str("admin"), ok(eq(&TeamRole::Admin)));
    assert_that!(TeamRole::from_str("member"), ok(eq(&TeamRole::Member)));
}

#[test]
fn given_legacy_capitalized_role_when_parsed_then_maps_to_canonical_role() {
    assert_that!(TeamRole::from_str("Admin"), ok(eq(&TeamRole::Admin)));
    assert_that!(TeamRole::from_str(" MEMBER "), ok(eq(&TeamRole::Member)));
}

#[test]
fn given_unknown_role_when_parsed_then_invalid_team_role() {
    let result = TeamRole::from_str("Freelancer");

    match result {
        Err(CoreError::InvalidTeamRole { value, .. }) => assert_eq!(value, "Freelancer"),
        other => panic!("Expected InvalidTeamRole, got {other:?}"),
    }
}

#[test]
fn test_team_role_default_is_member() {
    assert_eq!(TeamRole::default(), TeamRole::Member);
}

#[test]
fn test_team_role_serde_uses_database_names() {
    assert_eq!(serde_json::to_string(&TeamRole::Owner).unwrap(), "\"owner\"");
    let parsed: TeamRole = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(parsed, TeamRole::Admin);
}

#[test]
fn test_only_owner_and_admin_manage_members() {
    assert!(TeamRole::Owner.can_manage_members());
    assert!(TeamRole::Admin.can_manage_members());
    assert!(!TeamRole::Member.can_manage_members());
}

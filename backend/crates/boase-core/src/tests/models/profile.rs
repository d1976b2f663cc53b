use crate::{Profile, ProfileUpdate};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;
use uuid::Uuid;

#[test]
fn given_minimal_row_when_deserialize_then_optional_fields_default() {
    let id = Uuid::new_v4();
    let profile: Profile = serde_json::from_value(json!({ "id": id })).unwrap();

    assert_eq!(profile, Profile::empty(id));
}

#[test]
fn given_null_welcome_flag_when_deserialize_then_false() {
    let profile: Profile = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "display_name": "Alice",
        "has_seen_welcome_card": null
    }))
    .unwrap();

    assert!(!profile.has_seen_welcome_card);
    assert_that!(profile.display_name.as_deref(), some(eq("Alice")));
}

#[test]
fn test_display_label_falls_back_to_username() {
    let mut profile = Profile::empty(Uuid::new_v4());
    assert_that!(profile.display_label(), none());

    profile.username = Some("alice".to_string());
    assert_that!(profile.display_label(), some(eq("alice")));

    profile.display_name = Some("  ".to_string());
    assert_that!(profile.display_label(), some(eq("alice")));

    profile.display_name = Some("Alice".to_string());
    assert_that!(profile.display_label(), some(eq("Alice")));
}

#[test]
fn given_partial_update_when_serialize_then_only_set_fields_present() {
    let update = ProfileUpdate {
        bio: Some("Builder".to_string()),
        has_seen_welcome_card: Some(true),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert_eq!(object["bio"], "Builder");
    assert_eq!(object["has_seen_welcome_card"], true);
}

#[test]
fn given_update_when_apply_to_then_only_set_fields_change() {
    let mut profile = Profile::empty(Uuid::new_v4());
    profile.username = Some("alice".to_string());

    let update = ProfileUpdate {
        display_name: Some("Alice".to_string()),
        ..Default::default()
    };
    update.apply_to(&mut profile);

    assert_that!(profile.username.as_deref(), some(eq("alice")));
    assert_that!(profile.display_name.as_deref(), some(eq("Alice")));
    assert!(profile.updated_at.is_some());
    assert!(!profile.has_seen_welcome_card);
}

#[test]
fn test_welcome_card_seen_update() {
    let update = ProfileUpdate::welcome_card_seen();

    assert!(!update.is_empty());
    assert_eq!(update.has_seen_welcome_card, Some(true));
    assert!(ProfileUpdate::default().is_empty());
}

use crate::{ColorScheme, Team};

use serde_json::json;
use uuid::Uuid;

const TEAM_ID: &str = "6f1c2b9e-0d2a-4c61-9a57-3d1f0f7e8a10";

#[test]
fn given_color_scheme_object_when_deserialize_then_decoded() {
    let team: Team = serde_json::from_value(json!({
        "id": TEAM_ID,
        "name": "Design",
        "slug": "design",
        "icon_name": "FaPalette",
        "color_scheme": {
            "bgColor": "bg-pink-900",
            "textColor": "text-pink-100",
            "borderColor": "border-pink-500"
        }
    }))
    .unwrap();

    let scheme = team.color_scheme.unwrap();
    assert_eq!(scheme.bg_color, "bg-pink-900");
    assert_eq!(scheme.text_color, "text-pink-100");
    assert_eq!(scheme.border_color, "border-pink-500");
}

#[test]
fn given_color_scheme_json_string_when_deserialize_then_decoded() {
    let team: Team = serde_json::from_value(json!({
        "id": TEAM_ID,
        "name": "Data",
        "color_scheme": "{\"bgColor\":\"bg-sky-900\",\"textColor\":\"text-sky-100\",\"borderColor\":\"border-sky-500\"}"
    }))
    .unwrap();

    assert_eq!(team.color_scheme.unwrap().bg_color, "bg-sky-900");
    assert!(team.slug.is_none());
}

#[test]
fn given_malformed_or_null_color_scheme_when_deserialize_then_none() {
    let malformed: Team = serde_json::from_value(json!({
        "id": TEAM_ID,
        "name": "Ops",
        "color_scheme": "not json"
    }))
    .unwrap();
    let null: Team = serde_json::from_value(json!({
        "id": TEAM_ID,
        "name": "Ops",
        "color_scheme": null
    }))
    .unwrap();

    assert!(malformed.color_scheme.is_none());
    assert!(null.color_scheme.is_none());
    assert_eq!(null.color_scheme_or_default(), ColorScheme::default());
}

#[test]
fn test_route_key_prefers_slug_then_id() {
    let id = Uuid::parse_str(TEAM_ID).unwrap();
    let mut team = Team::new(id, "Ops");
    assert_eq!(team.route_key(), TEAM_ID);

    team.slug = Some(String::new());
    assert_eq!(team.route_key(), TEAM_ID);

    team.slug = Some("ops".to_string());
    assert_eq!(team.route_key(), "ops");
}

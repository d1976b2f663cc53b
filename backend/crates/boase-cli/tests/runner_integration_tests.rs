//! Integration tests running CLI commands against a wiremock Supabase

use boase_cli::CliError;
use boase_cli::commands::Commands;
use boase_cli::runner::execute;
use boase_cli::skill_commands::SkillCommands;
use boase_cli::team_commands::TeamCommands;
use boase_session::ProfileSessionCoordinator;
use boase_supabase::SupabaseClient;

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path, query_param},
};

const USER_ID: &str = "00000000-0000-0000-0000-000000000001";
const SKILL_ID: &str = "00000000-0000-0000-0000-000000005001";
const TEAM_ID: &str = "00000000-0000-0000-0000-000000007001";

async fn mounted_coordinator(server: &MockServer) -> ProfileSessionCoordinator {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access",
            "refresh_token": "refresh",
            "user": { "id": USER_ID, "email": "alice@example.com" }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": USER_ID })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": USER_ID,
            "display_name": "Alice"
        }])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": SKILL_ID, "name": "Go" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;

    let client = Arc::new(SupabaseClient::new(&server.uri(), "anon-key"));
    client
        .sign_in_with_password("alice@example.com", "secret")
        .await
        .unwrap();

    let coordinator = ProfileSessionCoordinator::new(client.clone(), client);
    coordinator.mount().await;
    coordinator
}

#[tokio::test]
async fn test_skills_add_existing_name_selects_catalog_skill() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_team_memberships"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user_skills"))
        .and(body_partial_json(json!({ "user_id": USER_ID, "skill_id": SKILL_ID })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let coordinator = mounted_coordinator(&mock_server).await;
    let output = execute(
        Commands::Skills {
            action: SkillCommands::Add {
                name: "go".to_string(),
            },
        },
        &coordinator,
    )
    .await
    .unwrap();

    assert_eq!(output["id"], SKILL_ID);
    assert_eq!(output["name"], "Go");
}

#[tokio::test]
async fn test_teams_list_fails_when_team_fetch_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_team_memberships"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "XX000",
            "message": "database unavailable"
        })))
        .mount(&mock_server)
        .await;

    let coordinator = mounted_coordinator(&mock_server).await;
    let result = execute(
        Commands::Teams {
            action: TeamCommands::List,
        },
        &coordinator,
    )
    .await;

    match result {
        Err(CliError::Load { message }) => {
            assert_eq!(message, "Could not load teams: database unavailable")
        }
        other => panic!("Expected load error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_teams_create_reports_partial_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_team_memberships"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/teams"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": TEAM_ID,
            "name": "Design Crew",
            "slug": "design-crew"
        }])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/user_team_memberships"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "message": "new row violates row-level security policy"
        })))
        .mount(&mock_server)
        .await;

    let coordinator = mounted_coordinator(&mock_server).await;
    let result = execute(
        Commands::Teams {
            action: TeamCommands::Create {
                name: "Design Crew".to_string(),
            },
        },
        &coordinator,
    )
    .await;

    let err = result.unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Team created, but failed to add you as a member")
    );
}

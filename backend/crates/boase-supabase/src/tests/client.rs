use crate::SupabaseClient;
use crate::SupabaseError;
use crate::client::api_error;

use boase_config::SupabaseConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = SupabaseClient::new("http://localhost:54321/", "anon");
    assert_eq!(client.base_url, "http://localhost:54321");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = SupabaseClient::new("http://localhost:54321", "anon");
    assert_eq!(client.base_url, "http://localhost:54321");
}

#[test]
fn given_config_without_anon_key_when_building_client_then_config_error() {
    let config = SupabaseConfig::default();

    let result = SupabaseClient::from_config(&config);

    assert_that!(result, err(anything()));
    let err_msg = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert_that!(err_msg, contains_substring("anon key"));
}

#[test]
fn given_valid_config_when_building_client_then_ok() {
    let config = SupabaseConfig {
        url: "https://abcd.supabase.co/".to_string(),
        anon_key: Some("anon".to_string()),
        ..Default::default()
    };

    let result = SupabaseClient::from_config(&config);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_postgrest_error_body_when_parsed_then_code_and_message_extracted() {
    let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint"}"#;

    match api_error(409, body) {
        SupabaseError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 409);
            assert_eq!(code, "23505");
            assert_eq!(message, "duplicate key value violates unique constraint");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn given_gotrue_error_body_when_parsed_then_description_used_as_message() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;

    match api_error(400, body) {
        SupabaseError::Api { code, message, .. } => {
            assert_eq!(code, "invalid_grant");
            assert_eq!(message, "Invalid login credentials");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn given_numeric_gotrue_code_when_parsed_then_code_stringified() {
    let body = r#"{"code":401,"msg":"invalid JWT"}"#;

    match api_error(401, body) {
        SupabaseError::Api { code, message, .. } => {
            assert_eq!(code, "401");
            assert_eq!(message, "invalid JWT");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn given_empty_body_when_parsed_then_status_used() {
    match api_error(502, "") {
        SupabaseError::Api { code, message, .. } => {
            assert_eq!(code, "502");
            assert_eq!(message, "HTTP 502");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, SupabaseConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

fn valid() -> SupabaseConfig {
    SupabaseConfig {
        url: "https://demo.supabase.co".to_string(),
        anon_key: Some("anon".to_string()),
        ..Default::default()
    }
}

#[test]
fn given_complete_settings_when_validate_then_ok() {
    assert_that!(valid().validate(), ok(anything()));
}

#[test]
fn given_missing_anon_key_when_validate_then_error_names_env_var() {
    let config = SupabaseConfig {
        anon_key: None,
        ..valid()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("BOASE_SUPABASE_ANON_KEY")
    );
}

#[test]
fn given_url_without_scheme_when_validate_then_error_tagged_with_supabase_section() {
    let config = SupabaseConfig {
        url: "demo.supabase.co".to_string(),
        ..valid()
    };

    let err = config.validate().unwrap_err();

    assert_eq!(err.section(), Some("supabase"));
    assert_that!(err.to_string(), contains_substring("Invalid supabase setting"));
}

#[test]
fn given_blank_anon_key_when_validate_then_error() {
    let config = SupabaseConfig {
        anon_key: Some("   ".to_string()),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_url_without_scheme_when_validate_then_error() {
    let config = SupabaseConfig {
        url: "demo.supabase.co".to_string(),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_out_of_range_when_validate_then_error() {
    let zero = SupabaseConfig {
        request_timeout_secs: 0,
        ..valid()
    };
    let huge = SupabaseConfig {
        request_timeout_secs: 301,
        ..valid()
    };

    assert_that!(zero.validate(), err(anything()));
    assert_that!(huge.validate(), err(anything()));
}

#[test]
fn given_zero_event_buffer_when_validate_then_error() {
    let config = SupabaseConfig {
        event_buffer_size: 0,
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_request_timeout_and_base_url() {
    let config = SupabaseConfig {
        url: " https://demo.supabase.co/ ".to_string(),
        request_timeout_secs: 12,
        ..valid()
    };

    assert_eq!(config.request_timeout(), Duration::from_secs(12));
    assert_eq!(config.base_url(), "https://demo.supabase.co");
}

#[test]
#[serial]
fn given_defaults_when_validate_then_anon_key_required() {
    let _temp = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_env_timeout_when_load_then_overrides_default() {
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("BOASE_SUPABASE_REQUEST_TIMEOUT_SECS", "5");
    let _buffer = EnvGuard::set("BOASE_SUPABASE_EVENT_BUFFER_SIZE", "64");

    let config = Config::load().unwrap();

    assert_eq!(config.supabase.request_timeout_secs, 5);
    assert_eq!(config.supabase.event_buffer_size, 64);
}

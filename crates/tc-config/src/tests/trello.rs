use crate::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS, TrelloConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_default_trello_config_when_validate_then_ok() {
    let config = TrelloConfig::default();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_timeout_at_bounds_when_validate_then_ok() {
    let min = TrelloConfig {
        timeout_secs: MIN_TIMEOUT_SECS,
        ..TrelloConfig::default()
    };
    let max = TrelloConfig {
        timeout_secs: MAX_TIMEOUT_SECS,
        ..TrelloConfig::default()
    };

    assert_that!(min.validate(), ok(anything()));
    assert_that!(max.validate(), ok(anything()));
}

#[test]
fn given_zero_timeout_when_validate_then_error() {
    let config = TrelloConfig {
        timeout_secs: 0,
        ..TrelloConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("timeout_secs"));
}

#[test]
fn given_timeout_above_max_when_validate_then_error() {
    let config = TrelloConfig {
        timeout_secs: MAX_TIMEOUT_SECS + 1,
        ..TrelloConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_non_http_base_url_when_validate_then_error() {
    let config = TrelloConfig {
        base_url: String::from("ftp://api.trello.com/1"),
        ..TrelloConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("base_url"));
}

#[test]
fn given_blank_api_key_when_validate_then_credentials_error() {
    let config = TrelloConfig {
        api_key: String::from("   "),
        ..TrelloConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("Credentials"));
}

#[test]
fn given_empty_token_when_validate_then_credentials_error() {
    let config = TrelloConfig {
        token: String::new(),
        ..TrelloConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_secs_when_timeout_then_duration_matches() {
    let config = TrelloConfig {
        timeout_secs: 17,
        ..TrelloConfig::default()
    };

    assert_that!(config.timeout(), eq(Duration::from_secs(17)));
}

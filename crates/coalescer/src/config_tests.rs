// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var("BOT_TOKEN");
    std::env::remove_var("BOT_USER_ID");
    std::env::remove_var("COOLDOWN_SECONDS");
}

#[test]
#[serial]
fn reads_all_three_variables() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "xoxb-secret");
    std::env::set_var("BOT_USER_ID", "U123");
    std::env::set_var("COOLDOWN_SECONDS", "5");

    let config = CoalescerConfig::from_env().expect("should succeed");
    assert_eq!(config.bot_token, "xoxb-secret");
    assert_eq!(config.bot_user_id, "U123");
    assert_eq!(config.cooldown, Duration::from_secs(5));

    clear_env();
}

#[test]
#[serial]
fn cooldown_defaults_to_thirty_seconds() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "xoxb-secret");
    std::env::set_var("BOT_USER_ID", "U123");

    let config = CoalescerConfig::from_env().expect("should succeed");
    assert_eq!(config.cooldown, Duration::from_secs(30));

    clear_env();
}

#[test]
#[serial]
fn missing_both_variables_names_both() {
    clear_env();

    let err = CoalescerConfig::from_env().expect_err("should fail");
    match err {
        ConfigError::MissingVars(detail) => assert_eq!(detail, "BOT_TOKEN, BOT_USER_ID"),
    }
}

#[test]
#[serial]
fn missing_one_variable_names_only_it() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "xoxb-secret");

    let err = CoalescerConfig::from_env().expect_err("should fail");
    match err {
        ConfigError::MissingVars(detail) => assert_eq!(detail, "BOT_USER_ID"),
    }

    clear_env();
}

#[test]
#[serial]
fn empty_string_is_treated_as_missing() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "");
    std::env::set_var("BOT_USER_ID", "U123");

    let err = CoalescerConfig::from_env().expect_err("should fail");
    match err {
        ConfigError::MissingVars(detail) => assert_eq!(detail, "BOT_TOKEN"),
    }

    clear_env();
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;
use antkeeper_engine::{handler_fn, RegistryConfig};
use serde_json::json;
use serial_test::serial;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn set_env(bot_token: &str, bot_user_id: &str, cooldown_secs: &str) {
    std::env::set_var("BOT_TOKEN", bot_token);
    std::env::set_var("BOT_USER_ID", bot_user_id);
    std::env::set_var("COOLDOWN_SECONDS", cooldown_secs);
}

fn clear_env() {
    std::env::remove_var("BOT_TOKEN");
    std::env::remove_var("BOT_USER_ID");
    std::env::remove_var("COOLDOWN_SECONDS");
}

fn capturing_registry(dir: &std::path::Path, captured: Arc<std::sync::Mutex<Vec<String>>>) -> Arc<Registry> {
    let mut registry = Registry::new(RegistryConfig {
        log_dir: dir.join("logs"),
        state_dir: dir.join("state"),
        worktree_dir: dir.join("worktrees"),
    });
    registry
        .register(
            "greet",
            handler_fn(move |_runner, state| {
                let prompt = state.get("prompt").and_then(|v| v.as_str()).unwrap_or("").to_string();
                captured.lock().expect("lock").push(prompt);
                Ok(state)
            }),
        )
        .expect("register greet");
    Arc::new(registry)
}

fn test_registry(dir: &std::path::Path) -> Arc<Registry> {
    let mut registry = Registry::new(RegistryConfig {
        log_dir: dir.join("logs"),
        state_dir: dir.join("state"),
        worktree_dir: dir.join("worktrees"),
    });
    registry
        .register(
            "greet",
            handler_fn(|_runner, mut state| {
                let prompt = state.get("prompt").and_then(|v| v.as_str()).unwrap_or("").to_string();
                state.insert("greeted", json!(prompt));
                Ok(state)
            }),
        )
        .expect("register greet");
    Arc::new(registry)
}

fn mention_envelope(channel: &str, ts: &str, text: &str) -> EventEnvelope {
    serde_json::from_value(json!({
        "type": "event_callback",
        "event": {
            "type": "app_mention",
            "ts": ts,
            "channel": channel,
            "user": "U1",
            "text": text,
        }
    }))
    .expect("build envelope")
}

fn edit_envelope(channel: &str, edited_ts: &str, new_text: &str) -> EventEnvelope {
    serde_json::from_value(json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "subtype": "message_changed",
            "channel": channel,
            "message": { "ts": edited_ts, "text": new_text },
        }
    }))
    .expect("build envelope")
}

fn delete_envelope(channel: &str, deleted_ts: &str) -> EventEnvelope {
    serde_json::from_value(json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "subtype": "message_deleted",
            "channel": channel,
            "deleted_ts": deleted_ts,
        }
    }))
    .expect("build envelope")
}

fn reply_envelope(channel: &str, thread_ts: &str, reply_ts: &str, text: &str) -> EventEnvelope {
    serde_json::from_value(json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "ts": reply_ts,
            "thread_ts": thread_ts,
            "channel": channel,
            "user": "U2",
            "text": text,
        }
    }))
    .expect("build envelope")
}

#[tokio::test]
async fn url_verification_returns_challenge_without_any_credentials() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::new(test_registry(dir.path()));

    let envelope: EventEnvelope =
        serde_json::from_value(json!({"type": "url_verification", "challenge": "xyz"})).expect("build");
    let response = coalescer.handle_event(envelope).await.expect("handle");
    assert_eq!(response, EventResponse::Challenge("xyz".to_string()));
}

#[tokio::test]
#[serial]
async fn missing_credentials_fails_non_verification_events() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::new(test_registry(dir.path()));

    let err = coalescer
        .handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a"))
        .await
        .expect_err("should fail");
    match err {
        CoalescerError::Config(crate::config::ConfigError::MissingVars(detail)) => {
            assert_eq!(detail, "BOT_TOKEN, BOT_USER_ID");
        }
    }
}

#[tokio::test]
#[serial]
async fn bot_self_events_are_dropped() {
    set_env("xoxb-1", "BOT", "30");
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::new(test_registry(dir.path()));

    let envelope: EventEnvelope = serde_json::from_value(json!({
        "type": "event_callback",
        "event": { "type": "message", "channel": "C1", "ts": "1", "bot_id": "B1" }
    }))
    .expect("build");

    coalescer.handle_event(envelope).await.expect("handle");
    assert_eq!(coalescer.pending_count(), 0);
    clear_env();
}

#[tokio::test]
#[serial]
async fn new_mention_inserts_a_pending_entry_and_posts_a_reaction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reactions.add"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    set_env("xoxb-1", "BOT", "30");
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::with_base_url(test_registry(dir.path()), server.uri());

    coalescer
        .handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a"))
        .await
        .expect("handle");

    assert!(coalescer.contains_pending(&PendingKey::new("C1", "100.1")));
    assert_eq!(coalescer.pending_count(), 1);
    clear_env();
}

#[tokio::test]
#[serial]
async fn duplicate_mention_delivery_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    set_env("xoxb-1", "BOT", "30");
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::with_base_url(test_registry(dir.path()), server.uri());

    coalescer.handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a")).await.expect("first");
    coalescer.handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a")).await.expect("dup");

    assert_eq!(coalescer.pending_count(), 1);
    clear_env();
}

#[tokio::test]
#[serial]
async fn delete_cancels_and_removes_the_pending_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    set_env("xoxb-1", "BOT", "1");
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::with_base_url(test_registry(dir.path()), server.uri());

    coalescer.handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a")).await.expect("mention");
    assert_eq!(coalescer.pending_count(), 1);

    coalescer.handle_event(delete_envelope("C1", "100.1")).await.expect("delete");
    assert_eq!(coalescer.pending_count(), 0);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(coalescer.pending_count(), 0);
    clear_env();
}

#[tokio::test]
#[serial]
async fn orphan_reply_is_dropped_silently() {
    set_env("xoxb-1", "BOT", "30");
    let dir = tempdir().expect("tempdir");
    let coalescer = Coalescer::new(test_registry(dir.path()));

    let response = coalescer
        .handle_event(reply_envelope("C1", "999.9", "999.10", "orphaned"))
        .await
        .expect("handle");
    assert_eq!(response, EventResponse::Ok);
    assert_eq!(coalescer.pending_count(), 0);
    clear_env();
}

#[tokio::test]
#[serial]
async fn new_mention_with_no_edit_dispatches_the_full_cleaned_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    set_env("xoxb-1", "BOT", "1");
    let dir = tempdir().expect("tempdir");
    let captured = Arc::new(std::sync::Mutex::new(Vec::new()));
    let coalescer = Coalescer::with_base_url(capturing_registry(dir.path(), Arc::clone(&captured)), server.uri());

    coalescer.handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a")).await.expect("mention");
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let dispatched = captured.lock().expect("lock");
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0], "greet a");
    clear_env();
}

#[tokio::test]
#[serial]
async fn edit_then_reply_coalesce_into_one_dispatch_after_cooldown() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    set_env("xoxb-1", "BOT", "1");
    let dir = tempdir().expect("tempdir");
    let registry = test_registry(dir.path());
    let coalescer = Coalescer::with_base_url(Arc::clone(&registry), server.uri());

    coalescer.handle_event(mention_envelope("C1", "100.1", "<@BOT> greet a")).await.expect("mention");
    tokio::time::sleep(Duration::from_millis(200)).await;
    coalescer.handle_event(edit_envelope("C1", "100.1", "<@BOT> greet b")).await.expect("edit");
    tokio::time::sleep(Duration::from_millis(300)).await;
    coalescer
        .handle_event(reply_envelope("C1", "100.1", "100.2", "and also c"))
        .await
        .expect("reply");

    assert_eq!(coalescer.pending_count(), 1);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(coalescer.pending_count(), 0);
    clear_env();
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Antkeeper Contributors

use super::*;

#[test]
fn urls_are_built_under_the_base() {
    assert_eq!(post_message_url("https://example.test"), "https://example.test/chat.postMessage");
    assert_eq!(add_reaction_url("https://example.test"), "https://example.test/reactions.add");
}

#[test]
fn post_message_request_serializes_expected_fields() {
    let req = PostMessageRequest {
        channel: "C1",
        thread_ts: "100.1",
        text: "hi",
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["channel"], "C1");
    assert_eq!(value["thread_ts"], "100.1");
    assert_eq!(value["text"], "hi");
}

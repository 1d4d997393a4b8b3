//! End-to-end tests of the message pipeline.
//!
//! These follow one message from the input box to the stored row and back
//! to the screen.

use openchat_markup::{
    ComposeKey, KeyOutcome, KnownUser, MentionComposer, MentionMatching, MessageSegment,
    RenderOptions, StoredMessage, detect_mention_context, expand_shortcodes, flatten, lexicon,
    prepare_outgoing, render_segments, resolve_mentions, search_emoji, suggest_mentions, to_html,
};

fn directory() -> Vec<KnownUser> {
    vec![
        KnownUser::new("alice", "u1", Some("Alice".to_string())),
        KnownUser::new("bob", "u2", Some("Bob".to_string())),
        KnownUser::new("salina", "u3", Some("Sally".to_string())),
    ]
}

#[test]
fn test_shortcode_example() {
    let result = expand_shortcodes("gg :fire: :nope:");
    assert_eq!(result.text, "gg 🔥 :nope:");
    assert!(result.changed);
}

#[test]
fn test_unrecognized_tokens_unchanged() {
    for input in [":nope:", ":a-b+c_d:", "x :123456: y", "::", ":"] {
        let result = expand_shortcodes(input);
        assert_eq!(result.text, input);
        assert!(!result.changed);
    }
}

#[test]
fn test_resolve_example() {
    let users = vec![KnownUser::new("alice", "u1", Some("Alice".to_string()))];
    let result = resolve_mentions("hi @alice and @bob", &users, MentionMatching::default());
    assert_eq!(result.content, "hi @alice and @bob");
    assert_eq!(result.mentions.len(), 1);
    assert_eq!(result.mentions[0].raw_text, "@alice");
    assert_eq!(result.mentions[0].user_id, "u1");
}

#[test]
fn test_context_examples() {
    let open = detect_mention_context("hello @al", 9);
    assert!(open.open);
    assert_eq!(open.query_fragment, "al");
    assert_eq!(open.anchor_offset, 6);

    assert!(!detect_mention_context("hello @al ice", 13).open);
}

#[test]
fn test_emoji_search_example() {
    let results = search_emoji("smi", 5);
    let first_keyword_only = results
        .iter()
        .position(|e| !e.names().any(|n| n.contains("smi")));
    let last_smile = results
        .iter()
        .rposition(|e| e.name == "smile" || e.name == "smiley");
    assert!(last_smile.is_some());
    if let Some(k) = first_keyword_only {
        assert!(last_smile < Some(k));
    }
}

#[test]
fn test_prefix_suggestion_ranks_before_substring() {
    let users = directory();
    let ranked = suggest_mentions("sal", &users, 10);
    let names: Vec<_> = ranked.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["salina"]);

    let ranked = suggest_mentions("li", &users, 10);
    let names: Vec<_> = ranked.iter().map(|u| u.username.as_str()).collect();
    // No prefix hits; both contain "li", input order kept.
    assert_eq!(names, vec!["alice", "salina"]);

    let ranked = suggest_mentions("b", &users, 10);
    assert_eq!(ranked[0].username, "bob");
}

#[test]
fn test_unknown_users_never_recorded() {
    let users = directory();
    let text = "@zoe @alice @mallory @bob";
    let result = resolve_mentions(text, &users, MentionMatching::default());
    assert!(result.mentions.iter().all(|m| m.username != "zoe" && m.username != "mallory"));
    assert!(result.content.contains("@zoe"));
    assert!(result.content.contains("@mallory"));
    assert_eq!(result.mentions.len(), 2);
}

#[test]
fn test_segments_reconstruct_content() {
    let users = directory();
    let inputs = [
        "",
        "no mentions at all",
        "@alice",
        "@alice@bob",
        "hey @alice, @bob! and @alice again",
        "email bob@example.com and @salina",
        "🎉 @bob 🎉",
    ];
    for input in inputs {
        let msg = prepare_outgoing(input, &users, &RenderOptions::default());
        let segments = render_segments(&msg.content, &msg.mentions);
        let flat = flatten(&segments);
        assert_eq!(flat, msg.content, "input: {input}");
        assert_eq!(render_segments(&flat, &msg.mentions), segments, "input: {input}");
    }
}

#[test]
fn test_compose_then_send_then_render() {
    let users = directory();
    let mut composer = MentionComposer::default();

    let mut text = String::from("great game :tada: @bo");
    let caret = text.len();
    composer.update(&text, caret, &users);
    assert!(composer.is_open());

    match composer.handle_key(ComposeKey::Enter, &text) {
        KeyOutcome::Committed(edit) => {
            text = edit.text;
            assert_eq!(edit.caret, text.len());
        }
        other => panic!("Expected commit, got {other:?}"),
    }
    assert_eq!(text, "great game :tada: @bob ");

    let msg = prepare_outgoing(&text, &users, &RenderOptions::default());
    assert_eq!(msg.content, "great game 🎉 @bob ");
    assert!(!expand_shortcodes(&msg.content).changed);

    // Persist and load like the backend would.
    let row = serde_json::to_string(&msg).unwrap_or_default();
    let stored: StoredMessage = serde_json::from_str(&row).unwrap_or_default();
    assert_eq!(stored.mentions[0].username, "bob");
    assert_eq!(stored.mentions[0].user_id, "u2");

    let segments = stored.segments();
    assert!(matches!(&segments[1], MessageSegment::Mention { content, .. } if content == "@bob"));

    let html = to_html(&stored.content, &stored.mentions, &RenderOptions::default());
    assert!(html.contains("data-user-id=\"u2\""));
}

#[test]
fn test_persisted_mentions_contain_username_and_user_id() {
    let msg = prepare_outgoing("@alice", &directory(), &RenderOptions::default());
    let json = serde_json::to_value(&msg.mentions).unwrap_or_default();
    assert_eq!(json[0]["username"], "alice");
    assert_eq!(json[0]["user_id"], "u1");
}

#[test]
fn test_lexicon_is_exposed() {
    assert!(lexicon::all().len() > 100);
    assert!(lexicon::find_by_exact_name_or_alias("crab").is_some());
}

#[test]
fn test_rejected_candidate_is_not_rendered_as_mention() {
    let users = directory();
    let outgoing = prepare_outgoing(
        "hey @alice's cat, ping @alice",
        &users,
        &RenderOptions::default(),
    );
    assert_eq!(outgoing.mentions.len(), 1);
    assert_eq!((outgoing.mentions[0].start, outgoing.mentions[0].end), (23, 29));

    let segments = render_segments(&outgoing.content, &outgoing.mentions);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].content(), "hey @alice's cat, ping ");
    assert!(matches!(segments[0], MessageSegment::Text { .. }));
    assert!(matches!(segments[1], MessageSegment::Mention { .. }));
    assert_eq!(flatten(&segments), outgoing.content);
}

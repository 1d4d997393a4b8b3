//! `@mention` detection and resolution.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Regex patterns - these are valid static patterns that cannot fail
#[allow(clippy::unwrap_used)]
static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\S+)").unwrap());

/// A user that mentions can resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownUser {
    /// Canonical username, written after `@`.
    pub username: String,
    /// Stable user ID.
    pub user_id: String,
    /// Display name shown in suggestions.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl KnownUser {
    /// Create a new known user.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        user_id: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            user_id: user_id.into(),
            display_name,
        }
    }

    /// Display name, or the username when there is none.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// A resolved mention.
///
/// This is also the persisted form of a mention: stored `mentions` arrays
/// carry at least `username` and `user_id`. Older rows without `raw_text`
/// or offsets still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionToken {
    /// Text as it appears in the content, `@` included.
    #[serde(default)]
    pub raw_text: String,
    /// Username of the resolved user.
    pub username: String,
    /// ID of the resolved user.
    pub user_id: String,
    /// Display name of the resolved user.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Byte offset of the `@`.
    #[serde(default)]
    pub start: usize,
    /// Byte offset just past the mention.
    #[serde(default)]
    pub end: usize,
}

impl MentionToken {
    /// Text to look for when re-deriving segments from content.
    #[must_use]
    pub fn needle(&self) -> String {
        if self.raw_text.is_empty() {
            format!("@{}", self.username)
        } else {
            self.raw_text.clone()
        }
    }
}

/// How candidate usernames are compared with known usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionMatching {
    /// Case-insensitive, preferring an exact-case hit when one exists.
    #[default]
    CaseInsensitive,
    /// Exact, case-sensitive.
    Exact,
}

/// Result of [`resolve_mentions`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Message content, unchanged.
    pub content: String,
    /// Resolved mentions in order of first appearance.
    pub mentions: Vec<MentionToken>,
}

/// Mention autocomplete state at the caret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MentionContext {
    /// Whether suggestions should be shown.
    pub open: bool,
    /// Text typed after the `@`.
    pub query_fragment: String,
    /// Byte offset of the `@`.
    pub anchor_offset: usize,
}

/// Detect a mention being typed at `caret` (a byte offset).
///
/// Finds the last `@` at or before the caret. Suggestions are closed when
/// there is no `@` or when whitespace separates it from the caret.
#[must_use]
pub fn detect_mention_context(text: &str, caret: usize) -> MentionContext {
    let before = &text[..crate::floor_char_boundary(text, caret)];
    let Some(anchor) = before.rfind('@') else {
        return MentionContext::default();
    };

    let fragment = &before[anchor + 1..];
    if fragment.chars().any(char::is_whitespace) {
        return MentionContext::default();
    }

    MentionContext {
        open: true,
        query_fragment: fragment.to_string(),
        anchor_offset: anchor,
    }
}

/// Rank users for a partially typed mention.
///
/// The fragment is compared case-insensitively with display names and
/// usernames. Prefix matches come first, then substring matches; ties keep
/// the input order. An empty fragment lists everyone.
#[must_use]
pub fn suggest_mentions<'a>(
    fragment: &str,
    users: &'a [KnownUser],
    limit: usize,
) -> Vec<&'a KnownUser> {
    let needle = fragment.to_lowercase();
    let mut prefix = Vec::new();
    let mut substring = Vec::new();

    for user in users {
        let username = user.username.to_lowercase();
        let display = user.display_name.as_deref().map(str::to_lowercase);
        let fields = std::iter::once(username.as_str()).chain(display.as_deref());

        let mut contains = false;
        let mut starts = false;
        for field in fields {
            starts |= field.starts_with(&needle);
            contains |= field.contains(&needle);
        }

        if starts {
            prefix.push(user);
        } else if contains {
            substring.push(user);
        }
    }

    prefix.into_iter().chain(substring).take(limit).collect()
}

/// Find and resolve `@username` mentions in `text`.
///
/// A candidate is `@` followed by a run of non-whitespace characters, where
/// the `@` does not directly follow a word character (so `a@b.c` is not a
/// candidate). When the whole run does not resolve, trailing ASCII
/// punctuation is dropped and the lookup is retried, so `@alice,` resolves.
///
/// Unresolved candidates stay as plain text. Repeated mentions of one user
/// collapse into the first occurrence. The content is returned unchanged.
#[must_use]
pub fn resolve_mentions(text: &str, users: &[KnownUser], matching: MentionMatching) -> Resolution {
    let mut mentions: Vec<MentionToken> = Vec::new();
    let mut seen = HashSet::new();

    for cap in CANDIDATE_RE.captures_iter(text) {
        let Some(whole) = cap.get(0) else { continue };
        let Some(run) = cap.get(1) else { continue };

        if text[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(is_word_char)
        {
            continue;
        }

        let Some((name, user)) = resolve_candidate(run.as_str(), users, matching) else {
            tracing::trace!(candidate = run.as_str(), "unresolved mention");
            continue;
        };

        if !seen.insert(user.username.as_str()) {
            continue;
        }

        let end = run.start() + name.len();
        mentions.push(MentionToken {
            raw_text: text[whole.start()..end].to_string(),
            username: user.username.clone(),
            user_id: user.user_id.clone(),
            display_name: user.display_name.clone(),
            start: whole.start(),
            end,
        });
    }

    tracing::debug!(count = mentions.len(), "resolved mentions");

    Resolution {
        content: text.to_string(),
        mentions,
    }
}

/// Resolve one candidate run, trimming trailing punctuation if needed.
fn resolve_candidate<'a, 'u>(
    run: &'a str,
    users: &'u [KnownUser],
    matching: MentionMatching,
) -> Option<(&'a str, &'u KnownUser)> {
    if let Some(user) = find_user(run, users, matching) {
        return Some((run, user));
    }

    let trimmed = run.trim_end_matches(|c: char| c.is_ascii_punctuation() && c != '_');
    if trimmed.is_empty() || trimmed.len() == run.len() {
        return None;
    }
    find_user(trimmed, users, matching).map(|user| (trimmed, user))
}

/// Look up a username under the given matching rule.
fn find_user<'u>(
    name: &str,
    users: &'u [KnownUser],
    matching: MentionMatching,
) -> Option<&'u KnownUser> {
    let exact = users.iter().find(|u| u.username == name);
    match matching {
        MentionMatching::Exact => exact,
        MentionMatching::CaseInsensitive => exact.or_else(|| {
            let lowered = name.to_lowercase();
            users.iter().find(|u| u.username.to_lowercase() == lowered)
        }),
    }
}

/// Distinct user IDs to notify for a message, in mention order, without the
/// sender.
#[must_use]
pub fn notification_recipients<'a>(mentions: &'a [MentionToken], sender_id: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    mentions
        .iter()
        .map(|m| m.user_id.as_str())
        .filter(|id| *id != sender_id && seen.insert(*id))
        .collect()
}

/// Characters that may continue a username.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn users() -> Vec<KnownUser> {
        vec![
            KnownUser::new("alice", "u1", Some("Alice".to_string())),
            KnownUser::new("bob", "u2", Some("Bobby Tables".to_string())),
            KnownUser::new("malcolm", "u3", Some("Mal".to_string())),
            KnownUser::new("carol", "u4", None),
        ]
    }

    #[test]
    fn test_detect_context_open() {
        let ctx = detect_mention_context("hello @al", 9);
        assert!(ctx.open);
        assert_eq!(ctx.query_fragment, "al");
        assert_eq!(ctx.anchor_offset, 6);
    }

    #[test]
    fn test_detect_context_whitespace_closes() {
        let ctx = detect_mention_context("hello @al ice", 13);
        assert!(!ctx.open);
    }

    #[test]
    fn test_detect_context_no_at() {
        assert!(!detect_mention_context("hello", 5).open);
        assert!(!detect_mention_context("", 0).open);
    }

    #[test]
    fn test_detect_context_bare_at() {
        let ctx = detect_mention_context("hi @", 4);
        assert!(ctx.open);
        assert_eq!(ctx.query_fragment, "");
        assert_eq!(ctx.anchor_offset, 3);
    }

    #[test]
    fn test_detect_context_caret_in_middle() {
        // Caret right after "@b", text continues.
        let ctx = detect_mention_context("@bo and more", 2);
        assert!(ctx.open);
        assert_eq!(ctx.query_fragment, "b");
    }

    #[test]
    fn test_detect_context_caret_clamped() {
        let ctx = detect_mention_context("hey @al", 1000);
        assert!(ctx.open);
        assert_eq!(ctx.query_fragment, "al");
    }

    #[test]
    fn test_detect_context_caret_inside_multibyte_char() {
        // "é" is two bytes; a caret inside it snaps back.
        let ctx = detect_mention_context("@é", 2);
        assert!(ctx.open);
        assert_eq!(ctx.query_fragment, "");
    }

    #[test]
    fn test_suggest_prefix_before_substring() {
        let users = users();
        // "al" is a prefix of alice/Alice and only a substring of malcolm.
        let ranked = suggest_mentions("al", &users, 10);
        let names: Vec<_> = ranked.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "malcolm"]);
    }

    #[test]
    fn test_suggest_matches_display_name_case_insensitively() {
        let users = users();
        let ranked = suggest_mentions("TAB", &users, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].username, "bob");
    }

    #[test]
    fn test_suggest_display_name_prefix() {
        let users = users();
        // "Mal" is malcolm's display-name prefix.
        let ranked = suggest_mentions("ma", &users, 10);
        assert_eq!(ranked[0].username, "malcolm");
    }

    #[test]
    fn test_suggest_empty_fragment_lists_all_in_order() {
        let users = users();
        let ranked = suggest_mentions("", &users, 3);
        let names: Vec<_> = ranked.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "malcolm"]);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let result = resolve_mentions(
            "hi @alice and @bob",
            &[KnownUser::new("alice", "u1", Some("Alice".to_string()))],
            MentionMatching::default(),
        );
        assert_eq!(result.content, "hi @alice and @bob");
        assert_eq!(result.mentions.len(), 1);
        let m = &result.mentions[0];
        assert_eq!(m.raw_text, "@alice");
        assert_eq!(m.user_id, "u1");
        assert_eq!(m.display_name.as_deref(), Some("Alice"));
        assert_eq!((m.start, m.end), (3, 9));
    }

    #[test]
    fn test_resolve_collapses_duplicates() {
        let result = resolve_mentions("@bob @alice @bob", &users(), MentionMatching::default());
        let names: Vec<_> = result.mentions.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
        assert_eq!(result.mentions[0].start, 0);
    }

    #[test]
    fn test_resolve_trailing_punctuation() {
        let result = resolve_mentions("thanks @alice, @bob!", &users(), MentionMatching::default());
        assert_eq!(result.mentions.len(), 2);
        assert_eq!(result.mentions[0].raw_text, "@alice");
        assert_eq!(result.mentions[1].raw_text, "@bob");
        assert_eq!(&result.content[result.mentions[1].start..result.mentions[1].end], "@bob");
    }

    #[test]
    fn test_resolve_ignores_email_addresses() {
        let result = resolve_mentions("mail bob@alice.dev", &users(), MentionMatching::default());
        assert!(result.mentions.is_empty());
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let result = resolve_mentions("hey @ALICE", &users(), MentionMatching::CaseInsensitive);
        assert_eq!(result.mentions.len(), 1);
        assert_eq!(result.mentions[0].username, "alice");
        assert_eq!(result.mentions[0].raw_text, "@ALICE");
    }

    #[test]
    fn test_resolve_exact_case_wins() {
        let users = vec![
            KnownUser::new("Sam", "u1", None),
            KnownUser::new("sam", "u2", None),
        ];
        let result = resolve_mentions("@sam", &users, MentionMatching::CaseInsensitive);
        assert_eq!(result.mentions[0].user_id, "u2");
    }

    #[test]
    fn test_resolve_exact_matching() {
        let result = resolve_mentions("hey @ALICE", &users(), MentionMatching::Exact);
        assert!(result.mentions.is_empty());
    }

    #[test]
    fn test_resolve_longer_run_is_not_truncated_to_user() {
        // "@alicex" is a different (unknown) user, not alice.
        let result = resolve_mentions("@alicex", &users(), MentionMatching::default());
        assert!(result.mentions.is_empty());
    }

    #[test]
    fn test_resolve_self_mention() {
        let result = resolve_mentions("note to @carol", &users(), MentionMatching::default());
        assert_eq!(result.mentions.len(), 1);
        assert_eq!(result.mentions[0].user_id, "u4");
    }

    #[test]
    fn test_notification_recipients_skip_sender() {
        let result = resolve_mentions("@alice @bob @carol", &users(), MentionMatching::default());
        let ids = notification_recipients(&result.mentions, "u2");
        assert_eq!(ids, vec!["u1", "u4"]);
    }

    #[test]
    fn test_mention_token_from_minimal_json() {
        let token: MentionToken =
            serde_json::from_str(r#"{"username":"alice","user_id":"u1"}"#).unwrap();
        assert_eq!(token.needle(), "@alice");
        assert_eq!(token.display_name, None);
    }
}

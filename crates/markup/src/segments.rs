//! Render-time message segmentation.

use serde::{Deserialize, Serialize};

use crate::mention::{MentionToken, is_word_char};

/// One contiguous run of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageSegment {
    /// Plain text.
    Text {
        /// The text.
        content: String,
    },
    /// A resolved mention.
    Mention {
        /// The mention as written, e.g. `@alice`.
        content: String,
        /// The stored mention record.
        mention: MentionToken,
    },
}

impl MessageSegment {
    /// The segment's text as it appears in the content.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Mention { content, .. } => content,
        }
    }
}

/// A message as persisted by the backend.
///
/// A null or missing `content` loads as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Canonical content.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Resolved mentions.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mentions: Vec<MentionToken>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StoredMessage {
    /// Segment this message for display.
    #[must_use]
    pub fn segments(&self) -> Vec<MessageSegment> {
        render_segments(&self.content, &self.mentions)
    }
}

/// Split stored content into text and mention segments.
///
/// Walks the content once, left to right. A stored mention whose `start..end`
/// still spans its text claims that span. Otherwise (legacy rows, edited
/// content) it claims the first unconsumed occurrence of its text that would
/// also have resolved at send time. Everything in between becomes text
/// segments. Concatenating the segments gives back `content` exactly.
#[must_use]
pub fn render_segments(content: &str, mentions: &[MentionToken]) -> Vec<MessageSegment> {
    let needles: Vec<String> = mentions.iter().map(MentionToken::needle).collect();
    let mut consumed = vec![false; mentions.len()];
    let mut segments = Vec::new();
    let mut pos = 0;

    loop {
        // Earliest pending occurrence; on a tie the longer needle wins.
        let next = needles
            .iter()
            .enumerate()
            .filter(|(i, n)| !consumed[*i] && !n.is_empty())
            .filter_map(|(i, n)| {
                stored_span(content, pos, &mentions[i], n)
                    .or_else(|| find_bounded(content, pos, n))
                    .map(|start| (start, i))
            })
            .min_by(|(sa, ia), (sb, ib)| {
                sa.cmp(sb)
                    .then_with(|| needles[*ib].len().cmp(&needles[*ia].len()))
            });

        let Some((start, index)) = next else { break };
        let end = start + needles[index].len();

        if start > pos {
            segments.push(MessageSegment::Text {
                content: content[pos..start].to_string(),
            });
        }
        segments.push(MessageSegment::Mention {
            content: content[start..end].to_string(),
            mention: mentions[index].clone(),
        });
        consumed[index] = true;
        pos = end;
    }

    if pos < content.len() {
        segments.push(MessageSegment::Text {
            content: content[pos..].to_string(),
        });
    }

    segments
}

/// Concatenate segment contents back into flat text.
#[must_use]
pub fn flatten(segments: &[MessageSegment]) -> String {
    segments.iter().map(MessageSegment::content).collect()
}

/// The recorded offsets of `mention`, if they still point at `needle` and lie
/// past `from`.
fn stored_span(content: &str, from: usize, mention: &MentionToken, needle: &str) -> Option<usize> {
    let (start, end) = (mention.start, mention.end);
    (start >= from && end > start && content.get(start..end) == Some(needle)).then_some(start)
}

/// First occurrence of `needle` at or after `from` that the send-time
/// resolver would have accepted: no word character right before it, and
/// after it only whitespace, end of text, or trailing punctuation up to one
/// of those.
fn find_bounded(content: &str, from: usize, needle: &str) -> Option<usize> {
    let mut offset = from;
    while let Some(found) = content[offset..].find(needle) {
        let start = offset + found;
        let end = start + needle.len();
        let before_ok = !content[..start].chars().next_back().is_some_and(is_word_char);
        if before_ok && ends_candidate(&content[end..]) {
            return Some(start);
        }
        // Step past the first char of this hit and keep looking.
        offset = start + content[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Whether `rest` can follow a resolved mention: the run after the `@` stops
/// at whitespace, and only trailing ASCII punctuation may be trimmed off it.
fn ends_candidate(rest: &str) -> bool {
    let tail = rest.trim_start_matches(|c: char| c.is_ascii_punctuation() && c != '_');
    tail.chars().next().is_none_or(char::is_whitespace)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::mention::{KnownUser, MentionMatching, resolve_mentions};

    fn token(raw: &str, username: &str, user_id: &str) -> MentionToken {
        MentionToken {
            raw_text: raw.to_string(),
            username: username.to_string(),
            user_id: user_id.to_string(),
            display_name: None,
            start: 0,
            end: 0,
        }
    }

    #[test]
    fn test_segments_split_around_mention() {
        let segments = render_segments("hi @alice and @bob", &[token("@alice", "alice", "u1")]);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].content(), "hi ");
        match &segments[1] {
            MessageSegment::Mention { content, mention } => {
                assert_eq!(content, "@alice");
                assert_eq!(mention.user_id, "u1");
            }
            other => panic!("Expected mention segment, got {other:?}"),
        }
        assert_eq!(segments[2].content(), " and @bob");
    }

    #[test]
    fn test_segments_without_mentions() {
        let segments = render_segments("plain text", &[]);
        assert_eq!(
            segments,
            vec![MessageSegment::Text {
                content: "plain text".to_string()
            }]
        );
    }

    #[test]
    fn test_segments_empty_content() {
        assert!(render_segments("", &[token("@a", "a", "u1")]).is_empty());
    }

    #[test]
    fn test_segments_stored_order_does_not_matter() {
        let mentions = [token("@bob", "bob", "u2"), token("@alice", "alice", "u1")];
        let segments = render_segments("@alice @bob", &mentions);
        let kinds: Vec<_> = segments
            .iter()
            .map(|s| matches!(s, MessageSegment::Mention { .. }))
            .collect();
        assert_eq!(kinds, vec![true, false, true]);
        assert_eq!(flatten(&segments), "@alice @bob");
    }

    #[test]
    fn test_segments_respect_word_boundary() {
        let segments = render_segments("@alicex then @alice", &[token("@alice", "alice", "u1")]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].content(), "@alicex then ");
        assert_eq!(segments[1].content(), "@alice");
    }

    #[test]
    fn test_segments_skip_occurrences_the_resolver_rejects() {
        let alice = token("@alice", "alice", "u1");
        for content in [
            "hey @alice's cat, ping @alice",
            "@alice-smith or @alice",
            "@alice.x @alice",
        ] {
            let segments = render_segments(content, std::slice::from_ref(&alice));
            assert_eq!(segments.len(), 2, "{content}");
            assert!(content.ends_with(segments[1].content()));
            assert!(matches!(segments[1], MessageSegment::Mention { .. }));
        }

        let segments = render_segments("(@alice), ok", std::slice::from_ref(&alice));
        assert_eq!(segments[1].content(), "@alice");
    }

    #[test]
    fn test_segments_prefer_stored_offsets() {
        let mut alice = token("@alice", "alice", "u1");
        (alice.start, alice.end) = (10, 16);
        let segments = render_segments("@alice or @alice", &[alice.clone()]);
        assert_eq!(segments[0].content(), "@alice or ");
        assert!(matches!(segments[1], MessageSegment::Mention { .. }));

        // Offsets that no longer match fall back to searching.
        (alice.start, alice.end) = (2, 8);
        let segments = render_segments("@alice or @alice", &[alice]);
        assert!(matches!(segments[0], MessageSegment::Mention { .. }));
        assert_eq!(segments[1].content(), " or @alice");
    }

    #[test]
    fn test_segments_each_mention_consumed_once() {
        let segments = render_segments("@bob @bob", &[token("@bob", "bob", "u2")]);
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], MessageSegment::Mention { .. }));
        assert_eq!(segments[1].content(), " @bob");
    }

    #[test]
    fn test_segments_legacy_mention_without_raw_text() {
        let mention: MentionToken =
            serde_json::from_str(r#"{"username":"alice","user_id":"u1"}"#).unwrap();
        let segments = render_segments("yo @alice!", &[mention]);
        assert_eq!(segments[1].content(), "@alice");
        assert_eq!(segments[2].content(), "!");
    }

    #[test]
    fn test_segments_idempotent_round_trip() {
        let users = vec![
            KnownUser::new("alice", "u1", None),
            KnownUser::new("bob", "u2", None),
        ];
        let text = "🔥 @alice, meet @bob. @carol is away; @alice again";
        let resolved = resolve_mentions(text, &users, MentionMatching::default());
        let first = render_segments(&resolved.content, &resolved.mentions);
        let flat = flatten(&first);
        assert_eq!(flat, text);
        let second = render_segments(&flat, &resolved.mentions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stored_message_null_content() {
        let msg: StoredMessage = serde_json::from_str(r#"{"content":null,"mentions":null}"#).unwrap();
        assert_eq!(msg.content, "");
        assert!(msg.segments().is_empty());

        let msg: StoredMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg, StoredMessage::default());
    }

    #[test]
    fn test_segment_serialization_is_tagged() {
        let json = serde_json::to_value(MessageSegment::Text {
            content: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["content"], "x");
    }
}

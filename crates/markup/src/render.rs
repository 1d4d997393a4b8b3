//! Message pipeline: preparing outgoing messages and rendering stored ones.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::mention::{KnownUser, MentionMatching, MentionToken, resolve_mentions};
use crate::segments::{MessageSegment, render_segments};
use crate::shortcode::expand_shortcodes;

// Regex patterns - these are valid static patterns that cannot fail
#[allow(clippy::unwrap_used)]
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\[\]()]+").unwrap());

/// Characters that end a sentence rather than a URL.
const URL_TRAILING: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"'];

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// How mention candidates are matched against usernames.
    #[serde(default)]
    pub mention_matching: MentionMatching,
    /// Open links in a new tab.
    #[serde(default = "default_true")]
    pub link_target_blank: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mention_matching: MentionMatching::default(),
            link_target_blank: true,
        }
    }
}

/// A message ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Canonical content: shortcodes expanded, mentions as typed.
    pub content: String,
    /// Resolved mentions, offsets relative to `content`.
    pub mentions: Vec<MentionToken>,
}

/// Display-level piece of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlinePart {
    /// Plain text.
    Text {
        /// The text.
        text: String,
    },
    /// A bare URL turned into a link.
    Link {
        /// The URL.
        url: String,
    },
    /// A resolved mention.
    Mention {
        /// The mention as written.
        text: String,
        /// The mentioned user.
        mention: MentionToken,
    },
}

/// Turn raw input into the form that gets stored.
///
/// Shortcodes are expanded first, since glyph insertion shifts offsets;
/// mentions are then resolved against the expanded text.
#[must_use]
pub fn prepare_outgoing(raw: &str, users: &[KnownUser], options: &RenderOptions) -> OutgoingMessage {
    let expansion = expand_shortcodes(raw);
    let resolution = resolve_mentions(&expansion.text, users, options.mention_matching);
    OutgoingMessage {
        content: resolution.content,
        mentions: resolution.mentions,
    }
}

/// Split stored content into text, link and mention parts.
///
/// Links are only detected inside text segments, never inside a mention.
#[must_use]
pub fn render_parts(content: &str, mentions: &[MentionToken]) -> Vec<InlinePart> {
    let mut parts = Vec::new();
    for segment in render_segments(content, mentions) {
        match segment {
            MessageSegment::Text { content } => linkify_into(&content, &mut parts),
            MessageSegment::Mention { content, mention } => parts.push(InlinePart::Mention {
                text: content,
                mention,
            }),
        }
    }
    parts
}

/// Render stored content to HTML.
#[must_use]
pub fn to_html(content: &str, mentions: &[MentionToken], options: &RenderOptions) -> String {
    render_parts(content, mentions)
        .iter()
        .map(|part| part_to_html(part, options))
        .collect()
}

/// Render stored content to plain text.
#[must_use]
pub fn to_plain_text(content: &str, mentions: &[MentionToken]) -> String {
    render_parts(content, mentions)
        .into_iter()
        .map(|part| match part {
            InlinePart::Text { text } | InlinePart::Mention { text, .. } => text,
            InlinePart::Link { url } => url,
        })
        .collect()
}

/// Split text into text and link parts.
fn linkify_into(text: &str, parts: &mut Vec<InlinePart>) {
    let mut pos = 0;
    for m in URL_RE.find_iter(text) {
        let candidate = m.as_str().trim_end_matches(URL_TRAILING);
        if Url::parse(candidate).is_err() {
            continue;
        }
        if m.start() > pos {
            push_text(parts, &text[pos..m.start()]);
        }
        parts.push(InlinePart::Link {
            url: candidate.to_string(),
        });
        pos = m.start() + candidate.len();
    }
    if pos < text.len() {
        push_text(parts, &text[pos..]);
    }
}

/// Append text, merging with a preceding text part.
fn push_text(parts: &mut Vec<InlinePart>, text: &str) {
    if let Some(InlinePart::Text { text: last }) = parts.last_mut() {
        last.push_str(text);
    } else {
        parts.push(InlinePart::Text {
            text: text.to_string(),
        });
    }
}

fn part_to_html(part: &InlinePart, options: &RenderOptions) -> String {
    match part {
        InlinePart::Text { text } => html_escape(text).replace('\n', "<br />"),
        InlinePart::Link { url } => {
            let target = if options.link_target_blank {
                " target=\"_blank\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\" rel=\"nofollow noopener noreferrer\"{target}>{}</a>",
                html_escape(url),
                html_escape(url)
            )
        }
        InlinePart::Mention { text, mention } => {
            format!(
                "<span class=\"mention\" data-user-id=\"{}\" data-username=\"{}\">{}</span>",
                html_escape(&mention.user_id),
                html_escape(&mention.username),
                html_escape(text)
            )
        }
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

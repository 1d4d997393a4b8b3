//! Chat message markup for OpenChat.
//!
//! This crate turns what a user types into what gets stored, and what is
//! stored into what gets displayed.
//!
//! # Features
//!
//! - **Emoji lexicon**: exact lookup and ranked search via [`lexicon`]
//! - **Shortcodes**: `:fire:` to glyph via [`expand_shortcodes`]
//! - **Mentions**: compose-time context via [`detect_mention_context`],
//!   send-time resolution via [`resolve_mentions`], and the keyboard-driven
//!   suggestion list via [`MentionComposer`]
//! - **Rendering**: segments via [`render_segments`], HTML via [`to_html`]
//!
//! Offsets (carets, mention spans) are byte offsets into UTF-8 text.
//!
//! # Example
//!
//! ```
//! use openchat_markup::{KnownUser, RenderOptions, prepare_outgoing, to_html};
//!
//! let users = vec![KnownUser::new("alice", "u1", None)];
//! let msg = prepare_outgoing("gg :fire: @alice", &users, &RenderOptions::default());
//! assert_eq!(msg.content, "gg 🔥 @alice");
//! let html = to_html(&msg.content, &msg.mentions, &RenderOptions::default());
//! assert!(html.contains("class=\"mention\""));
//! ```

#![allow(clippy::missing_const_for_fn)]

mod compose;
mod emoji_table;
pub mod lexicon;
mod mention;
mod render;
mod segments;
mod shortcode;

pub use compose::{
    ComposeEdit, ComposeKey, DEFAULT_SUGGESTION_LIMIT, KeyOutcome, MentionComposer,
    apply_suggestion,
};
pub use lexicon::{EmojiCategory, EmojiEntry};
pub use mention::{
    KnownUser, MentionContext, MentionMatching, MentionToken, Resolution, detect_mention_context,
    notification_recipients, resolve_mentions, suggest_mentions,
};
pub use render::{
    InlinePart, OutgoingMessage, RenderOptions, prepare_outgoing, render_parts, to_html,
    to_plain_text,
};
pub use segments::{MessageSegment, StoredMessage, flatten, render_segments};
pub use shortcode::{Expansion, ShortcodeContext, detect_shortcode_context, expand_shortcodes};

/// Search the emoji lexicon; see [`lexicon::search`].
#[must_use]
pub fn search_emoji(query: &str, limit: usize) -> Vec<&'static EmojiEntry> {
    lexicon::search(query, limit)
}

/// Largest char boundary of `text` at or below `index`, clamped to its length.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    (0..=index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

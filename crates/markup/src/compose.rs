//! Compose-time mention autocomplete.
//!
//! [`MentionComposer`] tracks whether the suggestion list is showing for the
//! current text buffer and caret, and which entry is highlighted. Navigation
//! keys are consumed only while the list is open; otherwise the caller lets
//! them through to the text input.

use serde::Serialize;

use crate::mention::{KnownUser, MentionContext, detect_mention_context, suggest_mentions};

/// Default number of suggestions shown.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Keys the composer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeKey {
    /// Move the highlight up.
    Up,
    /// Move the highlight down.
    Down,
    /// Commit the highlighted suggestion.
    Enter,
    /// Commit the highlighted suggestion.
    Tab,
    /// Close the list without editing.
    Escape,
}

/// Text buffer and caret after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeEdit {
    /// New buffer contents.
    pub text: String,
    /// New caret byte offset.
    pub caret: usize,
}

/// What the caller should do with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours; insert or handle it normally.
    PassThrough,
    /// Consumed; the highlight moved.
    Highlighted(usize),
    /// Consumed; the list was closed and the text is untouched.
    Dismissed,
    /// Consumed; replace the buffer with this edit.
    Committed(ComposeEdit),
}

impl KeyOutcome {
    /// Whether the key must be kept out of the text buffer.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

#[derive(Debug, Clone, Default)]
enum ComposerState {
    #[default]
    Closed,
    Open(OpenState),
}

#[derive(Debug, Clone)]
struct OpenState {
    context: MentionContext,
    caret: usize,
    suggestions: Vec<KnownUser>,
    highlighted: usize,
}

/// Mention autocomplete state machine for one input box.
#[derive(Debug, Clone)]
pub struct MentionComposer {
    state: ComposerState,
    limit: usize,
}

impl Default for MentionComposer {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}

impl MentionComposer {
    /// Create a composer showing at most `limit` suggestions.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            state: ComposerState::Closed,
            limit,
        }
    }

    /// Re-evaluate after the buffer or caret changed.
    ///
    /// The list opens when a mention is being typed and at least one user
    /// matches. The highlight is kept while the query is unchanged.
    pub fn update(&mut self, text: &str, caret: usize, users: &[KnownUser]) {
        let context = detect_mention_context(text, caret);
        if !context.open {
            self.state = ComposerState::Closed;
            return;
        }

        let suggestions: Vec<KnownUser> = suggest_mentions(&context.query_fragment, users, self.limit)
            .into_iter()
            .cloned()
            .collect();
        if suggestions.is_empty() {
            self.state = ComposerState::Closed;
            return;
        }

        let highlighted = match &self.state {
            ComposerState::Open(prev)
                if prev.context == context && prev.highlighted < suggestions.len() =>
            {
                prev.highlighted
            }
            _ => 0,
        };

        self.state = ComposerState::Open(OpenState {
            caret: context.anchor_offset + 1 + context.query_fragment.len(),
            context,
            suggestions,
            highlighted,
        });
    }

    /// Whether the suggestion list is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ComposerState::Open(_))
    }

    /// Current suggestions, empty when closed.
    #[must_use]
    pub fn suggestions(&self) -> &[KnownUser] {
        match &self.state {
            ComposerState::Open(open) => &open.suggestions,
            ComposerState::Closed => &[],
        }
    }

    /// Index of the highlighted suggestion.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        match &self.state {
            ComposerState::Open(open) => Some(open.highlighted),
            ComposerState::Closed => None,
        }
    }

    /// Current query fragment, if open.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match &self.state {
            ComposerState::Open(open) => Some(&open.context.query_fragment),
            ComposerState::Closed => None,
        }
    }

    /// Close the list.
    pub fn close(&mut self) {
        self.state = ComposerState::Closed;
    }

    /// Handle a navigation key against the current buffer.
    pub fn handle_key(&mut self, key: ComposeKey, text: &str) -> KeyOutcome {
        let ComposerState::Open(open) = &mut self.state else {
            return KeyOutcome::PassThrough;
        };

        let len = open.suggestions.len();
        match key {
            ComposeKey::Down => {
                open.highlighted = (open.highlighted + 1) % len;
                KeyOutcome::Highlighted(open.highlighted)
            }
            ComposeKey::Up => {
                open.highlighted = (open.highlighted + len - 1) % len;
                KeyOutcome::Highlighted(open.highlighted)
            }
            ComposeKey::Escape => {
                self.state = ComposerState::Closed;
                KeyOutcome::Dismissed
            }
            ComposeKey::Enter | ComposeKey::Tab => {
                let index = open.highlighted;
                self.select(index, text).map_or(KeyOutcome::PassThrough, KeyOutcome::Committed)
            }
        }
    }

    /// Commit the suggestion at `index`, e.g. after a click.
    pub fn select(&mut self, index: usize, text: &str) -> Option<ComposeEdit> {
        let ComposerState::Open(open) = &self.state else {
            return None;
        };
        let user = open.suggestions.get(index)?;
        let edit = apply_suggestion(text, open.context.anchor_offset, open.caret, &user.username);
        self.state = ComposerState::Closed;
        Some(edit)
    }
}

/// Replace `text[anchor..caret]` with `@username ` and move the caret past
/// the inserted space.
#[must_use]
pub fn apply_suggestion(text: &str, anchor: usize, caret: usize, username: &str) -> ComposeEdit {
    let anchor = crate::floor_char_boundary(text, anchor);
    let caret = crate::floor_char_boundary(text, caret).max(anchor);

    let mut out = String::with_capacity(text.len() + username.len() + 2);
    out.push_str(&text[..anchor]);
    out.push('@');
    out.push_str(username);
    out.push(' ');
    let caret_after = out.len();
    out.push_str(&text[caret..]);

    ComposeEdit {
        text: out,
        caret: caret_after,
    }
}

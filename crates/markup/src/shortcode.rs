//! `:shortcode:` expansion.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::lexicon;

// Regex patterns - these are valid static patterns that cannot fail
#[allow(clippy::unwrap_used)]
static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_+-]+):").unwrap());

/// Minimum number of name characters typed after `:` before emoji
/// autocomplete opens.
const MIN_SHORTCODE_QUERY: usize = 2;

/// Result of [`expand_shortcodes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    /// Text with every recognized shortcode replaced by its glyph.
    pub text: String,
    /// Whether at least one substitution happened.
    pub changed: bool,
}

/// Replace every recognized `:name:` token with its glyph.
///
/// Matching is global and non-overlapping, left to right. Unrecognized
/// tokens are kept verbatim, colons included.
#[must_use]
pub fn expand_shortcodes(text: &str) -> Expansion {
    let mut changed = false;
    let expanded = SHORTCODE_RE.replace_all(text, |caps: &Captures<'_>| {
        match lexicon::find_by_exact_name_or_alias(&caps[1]) {
            Some(entry) => {
                changed = true;
                entry.glyph.to_string()
            }
            None => caps[0].to_string(),
        }
    });

    if changed {
        tracing::trace!(len = text.len(), "expanded shortcodes");
    }

    Expansion {
        text: expanded.into_owned(),
        changed,
    }
}

/// Emoji autocomplete state at the caret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ShortcodeContext {
    /// Whether the caret sits inside a partial shortcode.
    pub open: bool,
    /// Name characters typed after the `:`.
    pub query_fragment: String,
    /// Byte offset of the opening `:`.
    pub anchor_offset: usize,
}

/// Detect a partially typed shortcode ending at `caret` (a byte offset).
///
/// Open when the text before the caret ends with `:` plus at least two name
/// characters, and that `:` starts the buffer or follows whitespace.
#[must_use]
pub fn detect_shortcode_context(text: &str, caret: usize) -> ShortcodeContext {
    let before = &text[..crate::floor_char_boundary(text, caret)];
    let name_len = before
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
        .count();
    // Name characters are ASCII, so the char count is the byte count.
    let name_start = before.len() - name_len;
    let Some(anchor) = name_start.checked_sub(1) else {
        return ShortcodeContext::default();
    };

    let opens_token = before.as_bytes()[anchor] == b':'
        && before[..anchor]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
    if !opens_token || name_len < MIN_SHORTCODE_QUERY {
        return ShortcodeContext::default();
    }

    ShortcodeContext {
        open: true,
        query_fragment: before[name_start..].to_string(),
        anchor_offset: anchor,
    }
}

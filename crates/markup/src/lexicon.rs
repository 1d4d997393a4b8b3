//! Emoji lexicon: exact lookup for shortcode expansion and ranked search for
//! autocomplete.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::emoji_table::EMOJI_TABLE;

/// Picker category of an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiCategory {
    /// Faces and emotions.
    Smileys,
    /// Hands, gestures and body parts.
    People,
    /// Animals and plants.
    Animals,
    /// Food and drink.
    Food,
    /// Sports, games and celebrations.
    Activities,
    /// Vehicles, places, weather and sky.
    Travel,
    /// Tools, devices and other things.
    Objects,
    /// Hearts, marks and signs.
    Symbols,
    /// Flags.
    Flags,
}

impl EmojiCategory {
    /// All categories in picker order.
    pub const ALL: [Self; 9] = [
        Self::Smileys,
        Self::People,
        Self::Animals,
        Self::Food,
        Self::Activities,
        Self::Travel,
        Self::Objects,
        Self::Symbols,
        Self::Flags,
    ];

    /// Get the category name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smileys => "smileys",
            Self::People => "people",
            Self::Animals => "animals",
            Self::Food => "food",
            Self::Activities => "activities",
            Self::Travel => "travel",
            Self::Objects => "objects",
            Self::Symbols => "symbols",
            Self::Flags => "flags",
        }
    }

    /// Parse a category from its string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single emoji in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmojiEntry {
    /// The emoji character(s).
    pub glyph: &'static str,
    /// Canonical short name (without colons).
    pub name: &'static str,
    /// Alternative short names.
    pub aliases: &'static [&'static str],
    /// Picker category.
    pub category: EmojiCategory,
    /// Search keywords.
    pub keywords: &'static [&'static str],
}

impl EmojiEntry {
    /// The canonical shortcode, e.g. `:fire:`.
    #[must_use]
    pub fn shortcode(&self) -> String {
        format!(":{}:", self.name)
    }

    /// Canonical name followed by aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Name and alias index into the table. The first entry to claim a name wins.
static NAME_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(EMOJI_TABLE.len() * 2);
    for (i, entry) in EMOJI_TABLE.iter().enumerate() {
        for name in entry.names() {
            index.entry(name).or_insert(i);
        }
    }
    index
});

static GLYPH_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(EMOJI_TABLE.len());
    for (i, entry) in EMOJI_TABLE.iter().enumerate() {
        index.entry(entry.glyph).or_insert(i);
    }
    index
});

/// Every emoji in table order.
#[must_use]
pub fn all() -> &'static [EmojiEntry] {
    EMOJI_TABLE
}

/// Exact, case-sensitive lookup by canonical name or alias.
#[must_use]
pub fn find_by_exact_name_or_alias(token: &str) -> Option<&'static EmojiEntry> {
    NAME_INDEX.get(token).map(|&i| &EMOJI_TABLE[i])
}

/// Reverse lookup by glyph.
#[must_use]
pub fn find_by_glyph(glyph: &str) -> Option<&'static EmojiEntry> {
    GLYPH_INDEX.get(glyph).map(|&i| &EMOJI_TABLE[i])
}

/// Categories that have at least one emoji, in picker order.
#[must_use]
pub fn categories() -> Vec<EmojiCategory> {
    EmojiCategory::ALL
        .into_iter()
        .filter(|c| EMOJI_TABLE.iter().any(|e| e.category == *c))
        .collect()
}

/// Emojis of one category in table order.
#[must_use]
pub fn by_category(category: EmojiCategory) -> Vec<&'static EmojiEntry> {
    EMOJI_TABLE
        .iter()
        .filter(|e| e.category == category)
        .collect()
}

/// Search the lexicon for autocomplete.
///
/// Results are ranked in strict tiers:
///
/// 1. a name or alias equals the query
/// 2. a name or alias starts with the query
/// 3. a keyword contains the query
/// 4. a name or alias contains the query
///
/// Each tier keeps table order. Results are de-duplicated by glyph and then
/// truncated to `limit`. Surrounding colons are ignored, so `:smi` searches
/// for `smi`. An empty query yields nothing.
#[must_use]
pub fn search(query: &str, limit: usize) -> Vec<&'static EmojiEntry> {
    let query = query.trim().trim_matches(':').to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut tiers: [Vec<&'static EmojiEntry>; 4] = Default::default();
    for entry in EMOJI_TABLE {
        if let Some(tier) = rank(entry, &query) {
            tiers[tier].push(entry);
        }
    }

    let mut seen = std::collections::HashSet::new();
    tiers
        .into_iter()
        .flatten()
        .filter(|e| seen.insert(e.glyph))
        .take(limit)
        .collect()
}

/// Best tier an entry reaches for a query, if any.
fn rank(entry: &EmojiEntry, query: &str) -> Option<usize> {
    if entry.names().any(|n| n == query) {
        Some(0)
    } else if entry.names().any(|n| n.starts_with(query)) {
        Some(1)
    } else if entry.keywords.iter().any(|k| k.contains(query)) {
        Some(2)
    } else if entry.names().any(|n| n.contains(query)) {
        Some(3)
    } else {
        None
    }
}

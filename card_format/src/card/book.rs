//! Lorebook definitions - the character book and its triggerable entries.

use serde::{Deserialize, Serialize};

use super::Extensions;

/// A lorebook embedded in a character card.
///
/// The book owns an ordered sequence of entries. Authoring order is
/// preserved and serves as the final tie-break when entries are injected,
/// but injection order itself is governed by each entry's
/// `insertion_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBook {
    pub name: Option<String>,
    pub description: Option<String>,

    /// How many of the most recent conversation messages are scanned for
    /// trigger keys. Negative values load with a warning and scan nothing.
    #[serde(default = "defaults::scan_depth")]
    pub scan_depth: i64,

    /// Ceiling on the combined size of injected entry content per turn.
    /// Negative values load with a warning and admit nothing.
    #[serde(default = "defaults::token_budget")]
    pub token_budget: i64,

    /// Whether already-activated entry content is itself scanned for
    /// further trigger keys.
    #[serde(default)]
    pub recursive_scanning: bool,

    #[serde(default)]
    pub extensions: Extensions,

    pub entries: Vec<Entry>,
}

impl CharacterBook {
    /// Iterate over entries that are enabled at all.
    pub fn enabled_entries(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.enabled)
    }

    /// Scan depth with negative values resolved to an empty window.
    pub fn effective_scan_depth(&self) -> usize {
        self.scan_depth.max(0) as usize
    }

    /// Token budget with negative values resolved to zero.
    pub fn effective_token_budget(&self) -> usize {
        self.token_budget.max(0) as usize
    }
}

mod defaults {
    pub fn scan_depth() -> i64 {
        10
    }

    pub fn token_budget() -> i64 {
        2048
    }
}

/// One triggerable unit of lore text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Primary trigger strings. An entry with no keys can only activate
    /// via `constant`.
    pub keys: Vec<String>,

    /// The text injected into the prompt when this entry activates.
    pub content: String,

    #[serde(default)]
    pub extensions: Extensions,

    /// Disabled entries never activate, whatever their other flags say.
    pub enabled: bool,

    /// Lower values sort earlier within an injected block.
    pub insertion_order: i64,

    /// Exact-case substring match when true. Absent means case folding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Display name. Never affects injection behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Lower priority is evicted first under budget pressure. Absent means
    /// most protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// Opaque identifier. Uniqueness is recommended but not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,

    /// Authoring note. Never affects injection behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// When true, activation also requires a secondary key match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,

    /// Secondary trigger strings, meaningful only when `selective` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_keys: Option<Vec<String>>,

    /// When true, the entry activates every turn without key matching.
    /// Still subject to the token budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,

    /// Where the entry's content lands relative to the character's core
    /// definition. Absent means after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<EntryPosition>,
}

impl Entry {
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive.unwrap_or(false)
    }

    pub fn is_selective(&self) -> bool {
        self.selective.unwrap_or(false)
    }

    pub fn is_constant(&self) -> bool {
        self.constant.unwrap_or(false)
    }

    /// Resolved placement, defaulting to after the character block.
    pub fn position(&self) -> EntryPosition {
        self.position.unwrap_or(EntryPosition::AfterChar)
    }

    /// Priority used for budget admission. Absent sorts as most protected.
    pub fn effective_priority(&self) -> i64 {
        self.priority.unwrap_or(i64::MAX)
    }

    /// Secondary keys as a slice, empty when absent.
    pub fn secondary_keys(&self) -> &[String] {
        self.secondary_keys.as_deref().unwrap_or(&[])
    }
}

/// Placement of an entry relative to the character's core definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryPosition {
    #[serde(rename = "before_char")]
    BeforeChar,
    #[serde(rename = "after_char")]
    AfterChar,
}

/// Opaque entry identifier as found on the wire.
///
/// Real documents carry numbers or strings here; both round-trip verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => write!(f, "{}", s),
        }
    }
}

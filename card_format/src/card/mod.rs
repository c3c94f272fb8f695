//! Character card definitions - the top-level envelope and its data block.

mod book;
mod extensions;

pub use book::*;
pub use extensions::*;

use serde::{Deserialize, Serialize};

/// Sentinel value the `spec` field must carry.
pub const CARD_SPEC: &str = "chara_card_v2";

/// Sentinel value the `spec_version` field must carry.
pub const CARD_SPEC_VERSION: &str = "2.0";

/// The top-level card envelope.
///
/// A document is only treated as this format version when both sentinels
/// match; the loader rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterCard {
    pub spec: String,
    pub spec_version: String,
    pub data: CharacterData,
}

impl CharacterCard {
    /// Check both envelope sentinels.
    pub fn has_valid_sentinels(&self) -> bool {
        self.spec == CARD_SPEC && self.spec_version == CARD_SPEC_VERSION
    }

    /// Wrap a data block in a correctly-stamped envelope.
    pub fn from_data(data: CharacterData) -> Self {
        Self {
            spec: CARD_SPEC.to_string(),
            spec_version: CARD_SPEC_VERSION.to_string(),
            data,
        }
    }
}

/// The character description block owned by a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    pub name: String,
    pub description: String,
    pub personality: String,
    pub scenario: String,

    /// The character's opening greeting.
    pub first_mes: String,

    /// Example dialogue in the front-end's transcript convention.
    pub mes_example: String,

    /// Notes from the author to the user. Never enters the prompt.
    pub creator_notes: String,

    /// Replaces the application's default system prompt. May contain the
    /// `{{original}}` placeholder; empty keeps the default.
    pub system_prompt: String,

    /// Instruction text placed after the conversation history. Same
    /// placeholder contract as `system_prompt`.
    pub post_history_instructions: String,

    /// Independent greeting candidates beyond `first_mes`, in order.
    pub alternate_greetings: Vec<String>,

    /// Embedded lorebook, if the card carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_book: Option<CharacterBook>,

    /// Free-text labels. Order carries no meaning.
    pub tags: Vec<String>,

    pub creator: String,
    pub character_version: String,

    #[serde(default)]
    pub extensions: Extensions,
}

impl CharacterData {
    /// All greeting candidates: the first message followed by the
    /// alternates, in authored order.
    pub fn greetings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first_mes.as_str())
            .chain(self.alternate_greetings.iter().map(|g| g.as_str()))
    }

    /// Case-insensitive tag lookup.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

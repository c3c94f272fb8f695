//! Card loading - raw bytes in, validated cards and warnings out.

mod validate;

pub use validate::*;

use thiserror::Error;

use crate::card::{CharacterCard, CARD_SPEC, CARD_SPEC_VERSION};

/// Fatal problems that prevent a document from loading as a card.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("document is not a valid card: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wrong spec identifier: expected \"chara_card_v2\", found {found:?}")]
    WrongSpec { found: String },

    #[error("wrong spec version: expected \"2.0\", found {found:?}")]
    WrongSpecVersion { found: String },
}

/// A successfully loaded card together with any non-fatal findings.
#[derive(Debug, Clone)]
pub struct LoadedCard {
    pub card: CharacterCard,
    pub warnings: Vec<CardWarning>,
}

/// Parse and validate a card from a JSON string.
///
/// Schema problems (malformed JSON, missing required fields, wrong field
/// types, wrong envelope sentinels) are fatal. Suspect configuration values
/// load fine and come back as [`CardWarning`]s; the engine resolves them to
/// inert behavior at injection time.
pub fn load_card_from_str(json: &str) -> Result<LoadedCard, CardError> {
    let card: CharacterCard = serde_json::from_str(json)?;

    if card.spec != CARD_SPEC {
        return Err(CardError::WrongSpec { found: card.spec });
    }
    if card.spec_version != CARD_SPEC_VERSION {
        return Err(CardError::WrongSpecVersion {
            found: card.spec_version,
        });
    }

    let warnings = validate_card(&card);
    Ok(LoadedCard { card, warnings })
}

/// Parse and validate a card from raw bytes. The document must be UTF-8.
pub fn load_card_from_slice(bytes: &[u8]) -> Result<LoadedCard, CardError> {
    let json = std::str::from_utf8(bytes)?;
    load_card_from_str(json)
}

/// Re-serialize a card to compact JSON.
///
/// Extension maps come back with their keys in original order, so a
/// load/serialize round trip preserves application extensions verbatim.
pub fn to_json_string(card: &CharacterCard) -> Result<String, CardError> {
    Ok(serde_json::to_string(card)?)
}

/// Re-serialize a card to human-readable JSON.
pub fn to_json_string_pretty(card: &CharacterCard) -> Result<String, CardError> {
    Ok(serde_json::to_string_pretty(card)?)
}

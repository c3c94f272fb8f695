//! Conversation sessions - immutable card snapshots with per-turn state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use card_format::CharacterCard;

use crate::history::{ConversationHistory, Message};
use crate::injector::{EngineConfig, LoreBlocks, LoreInjector};

/// Unique identifier for conversation sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty session ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One conversation against one loaded card.
///
/// The session holds a shared read-only snapshot of the card, so any number
/// of sessions can run concurrently without locking, and an editing tool
/// producing a new card version never disturbs a session already underway.
pub struct Session {
    id: SessionId,
    card: Arc<CharacterCard>,
    history: ConversationHistory,
    injector: LoreInjector,
}

impl Session {
    /// Start a session over a card snapshot with default engine config.
    pub fn new(card: Arc<CharacterCard>) -> Self {
        Self::with_config(card, EngineConfig::default())
    }

    /// Start a session over a card snapshot with explicit engine config.
    pub fn with_config(card: Arc<CharacterCard>, config: EngineConfig) -> Self {
        Self {
            id: SessionId::new(),
            card,
            history: ConversationHistory::new(),
            injector: LoreInjector::new(config),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The card snapshot this session runs against.
    pub fn card(&self) -> &CharacterCard {
        &self.card
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Append a message to this session's history.
    pub fn push_message(&mut self, message: Message) {
        self.history.push(message);
    }

    /// Compute this turn's lore blocks from scratch.
    ///
    /// Re-runs the full pipeline against the current history; nothing is
    /// carried over from earlier turns. A card without a book yields empty
    /// blocks.
    pub fn lore_for_turn(&self) -> LoreBlocks {
        match &self.card.data.character_book {
            Some(book) => self.injector.inject(book, self.history.messages()),
            None => LoreBlocks::default(),
        }
    }
}

//! Lore injection - the per-turn pipeline from history to lore blocks.
//!
//! Each turn runs fresh:
//! 1. **Scan**: Build the window from the last `scan_depth` messages
//! 2. **Activate**: Resolve candidate entries from key matches and flags
//! 3. **Recurse**: Optionally re-scan activated content, a bounded number
//!    of extra passes
//! 4. **Allocate**: Admit candidates greedily under the token budget
//! 5. **Assemble**: Order the admitted entries into the two lore blocks

mod activation;
mod budget;
mod placement;

pub use activation::*;
pub use budget::*;
pub use placement::*;

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use card_format::CharacterBook;

use crate::history::Message;
use crate::matcher::ScanWindow;

/// Configuration for the injection engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Extra matcher passes allowed when a book asks for recursive
    /// scanning. Bounded so mutually-triggering entries terminate.
    pub recursion_limit: u32,

    /// Separator between entry contents within a block.
    pub separator: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recursion_limit: 1,
            separator: "\n".to_string(),
        }
    }
}

/// Problems reading an engine configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl EngineConfig {
    /// Parse a configuration from TOML text. Absent keys keep defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// The injection engine. Stateless across turns.
pub struct LoreInjector {
    config: EngineConfig,
}

impl LoreInjector {
    /// Create an injector with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an injector with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline for one turn.
    ///
    /// Takes the whole history, oldest first, and scans only the last
    /// `scan_depth` messages. Total over a loaded book: never errors.
    pub fn inject(&self, book: &CharacterBook, history: &[Message]) -> LoreBlocks {
        let depth = book.effective_scan_depth();
        let start = history.len().saturating_sub(depth);
        let mut window = ScanWindow::from_messages(&history[start..]);

        let mut candidates = resolve_candidates(book, &window);

        if book.recursive_scanning {
            let mut activated: HashSet<usize> = candidates.iter().map(|c| c.index).collect();
            let mut frontier: Vec<Candidate<'_>> = candidates.clone();

            for _pass in 0..self.config.recursion_limit {
                if frontier.is_empty() {
                    break;
                }
                for candidate in &frontier {
                    window.extend_with(&candidate.entry.content);
                }

                let fresh = resolve_new_candidates(book, &window, &activated);
                if fresh.is_empty() {
                    break;
                }
                activated.extend(fresh.iter().map(|c| c.index));
                candidates.extend(fresh.iter().copied());
                frontier = fresh;
            }
        }

        let admitted = allocate(candidates, book.effective_token_budget());
        assemble(&admitted, &self.config.separator)
    }
}

//! # Lore Engine
//!
//! The injection engine for character-card lorebooks. This crate interfaces
//! with `card_format`, scans recent conversation for trigger keys, and
//! assembles the lore blocks that frame a character's core definition in
//! the final prompt.
//!
//! ## Core Components
//!
//! - **matcher**: Substring scanning over a bounded window of recent messages
//! - **injector**: Activation, budget allocation, and placement assembly
//! - **session**: Read-only card snapshots with per-turn conversation state
//! - **prompt**: The `{{original}}` placeholder contract with the composer
//!
//! ## Design Philosophy
//!
//! - **Stateless per turn**: Every turn re-runs the full pipeline against the
//!   then-current history; no activation is sticky
//! - **Total over a loaded card**: Injection never errors, it degrades
//!   (an oversized entry is dropped, never truncated)
//! - **Deterministic**: Identical card and history always produce identical
//!   blocks

pub mod history;
pub mod injector;
pub mod matcher;
pub mod prompt;
pub mod session;

pub use history::*;
pub use injector::*;
pub use matcher::*;
pub use prompt::*;
pub use session::*;

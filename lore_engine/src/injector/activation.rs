//! Entry activation - deciding which lorebook entries are live this turn.

use std::collections::HashSet;

use card_format::{CharacterBook, Entry};

use crate::matcher::ScanWindow;

/// An activated entry, tagged with its authoring position in the book.
///
/// The index is the final tie-break wherever ordering is otherwise equal,
/// which keeps the whole pipeline deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub entry: &'a Entry,
    pub index: usize,
}

/// Resolve the candidate set for a scan window.
pub fn resolve_candidates<'a>(book: &'a CharacterBook, window: &ScanWindow) -> Vec<Candidate<'a>> {
    resolve_new_candidates(book, window, &HashSet::new())
}

/// Resolve candidates while skipping entries already activated this turn.
/// Recursive scanning uses the exclusion set so an entry never activates
/// twice within one turn.
pub fn resolve_new_candidates<'a>(
    book: &'a CharacterBook,
    window: &ScanWindow,
    activated: &HashSet<usize>,
) -> Vec<Candidate<'a>> {
    book.enabled_entries()
        .filter(|(index, _)| !activated.contains(index))
        .filter(|(_, entry)| entry_activates(entry, window))
        .map(|(index, entry)| Candidate { entry, index })
        .collect()
}

/// A single enabled entry activates when it is constant, or when a primary
/// key matches and, for selective entries, a secondary key matches too.
fn entry_activates(entry: &Entry, window: &ScanWindow) -> bool {
    if entry.is_constant() {
        return true;
    }

    let case_sensitive = entry.is_case_sensitive();
    if !window.matches_any(&entry.keys, case_sensitive) {
        return false;
    }
    if entry.is_selective() {
        return window.matches_any(entry.secondary_keys(), case_sensitive);
    }
    true
}

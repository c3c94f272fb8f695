//! Load-time validation - non-fatal findings on otherwise well-formed cards.

use thiserror::Error;

use crate::card::{CharacterBook, CharacterCard, EntryId};

/// Suspect configuration found at load time.
///
/// The format does not forbid any of these, so they never fail a load;
/// each one resolves to well-defined inert behavior at injection time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CardWarning {
    #[error("scan_depth is negative ({value}); no messages will be scanned")]
    NegativeScanDepth { value: i64 },

    #[error("token_budget is negative ({value}); no entries will be injected")]
    NegativeTokenBudget { value: i64 },

    #[error("entry {index} is selective but has no secondary keys; it can only activate via constant")]
    SelectiveWithoutSecondaryKeys { index: usize },

    #[error("entry {index} has no primary keys; it can only activate via constant")]
    EmptyPrimaryKeys { index: usize },

    #[error("entry id {id} appears more than once")]
    DuplicateEntryId { id: EntryId },
}

/// Collect warnings for a card that already passed schema validation.
pub fn validate_card(card: &CharacterCard) -> Vec<CardWarning> {
    match &card.data.character_book {
        Some(book) => validate_book(book),
        None => Vec::new(),
    }
}

/// Collect warnings for a single lorebook.
pub fn validate_book(book: &CharacterBook) -> Vec<CardWarning> {
    let mut warnings = Vec::new();

    if book.scan_depth < 0 {
        warnings.push(CardWarning::NegativeScanDepth {
            value: book.scan_depth,
        });
    }
    if book.token_budget < 0 {
        warnings.push(CardWarning::NegativeTokenBudget {
            value: book.token_budget,
        });
    }

    let mut seen_ids: Vec<&EntryId> = Vec::new();
    for (index, entry) in book.entries.iter().enumerate() {
        if entry.keys.is_empty() {
            warnings.push(CardWarning::EmptyPrimaryKeys { index });
        }
        if entry.is_selective() && entry.secondary_keys().is_empty() {
            warnings.push(CardWarning::SelectiveWithoutSecondaryKeys { index });
        }
        if let Some(id) = &entry.id {
            if seen_ids.contains(&id) {
                warnings.push(CardWarning::DuplicateEntryId { id: id.clone() });
            } else {
                seen_ids.push(id);
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Entry, Extensions};

    fn entry_with_keys(keys: &[&str]) -> Entry {
        Entry {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            content: "lore".to_string(),
            extensions: Extensions::new(),
            enabled: true,
            insertion_order: 0,
            case_sensitive: None,
            name: None,
            priority: None,
            id: None,
            comment: None,
            selective: None,
            secondary_keys: None,
            constant: None,
            position: None,
        }
    }

    fn book_with_entries(entries: Vec<Entry>) -> CharacterBook {
        CharacterBook {
            name: None,
            description: None,
            scan_depth: 10,
            token_budget: 512,
            recursive_scanning: false,
            extensions: Extensions::new(),
            entries,
        }
    }

    #[test]
    fn test_clean_book_has_no_warnings() {
        let book = book_with_entries(vec![entry_with_keys(&["rabbit"])]);
        assert!(validate_book(&book).is_empty());
    }

    #[test]
    fn test_negative_limits_warn() {
        let mut book = book_with_entries(vec![]);
        book.scan_depth = -1;
        book.token_budget = -50;

        let warnings = validate_book(&book);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.contains(&CardWarning::NegativeScanDepth { value: -1 }));
        assert!(warnings.contains(&CardWarning::NegativeTokenBudget { value: -50 }));
    }

    #[test]
    fn test_selective_without_secondary_keys_warns() {
        let mut entry = entry_with_keys(&["rabbit"]);
        entry.selective = Some(true);

        let warnings = validate_book(&book_with_entries(vec![entry]));
        assert_eq!(
            warnings,
            vec![CardWarning::SelectiveWithoutSecondaryKeys { index: 0 }]
        );
    }

    #[test]
    fn test_selective_with_empty_secondary_keys_warns() {
        let mut entry = entry_with_keys(&["rabbit"]);
        entry.selective = Some(true);
        entry.secondary_keys = Some(vec![]);

        let warnings = validate_book(&book_with_entries(vec![entry]));
        assert_eq!(
            warnings,
            vec![CardWarning::SelectiveWithoutSecondaryKeys { index: 0 }]
        );
    }

    #[test]
    fn test_empty_primary_keys_warns() {
        let warnings = validate_book(&book_with_entries(vec![entry_with_keys(&[])]));
        assert_eq!(warnings, vec![CardWarning::EmptyPrimaryKeys { index: 0 }]);
    }

    #[test]
    fn test_duplicate_entry_ids_warn_once_per_repeat() {
        let mut first = entry_with_keys(&["a"]);
        first.id = Some(EntryId::Number(1));
        let mut second = entry_with_keys(&["b"]);
        second.id = Some(EntryId::Number(1));
        let mut third = entry_with_keys(&["c"]);
        third.id = Some(EntryId::Number(2));

        let warnings = validate_book(&book_with_entries(vec![first, second, third]));
        assert_eq!(
            warnings,
            vec![CardWarning::DuplicateEntryId {
                id: EntryId::Number(1)
            }]
        );
    }
}

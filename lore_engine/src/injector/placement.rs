//! Placement assembly - ordering admitted entries into the two lore blocks.

use card_format::EntryPosition;

use super::activation::Candidate;

/// The two assembled lore blocks handed to the prompt composer.
///
/// The composer places `before_char` immediately before the character's
/// core definition text and `after_char` immediately after it, ahead of
/// the conversation history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoreBlocks {
    pub before_char: String,
    pub after_char: String,
}

impl LoreBlocks {
    pub fn is_empty(&self) -> bool {
        self.before_char.is_empty() && self.after_char.is_empty()
    }

    /// Place the blocks around a character's core definition text.
    ///
    /// Empty blocks contribute nothing, so a book with no admitted entries
    /// leaves the core text untouched.
    pub fn wrap(&self, core: &str, separator: &str) -> String {
        let mut pieces = Vec::with_capacity(3);
        if !self.before_char.is_empty() {
            pieces.push(self.before_char.as_str());
        }
        if !core.is_empty() {
            pieces.push(core);
        }
        if !self.after_char.is_empty() {
            pieces.push(self.after_char.as_str());
        }
        pieces.join(separator)
    }
}

/// Partition admitted candidates by position and order each block.
///
/// Within a block: ascending `insertion_order`, ties by authoring index.
/// The two blocks are never interleaved, whatever the insertion orders say.
pub fn assemble(admitted: &[Candidate<'_>], separator: &str) -> LoreBlocks {
    let mut before: Vec<&Candidate<'_>> = Vec::new();
    let mut after: Vec<&Candidate<'_>> = Vec::new();

    for candidate in admitted {
        match candidate.entry.position() {
            EntryPosition::BeforeChar => before.push(candidate),
            EntryPosition::AfterChar => after.push(candidate),
        }
    }

    LoreBlocks {
        before_char: join_ordered(before, separator),
        after_char: join_ordered(after, separator),
    }
}

fn join_ordered(mut group: Vec<&Candidate<'_>>, separator: &str) -> String {
    group.sort_by(|a, b| {
        a.entry
            .insertion_order
            .cmp(&b.entry.insertion_order)
            .then_with(|| a.index.cmp(&b.index))
    });

    group
        .iter()
        .map(|c| c.entry.content.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_format::{Entry, Extensions};

    fn placed_entry(content: &str, insertion_order: i64, position: Option<EntryPosition>) -> Entry {
        Entry {
            keys: vec!["k".to_string()],
            content: content.to_string(),
            extensions: Extensions::new(),
            enabled: true,
            insertion_order,
            case_sensitive: None,
            name: None,
            priority: None,
            id: None,
            comment: None,
            selective: None,
            secondary_keys: None,
            constant: None,
            position,
        }
    }

    fn candidates(entries: &[Entry]) -> Vec<Candidate<'_>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Candidate { entry, index })
            .collect()
    }

    #[test]
    fn test_blocks_never_interleave() {
        // before_char with the higher insertion_order still lands in the
        // before block, after_char with the lower one in the after block.
        let entries = vec![
            placed_entry("first lore", 2, Some(EntryPosition::BeforeChar)),
            placed_entry("second lore", 1, Some(EntryPosition::AfterChar)),
        ];
        let blocks = assemble(&candidates(&entries), "\n");

        assert_eq!(blocks.before_char, "first lore");
        assert_eq!(blocks.after_char, "second lore");
    }

    #[test]
    fn test_position_defaults_to_after() {
        let entries = vec![placed_entry("lore", 0, None)];
        let blocks = assemble(&candidates(&entries), "\n");

        assert!(blocks.before_char.is_empty());
        assert_eq!(blocks.after_char, "lore");
    }

    #[test]
    fn test_insertion_order_sorts_within_block() {
        let entries = vec![
            placed_entry("late", 10, None),
            placed_entry("early", 1, None),
            placed_entry("middle", 5, None),
        ];
        let blocks = assemble(&candidates(&entries), "\n");

        assert_eq!(blocks.after_char, "early\nmiddle\nlate");
    }

    #[test]
    fn test_ties_preserve_authoring_order() {
        let entries = vec![
            placed_entry("authored first", 3, None),
            placed_entry("authored second", 3, None),
        ];
        let blocks = assemble(&candidates(&entries), "\n");

        assert_eq!(blocks.after_char, "authored first\nauthored second");
    }

    #[test]
    fn test_empty_admission_yields_empty_blocks() {
        let blocks = assemble(&[], "\n");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_wrap_places_blocks_around_core() {
        let blocks = LoreBlocks {
            before_char: "world lore".to_string(),
            after_char: "scene lore".to_string(),
        };

        assert_eq!(
            blocks.wrap("Alice is curious.", "\n"),
            "world lore\nAlice is curious.\nscene lore"
        );
    }

    #[test]
    fn test_wrap_skips_empty_blocks() {
        let blocks = LoreBlocks::default();
        assert_eq!(blocks.wrap("core", "\n"), "core");

        let only_after = LoreBlocks {
            before_char: String::new(),
            after_char: "tail".to_string(),
        };
        assert_eq!(only_after.wrap("core", "\n"), "core\ntail");
    }
}

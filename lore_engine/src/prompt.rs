//! Placeholder substitution - the `{{original}}` contract with the composer.
//!
//! A card's `system_prompt` and `post_history_instructions` replace the
//! application's default instruction text. The placeholder lets an author
//! splice that default back into their override. This is a fixed-token
//! replacement, not a templating engine.

/// The substitution token recognized inside instruction overrides.
pub const ORIGINAL_PLACEHOLDER: &str = "{{original}}";

/// Replace every occurrence of the placeholder with the default text.
pub fn substitute_original(template: &str, original: &str) -> String {
    template.replace(ORIGINAL_PLACEHOLDER, original)
}

/// Resolve a card's instruction override against the application default.
///
/// An empty override keeps the default untouched; a non-empty override
/// replaces it, with the placeholder splicing the default back in.
pub fn resolve_instruction(card_text: &str, default_text: &str) -> String {
    if card_text.is_empty() {
        default_text.to_string()
    } else {
        substitute_original(card_text, default_text)
    }
}

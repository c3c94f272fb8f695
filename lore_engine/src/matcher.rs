//! Keyword matching over a bounded window of recent conversation text.

use crate::history::Message;

/// The scannable text for one turn.
///
/// Matching is substring-based, not tokenized: a key matches if it occurs
/// anywhere within the window. The window keeps a case-folded copy of its
/// text so case-insensitive lookups fold only the key per query.
#[derive(Debug, Clone, Default)]
pub struct ScanWindow {
    haystack: String,
    folded: String,
}

impl ScanWindow {
    /// An empty window. Nothing matches against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a window from the messages to scan, oldest first.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut window = Self::empty();
        for message in messages {
            window.extend_with(&message.text);
        }
        window
    }

    /// Append more scannable text. Recursive scanning uses this to make
    /// already-activated entry content visible to later passes.
    pub fn extend_with(&mut self, text: &str) {
        if !self.haystack.is_empty() {
            self.haystack.push('\n');
            self.folded.push('\n');
        }
        self.haystack.push_str(text);
        self.folded.push_str(&text.to_lowercase());
    }

    pub fn is_empty(&self) -> bool {
        self.haystack.is_empty()
    }

    /// Whether a single key occurs in the window.
    ///
    /// Empty keys never match. Case folding is applied to both sides unless
    /// the lookup is case-sensitive.
    pub fn contains_key(&self, key: &str, case_sensitive: bool) -> bool {
        if key.is_empty() {
            return false;
        }
        if case_sensitive {
            self.haystack.contains(key)
        } else {
            self.folded.contains(&key.to_lowercase())
        }
    }

    /// Whether any of the keys occurs in the window.
    pub fn matches_any(&self, keys: &[String], case_sensitive: bool) -> bool {
        keys.iter().any(|key| self.contains_key(key, case_sensitive))
    }
}

//! Extension maps - open-ended, tool-defined data carried at every level.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open-ended mapping from string keys to arbitrary JSON values.
///
/// Cards, books, and entries all carry one. Keys unknown to this crate are
/// application extensions and must survive a load/re-serialize round trip
/// verbatim, so the map stores raw JSON values and never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Extensions(Map<String, Value>);

impl Extensions {
    /// Create an empty extension map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under a key, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a value under a key, returning the previous value if present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Check whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Extensions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

//! Core token data types.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single named design value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Canonical key, e.g. `var(--sds-size-radius-400)` or `Text/Neutral/Primary`.
    pub key: String,
    /// Expected or extracted value, compared as an exact string.
    pub value: String,
}

/// An insertion-ordered mapping from token key to token value.
///
/// Re-inserting an existing key replaces its value in place: the key keeps
/// the position of its first insertion and the later value wins.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    entries: Vec<Token>,
    index: HashMap<String, usize>,
}

impl TokenMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token, returning the value it replaced if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].value, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Token { key, value });
                None
            }
        }
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].value.as_str())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates tokens in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|t| t.key.as_str())
    }

    /// Distinct token categories in first-seen order. See [`category_of`].
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for token in &self.entries {
            let category = category_of(&token.key);
            if !seen.iter().any(|c| *c == category) {
                seen.push(category);
            }
        }
        seen
    }
}

impl PartialEq for TokenMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TokenMap {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TokenMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for TokenMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for token in &self.entries {
            map.serialize_entry(&token.key, &token.value)?;
        }
        map.end()
    }
}

struct TokenMapVisitor;

impl<'de> Visitor<'de> for TokenMapVisitor {
    type Value = TokenMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping token keys to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TokenMap, A::Error> {
        let mut map = TokenMap::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for TokenMap {
    /// Reads a JSON object in document order; duplicate keys follow the
    /// last-write-wins rule of [`TokenMap::insert`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TokenMapVisitor)
    }
}

/// Returns the category a token key belongs to.
///
/// - `var(--sds-color-black-100)` → `color` (the segment after the namespace prefix)
/// - `var(--spacing)` → `spacing`
/// - `Background/Neutral/Primary` → `Background`
/// - anything else is its own category
///
/// Custom properties are assumed to carry a namespace prefix, so any name
/// with two or more segments takes its second one: `var(--spacing-small)`
/// lands in `small`, not `spacing`. Pass explicit expected categories for
/// token sets without a prefix.
#[must_use]
pub fn category_of(key: &str) -> String {
    if let Some(name) = key
        .strip_prefix("var(--")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let segments: Vec<&str> = name.split('-').filter(|s| !s.is_empty()).collect();
        return match segments.as_slice() {
            [] => key.to_owned(),
            [only] => (*only).to_owned(),
            [_, group, ..] => (*group).to_owned(),
        };
    }
    match key.split_once('/') {
        Some((head, _)) if !head.is_empty() => head.to_owned(),
        _ => key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut map = TokenMap::new();
        assert_eq!(map.insert("a", "1"), None);
        assert_eq!(map.insert("b", "2"), None);
        assert_eq!(map.insert("a", "3"), Some("1".to_owned()));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let map: TokenMap =
            serde_json::from_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn deserialize_duplicate_keys_last_wins() {
        let map: TokenMap = serde_json::from_str(r#"{"a": "1", "b": "2", "a": "9"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("9"));
    }

    #[test]
    fn deserialize_rejects_non_string_values() {
        let parsed: Result<TokenMap, _> = serde_json::from_str(r#"{"a": 16}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn serialize_in_insertion_order() {
        let map: TokenMap = [("z", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn categories_of_custom_properties() {
        assert_eq!(category_of("var(--sds-size-radius-400)"), "size");
        assert_eq!(category_of("var(--sds-color-black-100)"), "color");
        assert_eq!(category_of("var(--sds-typography-scale-03)"), "typography");
        assert_eq!(category_of("var(--spacing)"), "spacing");
        assert_eq!(category_of("var(--)"), "var(--)");
        assert_eq!(category_of("var(--spacing-small)"), "small");
    }

    #[test]
    fn categories_of_hierarchical_names() {
        assert_eq!(category_of("Drop Shadow/200"), "Drop Shadow");
        assert_eq!(category_of("Border/Neutral/Inverse/Primary"), "Border");
        assert_eq!(category_of("plain"), "plain");
        assert_eq!(category_of("/leading"), "/leading");
    }
}

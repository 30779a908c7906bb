//! Flattens the JSON-LD token document into a [`TokenMap`].
//!
//! The document nests tokens two levels deep:
//! `about.hasDefinedTerm[].additionalProperty[] { propertyID, value }`.
//! Extraction never fails. A document without that path yields an empty
//! map, and entries lacking a non-empty `propertyID` or `value` are skipped.

use baiv_tokens::TokenMap;
use serde::Serialize;
use serde_json::Value;

/// Two extracted entries that shared a `propertyID`.
///
/// The later entry's value is kept; the earlier one is reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collision {
    /// The repeated `propertyID`.
    pub token: String,
    /// Value that was overwritten.
    pub overwritten_value: String,
    /// Value that won.
    pub value: String,
}

/// Result of flattening a token document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Extracted tokens in document order.
    pub tokens: TokenMap,
    /// Every `propertyID` collision, in the order they were hit.
    pub collisions: Vec<Collision>,
}

/// Returns the `about.hasDefinedTerm` array, if the document has one.
#[must_use]
pub fn defined_terms(document: &Value) -> Option<&Vec<Value>> {
    document.get("about")?.get("hasDefinedTerm")?.as_array()
}

/// Returns `entry[field]` if it is a non-empty string.
#[must_use]
pub fn non_empty_str<'a>(entry: &'a Value, field: &str) -> Option<&'a str> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Extracts every `propertyID → value` pair from the document.
#[must_use]
pub fn extract(document: &Value) -> Extraction {
    let mut extraction = Extraction::default();

    let Some(terms) = defined_terms(document) else {
        tracing::debug!("document has no about.hasDefinedTerm; nothing to extract");
        return extraction;
    };

    let properties = terms
        .iter()
        .filter_map(|term| term.get("additionalProperty").and_then(Value::as_array))
        .flatten();

    for property in properties {
        let (Some(key), Some(value)) = (
            non_empty_str(property, "propertyID"),
            non_empty_str(property, "value"),
        ) else {
            continue;
        };
        if let Some(previous) = extraction.tokens.insert(key, value) {
            tracing::warn!(token = key, "duplicate propertyID; later value wins");
            extraction.collisions.push(Collision {
                token: key.to_owned(),
                overwritten_value: previous,
                value: value.to_owned(),
            });
        }
    }

    extraction
}

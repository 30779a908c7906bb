//! schema.org JSON-LD serializer for token sets.
//!
//! Tokens are grouped into one `DefinedTerm` per category (see
//! [`category_of`](crate::category_of)), in first-seen order. Each token
//! becomes a `PropertyValue` in that term's `additionalProperty` array.

use serde_json::{json, Value};

use crate::model::{category_of, TokenMap};

/// The `@context` every BAIV token document declares.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Serializes a token set to a schema.org `CreativeWork` JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(tokens: &TokenMap) -> Value {
    let terms: Vec<Value> = tokens
        .categories()
        .iter()
        .map(|category| defined_term(tokens, category))
        .collect();

    json!({
        "@context": SCHEMA_ORG_CONTEXT,
        "@type": "CreativeWork",
        "name": "BAIV Design Tokens",
        "about": {
            "@type": "DefinedTermSet",
            "name": "BAIV Design System",
            "hasDefinedTerm": terms
        }
    })
}

fn defined_term(tokens: &TokenMap, category: &str) -> Value {
    let properties: Vec<Value> = tokens
        .iter()
        .filter(|token| category_of(&token.key) == category)
        .map(|token| {
            json!({
                "@type": "PropertyValue",
                "propertyID": token.key,
                "value": token.value
            })
        })
        .collect();

    json!({
        "@type": "DefinedTerm",
        "name": category,
        "additionalProperty": properties
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_header() {
        let doc = to_json_ld(TokenMap::figma_baseline());
        assert_eq!(doc["@context"], SCHEMA_ORG_CONTEXT);
        assert_eq!(doc["@type"], "CreativeWork");
        assert!(doc["about"].is_object());
    }

    #[test]
    fn one_term_per_category() {
        let tokens = TokenMap::figma_baseline();
        let doc = to_json_ld(tokens);
        let terms = doc["about"]["hasDefinedTerm"].as_array().unwrap();
        assert_eq!(terms.len(), tokens.categories().len());
        assert_eq!(terms[0]["name"], "size");
        assert!(terms.iter().all(|t| t["@type"] == "DefinedTerm"));
    }

    #[test]
    fn every_token_emitted_once() {
        let tokens = TokenMap::figma_baseline();
        let doc = to_json_ld(tokens);
        let emitted: usize = doc["about"]["hasDefinedTerm"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["additionalProperty"].as_array().unwrap().len())
            .sum();
        assert_eq!(emitted, tokens.len());
    }

    #[test]
    fn empty_set_has_no_terms() {
        let doc = to_json_ld(&TokenMap::new());
        assert_eq!(doc["about"]["hasDefinedTerm"], json!([]));
    }
}

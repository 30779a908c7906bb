//! Audit trail serializer: one mapping per token, in token order.

use serde_json::{json, Value};

use crate::model::{category_of, TokenMap};

/// Serializes the audit document recording that every token was mapped.
#[must_use]
pub fn to_audit(tokens: &TokenMap) -> Value {
    let mappings: Vec<Value> = tokens
        .iter()
        .map(|token| {
            json!({
                "source": token.key,
                "target": token.key,
                "category": category_of(&token.key),
                "value": token.value
            })
        })
        .collect();

    json!({
        "audit": {
            "name": "BAIV Token Audit Framework",
            "mappings": mappings
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_per_token() {
        let tokens: TokenMap = [("a", "1"), ("Text/Primary", "#000")].into_iter().collect();
        let audit = to_audit(&tokens);
        let mappings = audit["audit"]["mappings"].as_array().unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[1]["source"], "Text/Primary");
        assert_eq!(mappings[1]["category"], "Text");
        assert_eq!(mappings[1]["value"], "#000");
    }
}

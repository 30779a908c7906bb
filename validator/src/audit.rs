//! Audit trail completeness: one `audit.mappings` entry per source token.
//!
//! Only the count is checked, not which tokens the mappings name.

use serde_json::Value;

/// Number of entries in `audit.mappings`, if the document has that array.
#[must_use]
pub fn mapping_count(audit: &Value) -> Option<usize> {
    audit.get("audit")?.get("mappings")?.as_array().map(Vec::len)
}

/// True if the audit document records exactly `source_tokens` mappings.
#[must_use]
pub fn audit_trail_complete(audit: &Value, source_tokens: usize) -> bool {
    mapping_count(audit) == Some(source_tokens)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn counts_mappings() {
        let audit = json!({ "audit": { "mappings": [{}, {}, {}] } });
        assert_eq!(mapping_count(&audit), Some(3));
        assert!(audit_trail_complete(&audit, 3));
        assert!(!audit_trail_complete(&audit, 20));
    }

    #[test]
    fn missing_substructure_is_incomplete() {
        assert_eq!(mapping_count(&json!({})), None);
        assert!(!audit_trail_complete(&json!({ "audit": {} }), 0));
        assert!(!audit_trail_complete(&json!({ "audit": { "mappings": {} } }), 0));
    }
}

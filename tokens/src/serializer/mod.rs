//! Serializers for BAIV token sets.
//!
//! Two documents are produced from a [`TokenMap`](crate::TokenMap):
//! - **JSON-LD** ([`jsonld`]) — the schema.org `CreativeWork` token document,
//!   output to `baiv-design-tokens.json`
//! - **Audit** ([`audit`]) — the extraction audit trail, output to
//!   `baiv-token-audit-framework.json`

pub mod audit;
pub mod jsonld;

//! BAIV design tokens encoded as typed Rust data.
//!
//! The `baiv-tokens` crate provides the ordered [`TokenMap`] used on both
//! sides of an extraction check, the embedded Figma baseline that serves as
//! the default ground truth, and serializers that produce the schema.org
//! JSON-LD token document and its audit companion.
//!
//! # Entry Point
//!
//! ```
//! let baseline = baiv_tokens::TokenMap::figma_baseline();
//! assert_eq!(baseline.len(), 20);
//! assert_eq!(baseline.get("Radius/XL"), Some("24"));
//! ```
//!
//! # Serialization
//!
//! ```
//! let tokens = baiv_tokens::TokenMap::figma_baseline();
//! let document = baiv_tokens::serializer::jsonld::to_json_ld(tokens);
//! let audit = baiv_tokens::serializer::audit::to_audit(tokens);
//! assert_eq!(document["@type"], "CreativeWork");
//! assert_eq!(audit["audit"]["mappings"].as_array().map(Vec::len), Some(20));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod baseline;
pub mod model;
pub mod serializer;

pub use model::{category_of, Token, TokenMap};

impl TokenMap {
    /// Returns the Figma MCP source token set the extraction pipeline is
    /// checked against when no other source is configured.
    ///
    /// Built once on first use; iteration follows the order of
    /// [`baseline::FIGMA_SOURCE_TOKENS`].
    #[must_use]
    pub fn figma_baseline() -> &'static TokenMap {
        static BASELINE: std::sync::OnceLock<TokenMap> = std::sync::OnceLock::new();
        BASELINE.get_or_init(|| baseline::FIGMA_SOURCE_TOKENS.iter().copied().collect())
    }
}

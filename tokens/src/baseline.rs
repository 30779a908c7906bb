//! The Figma MCP source extraction used as ground truth by default.
//!
//! Keys are either CSS custom-property references (`var(--sds-...)`) or
//! hierarchical design-system names (`Category/Subcategory/Name`). Composite
//! effect values reference other tokens by their custom-property key.

/// Source tokens in their declared order.
pub const FIGMA_SOURCE_TOKENS: &[(&str, &str)] = &[
    ("var(--sds-size-radius-400)", "16"),
    ("var(--sds-size-stroke-border)", "1"),
    ("var(--sds-color-border-utilities-swatch)", "#0000003d"),
    ("var(--sds-size-depth-0)", "0"),
    ("var(--sds-color-black-100)", "#0c0c0d0d"),
    ("var(--sds-size-depth-100)", "4"),
    ("var(--sds-color-black-200)", "#0c0c0d1a"),
    ("var(--sds-size-depth-025)", "1"),
    (
        "Drop Shadow/200",
        "Effect(type: DROP_SHADOW, color: var(--sds-color-black-100), \
         offset: (var(--sds-size-depth-0), var(--sds-size-depth-025)), \
         radius: var(--sds-size-depth-100), spread: var(--sds-size-depth-0)); \
         Effect(type: DROP_SHADOW, color: var(--sds-color-black-200), \
         offset: (var(--sds-size-depth-0), var(--sds-size-depth-025)), \
         radius: var(--sds-size-depth-100), spread: var(--sds-size-depth-0))",
    ),
    ("var(--sds-color-border-default-default)", "#d9d9d9"),
    ("Text/Neutral/Primary", "#1d1a22"),
    ("var(--sds-typography-scale-03)", "16"),
    ("var(--sds-size-space-200)", "8"),
    ("var(--sds-size-space-100)", "4"),
    ("var(--sds-size-radius-200)", "8"),
    ("Background/Neutral/Secondary", "#f7f6f8"),
    ("Border/Neutral/Inverse/Primary", "#3a3445"),
    ("Background/Neutral/Inverse/Teriary", "#574d69"),
    ("Background/Neutral/Primary", "#ffffff"),
    ("Radius/XL", "24"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = FIGMA_SOURCE_TOKENS.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FIGMA_SOURCE_TOKENS.len());
    }

    #[test]
    fn drop_shadow_is_two_effects() {
        let (_, value) = FIGMA_SOURCE_TOKENS
            .iter()
            .find(|(k, _)| *k == "Drop Shadow/200")
            .copied()
            .unwrap_or_default();
        assert_eq!(value.matches("Effect(type: DROP_SHADOW").count(), 2);
        assert!(value.contains("color: var(--sds-color-black-100), offset:"));
        assert!(!value.contains("  "));
    }
}

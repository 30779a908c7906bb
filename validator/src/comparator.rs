//! Diffs the source token set against the extracted tokens.
//!
//! Every source key lands in exactly one of matched, missing or
//! value-discrepancy, in source order. Output keys unknown to the source are
//! listed as extra, in output order. Values are compared as exact,
//! case-sensitive strings.

use baiv_tokens::TokenMap;
use serde::Serialize;

/// Status string attached to every classified token in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenStatus {
    /// Present with the expected value.
    Validated,
    /// Absent from the output.
    MissingFromOutput,
    /// Present with a different value.
    ValueMismatch,
    /// Present in the output but not in the source.
    ExtraInOutput,
}

/// A source token found with its expected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedToken {
    /// Token key.
    pub token: String,
    /// Shared value.
    pub value: String,
    /// Always [`TokenStatus::Validated`].
    pub status: TokenStatus,
}

/// A source token absent from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingToken {
    /// Token key.
    pub token: String,
    /// Value the source expects.
    pub expected_value: String,
    /// Always [`TokenStatus::MissingFromOutput`].
    pub status: TokenStatus,
}

/// A source token present in the output with another value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueDiscrepancy {
    /// Token key.
    pub token: String,
    /// Value the source expects.
    pub expected_value: String,
    /// Value found in the output.
    pub actual_value: String,
    /// Always [`TokenStatus::ValueMismatch`].
    pub status: TokenStatus,
}

/// An output token the source does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraToken {
    /// Token key.
    pub token: String,
    /// Value found in the output.
    pub value: String,
    /// Always [`TokenStatus::ExtraInOutput`].
    pub status: TokenStatus,
}

/// The four-way classification of one source/output pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Number of source tokens.
    pub total_source_tokens: usize,
    /// Number of distinct extracted tokens.
    pub total_output_tokens: usize,
    /// Source tokens found with the expected value.
    pub matched: Vec<MatchedToken>,
    /// Source tokens absent from the output.
    pub missing: Vec<MissingToken>,
    /// Source tokens found with another value.
    pub value_discrepancies: Vec<ValueDiscrepancy>,
    /// Output tokens absent from the source.
    pub extra_tokens: Vec<ExtraToken>,
}

impl Comparison {
    /// Keys of every missing token, in source order.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<String> {
        self.missing.iter().map(|t| t.token.clone()).collect()
    }

    /// Keys of every discrepant token, in source order.
    #[must_use]
    pub fn discrepant_keys(&self) -> Vec<String> {
        self.value_discrepancies
            .iter()
            .map(|t| t.token.clone())
            .collect()
    }
}

/// Classifies every token of `source` and `output`.
#[must_use]
pub fn compare(source: &TokenMap, output: &TokenMap) -> Comparison {
    let mut comparison = Comparison {
        total_source_tokens: source.len(),
        total_output_tokens: output.len(),
        ..Comparison::default()
    };

    for expected in source {
        match output.get(&expected.key) {
            None => comparison.missing.push(MissingToken {
                token: expected.key.clone(),
                expected_value: expected.value.clone(),
                status: TokenStatus::MissingFromOutput,
            }),
            Some(actual) if actual != expected.value => {
                comparison.value_discrepancies.push(ValueDiscrepancy {
                    token: expected.key.clone(),
                    expected_value: expected.value.clone(),
                    actual_value: actual.to_owned(),
                    status: TokenStatus::ValueMismatch,
                });
            }
            Some(_) => comparison.matched.push(MatchedToken {
                token: expected.key.clone(),
                value: expected.value.clone(),
                status: TokenStatus::Validated,
            }),
        }
    }

    comparison.extra_tokens = output
        .iter()
        .filter(|token| !source.contains_key(&token.key))
        .map(|token| ExtraToken {
            token: token.key.clone(),
            value: token.value.clone(),
            status: TokenStatus::ExtraInOutput,
        })
        .collect();

    tracing::debug!(
        matched = comparison.matched.len(),
        missing = comparison.missing.len(),
        discrepancies = comparison.value_discrepancies.len(),
        extra = comparison.extra_tokens.len(),
        "compared token sets"
    );

    comparison
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(pairs: &[(&str, &str)]) -> TokenMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn identical_sets_all_match() {
        let c = compare(&map(&[("a", "1")]), &map(&[("a", "1")]));
        assert_eq!(c.matched.len(), 1);
        assert!(c.missing.is_empty());
        assert!(c.value_discrepancies.is_empty());
        assert!(c.extra_tokens.is_empty());
    }

    #[test]
    fn missing_token() {
        let c = compare(&map(&[("a", "1"), ("b", "2")]), &map(&[("a", "1")]));
        assert_eq!(
            c.missing,
            vec![MissingToken {
                token: "b".to_owned(),
                expected_value: "2".to_owned(),
                status: TokenStatus::MissingFromOutput,
            }]
        );
    }

    #[test]
    fn value_mismatch() {
        let c = compare(&map(&[("a", "1")]), &map(&[("a", "2")]));
        assert!(c.matched.is_empty());
        assert_eq!(
            c.value_discrepancies,
            vec![ValueDiscrepancy {
                token: "a".to_owned(),
                expected_value: "1".to_owned(),
                actual_value: "2".to_owned(),
                status: TokenStatus::ValueMismatch,
            }]
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let c = compare(&map(&[("a", "#FFFFFF")]), &map(&[("a", "#ffffff")]));
        assert_eq!(c.discrepant_keys(), vec!["a"]);
    }

    #[test]
    fn extra_tokens_follow_output_order() {
        let c = compare(
            &map(&[("a", "1")]),
            &map(&[("z", "9"), ("a", "1"), ("y", "8")]),
        );
        let extra: Vec<&str> = c.extra_tokens.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(extra, vec!["z", "y"]);
        assert_eq!(c.matched.len(), 1);
        assert_eq!(c.total_output_tokens, 3);
    }

    #[test]
    fn classified_tokens_serialize_with_status() {
        let c = compare(&map(&[("a", "1"), ("b", "2")]), &map(&[("b", "3"), ("z", "9")]));
        assert_eq!(
            serde_json::to_value(&c.missing[0]).unwrap(),
            json!({ "token": "a", "expectedValue": "1", "status": "MISSING_FROM_OUTPUT" })
        );
        assert_eq!(
            serde_json::to_value(&c.value_discrepancies[0]).unwrap(),
            json!({
                "token": "b",
                "expectedValue": "2",
                "actualValue": "3",
                "status": "VALUE_MISMATCH"
            })
        );
        assert_eq!(
            serde_json::to_value(&c.extra_tokens[0]).unwrap(),
            json!({ "token": "z", "value": "9", "status": "EXTRA_IN_OUTPUT" })
        );
    }
}

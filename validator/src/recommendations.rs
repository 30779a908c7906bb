//! Follow-up actions attached to the report.
//!
//! Rules are evaluated in order and every rule that applies contributes an
//! entry. A single success entry is emitted only when none apply.

use serde::Serialize;

use crate::comparator::Comparison;
use crate::metrics::Metrics;
use crate::structure::StructureSummary;

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Blocks a passing run.
    High,
    /// Structural problem.
    Medium,
    /// Informational.
    Info,
}

/// Steps suggested after a clean run.
pub const NEXT_STEPS: &[&str] = &[
    "Generate code outputs (CSS, SCSS, JS, Tailwind)",
    "Integrate tokens into design system",
    "Set up continuous validation pipeline",
];

/// One report recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Recommendation {
    /// A problem to fix.
    #[serde(rename_all = "camelCase")]
    Issue {
        /// Urgency.
        priority: Priority,
        /// What is wrong.
        issue: &'static str,
        /// What to do about it.
        recommendation: &'static str,
        /// Tokens the issue concerns, when it concerns specific tokens.
        #[serde(skip_serializing_if = "Option::is_none")]
        affected_tokens: Option<Vec<String>>,
    },
    /// Emitted alone when nothing needs fixing.
    #[serde(rename_all = "camelCase")]
    Success {
        /// Always [`Priority::Info`].
        priority: Priority,
        /// Always `SUCCESS`.
        status: &'static str,
        /// Summary line.
        message: &'static str,
        /// Suggested follow-ups, see [`NEXT_STEPS`].
        next_steps: Vec<&'static str>,
    },
}

/// Builds the ordered recommendation list for a run.
#[must_use]
pub fn recommend(
    metrics: &Metrics,
    comparison: &Comparison,
    structure: &StructureSummary,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if metrics.incomplete() {
        recommendations.push(Recommendation::Issue {
            priority: Priority::High,
            issue: "Incomplete token extraction",
            recommendation: "Re-run Figma MCP extraction to capture all tokens",
            affected_tokens: Some(comparison.missing_keys()),
        });
    }

    if !comparison.value_discrepancies.is_empty() {
        recommendations.push(Recommendation::Issue {
            priority: Priority::High,
            issue: "Value mismatches detected",
            recommendation: "Review transformation logic for affected tokens",
            affected_tokens: Some(comparison.discrepant_keys()),
        });
    }

    if !structure.schema_org_compliant {
        recommendations.push(Recommendation::Issue {
            priority: Priority::Medium,
            issue: "Schema.org structure not fully compliant",
            recommendation: "Ensure @context, @type, and required properties are present",
            affected_tokens: None,
        });
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::Success {
            priority: Priority::Info,
            status: "SUCCESS",
            message: "All tokens successfully extracted and validated",
            next_steps: NEXT_STEPS.to_vec(),
        });
    }

    recommendations
}

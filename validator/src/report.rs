//! The validation report: a schema.org `Report` JSON-LD document.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::comparator::{ExtraToken, MatchedToken, MissingToken, ValueDiscrepancy};
use crate::error::Error;
use crate::extractor::Collision;
use crate::metrics::Status;
use crate::recommendations::{recommend, Recommendation};
use crate::structure::{ShapeViolation, StructureSummary, SCHEMA_ORG_CONTEXT};
use crate::Validation;

/// Report title.
pub const REPORT_NAME: &str = "BAIV Token Extraction Validation Report";

/// The complete report written at the end of a run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Always `https://schema.org`.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// Always `Report`.
    #[serde(rename = "@type")]
    pub type_: &'static str,
    /// Report title.
    pub name: &'static str,
    /// RFC 3339 UTC timestamp of the run.
    pub date_created: String,
    /// What was validated.
    pub about: ReportAbout,
    /// Headline numbers and verdict.
    #[serde(rename = "abstract")]
    pub summary: ReportAbstract,
    /// Check outcomes and per-class counts.
    pub validation: ReportValidation,
    /// Every classified token.
    pub details: ReportDetails,
    /// Ordered follow-up actions.
    pub recommendations: Vec<Recommendation>,
    /// Findings behind the structural booleans and the extraction.
    pub diagnostics: ReportDiagnostics,
}

/// The `about` block.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAbout {
    /// Always `Dataset`.
    #[serde(rename = "@type")]
    pub type_: &'static str,
    /// Dataset name.
    pub name: &'static str,
    /// Dataset description.
    pub description: &'static str,
}

/// The `abstract` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAbstract {
    /// Number of source tokens.
    pub total_source_tokens: usize,
    /// Number of distinct extracted tokens.
    pub total_output_tokens: usize,
    /// Completeness, e.g. `95.00%`.
    pub completeness: String,
    /// Accuracy, e.g. `95.00%`.
    pub accuracy: String,
    /// Missing rate, e.g. `5.00%`.
    pub missing_rate: String,
    /// Verdict.
    pub status: Status,
}

/// The `validation` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportValidation {
    /// Structural check booleans.
    pub schema_compliance: StructureSummary,
    /// Size of each classification.
    pub token_comparison: TokenCounts,
    /// Audit mapping count equals the source token count.
    pub audit_trail_complete: bool,
}

/// Size of each token classification.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCounts {
    /// Matched tokens.
    pub matched: usize,
    /// Missing tokens.
    pub missing: usize,
    /// Discrepant tokens.
    pub value_discrepancies: usize,
    /// Extra tokens.
    pub extra_tokens: usize,
}

/// The `details` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    /// Source tokens found with the expected value.
    pub matched_tokens: Vec<MatchedToken>,
    /// Source tokens absent from the output.
    pub missing_tokens: Vec<MissingToken>,
    /// Source tokens found with another value.
    pub value_discrepancies: Vec<ValueDiscrepancy>,
    /// Output tokens absent from the source.
    pub extra_tokens: Vec<ExtraToken>,
}

/// The `diagnostics` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDiagnostics {
    /// Repeated `propertyID`s met during extraction.
    pub key_collisions: Vec<Collision>,
    /// Entries that broke the `DefinedTerm` / `PropertyValue` shape.
    pub shape_violations: Vec<ShapeViolation>,
    /// Expected categories with no extracted token.
    pub missing_categories: Vec<String>,
}

impl ValidationReport {
    /// Assembles the report for a finished validation.
    #[must_use]
    pub fn build(validation: &Validation, created: DateTime<Utc>) -> Self {
        let comparison = &validation.comparison;
        let metrics = &validation.metrics;
        let structure = &validation.structure;

        Self {
            context: SCHEMA_ORG_CONTEXT,
            type_: "Report",
            name: REPORT_NAME,
            date_created: created.to_rfc3339_opts(SecondsFormat::Millis, true),
            about: ReportAbout {
                type_: "Dataset",
                name: "Token Extraction Validation",
                description: "Automated validation of Figma-to-JSON token extraction",
            },
            summary: ReportAbstract {
                total_source_tokens: comparison.total_source_tokens,
                total_output_tokens: comparison.total_output_tokens,
                completeness: format!("{}%", metrics.completeness_percentage()),
                accuracy: format!("{}%", metrics.accuracy_percentage()),
                missing_rate: format!("{}%", metrics.missing_percentage()),
                status: metrics.status(),
            },
            validation: ReportValidation {
                schema_compliance: structure.summary,
                token_comparison: TokenCounts {
                    matched: comparison.matched.len(),
                    missing: comparison.missing.len(),
                    value_discrepancies: comparison.value_discrepancies.len(),
                    extra_tokens: comparison.extra_tokens.len(),
                },
                audit_trail_complete: validation.audit_trail_complete,
            },
            details: ReportDetails {
                matched_tokens: comparison.matched.clone(),
                missing_tokens: comparison.missing.clone(),
                value_discrepancies: comparison.value_discrepancies.clone(),
                extra_tokens: comparison.extra_tokens.clone(),
            },
            recommendations: recommend(metrics, comparison, &structure.summary),
            diagnostics: ReportDiagnostics {
                key_collisions: validation.collisions.clone(),
                shape_violations: structure.violations.clone(),
                missing_categories: structure.missing_categories.clone(),
            },
        }
    }

    /// Verdict of the run.
    #[must_use]
    pub fn status(&self) -> Status {
        self.summary.status
    }

    /// Writes the report as pretty-printed JSON, creating parent directories as needed.
    ///
    /// The JSON goes to a sibling temporary file first and is renamed into
    /// place, so `path` never holds a partial report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] or [`Error::Write`].
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        let io_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let tmp = parent.unwrap_or_else(|| Path::new(".")).join(format!(
            ".{}.tmp.{}",
            path.file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("report"),
            std::process::id()
        ));
        let persisted = write_synced(&tmp, json.as_bytes()).and_then(|()| fs::rename(&tmp, path));
        if let Err(source) = persisted {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(source));
        }
        tracing::debug!(path = %path.display(), "report written");
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

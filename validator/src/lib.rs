//! BAIV token extraction validator.
//!
//! Checks that a Figma-to-JSON token extraction is complete and accurate by
//! comparing a source token set against the tokens found in the schema.org
//! JSON-LD document the extraction produced, and writes a JSON-LD report.
//!
//! # Pipeline
//!
//! | Step | Module |
//! |------|--------|
//! | Load the token and audit documents | [`loader`] |
//! | Flatten `about.hasDefinedTerm[].additionalProperty[]` | [`extractor`] |
//! | Schema, shape and category checks | [`structure`] |
//! | Matched / missing / discrepant / extra classification | [`comparator`] |
//! | Audit mapping count | [`audit`] |
//! | Completeness, accuracy, missing rate | [`metrics`] |
//! | Report and recommendations | [`report`], [`recommendations`] |
//!
//! Every step runs once, in that order. Any load failure aborts the run
//! before a report is written.
//!
//! # Entry Point
//!
//! ```no_run
//! use baiv_validator::{run, ValidatorConfig};
//!
//! let outcome = run(&ValidatorConfig::default()).expect("validation could not run");
//! std::process::exit(outcome.exit_code());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod audit;
pub mod checks;
pub mod comparator;
pub mod config;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod metrics;
pub mod recommendations;
pub mod report;
pub mod structure;

use std::borrow::Cow;
use std::path::PathBuf;

use baiv_tokens::TokenMap;
use chrono::Utc;

pub use checks::{CheckLog, CheckResult, Severity};
pub use config::{ConfigOverrides, ValidatorConfig};
pub use error::{ConfigurationError, Error, LoadError};
pub use loader::Documents;
pub use metrics::{Metrics, Status};
pub use report::ValidationReport;

use comparator::Comparison;
use extractor::Collision;
use structure::StructureValidation;

/// Everything learned from one pass over the documents.
#[derive(Debug, Clone)]
pub struct Validation {
    /// Token classification.
    pub comparison: Comparison,
    /// Percentages derived from the classification.
    pub metrics: Metrics,
    /// Structural check results.
    pub structure: StructureValidation,
    /// Repeated `propertyID`s met during extraction.
    pub collisions: Vec<Collision>,
    /// Audit mapping count equals the source token count.
    pub audit_trail_complete: bool,
    /// One entry per check, in the order they ran.
    pub checks: CheckLog,
}

impl Validation {
    /// Verdict of the run.
    #[must_use]
    pub fn status(&self) -> Status {
        self.metrics.status()
    }
}

/// Result of a completed run whose report was written.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The report as written.
    pub report: ValidationReport,
    /// Where it was written.
    pub report_path: PathBuf,
    /// The check log behind it.
    pub checks: CheckLog,
}

impl Outcome {
    /// True if the report status is `PASS`.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.report.status() == Status::Pass
    }

    /// Process exit code: 0 on `PASS`, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Validates already-loaded documents against `source`.
///
/// `expected_categories` drives the category check; pass `None` to require
/// every category of the source set.
///
/// # Errors
///
/// Returns [`ConfigurationError::EmptySourceTokens`] if `source` is empty.
pub fn validate(
    source: &TokenMap,
    documents: &Documents,
    expected_categories: Option<&[String]>,
) -> Result<Validation, ConfigurationError> {
    if source.is_empty() {
        return Err(ConfigurationError::EmptySourceTokens);
    }
    let mut checks = CheckLog::new();

    let extraction = extractor::extract(&documents.output);
    let derived;
    let expected = match expected_categories {
        Some(categories) => categories,
        None => {
            derived = source.categories();
            derived.as_slice()
        }
    };
    let structure = structure::validate(&documents.output, expected, &extraction.tokens);
    record_structure(&structure, &mut checks);

    if !extraction.collisions.is_empty() {
        checks.push(CheckResult::warn_with_details(
            "extract/collisions",
            format!(
                "{} duplicate propertyID(s); later values kept",
                extraction.collisions.len()
            ),
            extraction
                .collisions
                .iter()
                .map(|c| {
                    format!(
                        "{}: {:?} overwritten by {:?}",
                        c.token, c.overwritten_value, c.value
                    )
                })
                .collect(),
        ));
    }

    let comparison = comparator::compare(source, &extraction.tokens);
    record_comparison(&comparison, &mut checks);

    let metrics = Metrics::from_comparison(&comparison)?;
    tracing::info!(
        source = comparison.total_source_tokens,
        output = comparison.total_output_tokens,
        completeness = %metrics.completeness_percentage(),
        accuracy = %metrics.accuracy_percentage(),
        "metrics"
    );

    let audit_trail_complete = audit::audit_trail_complete(&documents.audit, source.len());
    checks.push(match audit::mapping_count(&documents.audit) {
        Some(count) if audit_trail_complete => CheckResult::pass(
            "audit/mappings",
            format!("Audit trail records all {count} source tokens"),
        ),
        Some(count) => CheckResult::fail(
            "audit/mappings",
            format!(
                "Audit trail records {count} mappings for {} source tokens",
                source.len()
            ),
        ),
        None => CheckResult::fail("audit/mappings", "Audit document missing audit.mappings array"),
    });

    Ok(Validation {
        comparison,
        metrics,
        structure,
        collisions: extraction.collisions,
        audit_trail_complete,
        checks,
    })
}

fn record_structure(structure: &StructureValidation, checks: &mut CheckLog) {
    checks.push(if structure.summary.schema_org_compliant {
        CheckResult::pass("structure/schema", "Document is a schema.org CreativeWork")
    } else {
        CheckResult::fail(
            "structure/schema",
            "Document is not a schema.org CreativeWork with @context, @type and about",
        )
    });

    checks.push(if structure.summary.property_values_valid {
        CheckResult::pass(
            "structure/property-values",
            "All DefinedTerm and PropertyValue entries are well formed",
        )
    } else if structure.violations.is_empty() {
        CheckResult::fail(
            "structure/property-values",
            "Document missing about.hasDefinedTerm array",
        )
    } else {
        CheckResult::fail_with_details(
            "structure/property-values",
            format!("{} malformed entries", structure.violations.len()),
            structure.violations.iter().map(ToString::to_string).collect(),
        )
    });

    checks.push(if structure.summary.categories_complete {
        CheckResult::pass("structure/categories", "Every expected category is represented")
    } else {
        CheckResult::fail_with_details(
            "structure/categories",
            format!(
                "{} categories have no extracted token",
                structure.missing_categories.len()
            ),
            structure.missing_categories.clone(),
        )
    });
}

fn record_comparison(comparison: &Comparison, checks: &mut CheckLog) {
    checks.push(if comparison.missing.is_empty() {
        CheckResult::pass(
            "compare/missing",
            format!(
                "All {} source tokens present in output",
                comparison.total_source_tokens
            ),
        )
    } else {
        CheckResult::fail_with_details(
            "compare/missing",
            format!("{} source tokens missing from output", comparison.missing.len()),
            comparison.missing_keys(),
        )
    });

    checks.push(if comparison.value_discrepancies.is_empty() {
        CheckResult::pass("compare/values", "No value mismatches")
    } else {
        CheckResult::fail_with_details(
            "compare/values",
            format!("{} value mismatches", comparison.value_discrepancies.len()),
            comparison
                .value_discrepancies
                .iter()
                .map(|d| {
                    format!(
                        "{}: expected {:?}, got {:?}",
                        d.token, d.expected_value, d.actual_value
                    )
                })
                .collect(),
        )
    });

    if !comparison.extra_tokens.is_empty() {
        checks.push(CheckResult::warn_with_details(
            "compare/extra",
            format!(
                "{} output tokens not in the source set",
                comparison.extra_tokens.len()
            ),
            comparison.extra_tokens.iter().map(|t| t.token.clone()).collect(),
        ));
    }
}

/// Resolves the source token set: the configured file, or the embedded baseline.
///
/// # Errors
///
/// Returns [`Error::Load`] if the configured file cannot be loaded, or
/// [`Error::Configuration`] if the resolved set is empty.
pub fn source_tokens(config: &ValidatorConfig) -> Result<Cow<'static, TokenMap>, Error> {
    let tokens = match &config.source {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading source tokens");
            Cow::Owned(loader::load_source_tokens(path)?)
        }
        None => Cow::Borrowed(TokenMap::figma_baseline()),
    };
    if tokens.is_empty() {
        return Err(ConfigurationError::EmptySourceTokens.into());
    }
    Ok(tokens)
}

/// Runs a complete validation and writes the report.
///
/// Steps run strictly in sequence: resolve the source set, load both
/// documents, validate, build the report, write it. Nothing is written if
/// any step before the write fails.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for an empty source set,
/// [`Error::Load`] if an input cannot be loaded, and [`Error::Serialize`] or
/// [`Error::Write`] if the report cannot be persisted.
pub fn run(config: &ValidatorConfig) -> Result<Outcome, Error> {
    let source = source_tokens(config)?;
    tracing::info!(tokens = source.len(), "source token set ready");

    let documents = loader::load_documents(&config.output, &config.audit)?;
    tracing::info!(
        output = %config.output.display(),
        audit = %config.audit.display(),
        "documents loaded"
    );

    let validation = validate(&source, &documents, config.expected_categories.as_deref())?;
    let report = ValidationReport::build(&validation, Utc::now());
    report.write(&config.report)?;
    tracing::info!(path = %config.report.display(), status = ?report.status(), "report written");

    Ok(Outcome {
        report,
        report_path: config.report.clone(),
        checks: validation.checks,
    })
}

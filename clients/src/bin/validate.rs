//! `baiv-validate` — Validates a Figma-to-JSON token extraction.
//!
//! Compares the source token set (the embedded Figma baseline, or `--source`)
//! with the tokens in the JSON-LD token document, checks its schema.org
//! structure and the audit trail, and writes a JSON-LD validation report.
//!
//! **Usage:**
//! ```text
//! baiv-validate [--config <toml>] [--output <json>] [--audit <json>]
//!               [--report <json>] [--source <json>] [--category <name>]...
//! ```
//!
//! Exits 0 when completeness and accuracy are both 100.00%, 1 otherwise or
//! when an input cannot be loaded. Progress goes to stderr (`RUST_LOG`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use baiv_validator::{run, ConfigOverrides, Severity, ValidatorConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Validate a BAIV token extraction.
#[derive(Parser)]
#[command(
    name = "baiv-validate",
    about = "Validate a Figma-to-JSON token extraction against its source tokens"
)]
struct Args {
    /// TOML configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON-LD token document (default: baiv-design-tokens.json).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Audit framework document (default: baiv-token-audit-framework.json).
    #[arg(long)]
    audit: Option<PathBuf>,

    /// Where to write the report (default: baiv-validation-report.json).
    #[arg(long)]
    report: Option<PathBuf>,

    /// Flat JSON source token file (default: embedded Figma baseline).
    #[arg(long)]
    source: Option<PathBuf>,

    /// Category that must be represented; repeat for several.
    #[arg(long = "category")]
    categories: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<ValidatorConfig> {
        let config = match &self.config {
            Some(path) => ValidatorConfig::from_toml_file(path)?,
            None => ValidatorConfig::default(),
        };
        Ok(config.apply_overrides(ConfigOverrides {
            output: self.output,
            audit: self.audit,
            report: self.report,
            source: self.source,
            categories: self.categories,
        }))
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    let outcome = run(&config)?;

    println!("BAIV Token Extraction Validation");
    println!("================================");
    println!();
    for line in outcome.checks.lines() {
        println!("{line}");
    }
    println!();

    let summary = &outcome.report.summary;
    println!(
        "Tokens: {} source, {} output",
        summary.total_source_tokens, summary.total_output_tokens
    );
    println!(
        "Completeness: {}  Accuracy: {}",
        summary.completeness, summary.accuracy
    );
    println!(
        "Checks: {} passed, {} warnings, {} failed",
        outcome.checks.count(Severity::Pass),
        outcome.checks.count(Severity::Warning),
        outcome.checks.count(Severity::Failure)
    );
    println!("Report: {}", outcome.report_path.display());
    println!();

    if outcome.passed() {
        println!("VALIDATION PASSED - All tokens extracted and validated successfully.");
        Ok(())
    } else {
        println!("VALIDATION FAILED - Issues detected. Review recommendations in report.");
        process::exit(outcome.exit_code());
    }
}

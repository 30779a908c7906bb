//! `baiv-build` — Writes the JSON-LD token document and its audit framework
//! for a token set.
//!
//! **Outputs:**
//! - `<out>/baiv-design-tokens.json` — schema.org `CreativeWork` token document
//! - `<out>/baiv-token-audit-framework.json` — one audit mapping per token
//!
//! **Usage:**
//! ```text
//! baiv-build [--out <path>] [--source <json>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use baiv_tokens::serializer::{audit, jsonld};
use baiv_tokens::TokenMap;
use baiv_validator::config::{DEFAULT_AUDIT_PATH, DEFAULT_OUTPUT_PATH};
use baiv_validator::loader;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Build BAIV token artifacts.
#[derive(Parser)]
#[command(name = "baiv-build", about = "Build BAIV JSON-LD token artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Flat JSON source token file (default: embedded Figma baseline).
    #[arg(long)]
    source: Option<PathBuf>,
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "written");
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let owned;
    let tokens: &TokenMap = match &args.source {
        Some(path) => {
            owned = loader::load_source_tokens(path)?;
            &owned
        }
        None => TokenMap::figma_baseline(),
    };

    println!(
        "BAIV tokens: {} tokens in {} categories",
        tokens.len(),
        tokens.categories().len()
    );

    write_json(&out.join(DEFAULT_OUTPUT_PATH), &jsonld::to_json_ld(tokens))?;
    write_json(&out.join(DEFAULT_AUDIT_PATH), &audit::to_audit(tokens))?;

    println!("Build complete.");
    Ok(())
}

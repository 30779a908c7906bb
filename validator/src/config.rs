//! Run configuration.
//!
//! Built-in defaults reproduce the file layout of the extraction pipeline:
//! the JSON-LD token document, its audit framework, and the report all live
//! side by side in the working directory. A TOML file may override any field,
//! and [`ConfigOverrides`] from the command line are applied on top.
//!
//! ```toml
//! output = "build/baiv-design-tokens.json"
//! audit = "build/baiv-token-audit-framework.json"
//! report = "build/baiv-validation-report.json"
//! source = "tokens/figma-source.json"
//! expected_categories = ["color", "size", "Background"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Default location of the JSON-LD token document.
pub const DEFAULT_OUTPUT_PATH: &str = "baiv-design-tokens.json";
/// Default location of the audit framework document.
pub const DEFAULT_AUDIT_PATH: &str = "baiv-token-audit-framework.json";
/// Default location the validation report is written to.
pub const DEFAULT_REPORT_PATH: &str = "baiv-validation-report.json";

/// Everything a validation run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// JSON-LD token document under test.
    pub output: PathBuf,
    /// Audit framework document.
    pub audit: PathBuf,
    /// Where the validation report is written.
    pub report: PathBuf,
    /// Flat `{ key: value }` JSON source token file. The embedded Figma
    /// baseline is used when unset.
    pub source: Option<PathBuf>,
    /// Categories that must each be represented in the extracted tokens.
    /// Defaults to the categories of the source token set.
    pub expected_categories: Option<Vec<String>>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            audit: PathBuf::from(DEFAULT_AUDIT_PATH),
            report: PathBuf::from(DEFAULT_REPORT_PATH),
            source: None,
            expected_categories: None,
        }
    }
}

/// Command-line values layered over a loaded configuration.
///
/// Unset fields leave the configuration alone. A non-empty `categories`
/// replaces `expected_categories` outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces [`ValidatorConfig::output`].
    pub output: Option<PathBuf>,
    /// Replaces [`ValidatorConfig::audit`].
    pub audit: Option<PathBuf>,
    /// Replaces [`ValidatorConfig::report`].
    pub report: Option<PathBuf>,
    /// Replaces [`ValidatorConfig::source`].
    pub source: Option<PathBuf>,
    /// Replaces [`ValidatorConfig::expected_categories`] when non-empty.
    pub categories: Vec<String>,
}

impl ValidatorConfig {
    /// Applies command-line overrides on top of this configuration.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(audit) = overrides.audit {
            self.audit = audit;
        }
        if let Some(report) = overrides.report {
            self.report = report;
        }
        if overrides.source.is_some() {
            self.source = overrides.source;
        }
        if !overrides.categories.is_empty() {
            self.expected_categories = Some(overrides.categories);
        }
        self
    }

    /// Parses a TOML configuration; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] if the text is not valid TOML for
    /// this type or names an unknown field.
    pub fn from_toml_str(path: &Path, text: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(text).map_err(|source| ConfigurationError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Read`] if the file cannot be read, or
    /// [`ConfigurationError::Parse`] if it is malformed.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigurationError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(path, &text)
    }
}

//! Check log: one line per validation step, printed before the final status.

/// Outcome level of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Something looks off but does not decide the status.
    Warning,
    /// The check failed.
    Failure,
}

impl Severity {
    /// Fixed-width label used when printing the log.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// The recorded outcome of one validation step.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Short identifier of the step, e.g. `structure/schema`.
    pub check: String,
    /// Human-readable outcome.
    pub message: String,
    /// Outcome level.
    pub severity: Severity,
    /// Optional detail lines (offending tokens, entries, categories).
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Pass, Vec::new())
    }

    /// Creates a failure result.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Failure, Vec::new())
    }

    /// Creates a failure result with detail lines.
    pub fn fail_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(check, message, Severity::Failure, details)
    }

    /// Creates a warning result with detail lines.
    pub fn warn_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(check, message, Severity::Warning, details)
    }

    fn new(
        check: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// Returns true if this result is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Ordered log of every check made during a run.
#[derive(Debug, Clone, Default)]
pub struct CheckLog {
    /// Results in the order the checks ran.
    pub results: Vec<CheckResult>,
}

impl CheckLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        match result.severity {
            Severity::Pass => tracing::info!(check = %result.check, "{}", result.message),
            Severity::Warning | Severity::Failure => tracing::warn!(
                check = %result.check,
                failed = result.is_failure(),
                details = result.details.len(),
                "{}",
                result.message
            ),
        }
        self.results.push(result);
    }

    /// Number of results with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Renders the log as printable lines: `[PASS] check — message`, details indented.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for result in &self.results {
            lines.push(format!(
                "[{}] {} — {}",
                result.severity.label(),
                result.check,
                result.message
            ));
            for detail in &result.details {
                lines.push(format!("       {detail}"));
            }
        }
        lines
    }
}

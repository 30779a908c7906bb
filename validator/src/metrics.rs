//! Percentage metrics over the source token count.
//!
//! - completeness = matched / source × 100
//! - accuracy = (matched − discrepancies) / source × 100
//! - missing rate = missing / source × 100
//!
//! Pass/fail compares the two-decimal renderings, so a run passes only if
//! both completeness and accuracy render as `100.00`.

use serde::Serialize;

use crate::comparator::Comparison;
use crate::error::ConfigurationError;

/// Rendering a passing percentage must match exactly.
pub const FULL_MARKS: &str = "100.00";

/// Overall verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Completeness and accuracy are both `100.00`.
    Pass,
    /// Anything else.
    Fail,
}

/// Metrics derived from one [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Completeness in percent.
    pub completeness: f64,
    /// Accuracy in percent.
    pub accuracy: f64,
    /// Missing rate in percent.
    pub missing_rate: f64,
    /// Matched token count.
    pub total_validated: usize,
    /// Missing token count.
    pub total_missing: usize,
    /// Discrepant token count.
    pub total_discrepancies: usize,
}

fn percent(numerator: f64, total: usize) -> f64 {
    numerator / total as f64 * 100.0
}

/// Renders a percentage with two decimals.
///
/// Rounds on the exact binary value with ties away from zero, so `3.125`
/// renders as `3.13` while `1.005` (stored just below) renders as `1.00`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }
    // Every finite f64 has a terminating expansion within 1074 fractional digits.
    let exact = format!("{:.1074}", value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let mut rendered = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(digits[..split].iter().map(|d| char::from(*d)));
    rendered.push('.');
    rendered.extend(digits[split..].iter().map(|d| char::from(*d)));
    rendered
}

/// Adds one to an ASCII decimal digit string.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

impl Metrics {
    /// Computes the metrics for a comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptySourceTokens`] if the comparison had
    /// no source tokens, since every percentage would be undefined.
    pub fn from_comparison(comparison: &Comparison) -> Result<Self, ConfigurationError> {
        let total = comparison.total_source_tokens;
        if total == 0 {
            return Err(ConfigurationError::EmptySourceTokens);
        }
        let matched = comparison.matched.len();
        let missing = comparison.missing.len();
        let discrepancies = comparison.value_discrepancies.len();

        Ok(Self {
            completeness: percent(matched as f64, total),
            accuracy: percent(matched as f64 - discrepancies as f64, total),
            missing_rate: percent(missing as f64, total),
            total_validated: matched,
            total_missing: missing,
            total_discrepancies: discrepancies,
        })
    }

    /// Completeness rendered with two decimals.
    #[must_use]
    pub fn completeness_percentage(&self) -> String {
        format_percentage(self.completeness)
    }

    /// Accuracy rendered with two decimals.
    #[must_use]
    pub fn accuracy_percentage(&self) -> String {
        format_percentage(self.accuracy)
    }

    /// Missing rate rendered with two decimals.
    #[must_use]
    pub fn missing_percentage(&self) -> String {
        format_percentage(self.missing_rate)
    }

    /// True if the rendered completeness is below 100.
    #[must_use]
    pub fn incomplete(&self) -> bool {
        self.completeness_percentage()
            .parse::<f64>()
            .map_or(true, |rendered| rendered < 100.0)
    }

    /// `PASS` iff completeness and accuracy both render as `100.00`.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.completeness_percentage() == FULL_MARKS && self.accuracy_percentage() == FULL_MARKS
        {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

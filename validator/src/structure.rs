//! Structural checks on the JSON-LD token document.
//!
//! Three independent checks:
//! - schema.org compliance of the document header
//! - `DefinedTerm` / `PropertyValue` shape of every nested entry
//! - category coverage of the extracted tokens
//!
//! Each reduces to a boolean for the report. The shape and category checks
//! also return what failed.

use std::fmt;

use baiv_tokens::{category_of, TokenMap};
use serde::Serialize;
use serde_json::Value;

use crate::extractor::{defined_terms, non_empty_str};

pub use baiv_tokens::serializer::jsonld::SCHEMA_ORG_CONTEXT;

/// Required `@type` of the token document.
pub const CREATIVE_WORK: &str = "CreativeWork";
/// Required `@type` of each `hasDefinedTerm` entry.
pub const DEFINED_TERM: &str = "DefinedTerm";
/// Required `@type` of each `additionalProperty` entry.
pub const PROPERTY_VALUE: &str = "PropertyValue";

/// The three booleans reported under `validation.schemaCompliance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureSummary {
    /// Document header declares the schema.org `CreativeWork` vocabulary.
    pub schema_org_compliant: bool,
    /// Every defined term and property value has the expected shape.
    pub property_values_valid: bool,
    /// Every expected category is represented among the extracted tokens.
    pub categories_complete: bool,
}

/// What was wrong with one nested entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViolationKind {
    /// A defined term whose `@type` is not `DefinedTerm`.
    TermType {
        /// The `@type` found, if it was a string.
        found: Option<String>,
    },
    /// `additionalProperty` is present but not an array.
    PropertiesNotArray,
    /// A property whose `@type` is not `PropertyValue`.
    PropertyType {
        /// The `@type` found, if it was a string.
        found: Option<String>,
    },
    /// A property without a non-empty `propertyID`.
    MissingPropertyId,
    /// A property without a non-empty `value`.
    MissingValue,
}

/// One shape violation, located by its position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeViolation {
    /// Index into `about.hasDefinedTerm`.
    pub term: usize,
    /// Index into that term's `additionalProperty`, for property-level violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<usize>,
    /// The `propertyID` of the offending property, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    /// What was wrong.
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hasDefinedTerm[{}]", self.term)?;
        if let Some(property) = self.property {
            write!(f, ".additionalProperty[{property}]")?;
        }
        if let Some(id) = &self.property_id {
            write!(f, " ({id})")?;
        }
        match &self.kind {
            ViolationKind::TermType { found } => {
                write!(f, ": @type {} is not {DEFINED_TERM}", describe(found.as_deref()))
            }
            ViolationKind::PropertiesNotArray => {
                f.write_str(": additionalProperty is not an array")
            }
            ViolationKind::PropertyType { found } => {
                write!(f, ": @type {} is not {PROPERTY_VALUE}", describe(found.as_deref()))
            }
            ViolationKind::MissingPropertyId => f.write_str(": missing propertyID"),
            ViolationKind::MissingValue => f.write_str(": missing value"),
        }
    }
}

fn describe(found: Option<&str>) -> String {
    match found {
        Some(t) => format!("{t:?}"),
        None => "(absent)".to_owned(),
    }
}

/// Result of the property-value shape check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeCheck {
    /// True only if the defined-term array exists and no entry violated the shape.
    pub valid: bool,
    /// Every violation found, in document order.
    pub violations: Vec<ShapeViolation>,
}

/// All structural findings for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureValidation {
    /// Boolean summary for the report.
    pub summary: StructureSummary,
    /// Shape violations behind `property_values_valid`.
    pub violations: Vec<ShapeViolation>,
    /// Expected categories with no extracted token, behind `categories_complete`.
    pub missing_categories: Vec<String>,
}

/// JavaScript-style truthiness: absent, `null`, `false`, `0` and `""` are falsy.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn type_of(entry: &Value) -> Option<&str> {
    entry.get("@type").and_then(Value::as_str)
}

/// Checks the document header: `@context`, `@type` and `about` must all be
/// present, with `@context` = `https://schema.org` and `@type` = `CreativeWork`.
#[must_use]
pub fn check_schema_compliance(document: &Value) -> bool {
    let has_required = ["@context", "@type", "about"]
        .iter()
        .all(|key| truthy(document.get(key)));
    has_required
        && document.get("@context").and_then(Value::as_str) == Some(SCHEMA_ORG_CONTEXT)
        && type_of(document) == Some(CREATIVE_WORK)
}

/// Checks every defined term and every nested property value.
///
/// Fails if `about.hasDefinedTerm` is absent.
#[must_use]
pub fn check_property_values(document: &Value) -> ShapeCheck {
    let Some(terms) = defined_terms(document) else {
        return ShapeCheck::default();
    };

    let mut violations = Vec::new();
    for (term_index, term) in terms.iter().enumerate() {
        if type_of(term) != Some(DEFINED_TERM) {
            violations.push(ShapeViolation {
                term: term_index,
                property: None,
                property_id: None,
                kind: ViolationKind::TermType {
                    found: type_of(term).map(str::to_owned),
                },
            });
        }

        let properties = match term.get("additionalProperty") {
            Some(Value::Array(properties)) => properties,
            None => continue,
            Some(falsy) if !truthy(Some(falsy)) => continue,
            Some(_) => {
                violations.push(ShapeViolation {
                    term: term_index,
                    property: None,
                    property_id: None,
                    kind: ViolationKind::PropertiesNotArray,
                });
                continue;
            }
        };

        for (property_index, property) in properties.iter().enumerate() {
            let property_id = non_empty_str(property, "propertyID");
            let mut flag = |kind| {
                violations.push(ShapeViolation {
                    term: term_index,
                    property: Some(property_index),
                    property_id: property_id.map(str::to_owned),
                    kind,
                });
            };
            if type_of(property) != Some(PROPERTY_VALUE) {
                flag(ViolationKind::PropertyType {
                    found: type_of(property).map(str::to_owned),
                });
            }
            if property_id.is_none() {
                flag(ViolationKind::MissingPropertyId);
            }
            if non_empty_str(property, "value").is_none() {
                flag(ViolationKind::MissingValue);
            }
        }
    }

    ShapeCheck {
        valid: violations.is_empty(),
        violations,
    }
}

/// Returns the expected categories that no extracted token belongs to.
#[must_use]
pub fn missing_categories(expected: &[String], extracted: &TokenMap) -> Vec<String> {
    let present: Vec<String> = extracted.keys().map(category_of).collect();
    expected
        .iter()
        .filter(|category| !present.contains(category))
        .cloned()
        .collect()
}

/// Runs all three structural checks.
#[must_use]
pub fn validate(
    document: &Value,
    expected_categories: &[String],
    extracted: &TokenMap,
) -> StructureValidation {
    let schema_org_compliant = check_schema_compliance(document);
    let shape = check_property_values(document);
    let missing_categories = missing_categories(expected_categories, extracted);

    StructureValidation {
        summary: StructureSummary {
            schema_org_compliant,
            property_values_valid: shape.valid,
            categories_complete: missing_categories.is_empty(),
        },
        violations: shape.violations,
        missing_categories,
    }
}

//! End-to-end runs against documents on disk.

use std::fs;
use std::path::Path;

use baiv_tokens::serializer::{audit::to_audit, jsonld::to_json_ld};
use baiv_tokens::TokenMap;
use baiv_validator::{run, Error, LoadError, Status, ValidatorConfig};
use serde_json::{json, Value};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn config_for(dir: &TempDir, source: &TokenMap, output: &TokenMap) -> ValidatorConfig {
    let source_path = dir.path().join("source.json");
    fs::write(&source_path, serde_json::to_string(source).unwrap()).unwrap();
    ValidatorConfig {
        output: write_json(dir.path(), "tokens.json", &to_json_ld(output)),
        audit: write_json(dir.path(), "audit.json", &to_audit(source)),
        report: dir.path().join("out").join("report.json"),
        source: Some(source_path),
        expected_categories: None,
    }
}

fn read_report(config: &ValidatorConfig) -> Value {
    serde_json::from_str(&fs::read_to_string(&config.report).unwrap()).unwrap()
}

fn map(pairs: &[(&str, &str)]) -> TokenMap {
    pairs.iter().copied().collect()
}

#[test]
fn baseline_round_trip_passes() {
    let dir = TempDir::new().unwrap();
    let baseline = TokenMap::figma_baseline();
    let config = ValidatorConfig {
        output: write_json(dir.path(), "baiv-design-tokens.json", &to_json_ld(baseline)),
        audit: write_json(dir.path(), "baiv-token-audit-framework.json", &to_audit(baseline)),
        report: dir.path().join("baiv-validation-report.json"),
        ..ValidatorConfig::default()
    };

    let outcome = run(&config).unwrap();
    assert!(outcome.passed());
    assert_eq!(outcome.exit_code(), 0);

    let report = read_report(&config);
    assert_eq!(report["@context"], "https://schema.org");
    assert_eq!(report["@type"], "Report");
    assert_eq!(report["name"], "BAIV Token Extraction Validation Report");
    assert_eq!(report["abstract"]["totalSourceTokens"], 20);
    assert_eq!(report["abstract"]["totalOutputTokens"], 20);
    assert_eq!(report["abstract"]["completeness"], "100.00%");
    assert_eq!(report["abstract"]["accuracy"], "100.00%");
    assert_eq!(report["abstract"]["status"], "PASS");
    assert_eq!(
        report["validation"]["schemaCompliance"],
        json!({
            "schemaOrgCompliant": true,
            "propertyValuesValid": true,
            "categoriesComplete": true
        })
    );
    assert_eq!(report["validation"]["auditTrailComplete"], true);
    assert_eq!(report["recommendations"][0]["status"], "SUCCESS");
    assert_eq!(report["details"]["matchedTokens"][0]["status"], "VALIDATED");
}

#[test]
fn single_token_pass() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, &map(&[("a", "1")]), &map(&[("a", "1")]));
    let outcome = run(&config).unwrap();
    assert_eq!(outcome.report.status(), Status::Pass);
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn missing_token_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, &map(&[("a", "1"), ("b", "2")]), &map(&[("a", "1")]));
    let outcome = run(&config).unwrap();
    assert_eq!(outcome.exit_code(), 1);

    let report = read_report(&config);
    assert_eq!(report["abstract"]["completeness"], "50.00%");
    assert_eq!(report["abstract"]["status"], "FAIL");
    assert_eq!(
        report["details"]["missingTokens"],
        json!([{ "token": "b", "expectedValue": "2", "status": "MISSING_FROM_OUTPUT" }])
    );
    assert_eq!(report["recommendations"][0]["priority"], "HIGH");
    assert_eq!(report["recommendations"][0]["affectedTokens"], json!(["b"]));
}

#[test]
fn value_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, &map(&[("a", "1")]), &map(&[("a", "2")]));
    let outcome = run(&config).unwrap();
    assert!(!outcome.passed());

    let report = read_report(&config);
    assert_eq!(report["abstract"]["completeness"], "0.00%");
    assert_eq!(report["details"]["matchedTokens"], json!([]));
    assert_eq!(
        report["details"]["valueDiscrepancies"],
        json!([{
            "token": "a",
            "expectedValue": "1",
            "actualValue": "2",
            "status": "VALUE_MISMATCH"
        }])
    );
}

#[test]
fn extra_tokens_do_not_affect_status() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, &map(&[("a", "1")]), &map(&[("a", "1"), ("z", "9")]));
    let outcome = run(&config).unwrap();
    assert!(outcome.passed());

    let report = read_report(&config);
    assert_eq!(
        report["details"]["extraTokens"],
        json!([{ "token": "z", "value": "9", "status": "EXTRA_IN_OUTPUT" }])
    );
    assert_eq!(report["validation"]["tokenComparison"]["extraTokens"], 1);
}

#[test]
fn malformed_document_marks_everything_missing() {
    let dir = TempDir::new().unwrap();
    let source = map(&[("a", "1"), ("b", "2")]);
    let mut config = config_for(&dir, &source, &source);
    config.output = write_json(
        dir.path(),
        "tokens.json",
        &json!({ "@context": "https://schema.org", "@type": "CreativeWork" }),
    );

    let outcome = run(&config).unwrap();
    assert_eq!(outcome.exit_code(), 1);

    let report = read_report(&config);
    assert_eq!(report["abstract"]["totalOutputTokens"], 0);
    assert_eq!(report["validation"]["tokenComparison"]["missing"], 2);
    assert_eq!(
        report["validation"]["schemaCompliance"]["schemaOrgCompliant"],
        false
    );
    assert_eq!(
        report["validation"]["schemaCompliance"]["propertyValuesValid"],
        false
    );
    let issues: Vec<&str> = report["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["issue"].as_str())
        .collect();
    assert_eq!(
        issues,
        vec![
            "Incomplete token extraction",
            "Schema.org structure not fully compliant"
        ]
    );
}

#[test]
fn duplicate_ids_reported_in_diagnostics() {
    let dir = TempDir::new().unwrap();
    let source = map(&[("a", "1")]);
    let mut config = config_for(&dir, &source, &source);
    config.output = write_json(
        dir.path(),
        "tokens.json",
        &json!({
            "@context": "https://schema.org",
            "@type": "CreativeWork",
            "about": { "hasDefinedTerm": [
                { "@type": "DefinedTerm", "additionalProperty": [
                    { "@type": "PropertyValue", "propertyID": "a", "value": "1" }
                ]},
                { "@type": "DefinedTerm", "additionalProperty": [
                    { "@type": "PropertyValue", "propertyID": "a", "value": "2" }
                ]}
            ]}
        }),
    );

    let outcome = run(&config).unwrap();
    assert!(!outcome.passed());
    let report = read_report(&config);
    assert_eq!(
        report["diagnostics"]["keyCollisions"],
        json!([{ "token": "a", "overwrittenValue": "1", "value": "2" }])
    );
}

#[test]
fn missing_output_is_a_load_error_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = map(&[("a", "1")]);
    let mut config = config_for(&dir, &source, &source);
    config.output = dir.path().join("absent.json");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Read { .. })));
    assert!(!config.report.exists());
}

#[test]
fn malformed_audit_json_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let source = map(&[("a", "1")]);
    let mut config = config_for(&dir, &source, &source);
    fs::write(&config.audit, "{ \"audit\": ").unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Parse { .. })));
    assert!(!config.report.exists());
}

#[test]
fn empty_source_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let source = map(&[("a", "1")]);
    let config = config_for(&dir, &source, &source);
    fs::write(config.source.as_ref().unwrap(), "{}").unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(!config.report.exists());
}

#[test]
fn audit_count_mismatch_is_reported_but_not_fatal() {
    let dir = TempDir::new().unwrap();
    let source = map(&[("a", "1"), ("b", "2")]);
    let mut config = config_for(&dir, &source, &source);
    config.audit = write_json(
        dir.path(),
        "audit.json",
        &json!({ "audit": { "mappings": [{}] } }),
    );

    let outcome = run(&config).unwrap();
    assert!(outcome.passed());
    let report = read_report(&config);
    assert_eq!(report["validation"]["auditTrailComplete"], false);
}

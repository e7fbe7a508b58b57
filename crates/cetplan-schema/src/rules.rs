//! # Rule Document Validation
//!
//! Prediction rule sets are injected configuration: a document holding the
//! filter band width and a list of per-record rules, each carrying its own
//! closing percentile and medium band width. Before a document becomes a
//! live rule set it is validated here against an embedded JSON Schema
//! (Draft 2020-12), with structured violation reporting.
//!
//! Rule documents are authored in YAML or JSON; YAML input is converted to
//! a JSON value first, so one schema covers both.

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

/// JSON Schema for prediction rule documents.
///
/// Thresholds are per-record data: every rule carries its own
/// `closing_percentile` and `medium_band_width`. The schema rejects unknown
/// keys so a typo'd threshold name fails loudly instead of silently falling
/// back to a default.
pub const RULE_DOCUMENT_SCHEMA: &str = r##"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "$id": "https://cetplan.dev/schemas/rule-document.schema.json",
    "title": "Prediction rule document",
    "type": "object",
    "required": ["rules"],
    "additionalProperties": false,
    "properties": {
        "filter_band_width": {
            "type": "number",
            "minimum": 0
        },
        "rules": {
            "type": "array",
            "minItems": 1,
            "items": {
                "type": "object",
                "required": [
                    "college_name",
                    "college_code",
                    "location",
                    "college_type",
                    "branch_name",
                    "degree_type",
                    "closing_percentile",
                    "medium_band_width"
                ],
                "additionalProperties": false,
                "properties": {
                    "college_name": { "type": "string", "minLength": 1 },
                    "college_code": { "type": "string", "minLength": 1 },
                    "location": { "type": "string", "minLength": 1 },
                    "college_type": { "type": "string", "minLength": 1 },
                    "branch_name": { "type": "string", "minLength": 1 },
                    "degree_type": { "type": "string", "minLength": 1 },
                    "closing_percentile": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100
                    },
                    "medium_band_width": {
                        "type": "number",
                        "minimum": 0
                    }
                }
            }
        }
    }
}"##;

/// Error while validating or loading a rule document.
#[derive(Error, Debug)]
pub enum RuleDocumentError {
    /// The document did not conform to the schema.
    #[error("rule document validation failed:\n{}", format_violations(.0))]
    ValidationFailed(Vec<Violation>),

    /// The embedded schema itself failed to compile. Indicates a defect in
    /// this crate, not in the caller's document.
    #[error("rule document schema failed to compile: {0}")]
    ValidatorBuild(String),

    /// The document was not parseable as YAML/JSON at all.
    #[error("rule document parse error: {0}")]
    Parse(String),
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path to the schema keyword that rejected it.
    pub schema_path: String,
    /// Human-readable message.
    pub message: String,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - at {:?}: {}", v.instance_path, v.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_validator() -> Result<Validator, RuleDocumentError> {
    let schema: Value = serde_json::from_str(RULE_DOCUMENT_SCHEMA)
        .map_err(|e| RuleDocumentError::ValidatorBuild(e.to_string()))?;
    jsonschema::options()
        .build(&schema)
        .map_err(|e| RuleDocumentError::ValidatorBuild(e.to_string()))
}

/// Validate a parsed rule document against the embedded schema.
///
/// # Errors
///
/// Returns [`RuleDocumentError::ValidationFailed`] with one entry per
/// violation if the document is invalid.
pub fn validate_rule_document(instance: &Value) -> Result<(), RuleDocumentError> {
    let validator = build_validator()?;
    let violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RuleDocumentError::ValidationFailed(violations))
    }
}

/// Parse a YAML rule document into a JSON value, without validating it.
///
/// # Errors
///
/// Returns [`RuleDocumentError::Parse`] if the input is not valid YAML.
pub fn rule_document_from_yaml(input: &str) -> Result<Value, RuleDocumentError> {
    serde_yaml::from_str(input).map_err(|e| RuleDocumentError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_rule() -> Value {
        json!({
            "college_name": "Veermata Jijabai Technological Institute",
            "college_code": "VJTI",
            "location": "Mumbai",
            "college_type": "Government",
            "branch_name": "Computer Engineering",
            "degree_type": "BE",
            "closing_percentile": 95.2,
            "medium_band_width": 2.2
        })
    }

    #[test]
    fn test_valid_document_accepted() {
        let doc = json!({ "filter_band_width": 5.0, "rules": [valid_rule()] });
        validate_rule_document(&doc).unwrap();
    }

    #[test]
    fn test_filter_band_width_optional() {
        let doc = json!({ "rules": [valid_rule()] });
        validate_rule_document(&doc).unwrap();
    }

    #[test]
    fn test_empty_rule_list_rejected() {
        let doc = json!({ "rules": [] });
        assert!(validate_rule_document(&doc).is_err());
    }

    #[test]
    fn test_missing_threshold_rejected() {
        let mut rule = valid_rule();
        rule.as_object_mut().unwrap().remove("medium_band_width");
        let doc = json!({ "rules": [rule] });
        let err = validate_rule_document(&doc).unwrap_err();
        match err {
            RuleDocumentError::ValidationFailed(violations) => {
                assert!(!violations.is_empty());
            }
            other => panic!("expected ValidationFailed, got: {other}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut rule = valid_rule();
        rule.as_object_mut()
            .unwrap()
            .insert("medium_threshold".into(), json!(93.0));
        rule.as_object_mut().unwrap().remove("medium_band_width");
        let doc = json!({ "rules": [rule] });
        assert!(validate_rule_document(&doc).is_err());
    }

    #[test]
    fn test_out_of_scale_closing_percentile_rejected() {
        let mut rule = valid_rule();
        rule.as_object_mut()
            .unwrap()
            .insert("closing_percentile".into(), json!(120.0));
        let doc = json!({ "rules": [rule] });
        assert!(validate_rule_document(&doc).is_err());
    }

    #[test]
    fn test_yaml_document_parses_and_validates() {
        let yaml = r#"
filter_band_width: 5.0
rules:
  - college_name: Government College of Engineering Pune
    college_code: COEP
    location: Pune
    college_type: Government
    branch_name: Information Technology
    degree_type: BE
    closing_percentile: 94.8
    medium_band_width: 2.3
"#;
        let doc = rule_document_from_yaml(yaml).unwrap();
        validate_rule_document(&doc).unwrap();
    }

    #[test]
    fn test_yaml_garbage_rejected() {
        assert!(matches!(
            rule_document_from_yaml(": not yaml: ["),
            Err(RuleDocumentError::Parse(_))
        ));
    }
}

//! # Document Validation
//!
//! Runs [`RULES`] against a document and attaches the completeness score.
//!
//! Validation never fails. Text that does not parse produces an invalid result
//! with a single `Parse error: ...` entry and a score of 0, so callers handle
//! one result type whatever the input.

use std::fmt;

use faf_core::{ContextDocument, RawDocument};

use crate::parser::{parse, FafFile};
use crate::rules::{Severity, RULES};
use crate::score::calculate_score;

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when no error-severity rule fired.
    pub valid: bool,
    /// Error messages, in rule order.
    pub errors: Vec<String>,
    /// Warning messages, in rule order.
    pub warnings: Vec<String>,
    /// Completeness score, 0–100.
    pub score: u8,
}

impl ValidationResult {
    /// The result reported for input that could not be parsed.
    pub fn parse_failure(err: &dyn fmt::Display) -> Self {
        Self {
            valid: false,
            errors: vec![format!("Parse error: {err}")],
            warnings: Vec::new(),
            score: 0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// One-line summary, as returned by [`validate_quick`].
    pub fn summary(&self) -> String {
        if !self.valid {
            format!("Invalid: {}", self.errors.join("; "))
        } else if !self.warnings.is_empty() {
            let shown: Vec<&str> = self.warnings.iter().take(2).map(String::as_str).collect();
            format!("Valid with warnings: {}", shown.join("; "))
        } else {
            format!("Valid (score: {}%)", self.score)
        }
    }
}

/// Anything [`validate`] accepts.
#[derive(Debug, Clone, Copy)]
pub enum ValidationTarget<'a> {
    /// Unparsed context-file text.
    Text(&'a str),
    /// An already-parsed file; its raw mapping is checked.
    File(&'a FafFile),
    Raw(&'a RawDocument),
    /// A typed model, projected back to a raw mapping first.
    ///
    /// The projection writes the model's fallbacks (`faf_version`, a
    /// `project.name` of `"unknown"`) and renders a malformed `ai_score` as
    /// text, so the required-field and `ai_score` type checks never fire.
    /// This scores the model; validate the [`FafFile`] or [`RawDocument`]
    /// to check what a file actually declares.
    Model(&'a ContextDocument),
}

impl<'a> From<&'a str> for ValidationTarget<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ValidationTarget<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a FafFile> for ValidationTarget<'a> {
    fn from(file: &'a FafFile) -> Self {
        Self::File(file)
    }
}

impl<'a> From<&'a RawDocument> for ValidationTarget<'a> {
    fn from(raw: &'a RawDocument) -> Self {
        Self::Raw(raw)
    }
}

impl<'a> From<&'a ContextDocument> for ValidationTarget<'a> {
    fn from(doc: &'a ContextDocument) -> Self {
        Self::Model(doc)
    }
}

/// Validate text, a parsed file, a raw mapping, or a typed model.
pub fn validate<'a>(target: impl Into<ValidationTarget<'a>>) -> ValidationResult {
    match target.into() {
        ValidationTarget::Text(text) => match parse(text) {
            Ok(file) => validate_raw(&file.raw),
            Err(e) => ValidationResult::parse_failure(&e),
        },
        ValidationTarget::File(file) => validate_raw(&file.raw),
        ValidationTarget::Raw(raw) => validate_raw(raw),
        ValidationTarget::Model(doc) => match doc.to_raw() {
            Ok(raw) => validate_raw(&raw),
            Err(e) => ValidationResult::parse_failure(&e),
        },
    }
}

/// Validate a raw mapping against every rule.
pub fn validate_raw(raw: &RawDocument) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for rule in RULES {
        if let Some(message) = rule.check(raw) {
            match rule.severity {
                Severity::Error => errors.push(message.to_string()),
                Severity::Warning => warnings.push(message.to_string()),
            }
        }
    }
    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
        score: calculate_score(raw),
    }
}

/// Validate text and return validity plus a one-line summary.
pub fn validate_quick(content: &str) -> (bool, String) {
    let result = validate(content);
    (result.valid, result.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faf_core::ProjectInfo;

    const MINIMAL: &str = "faf_version: 2.5.0\nproject:\n  name: x\n";

    #[test]
    fn test_minimal_document_valid_with_warnings() {
        let result = validate(MINIMAL);
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert_eq!(result.score, 25);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("instant_context")));
        assert!(result.warnings.iter().any(|w| w.contains("stack")));
    }

    #[test]
    fn test_warnings_follow_rule_order() {
        let result = validate(MINIMAL);
        assert_eq!(
            result.warnings,
            vec![
                "Missing recommended section: instant_context",
                "Missing recommended section: stack",
                "Missing section: human_context (the 6 W's)",
                "Missing section: ai_instructions",
            ]
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let result = validate("stack:\n  backend: rust\n");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Missing required field: faf_version",
                "Missing required field: project",
            ]
        );
    }

    #[test]
    fn test_project_without_name() {
        let result = validate("faf_version: 2.5.0\nproject:\n  goal: ship\n");
        assert_eq!(result.errors, vec!["Missing required field: project.name"]);
    }

    #[test]
    fn test_tags_not_an_array() {
        let result = validate("faf_version: 2.5.0\nproject:\n  name: x\ntags: \"not an array\"\n");
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("array")));
    }

    #[test]
    fn test_out_of_range_score_only_warns() {
        let result = validate("faf_version: 2.5.0\nproject:\n  name: x\nai_score: \"150%\"\n");
        assert!(result.valid);
        assert!(result
            .warnings
            .contains(&"ai_score should be between 0 and 100".to_string()));
    }

    #[test]
    fn test_score_without_percent_warns() {
        let result = validate("faf_version: 2.5.0\nproject:\n  name: x\nai_score: \"85\"\n");
        assert!(result.valid);
        assert!(result
            .warnings
            .contains(&"ai_score should end with % (e.g., '85%')".to_string()));
    }

    #[test]
    fn test_non_scalar_score_is_error() {
        let result = validate("faf_version: 2.5.0\nproject:\n  name: x\nai_score:\n  value: 85\n");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["ai_score must be number or percentage string"]
        );
    }

    #[test]
    fn test_parse_failure_result() {
        let result = validate("- a\n- b\n");
        assert!(!result.valid);
        assert_eq!(result.score, 0);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Parse error: "));
        assert!(result.errors[0].contains("object"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_text_is_parse_failure() {
        let result = validate("");
        assert_eq!(result.errors, vec!["Parse error: content is empty"]);
    }

    #[test]
    fn test_all_targets_agree() {
        let file = parse(MINIMAL).unwrap();
        let from_text = validate(MINIMAL);
        assert_eq!(validate(&file), from_text);
        assert_eq!(validate(&file.raw), from_text);
        assert_eq!(validate(&file.data), from_text);
        assert_eq!(validate(&MINIMAL.to_string()), from_text);
    }

    #[test]
    fn test_model_target_reports_fallbacks_as_present() {
        let file = parse("project:\n  goal: g\n").unwrap();

        let declared = validate(&file);
        assert!(!declared.valid);
        assert_eq!(
            declared.errors,
            vec![
                "Missing required field: faf_version",
                "Missing required field: project.name",
            ]
        );

        let modeled = validate(&file.data);
        assert!(modeled.valid);
        assert!(modeled.errors.is_empty());
        assert!(modeled.score > declared.score);
    }

    #[test]
    fn test_model_target_hides_score_type_error() {
        let file = parse("faf_version: 2.5.0\nproject:\n  name: x\nai_score: true\n").unwrap();
        assert_eq!(
            validate(&file).errors,
            vec!["ai_score must be number or percentage string"]
        );
        assert!(validate(&file.data).errors.is_empty());
    }

    #[test]
    fn test_validate_model() {
        let doc = ContextDocument {
            project: ProjectInfo::named("typed"),
            ..ContextDocument::default()
        };
        let result = validate(&doc);
        assert!(result.valid);
        assert_eq!(result.score, 25);
    }

    #[test]
    fn test_quick_messages() {
        let (ok, msg) = validate_quick("project: x\n");
        assert!(!ok);
        assert_eq!(msg, "Invalid: Missing required field: faf_version");

        let (ok, msg) = validate_quick(MINIMAL);
        assert!(ok);
        assert_eq!(
            msg,
            "Valid with warnings: Missing recommended section: instant_context; Missing recommended section: stack"
        );

        let complete = "faf_version: 2.5.0\nproject:\n  name: x\ninstant_context:\n  what_building: a\n  tech_stack: b\nstack: {}\nhuman_context: {}\nai_instructions: {}\n";
        let (ok, msg) = validate_quick(complete);
        assert!(ok);
        assert_eq!(msg, "Valid (score: 65%)");
    }

    #[test]
    fn test_quick_joins_errors() {
        let (ok, msg) = validate_quick("tags: x\n");
        assert!(!ok);
        assert_eq!(
            msg,
            "Invalid: Missing required field: faf_version; Missing required field: project; tags must be an array"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};

    fn extra_entry() -> impl Strategy<Value = (String, Value)> {
        (
            "[a-z_]{1,12}".prop_filter("reserved", |k| k != "tags" && k != "ai_score"),
            prop_oneof![
                Just(Value::Null),
                "[a-z ]{0,8}".prop_map(Value::from),
                any::<i32>().prop_map(Value::from),
            ],
        )
    }

    proptest! {
        #[test]
        fn required_fields_present_is_valid(
            name in "[a-zA-Z][a-zA-Z0-9 _-]{0,16}",
            extras in prop::collection::vec(extra_entry(), 0..6),
        ) {
            let mut map: Mapping = extras
                .into_iter()
                .map(|(k, v)| (Value::from(k), v))
                .collect();
            map.insert(Value::from("faf_version"), Value::from("2.5.0"));
            let mut project = Mapping::new();
            project.insert(Value::from("name"), Value::from(name));
            map.insert(Value::from("project"), Value::Mapping(project));

            let result = validate(&RawDocument::from(map));
            prop_assert!(result.valid, "{:?}", result.errors);
            prop_assert!(result.score <= 100);
        }
    }
}

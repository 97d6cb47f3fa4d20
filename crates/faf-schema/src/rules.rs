//! # Validation Rules
//!
//! The checks run by [`validate`](crate::validate::validate), as a fixed-order
//! table. Each rule is a pure predicate over the raw mapping plus the message
//! reported when it fires. Output order follows table order.
//!
//! `ai_score` is checked in two phases. `ai_score.suffix` and `ai_score.type`
//! look at the written shape. `ai_score.percent` and `ai_score.range` judge
//! the coerced candidate, and they only ever warn.

use std::fmt;

use faf_core::{coerce_score, untagged, AiScore, RawDocument};
use serde_yaml::Value;

/// How a rule violation affects validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Makes the document invalid.
    Error,
    /// Reported, validity unaffected.
    Warning,
}

/// A single validation check.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable identifier, `<field>.<check>`.
    pub id: &'static str,
    pub severity: Severity,
    /// Exact text reported on violation.
    pub message: &'static str,
    violated: fn(&RawDocument) -> bool,
}

impl Rule {
    /// Whether `raw` breaks this rule.
    pub fn is_violated(&self, raw: &RawDocument) -> bool {
        (self.violated)(raw)
    }

    /// The rule's message if `raw` breaks it.
    pub fn check(&self, raw: &RawDocument) -> Option<&'static str> {
        self.is_violated(raw).then_some(self.message)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Look up a rule by id.
pub fn rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

/// All rules, in reporting order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "faf_version.required",
        severity: Severity::Error,
        message: "Missing required field: faf_version",
        violated: |raw| !raw.contains_key("faf_version"),
    },
    Rule {
        id: "project.required",
        severity: Severity::Error,
        message: "Missing required field: project",
        violated: |raw| !raw.contains_key("project"),
    },
    Rule {
        id: "project.name",
        severity: Severity::Error,
        message: "Missing required field: project.name",
        violated: |raw| raw.section("project").is_some_and(|p| !p.contains_key("name")),
    },
    Rule {
        id: "project.shape",
        severity: Severity::Error,
        message: "project must be object or string",
        violated: |raw| {
            raw.get("project")
                .map(untagged)
                .is_some_and(|v| !matches!(v, Value::Mapping(_) | Value::String(_)))
        },
    },
    Rule {
        id: "instant_context.recommended",
        severity: Severity::Warning,
        message: "Missing recommended section: instant_context",
        violated: |raw| !raw.contains_key("instant_context"),
    },
    Rule {
        id: "instant_context.what_building",
        severity: Severity::Warning,
        message: "Missing instant_context.what_building",
        violated: |raw| section_lacks(raw, "instant_context", "what_building"),
    },
    Rule {
        id: "instant_context.tech_stack",
        severity: Severity::Warning,
        message: "Missing instant_context.tech_stack",
        violated: |raw| section_lacks(raw, "instant_context", "tech_stack"),
    },
    Rule {
        id: "stack.recommended",
        severity: Severity::Warning,
        message: "Missing recommended section: stack",
        violated: |raw| !raw.contains_key("stack"),
    },
    Rule {
        id: "human_context.recommended",
        severity: Severity::Warning,
        message: "Missing section: human_context (the 6 W's)",
        violated: |raw| !raw.contains_key("human_context"),
    },
    Rule {
        id: "ai_instructions.recommended",
        severity: Severity::Warning,
        message: "Missing section: ai_instructions",
        violated: |raw| !raw.contains_key("ai_instructions"),
    },
    Rule {
        id: "tags.type",
        severity: Severity::Error,
        message: "tags must be an array",
        violated: |raw| {
            raw.get("tags")
                .map(untagged)
                .is_some_and(|v| !v.is_sequence())
        },
    },
    Rule {
        id: "ai_score.suffix",
        severity: Severity::Warning,
        message: "ai_score should end with % (e.g., '85%')",
        violated: |raw| score_text(raw).is_some_and(|s| !s.ends_with('%')),
    },
    Rule {
        id: "ai_score.type",
        severity: Severity::Error,
        message: "ai_score must be number or percentage string",
        violated: |raw| {
            raw.get("ai_score")
                .map(untagged)
                .is_some_and(|v| !matches!(v, Value::String(_) | Value::Number(_)))
        },
    },
    Rule {
        id: "ai_score.percent",
        severity: Severity::Warning,
        message: "ai_score percentage must be a whole number (e.g., '85%')",
        violated: |raw| {
            score_text(raw).is_some_and(|s| s.ends_with('%'))
                && matches!(
                    raw.get("ai_score").and_then(coerce_score),
                    Some(AiScore::Malformed(_))
                )
        },
    },
    Rule {
        id: "ai_score.range",
        severity: Severity::Warning,
        message: "ai_score should be between 0 and 100",
        violated: |raw| {
            matches!(
                raw.get("ai_score").and_then(coerce_score),
                Some(AiScore::Points(n)) if !(0..=100).contains(&n)
            )
        },
    },
];

fn section_lacks(raw: &RawDocument, section: &str, key: &str) -> bool {
    raw.section(section).is_some_and(|s| !s.contains_key(key))
}

fn score_text(raw: &RawDocument) -> Option<&str> {
    raw.get("ai_score").map(untagged).and_then(Value::as_str)
}

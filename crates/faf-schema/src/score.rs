//! # Completeness Score
//!
//! A 0–100 measure of how much context a document carries. The score is an
//! additive table over the raw mapping; the items sum to exactly
//! [`MAX_SCORE`], so a document with every item earned scores 100 and
//! adding a section never lowers the score.

use faf_core::{is_truthy, RawDocument};

/// Upper bound of the completeness score.
pub const MAX_SCORE: u8 = 100;

/// One scored feature of a document.
#[derive(Clone, Copy)]
pub struct ScoreItem {
    /// Dotted path of the feature, e.g. `instant_context.key_files`.
    pub id: &'static str,
    pub points: u8,
    earned: fn(&RawDocument) -> bool,
}

impl ScoreItem {
    /// Whether `raw` earns this item's points.
    pub fn is_earned(&self, raw: &RawDocument) -> bool {
        (self.earned)(raw)
    }
}

impl std::fmt::Debug for ScoreItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreItem")
            .field("id", &self.id)
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

pub const SCORE_TABLE: &[ScoreItem] = &[
    ScoreItem {
        id: "faf_version",
        points: 10,
        earned: |raw| raw.contains_key("faf_version"),
    },
    ScoreItem {
        id: "project",
        points: 10,
        earned: |raw| raw.contains_key("project"),
    },
    ScoreItem {
        id: "project.name",
        points: 5,
        earned: |raw| truthy_in(raw, "project", "name"),
    },
    ScoreItem {
        id: "project.goal",
        points: 5,
        earned: |raw| truthy_in(raw, "project", "goal"),
    },
    ScoreItem {
        id: "instant_context",
        points: 5,
        earned: |raw| raw.contains_key("instant_context"),
    },
    ScoreItem {
        id: "instant_context.what_building",
        points: 5,
        earned: |raw| truthy_in(raw, "instant_context", "what_building"),
    },
    ScoreItem {
        id: "instant_context.tech_stack",
        points: 5,
        earned: |raw| truthy_in(raw, "instant_context", "tech_stack"),
    },
    ScoreItem {
        id: "instant_context.key_files",
        points: 5,
        earned: |raw| truthy_in(raw, "instant_context", "key_files"),
    },
    ScoreItem {
        id: "stack",
        points: 10,
        earned: |raw| raw.contains_key("stack"),
    },
    ScoreItem {
        id: "stack.breadth",
        points: 5,
        earned: |raw| {
            raw.section("stack")
                .is_some_and(|s| s.values().filter(|v| is_truthy(v)).count() > 2)
        },
    },
    ScoreItem {
        id: "context_quality",
        points: 5,
        earned: |raw| raw.contains_key("context_quality"),
    },
    ScoreItem {
        id: "human_context",
        points: 10,
        earned: |raw| raw.contains_key("human_context"),
    },
    ScoreItem {
        id: "ai_instructions",
        points: 5,
        earned: |raw| raw.contains_key("ai_instructions"),
    },
    ScoreItem {
        id: "preferences",
        points: 5,
        earned: |raw| raw.contains_key("preferences"),
    },
    ScoreItem {
        id: "state",
        points: 5,
        earned: |raw| raw.contains_key("state"),
    },
    ScoreItem {
        id: "tags",
        points: 5,
        earned: |raw| {
            raw.get("tags")
                .map(faf_core::untagged)
                .and_then(|v| v.as_sequence())
                .is_some_and(|tags| !tags.is_empty())
        },
    },
];

/// Completeness score of `raw`, capped at [`MAX_SCORE`].
pub fn calculate_score(raw: &RawDocument) -> u8 {
    let total: u32 = SCORE_TABLE
        .iter()
        .filter(|item| item.is_earned(raw))
        .map(|item| u32::from(item.points))
        .sum();
    u8::try_from(total.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}

/// The items `raw` earns, in table order.
pub fn score_breakdown(raw: &RawDocument) -> Vec<(&'static str, u8)> {
    SCORE_TABLE
        .iter()
        .filter(|item| item.is_earned(raw))
        .map(|item| (item.id, item.points))
        .collect()
}

fn truthy_in(raw: &RawDocument, section: &str, key: &str) -> bool {
    raw.section(section)
        .and_then(|s| s.get(key))
        .is_some_and(is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> RawDocument {
        RawDocument::from_value(serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    const FULL: &str = r#"
faf_version: 2.5.0
project:
  name: demo
  goal: Ship the SDK
instant_context:
  what_building: Context parser
  tech_stack: Rust
  key_files: [src/lib.rs]
stack:
  backend: Rust
  database: none
  build_tool: cargo
context_quality:
  handoff_ready: true
human_context:
  who: developers
ai_instructions:
  working_style: terse
preferences:
  testing: required
state:
  phase: build
tags: [rust, yaml]
"#;

    #[test]
    fn test_table_sums_to_max() {
        let total: u32 = SCORE_TABLE.iter().map(|i| u32::from(i.points)).sum();
        assert_eq!(total, u32::from(MAX_SCORE));
    }

    #[test]
    fn test_full_document_scores_max() {
        assert_eq!(calculate_score(&raw(FULL)), 100);
        assert_eq!(score_breakdown(&raw(FULL)).len(), SCORE_TABLE.len());
    }

    #[test]
    fn test_minimal_document_scores_25() {
        let r = raw("faf_version: 2.5.0\nproject:\n  name: x\n");
        assert_eq!(calculate_score(&r), 25);
        assert_eq!(
            score_breakdown(&r),
            vec![("faf_version", 10), ("project", 10), ("project.name", 5)]
        );
    }

    #[test]
    fn test_bare_string_project_earns_no_name_points() {
        assert_eq!(calculate_score(&raw("faf_version: 2.5.0\nproject: x\n")), 20);
    }

    #[test]
    fn test_empty_document_scores_zero() {
        assert_eq!(calculate_score(&RawDocument::new()), 0);
    }

    #[test]
    fn test_falsy_values_earn_nothing() {
        let r = raw("project:\n  name: \"\"\n  goal: ~\ntags: []\n");
        assert_eq!(calculate_score(&r), 10);
    }

    #[test]
    fn test_stack_breadth_needs_three_truthy_keys() {
        let two = raw("stack:\n  backend: rust\n  frontend: htmx\n  database: \"\"\n");
        let three = raw("stack:\n  backend: rust\n  frontend: htmx\n  database: sqlite\n");
        assert_eq!(calculate_score(&two), 10);
        assert_eq!(calculate_score(&three), 15);
    }

    #[test]
    fn test_malformed_tags_earn_nothing() {
        assert_eq!(calculate_score(&raw("tags: \"not an array\"\n")), 0);
    }
}

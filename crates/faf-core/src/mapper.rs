//! # Schema Mapper — Raw Tree to Typed Model
//!
//! [`from_raw`] projects a [`RawDocument`] onto a [`ContextDocument`]. The
//! projection never fails. Each optional section has its own transformer that
//! returns `None` when the section is not a mapping, and each field inside a
//! section falls back to its default when its shape does not fit. A broken
//! `stack:` block therefore never hides a good `project:` block.
//!
//! ## Coercions
//!
//! - Text fields accept strings and numbers (`version: 1.0` becomes `"1.0"`).
//! - A bare-string `project` becomes `{ name: <string> }`.
//! - `ai_score` goes through [`coerce_score`]; coercion is separate from
//!   validation, which lives in the validator.
//! - String lists keep scalar items in order and drop nested structures.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::format::{DEFAULT_FAF_VERSION, UNKNOWN_PROJECT_NAME};
use crate::model::{
    AiInstructions, AiScore, ContextDocument, ContextQuality, HumanContext, InstantContext,
    Preferences, ProjectInfo, ProjectState, StackInfo,
};
use crate::raw::{kind_name, untagged as untag, RawDocument};

/// Build the typed model from a raw document.
pub fn from_raw(raw: &RawDocument) -> ContextDocument {
    let top = Fields(raw.as_mapping());

    ContextDocument {
        faf_version: top
            .text("faf_version")
            .unwrap_or_else(|| DEFAULT_FAF_VERSION.to_string()),
        project: project(raw.get("project")),
        ai_score: raw.get("ai_score").and_then(coerce_score),
        ai_confidence: top.text("ai_confidence"),
        ai_tldr: top.dict_opt("ai_tldr"),
        instant_context: raw.get("instant_context").and_then(instant_context),
        context_quality: raw.get("context_quality").and_then(context_quality),
        stack: raw.get("stack").and_then(stack),
        human_context: raw.get("human_context").and_then(human_context),
        ai_instructions: raw.get("ai_instructions").and_then(ai_instructions),
        preferences: raw.get("preferences").and_then(preferences),
        state: raw.get("state").and_then(state),
        tags: top.list("tags"),
    }
}

/// Coerce a raw `ai_score` value into a score candidate.
///
/// - integers (and integral floats) become `Points`;
/// - `"85%"` and `"85"` become `Points(85)`;
/// - null yields `None`;
/// - anything else is kept as `Malformed` text.
pub fn coerce_score(value: &Value) -> Option<AiScore> {
    let score = match untag(value) {
        Value::Null => return None,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                AiScore::Points(i)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        AiScore::Points(f as i64)
                    }
                    _ => AiScore::Malformed(n.to_string()),
                }
            }
        }
        Value::String(s) => {
            let digits = s.strip_suffix('%').unwrap_or(s);
            match digits.trim().parse::<i64>() {
                Ok(points) => AiScore::Points(points),
                Err(_) => AiScore::Malformed(s.clone()),
            }
        }
        other => AiScore::Malformed(render(other)),
    };
    Some(score)
}

// ---------------------------------------------------------------------------
// Section Transformers
// ---------------------------------------------------------------------------

fn project(value: Option<&Value>) -> ProjectInfo {
    let Some(value) = value else {
        return ProjectInfo::default();
    };
    if let Value::String(name) = untag(value) {
        return ProjectInfo::named(name.clone());
    }
    let Some(f) = Fields::of(value) else {
        return ProjectInfo::default();
    };
    ProjectInfo {
        name: f
            .text("name")
            .unwrap_or_else(|| UNKNOWN_PROJECT_NAME.to_string()),
        goal: f.text("goal"),
        main_language: f.text("main_language"),
        approach: f.text("approach"),
        version: f.text("version"),
        license: f.text("license"),
    }
}

fn instant_context(value: &Value) -> Option<InstantContext> {
    let f = Fields::of(value)?;
    Some(InstantContext {
        what_building: f.text("what_building"),
        tech_stack: f.text("tech_stack"),
        deployment: f.text("deployment"),
        key_files: f.list("key_files"),
        commands: f.dict("commands"),
    })
}

fn context_quality(value: &Value) -> Option<ContextQuality> {
    let f = Fields::of(value)?;
    Some(ContextQuality {
        slots_filled: f.text("slots_filled"),
        confidence: f.text("confidence"),
        handoff_ready: f.flag("handoff_ready"),
        missing_context: f.list("missing_context"),
    })
}

fn stack(value: &Value) -> Option<StackInfo> {
    let f = Fields::of(value)?;
    Some(StackInfo {
        frontend: f.text("frontend"),
        backend: f.text("backend"),
        database: f.text("database"),
        infrastructure: f.text("infrastructure"),
        build_tool: f.text("build_tool"),
        testing: f.text("testing"),
        cicd: f.text("cicd"),
    })
}

fn human_context(value: &Value) -> Option<HumanContext> {
    let f = Fields::of(value)?;
    Some(HumanContext {
        who: f.text("who"),
        what: f.text("what"),
        why: f.text("why"),
        how: f.text("how"),
        r#where: f.text("where"),
        when: f.text("when"),
    })
}

fn ai_instructions(value: &Value) -> Option<AiInstructions> {
    let f = Fields::of(value)?;
    Some(AiInstructions {
        working_style: f.text("working_style"),
        quality_bar: f.text("quality_bar"),
        warnings: f.list("warnings"),
        focus_areas: f.list("focus_areas"),
    })
}

fn preferences(value: &Value) -> Option<Preferences> {
    let f = Fields::of(value)?;
    Some(Preferences {
        quality_bar: f.text("quality_bar"),
        testing: f.text("testing"),
        documentation: f.text("documentation"),
        code_style: f.text("code_style"),
    })
}

fn state(value: &Value) -> Option<ProjectState> {
    let f = Fields::of(value)?;
    Some(ProjectState {
        phase: f.text("phase"),
        version: f.text("version"),
        focus: f.text("focus"),
        milestones: f.list("milestones"),
    })
}

// ---------------------------------------------------------------------------
// Field Access Helpers
// ---------------------------------------------------------------------------

/// Tolerant accessor over one mapping level.
struct Fields<'a>(&'a Mapping);

impl<'a> Fields<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        untag(value).as_mapping().map(Fields)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    fn flag(&self, key: &str) -> bool {
        self.0
            .get(key)
            .and_then(|v| untag(v).as_bool())
            .unwrap_or(false)
    }

    fn list(&self, key: &str) -> Vec<String> {
        match self.0.get(key).map(untag) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }

    fn dict(&self, key: &str) -> BTreeMap<String, String> {
        self.dict_opt(key).unwrap_or_default()
    }

    fn dict_opt(&self, key: &str) -> Option<BTreeMap<String, String>> {
        let map = self.0.get(key).map(untag)?.as_mapping()?;
        Some(
            map.iter()
                .filter_map(|(k, v)| Some((scalar_text(k)?, scalar_text(v)?)))
                .collect(),
        )
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn render(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(text) => text.trim_end().to_string(),
        Err(_) => kind_name(value).to_string(),
    }
}

//! # Typed Context Model
//!
//! The typed projection of a context file. Everything except
//! `faf_version` and `project` is optional, and collections default to empty.
//!
//! ```text
//! ContextDocument
//! ├── faf_version / project (ProjectInfo)
//! ├── ai_score (AiScore) / ai_confidence / ai_tldr
//! ├── instant_context (InstantContext)
//! ├── context_quality (ContextQuality)
//! ├── stack (StackInfo)
//! ├── human_context (HumanContext, the 6 W's)
//! ├── ai_instructions (AiInstructions)
//! ├── preferences (Preferences)
//! ├── state (ProjectState)
//! └── tags
//! ```
//!
//! Types serialize back to the snake_case keys of the file format; absent
//! options and empty collections are omitted.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::error::ParseError;
use crate::format::{DEFAULT_FAF_VERSION, UNKNOWN_PROJECT_NAME};
use crate::raw::{kind_name, RawDocument};

/// Core project metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl ProjectInfo {
    /// Project metadata carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goal: None,
            main_language: None,
            approach: None,
            version: None,
            license: None,
        }
    }
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self::named(UNKNOWN_PROJECT_NAME)
    }
}

/// Coerced `ai_score` candidate.
///
/// Coercion always succeeds; whether the candidate is acceptable is decided
/// by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiScore {
    /// An integer score, from `85` or `"85%"`. Not range-checked.
    Points(i64),
    /// Any other value, kept as text (e.g. `"high"`, `"abc%"`, `85.5`).
    Malformed(String),
}

impl AiScore {
    /// The integer score, if the candidate is well-formed.
    pub fn points(&self) -> Option<i64> {
        match self {
            Self::Points(n) => Some(*n),
            Self::Malformed(_) => None,
        }
    }
}

impl Serialize for AiScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Points(n) => serializer.serialize_str(&format!("{n}%")),
            Self::Malformed(text) => serializer.serialize_str(text),
        }
    }
}

/// Quick context for AI understanding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstantContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_files: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, String>,
}

/// Self-reported quality metrics of the context file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextQuality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots_filled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    pub handoff_ready: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_context: Vec<String>,
}

/// Technical stack breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cicd: Option<String>,
}

/// The 6 W's: human-readable context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HumanContext {
    /// Target users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who: Option<String>,
    /// Core problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what: Option<String>,
    /// Mission or purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    /// Approach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how: Option<String>,
    /// Deployment location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#where: Option<String>,
    /// Timeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

/// Instructions for AI assistants working on the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AiInstructions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_bar: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub focus_areas: Vec<String>,
}

/// Development preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_bar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_style: Option<String>,
}

/// Project state tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<String>,
}

/// Complete typed view of a context file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextDocument {
    pub faf_version: String,
    pub project: ProjectInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<AiScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_tldr: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant_context: Option<InstantContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_quality: Option<ContextQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<StackInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_context: Option<HumanContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_instructions: Option<AiInstructions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ProjectState>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Default for ContextDocument {
    fn default() -> Self {
        Self {
            faf_version: DEFAULT_FAF_VERSION.to_string(),
            project: ProjectInfo::default(),
            ai_score: None,
            ai_confidence: None,
            ai_tldr: None,
            instant_context: None,
            context_quality: None,
            stack: None,
            human_context: None,
            ai_instructions: None,
            preferences: None,
            state: None,
            tags: Vec::new(),
        }
    }
}

impl ContextDocument {
    /// The well-formed integer `ai_score`, if any.
    pub fn score_points(&self) -> Option<i64> {
        self.ai_score.as_ref().and_then(AiScore::points)
    }

    /// Project the typed model back into a raw tree.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Mapping` if serialization does not yield a mapping.
    pub fn to_raw(&self) -> Result<RawDocument, ParseError> {
        let value =
            serde_yaml::to_value(self).map_err(|e| ParseError::Mapping(e.to_string()))?;
        RawDocument::from_value(value).map_err(|other| {
            ParseError::Mapping(format!(
                "typed model serialized to {}, expected mapping",
                kind_name(&other)
            ))
        })
    }
}

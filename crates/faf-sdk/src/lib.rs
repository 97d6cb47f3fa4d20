//! # faf-sdk — Project Context Loading
//!
//! Single entry point for tools that want "everything about this project"
//! without wiring the lower crates together:
//!
//! ```no_run
//! use faf_sdk::ProjectContext;
//!
//! let ctx = ProjectContext::load(None)?;
//! println!("{} scored {}%", ctx.file.project_name(), ctx.validation.score);
//! for path in ctx.files_with_extensions(&["rs"]) {
//!     println!("{path}");
//! }
//! # Ok::<(), faf_sdk::SdkError>(())
//! ```
//!
//! The lower crates are re-exported whole for callers that need more than
//! the facade.
//!
//! ## Crate Policy
//!
//! - An invalid context file still loads; the verdict is in
//!   [`ProjectContext::validation`].
//! - No output formatting for any particular consumer.

use std::path::{Path, PathBuf};

pub use faf_core;
pub use faf_discovery;
pub use faf_schema;

use faf_core::FafError;
use faf_discovery::{load_ignore_rules, ConfigError, Discovery, IgnoreRuleSet};
use faf_schema::{parse_file, validate, FafFile, ValidationResult};

/// Errors from loading a project context.
#[derive(thiserror::Error, Debug)]
pub enum SdkError {
    /// No `project.faf` or `.faf` within the search depth.
    #[error("no context file found at or above {}", .start.display())]
    NoContextFile {
        /// Where the search started (`.` for the working directory).
        start: PathBuf,
    },

    /// The context file could not be read or parsed.
    #[error(transparent)]
    Faf(#[from] FafError),

    /// The project files could not be listed.
    #[error(transparent)]
    Listing(#[from] faf_core::FileAccessError),

    /// Discovery configuration from the environment was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything known about a project from its context file.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Path of the context file as located or given.
    pub context_path: PathBuf,
    pub file: FafFile,
    pub validation: ValidationResult,
    /// Nearest marked project root, or the context file's directory.
    pub root: PathBuf,
    pub ignore_rules: IgnoreRuleSet,
    /// Root-relative, `/`-separated, sorted.
    pub files: Vec<String>,
}

impl ProjectContext {
    /// Load the context for the project containing `start` (default: the
    /// working directory), configured from the environment.
    pub fn load(start: Option<&Path>) -> Result<Self, SdkError> {
        let discovery = Discovery::from_env()?;
        Self::load_with(&discovery, start)
    }

    /// Load with explicit discovery settings.
    pub fn load_with(discovery: &Discovery, start: Option<&Path>) -> Result<Self, SdkError> {
        let context_path =
            discovery
                .find_context_file(start)
                .ok_or_else(|| SdkError::NoContextFile {
                    start: start.map_or_else(|| PathBuf::from("."), Path::to_path_buf),
                })?;
        Self::from_context_file(discovery, context_path)
    }

    /// Load from a known context file path.
    pub fn from_context_file(
        discovery: &Discovery,
        context_path: impl Into<PathBuf>,
    ) -> Result<Self, SdkError> {
        let context_path = context_path.into();
        let file = parse_file(&context_path)?;
        let validation = validate(&file);

        let context_dir = context_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let root = discovery
            .find_project_root(Some(&context_dir))
            .unwrap_or(context_dir);

        let ignore_rules = load_ignore_rules(&root);
        let files = discovery.list_project_files(&root, Some(&ignore_rules.patterns[..]), &[])?;

        tracing::info!(
            project = %file.project_name(),
            context = %context_path.display(),
            root = %root.display(),
            valid = validation.valid,
            score = validation.score,
            files = files.len(),
            "loaded project context"
        );

        Ok(Self {
            context_path,
            file,
            validation,
            root,
            ignore_rules,
            files,
        })
    }

    /// Listed files whose extension is one of `extensions` (case and a
    /// leading dot ignored). An empty list returns every file.
    pub fn files_with_extensions(&self, extensions: &[&str]) -> Vec<&str> {
        let wanted: Vec<String> = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self.files
            .iter()
            .map(String::as_str)
            .filter(|f| {
                wanted.is_empty()
                    || Path::new(f)
                        .extension()
                        .map(|ext| ext.to_string_lossy().to_lowercase())
                        .is_some_and(|ext| wanted.contains(&ext))
            })
            .collect()
    }
}

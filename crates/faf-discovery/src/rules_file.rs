//! # `.fafignore` Loading
//!
//! One pattern per line; surrounding whitespace is trimmed and blank lines
//! and `#` comments are skipped. When the file is absent, unreadable, or has
//! no patterns, the built-in [`DEFAULT_IGNORE_PATTERNS`] apply instead.

use std::path::{Path, PathBuf};

use faf_core::{FileAccessError, IGNORE_FILE_NAME};

use crate::defaults::{DEFAULT_IGNORE_PATTERNS, DEFAULT_IGNORE_TEMPLATE};
use crate::ignore::IgnoreMatcher;

/// Where an [`IgnoreRuleSet`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOrigin {
    /// The built-in default list.
    Defaults,
    /// A `.fafignore` file.
    File(PathBuf),
}

/// Ignore patterns in effect for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRuleSet {
    pub patterns: Vec<String>,
    pub origin: RuleOrigin,
}

impl IgnoreRuleSet {
    /// The built-in default rules.
    pub fn defaults() -> Self {
        Self {
            patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            origin: RuleOrigin::Defaults,
        }
    }

    pub fn is_default(&self) -> bool {
        self.origin == RuleOrigin::Defaults
    }

    /// Compile the patterns for matching.
    pub fn matcher(&self) -> IgnoreMatcher {
        IgnoreMatcher::new(&self.patterns)
    }
}

/// Load the ignore rules for `root`, falling back to the defaults.
pub fn load_ignore_rules(root: impl AsRef<Path>) -> IgnoreRuleSet {
    let path = root.as_ref().join(IGNORE_FILE_NAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no ignore file, using default rules");
            return IgnoreRuleSet::defaults();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable ignore file, using default rules");
            return IgnoreRuleSet::defaults();
        }
    };

    let patterns = parse_ignore_lines(&content);
    if patterns.is_empty() {
        tracing::debug!(path = %path.display(), "ignore file has no patterns, using default rules");
        return IgnoreRuleSet::defaults();
    }

    IgnoreRuleSet {
        patterns,
        origin: RuleOrigin::File(path),
    }
}

/// Patterns from `.fafignore` text, in file order.
pub fn parse_ignore_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Write the starter `.fafignore` into `root`, replacing any existing one.
///
/// # Errors
///
/// Returns [`FileAccessError`] if the file cannot be written.
pub fn write_default_ignore_file(root: impl AsRef<Path>) -> Result<PathBuf, FileAccessError> {
    let path = root.as_ref().join(IGNORE_FILE_NAME);
    std::fs::write(&path, DEFAULT_IGNORE_TEMPLATE).map_err(|e| FileAccessError::from_io(&path, e))?;
    tracing::debug!(path = %path.display(), "wrote default ignore file");
    Ok(path)
}

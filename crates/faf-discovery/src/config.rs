//! Discovery configuration.
//!
//! Defaults suit interactive use. Override via environment variables or
//! explicit construction.

use std::path::{Path, PathBuf};

use faf_core::FileAccessError;

use crate::listing::walk_project_files;
use crate::locate;

/// Default number of directories checked by the upward searches.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Bounds for directory walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Directories checked by upward searches, start included.
    pub max_depth: usize,
    /// Whether listing descends into symlinked directories.
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
        }
    }
}

impl DiscoveryConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FAF_MAX_DEPTH` (default: 10)
    /// - `FAF_FOLLOW_LINKS` (default: false; accepts `true`/`false`,
    ///   `1`/`0`, `yes`/`no`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let max_depth = match lookup("FAF_MAX_DEPTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| invalid("FAF_MAX_DEPTH", &raw))?,
            None => defaults.max_depth,
        };
        let follow_links = match lookup("FAF_FOLLOW_LINKS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| invalid("FAF_FOLLOW_LINKS", &raw))?,
            None => defaults.follow_links,
        };
        Ok(Self {
            max_depth,
            follow_links,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var: var.to_string(),
        value: value.to_string(),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

/// Discovery operations bound to one [`DiscoveryConfig`].
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    config: DiscoveryConfig,
}

impl Discovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// A `Discovery` configured from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        DiscoveryConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// See [`locate::find_context_file`].
    pub fn find_context_file(&self, start: Option<&Path>) -> Option<PathBuf> {
        locate::find_context_file(start, self.config.max_depth)
    }

    /// See [`locate::find_project_root`].
    pub fn find_project_root(&self, start: Option<&Path>) -> Option<PathBuf> {
        locate::find_project_root(start, self.config.max_depth)
    }

    /// See [`list_project_files`](crate::listing::list_project_files).
    pub fn list_project_files<S: AsRef<str>>(
        &self,
        root: impl AsRef<Path>,
        patterns: Option<&[S]>,
        extensions: &[&str],
    ) -> Result<Vec<String>, FileAccessError> {
        walk_project_files(root.as_ref(), patterns, extensions, self.config.follow_links)
    }
}

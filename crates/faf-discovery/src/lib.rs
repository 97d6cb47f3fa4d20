//! # faf-discovery — Finding Context Files and Project Files
//!
//! Filesystem side of the FAF toolkit:
//!
//! - [`find_context_file`] walks up from a directory to the nearest
//!   `project.faf` (or legacy `.faf`).
//! - [`find_project_root`] walks up to the nearest directory holding a
//!   project marker such as `Cargo.toml` or `.git`.
//! - [`load_ignore_rules`] reads `.fafignore`, falling back to
//!   [`DEFAULT_IGNORE_PATTERNS`].
//! - [`list_project_files`] enumerates a project's files through an
//!   [`IgnoreMatcher`].
//!
//! [`Discovery`] bundles these behind a [`DiscoveryConfig`], which can be
//! read from the environment.
//!
//! ## Crate Policy
//!
//! - Depends only on `faf-core` internally; never parses context files.
//! - "Not found" is `None` for searches and an error for listings.
//! - All operations are synchronous and share no mutable state.

pub mod config;
pub mod defaults;
pub mod ignore;
pub mod listing;
pub mod locate;
pub mod rules_file;

pub use config::{ConfigError, Discovery, DiscoveryConfig, DEFAULT_MAX_DEPTH};
pub use defaults::{DEFAULT_IGNORE_PATTERNS, DEFAULT_IGNORE_TEMPLATE, PROJECT_MARKERS};
pub use ignore::{should_ignore, IgnoreMatcher};
pub use listing::list_project_files;
pub use locate::{find_context_file, find_project_root};
pub use rules_file::{
    load_ignore_rules, parse_ignore_lines, write_default_ignore_file, IgnoreRuleSet, RuleOrigin,
};

//! # Format Identity
//!
//! File names and identifiers that define the FAF format on disk.

/// Canonical context file name at a project root.
pub const CONTEXT_FILE_NAME: &str = "project.faf";

/// Legacy context file name, still discovered when `project.faf` is absent.
pub const LEGACY_CONTEXT_FILE_NAME: &str = ".faf";

/// Project-local ignore override file.
pub const IGNORE_FILE_NAME: &str = ".fafignore";

/// IANA media type of a context file. Informational; never enforced.
pub const MEDIA_TYPE: &str = "application/vnd.faf+yaml";

/// Version assumed when a document omits `faf_version`.
pub const DEFAULT_FAF_VERSION: &str = "2.5.0";

/// Project name assumed when a document omits `project.name`.
pub const UNKNOWN_PROJECT_NAME: &str = "unknown";

//! # Upward Search
//!
//! Both searches start at a directory (the working directory by default),
//! resolve it to an absolute path, and check it and then each parent in
//! turn. `max_depth` is the number of directories checked, start included;
//! the search also stops at the filesystem root.

use std::path::{Path, PathBuf};

use faf_core::{CONTEXT_FILE_NAME, LEGACY_CONTEXT_FILE_NAME};

use crate::defaults::PROJECT_MARKERS;

/// Find the nearest context file at or above `start`.
///
/// At each level `project.faf` is preferred over the legacy `.faf`. Only
/// regular files count.
pub fn find_context_file(start: Option<&Path>, max_depth: usize) -> Option<PathBuf> {
    let found = walk_up(start, max_depth, |dir| {
        [CONTEXT_FILE_NAME, LEGACY_CONTEXT_FILE_NAME]
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    });
    if let Some(path) = &found {
        tracing::debug!(path = %path.display(), "located context file");
    }
    found
}

/// Find the nearest directory at or above `start` holding a project marker.
///
/// See [`PROJECT_MARKERS`] for the markers. Markers may be files or
/// directories (`.git`).
pub fn find_project_root(start: Option<&Path>, max_depth: usize) -> Option<PathBuf> {
    let found = walk_up(start, max_depth, |dir| {
        PROJECT_MARKERS
            .iter()
            .any(|marker| dir.join(marker).exists())
            .then(|| dir.to_path_buf())
    });
    if let Some(root) = &found {
        tracing::debug!(root = %root.display(), "located project root");
    }
    found
}

fn walk_up<T>(
    start: Option<&Path>,
    max_depth: usize,
    mut probe: impl FnMut(&Path) -> Option<T>,
) -> Option<T> {
    let mut current = resolve_start(start)?;
    for _ in 0..max_depth {
        if let Some(hit) = probe(&current) {
            return Some(hit);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
    None
}

/// Absolute form of the start directory, canonical when it exists.
fn resolve_start(start: Option<&Path>) -> Option<PathBuf> {
    let base = match start {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    match std::fs::canonicalize(&base) {
        Ok(canonical) => Some(canonical),
        Err(_) if base.is_absolute() => Some(base),
        Err(_) => std::env::current_dir().ok().map(|cwd| cwd.join(base)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap()
    }

    #[test]
    fn test_finds_context_file_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("project.faf"), "faf_version: 2.5.0\n").unwrap();
        let found = find_context_file(Some(dir.path()), 10).unwrap();
        assert_eq!(found, canonical(dir.path()).join("project.faf"));
    }

    #[test]
    fn test_finds_context_file_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("project.faf"), "faf_version: 2.5.0\n").unwrap();
        let nested = dir.path().join("src").join("lib");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_context_file(Some(&nested), 10).unwrap();
        assert_eq!(found, canonical(dir.path()).join("project.faf"));
    }

    #[test]
    fn test_prefers_project_faf_over_legacy() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".faf"), "faf_version: 2.5.0\n").unwrap();
        std::fs::write(dir.path().join("project.faf"), "faf_version: 2.5.0\n").unwrap();
        let found = find_context_file(Some(dir.path()), 10).unwrap();
        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some("project.faf"));
    }

    #[test]
    fn test_finds_legacy_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".faf"), "faf_version: 2.5.0\n").unwrap();
        let found = find_context_file(Some(dir.path()), 10).unwrap();
        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some(".faf"));
    }

    #[test]
    fn test_directory_named_like_context_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("project.faf")).unwrap();
        std::fs::write(dir.path().join(".faf"), "faf_version: 2.5.0\n").unwrap();
        let found = find_context_file(Some(dir.path()), 10).unwrap();
        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some(".faf"));
    }

    #[test]
    fn test_max_depth_bounds_the_walk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("project.faf"), "faf_version: 2.5.0\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert!(find_context_file(Some(&nested), 2).is_none());
        assert!(find_context_file(Some(&nested), 3).is_some());
        assert!(find_context_file(Some(dir.path()), 0).is_none());
    }

    #[test]
    fn test_project_root_from_marker() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();
        let nested = dir.path().join("src");
        std::fs::create_dir(&nested).unwrap();

        let root = find_project_root(Some(&nested), 10).unwrap();
        assert_eq!(root, canonical(dir.path()));
    }

    #[test]
    fn test_project_root_from_git_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let root = find_project_root(Some(dir.path()), 10).unwrap();
        assert_eq!(root, canonical(dir.path()));
    }

    #[test]
    fn test_nearest_marker_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        let inner = dir.path().join("services").join("api");
        std::fs::create_dir_all(&inner).unwrap();
        std::fs::write(inner.join("go.mod"), "module api\n").unwrap();

        let root = find_project_root(Some(&inner.join("..").join("api")), 10).unwrap();
        assert_eq!(root, canonical(&inner));
    }
}

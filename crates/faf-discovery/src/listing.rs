//! # Project File Listing
//!
//! Recursive enumeration of a project's regular files, filtered by ignore
//! rules and optionally by extension.
//!
//! Paths are returned relative to the root, `/`-separated, sorted ascending.
//! Symlinks to files are listed. Symlinked directories are only entered when
//! `follow_links` is set. Directories matched by a directory pattern are
//! pruned from the walk; entries that cannot be read are skipped with a
//! warning.

use std::path::Path;

use faf_core::FileAccessError;
use walkdir::WalkDir;

use crate::ignore::IgnoreMatcher;
use crate::rules_file::load_ignore_rules;

/// List the files under `root`.
///
/// `patterns` replaces the project's `.fafignore` rules when given.
/// `extensions` keeps only files with one of the listed extensions; the
/// comparison ignores case and a leading dot, and an empty list keeps every
/// file.
///
/// # Errors
///
/// Returns [`FileAccessError::NotFound`] if `root` does not exist.
pub fn list_project_files<S: AsRef<str>>(
    root: impl AsRef<Path>,
    patterns: Option<&[S]>,
    extensions: &[&str],
) -> Result<Vec<String>, FileAccessError> {
    walk_project_files(root.as_ref(), patterns, extensions, false)
}

pub(crate) fn walk_project_files<S: AsRef<str>>(
    root: &Path,
    patterns: Option<&[S]>,
    extensions: &[&str],
    follow_links: bool,
) -> Result<Vec<String>, FileAccessError> {
    std::fs::metadata(root).map_err(|e| FileAccessError::from_io(root, e))?;

    let matcher = match patterns {
        Some(patterns) => IgnoreMatcher::new(patterns),
        None => load_ignore_rules(root).matcher(),
    };
    let wanted: Vec<String> = extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(follow_links)
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && relative_path(root, entry.path())
                    .is_some_and(|rel| matcher.ignores_directory(&rel)))
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        // Follows symlinks, so links to regular files are kept.
        if !entry.path().is_file() {
            continue;
        }
        let Some(rel) = relative_path(root, entry.path()) else {
            continue;
        };
        if matcher.is_ignored(&rel) {
            continue;
        }
        if !wanted.is_empty() && !has_extension(entry.path(), &wanted) {
            continue;
        }
        files.push(rel);
    }

    files.sort();
    Ok(files)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

fn has_extension(path: &Path, wanted: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| wanted.iter().any(|w| *w == ext))
}

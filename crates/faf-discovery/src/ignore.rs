//! # Ignore Matching
//!
//! Decides whether a project-relative path is excluded by `.fafignore`-style
//! patterns.
//!
//! ## Pattern Forms
//!
//! - **Directory patterns** end with `/` (`node_modules/`, `src/gen/`). With
//!   the trailing slashes stripped, a path matches when it equals the
//!   pattern, lies under it, or has a `/`-separated segment equal to it.
//! - **Everything else** is a shell glob (`*`, `?`, `[...]`, `[!...]`)
//!   checked against the full path and against its basename. `*` also
//!   matches `/`, so `src/*.rs` covers `src/a/b.rs`.
//!
//! Backslashes in paths are treated as `/`. A pattern that does not compile
//! as a glob is matched literally.

use std::collections::HashSet;

use glob::{MatchOptions, Pattern};

/// Compiled ignore patterns, for checking many paths against one rule set.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    /// Single-segment directory patterns.
    dir_names: HashSet<String>,
    /// Directory patterns containing `/`.
    dir_paths: Vec<String>,
    globs: Vec<Glob>,
}

#[derive(Debug, Clone)]
enum Glob {
    Pattern(Pattern),
    /// A pattern that failed to compile, compared as plain text.
    Literal(String),
}

impl Glob {
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.matches_with(text, GLOB_OPTIONS),
            Self::Literal(literal) => literal == text,
        }
    }
}

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

impl IgnoreMatcher {
    /// Compile `patterns`. Blank entries are skipped.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut matcher = Self::default();
        for pattern in patterns {
            matcher.add(pattern.as_ref());
        }
        matcher
    }

    fn add(&mut self, pattern: &str) {
        if pattern.is_empty() {
            return;
        }
        if pattern.ends_with('/') {
            let dir = pattern.trim_end_matches('/');
            if dir.contains('/') {
                self.dir_paths.push(dir.to_string());
            } else {
                self.dir_names.insert(dir.to_string());
            }
            return;
        }
        self.globs.push(compile_glob(pattern));
    }

    /// True when no patterns were compiled.
    pub fn is_empty(&self) -> bool {
        self.dir_names.is_empty() && self.dir_paths.is_empty() && self.globs.is_empty()
    }

    /// Whether `path` (relative to the project root) is ignored.
    pub fn is_ignored(&self, path: &str) -> bool {
        let path = normalize(path);
        if self.matches_directory_pattern(&path) {
            return true;
        }
        let basename = path.rsplit('/').next().unwrap_or(&path);
        self.globs
            .iter()
            .any(|glob| glob.matches(&path) || glob.matches(basename))
    }

    /// Whether a directory is excluded by a directory pattern.
    ///
    /// Every file below such a directory is also ignored by
    /// [`is_ignored`](Self::is_ignored), so a walk may skip it entirely.
    pub fn ignores_directory(&self, dir: &str) -> bool {
        self.matches_directory_pattern(&normalize(dir))
    }

    fn matches_directory_pattern(&self, path: &str) -> bool {
        if !self.dir_names.is_empty() {
            if self.dir_names.contains(path) {
                return true;
            }
            if path.split('/').any(|segment| self.dir_names.contains(segment)) {
                return true;
            }
        }
        self.dir_paths.iter().any(|dir| under_or_equal(path, dir))
    }
}

/// Check one path against a pattern list.
///
/// Compiles the patterns on every call; use [`IgnoreMatcher`] for repeated
/// checks.
pub fn should_ignore<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    IgnoreMatcher::new(patterns).is_ignored(path)
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

fn under_or_equal(path: &str, dir: &str) -> bool {
    path == dir
        || path
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn compile_glob(pattern: &str) -> Glob {
    match Pattern::new(&collapse_stars(pattern)) {
        Ok(compiled) => Glob::Pattern(compiled),
        Err(_) => Glob::Literal(pattern.to_string()),
    }
}

/// `**` only has meaning as a whole path component in `glob`; since `*`
/// already crosses `/` here, a run of stars is the same as one.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut prev_star = false;
    for ch in pattern.chars() {
        if ch == '*' && prev_star {
            continue;
        }
        prev_star = ch == '*';
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_IGNORE_PATTERNS;

    #[test]
    fn test_directory_pattern_prefix() {
        assert!(should_ignore("node_modules/x/y.js", &["node_modules/"]));
        assert!(should_ignore("node_modules", &["node_modules/"]));
    }

    #[test]
    fn test_directory_pattern_is_not_substring() {
        assert!(!should_ignore("src/node_modules_helper.js", &["node_modules/"]));
    }

    #[test]
    fn test_directory_pattern_matches_any_segment() {
        assert!(should_ignore("packages/web/node_modules/react/index.js", &["node_modules/"]));
    }

    #[test]
    fn test_multi_segment_directory_pattern() {
        let patterns = ["src/generated/"];
        assert!(should_ignore("src/generated/api.rs", &patterns));
        assert!(should_ignore("src/generated", &patterns));
        assert!(!should_ignore("src/generated_api.rs", &patterns));
        assert!(!should_ignore("lib/src/generated/api.rs", &patterns));
    }

    #[test]
    fn test_trailing_slashes_are_stripped() {
        assert!(should_ignore("build/out.o", &["build//"]));
    }

    #[test]
    fn test_glob_matches_basename() {
        assert!(should_ignore("a/b/c.pyc", &["*.pyc"]));
        assert!(should_ignore(".DS_Store", &[".DS_Store"]));
        assert!(should_ignore("deep/dir/.DS_Store", &[".DS_Store"]));
    }

    #[test]
    fn test_glob_star_crosses_separator() {
        assert!(should_ignore("src/a/b.rs", &["src/*.rs"]));
        assert!(!should_ignore("lib/a/b.rs", &["src/*.rs"]));
    }

    #[test]
    fn test_glob_classes_and_single_char() {
        assert!(should_ignore("file1.txt", &["file[0-9].txt"]));
        assert!(!should_ignore("filea.txt", &["file[0-9].txt"]));
        assert!(should_ignore("filea.txt", &["file[!0-9].txt"]));
        assert!(should_ignore("a.c", &["?.c"]));
        assert!(!should_ignore("ab.c", &["?.c"]));
    }

    #[test]
    fn test_invalid_glob_matches_literally() {
        assert!(should_ignore("weird[name", &["weird[name"]));
        assert!(!should_ignore("weirdname", &["weird[name"]));
    }

    #[test]
    fn test_star_runs_collapse() {
        assert!(should_ignore("a/x/y/b.txt", &["a/**/b.txt"]));
        assert!(should_ignore("notes.md", &["***.md"]));
    }

    #[test]
    fn test_backslashes_normalized() {
        assert!(should_ignore("node_modules\\pkg\\index.js", &["node_modules/"]));
        assert!(should_ignore("src\\gen\\a.rs", &["src/gen/"]));
    }

    #[test]
    fn test_empty_patterns_ignore_nothing() {
        let none: [&str; 0] = [];
        assert!(!should_ignore("anything.txt", &none));
        assert!(IgnoreMatcher::new(&none).is_empty());
        assert!(IgnoreMatcher::new(&[""]).is_empty());
    }

    #[test]
    fn test_default_patterns() {
        let matcher = IgnoreMatcher::new(DEFAULT_IGNORE_PATTERNS);
        assert!(matcher.is_ignored(".env"));
        assert!(matcher.is_ignored("config/.env.local"));
        assert!(matcher.is_ignored("dist/app.tar.gz"));
        assert!(matcher.is_ignored("logs/npm-debug.log.1"));
        assert!(matcher.is_ignored("main.rs~"));
        assert!(matcher.is_ignored("target/debug/app"));
        assert!(!matcher.is_ignored("src/main.rs"));
        assert!(!matcher.is_ignored("README.md"));
        assert!(!matcher.is_ignored("project.faf"));
    }

    #[test]
    fn test_ignores_directory_uses_directory_patterns_only() {
        let matcher = IgnoreMatcher::new(&["target/", "*.log"]);
        assert!(matcher.ignores_directory("target"));
        assert!(matcher.ignores_directory("crates/a/target"));
        assert!(!matcher.ignores_directory("app.log"));
        assert!(!matcher.ignores_directory("src"));
    }
}

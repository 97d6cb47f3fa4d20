//! # Document Parser
//!
//! Decodes context-file text into a [`FafFile`]: the raw mapping as written
//! plus its typed projection.
//!
//! ## Rejection Order
//!
//! 1. No content at all: [`ParseError::NullContent`].
//! 2. Whitespace only: [`ParseError::EmptyContent`].
//! 3. Only comments and document markers: [`ParseError::NullDocument`].
//! 4. Decoder failure: [`ParseError::Syntax`], with the decoder's location.
//! 5. A null root: [`ParseError::NullDocument`].
//! 6. Any other non-mapping root: [`ParseError::NotAnObject`].
//!
//! Decoding uses `serde_yaml` in its safe configuration; tags are kept as
//! data and never resolved to types. A leading byte-order mark is skipped,
//! merge keys (`<<: *anchor`) are resolved, and duplicate keys are a syntax
//! error.

use std::path::{Path, PathBuf};

use faf_core::{
    from_raw, kind_name, ContextDocument, FafError, FileAccessError, ParseError, RawDocument,
    DEFAULT_FAF_VERSION,
};
use serde_yaml::Value;

/// A parsed context file.
#[derive(Debug, Clone, PartialEq)]
pub struct FafFile {
    /// Typed projection of `raw`.
    pub data: ContextDocument,
    /// The mapping exactly as decoded.
    pub raw: RawDocument,
    /// Where the content came from, if known.
    pub path: Option<PathBuf>,
}

impl FafFile {
    /// Project name, `"unknown"` when absent.
    pub fn project_name(&self) -> &str {
        &self.data.project.name
    }

    /// Well-formed integer `ai_score`, if any.
    pub fn score(&self) -> Option<i64> {
        self.data.score_points()
    }

    /// Declared format version, with the default when absent.
    pub fn version(&self) -> &str {
        if self.data.faf_version.is_empty() {
            DEFAULT_FAF_VERSION
        } else {
            &self.data.faf_version
        }
    }

    /// Source path, if the content was read from disk or labeled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Walk nested keys in the raw mapping (`["project", "name"]`).
    pub fn get_field(&self, keys: &[&str]) -> Option<&Value> {
        self.raw.get_path(keys)
    }

    /// Serialize the raw mapping back to YAML.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        stringify(self)
    }
}

impl AsRef<RawDocument> for FafFile {
    fn as_ref(&self) -> &RawDocument {
        &self.raw
    }
}

/// Parse context-file text.
pub fn parse(content: &str) -> Result<FafFile, ParseError> {
    parse_content(Some(content), None)
}

/// Parse possibly-absent content, labeling errors with `source_label`.
///
/// The label also becomes the [`FafFile::path`] of the result.
///
/// # Errors
///
/// See the module docs for the rejection order.
pub fn parse_content(
    content: Option<&str>,
    source_label: Option<&str>,
) -> Result<FafFile, ParseError> {
    let content = content.ok_or(ParseError::NullContent)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Err(ParseError::EmptyContent);
    }
    if is_comment_only(content) {
        return Err(ParseError::NullDocument);
    }

    let mut value: Value =
        serde_yaml::from_str(content).map_err(|e| syntax_error(&e, source_label))?;
    value
        .apply_merge()
        .map_err(|e| syntax_error(&e, source_label))?;

    let raw = match value {
        Value::Mapping(map) => RawDocument::from(map),
        Value::Null => return Err(ParseError::NullDocument),
        other => {
            return Err(ParseError::NotAnObject {
                actual_type: kind_name(&other),
            })
        }
    };

    let data = from_raw(&raw);
    Ok(FafFile {
        data,
        raw,
        path: source_label.map(PathBuf::from),
    })
}

/// Read and parse a context file from disk.
///
/// # Errors
///
/// - [`FileAccessError::NotFound`] when nothing exists at `path`.
/// - [`FileAccessError::Io`] for other read failures, invalid UTF-8 included.
/// - [`ParseError`] for content failures, labeled with the path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<FafFile, FafError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "parsing context file");

    let content =
        std::fs::read_to_string(path).map_err(|e| FileAccessError::from_io(path, e))?;
    let label = path.display().to_string();
    let mut file = parse_content(Some(&content), Some(&label))?;
    file.path = Some(path.to_path_buf());
    Ok(file)
}

/// Serialize a raw document (or anything holding one) to YAML text.
///
/// Mapping insertion order and sequence order are preserved, so the output
/// parses back to an equal [`RawDocument`].
pub fn stringify(doc: impl AsRef<RawDocument>) -> Result<String, ParseError> {
    serde_yaml::to_string(doc.as_ref()).map_err(|e| ParseError::Mapping(e.to_string()))
}

/// Serialize the typed model, omitting absent sections.
pub fn stringify_model(doc: &ContextDocument) -> Result<String, ParseError> {
    stringify(doc.to_raw()?)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// True when every line is blank, a comment, a directive, or a document marker.
fn is_comment_only(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty()
            || line.starts_with('#')
            || line.starts_with('%')
            || line == "---"
            || line == "..."
    })
}

fn syntax_error(err: &serde_yaml::Error, source_label: Option<&str>) -> ParseError {
    let location = err.location();
    ParseError::Syntax {
        detail: err.to_string(),
        line: location.as_ref().map(|l| l.line()),
        column: location.as_ref().map(|l| l.column()),
        source_label: source_label.map(str::to_string),
    }
}

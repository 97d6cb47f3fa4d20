//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by the FAF crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Parse failures halt at the parse boundary and are always surfaced as a
//!   typed [`ParseError`]; they are never downgraded to a default document.
//! - File access failures ([`FileAccessError`]) are distinct from parse
//!   failures so callers can tell "no file" apart from "bad file".
//! - Validation does not use this hierarchy: it reports errors and warnings
//!   inside its result value.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for operations that read context files from disk.
#[derive(Error, Debug)]
pub enum FafError {
    /// The content could not be parsed as a FAF document.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The file could not be located or read.
    #[error(transparent)]
    FileAccess(#[from] FileAccessError),
}

/// Failure to turn text into a FAF document (or a document back into text).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No content was supplied at all.
    #[error("content is null or undefined")]
    NullContent,

    /// Content was supplied but is empty after trimming whitespace.
    #[error("content is empty")]
    EmptyContent,

    /// The YAML decoder rejected the content.
    #[error("invalid YAML syntax{}: {detail}", location_suffix(.source_label.as_deref()))]
    Syntax {
        /// Decoder message.
        detail: String,
        /// 1-based line of the failure, when the decoder reports one.
        line: Option<usize>,
        /// 1-based column of the failure, when the decoder reports one.
        column: Option<usize>,
        /// Caller-supplied label (usually the file path) for messages.
        source_label: Option<String>,
    },

    /// The content decoded to null: an all-comment file or an explicit `~`.
    #[error("YAML parsed to null - file may be empty or all comments")]
    NullDocument,

    /// The document root is not a mapping.
    #[error("FAF must be a YAML object (mapping), got {actual_type}; sequences and scalars are not valid FAF files")]
    NotAnObject {
        /// YAML kind of the root value (e.g. `sequence`, `string`).
        actual_type: &'static str,
    },

    /// The typed model could not be projected to or from the raw tree.
    #[error("failed to map FAF structure: {0}")]
    Mapping(String),
}

fn location_suffix(label: Option<&str>) -> String {
    match label {
        Some(label) => format!(" in {label}"),
        None => String::new(),
    }
}

/// Failure to reach a file on disk.
#[derive(Error, Debug)]
pub enum FileAccessError {
    /// Nothing exists at the path.
    #[error("FAF file not found: {}", .path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The path exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

impl FileAccessError {
    /// Classify an IO error for `path`, separating "not found" from other failures.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// The path the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}

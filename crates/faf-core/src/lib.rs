//! # faf-core — Foundational Types for FAF Context Documents
//!
//! FAF ("Foundational AI-context Format") is a YAML document, usually named
//! `project.faf`, that describes a project's goals, stack and conventions so
//! that AI tooling can pick up context quickly. This crate holds the pieces
//! every other crate in the workspace builds on.
//!
//! ## Two Views of One Document
//!
//! - [`RawDocument`] is the untyped YAML mapping exactly as decoded. It is the
//!   source of truth for validation and for any field the typed model does
//!   not capture.
//! - [`ContextDocument`] is the typed projection produced by
//!   [`mapper::from_raw`]. Projection is tolerant: a malformed optional
//!   section becomes `None` instead of failing the whole document.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `faf-*` crates (this is the leaf of the DAG).
//! - No filesystem access; parsing text and walking directories live in
//!   `faf-schema` and `faf-discovery`.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod format;
pub mod mapper;
pub mod model;
pub mod raw;

pub use error::{FafError, FileAccessError, ParseError};
pub use format::{
    CONTEXT_FILE_NAME, DEFAULT_FAF_VERSION, IGNORE_FILE_NAME, LEGACY_CONTEXT_FILE_NAME,
    MEDIA_TYPE, UNKNOWN_PROJECT_NAME,
};
pub use mapper::{coerce_score, from_raw};
pub use model::{
    AiInstructions, AiScore, ContextDocument, ContextQuality, HumanContext, InstantContext,
    Preferences, ProjectInfo, ProjectState, StackInfo,
};
pub use raw::{is_truthy, kind_name, untagged, RawDocument};

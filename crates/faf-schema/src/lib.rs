//! # faf-schema — Parsing, Validation & Scoring
//!
//! Turns context-file text into a [`FafFile`] and judges how usable the
//! result is.
//!
//! ## Parsing (`parser`)
//!
//! - [`parse`] / [`parse_content`] decode text into a raw mapping plus its
//!   typed projection. Anything that is not a YAML mapping is rejected.
//! - [`parse_file`] adds file access with a distinct "not found" error.
//! - [`stringify`] writes a raw document back out, keeping key order.
//!
//! ## Validation (`rules`, `score`, `validate`)
//!
//! Validation runs a fixed-order table of [`Rule`]s against the raw mapping
//! and sums a fixed [`SCORE_TABLE`] into a 0–100 completeness score. Errors
//! make a document invalid; warnings never do.
//!
//! ## Crate Policy
//!
//! - Depends only on `faf-core` internally.
//! - Validation never fails: problems are reported inside
//!   [`ValidationResult`], parse failures included.

pub mod parser;
pub mod rules;
pub mod score;
pub mod validate;

pub use parser::{parse, parse_content, parse_file, stringify, stringify_model, FafFile};
pub use rules::{Rule, Severity, RULES};
pub use score::{calculate_score, score_breakdown, ScoreItem, MAX_SCORE, SCORE_TABLE};
pub use validate::{validate, validate_quick, validate_raw, ValidationResult, ValidationTarget};

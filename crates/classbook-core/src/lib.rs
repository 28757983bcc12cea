//! Core domain types for classbook.
//!
//! Holds the validated field values of a student record, the error taxonomy
//! and the field limits configuration. Parsing raw command tokens into these
//! values lives in `classbook-parser`.

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod string_util;

pub use errors::{Error, ParseError, ParseErrorKind, ParseResult, Result};

//! Field parsers for classbook commands.
//!
//! Turns raw, untrusted argument tokens (already split out by the command
//! layer) into validated values from `classbook_core::model`. Every function
//! trims its input, checks the field's format rule and either returns the
//! value or a [`ParseError`] whose message can be shown to the user.

pub mod field_parser;

pub use classbook_core::{ParseError, ParseErrorKind, ParseResult};
pub use field_parser::{
    parse_attendance, parse_index, parse_name, parse_response, parse_stu_email, parse_tag,
    parse_tags, parse_telegram, FieldParser,
};

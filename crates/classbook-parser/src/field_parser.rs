use classbook_core::{
    config::{Config, FieldLimits},
    model::{Attendance, Index, Response, StuEmail, StuName, Tag, TagSet, Telegram},
    string_util::{is_non_zero_unsigned_integer, parse_unsigned, trim_input},
    ParseError, ParseErrorKind, ParseResult,
};

/// Converts raw command tokens into field values, honouring configured
/// numeric limits.
///
/// Single-value parsers take `impl Into<Option<&str>>`, so both a plain
/// `&str` and a tokenizer lookup result (`Option<&str>`) can be passed.
/// `None` means the caller never supplied the argument; that is a bug in the
/// calling layer and panics instead of returning a [`ParseError`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldParser {
    limits: FieldLimits,
}

impl FieldParser {
    pub fn new(limits: FieldLimits) -> classbook_core::Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    pub fn from_config(cfg: &Config) -> classbook_core::Result<Self> {
        Self::new(cfg.limits)
    }

    pub fn limits(&self) -> &FieldLimits {
        &self.limits
    }

    /// Parse a one-based list index (leading and trailing whitespace ignored).
    pub fn parse_index<'a>(&self, raw: impl Into<Option<&'a str>>) -> ParseResult<Index> {
        let raw = require(raw.into(), "index");
        let max = self.limits.max_index;
        let invalid = || reject(ParseErrorKind::InvalidIndex, Index::constraints_message(max));

        let raw = trim_input(raw);
        if !is_non_zero_unsigned_integer(raw) {
            return Err(invalid());
        }
        let value = parse_unsigned(raw).ok_or_else(invalid)?;
        if value > max {
            return Err(invalid());
        }
        Index::from_one_based(value as usize).map_err(logged)
    }

    pub fn parse_response<'a>(&self, raw: impl Into<Option<&'a str>>) -> ParseResult<Response> {
        let raw = require(raw.into(), "response");
        let range = self.limits.response;
        let invalid = || {
            reject(
                ParseErrorKind::InvalidResponse,
                Response::constraints_message(range),
            )
        };

        let value = parse_unsigned(trim_input(raw)).ok_or_else(invalid)?;
        if !range.contains(value) {
            return Err(invalid());
        }
        Response::new(value).map_err(logged)
    }

    pub fn parse_attendance<'a>(
        &self,
        raw: impl Into<Option<&'a str>>,
    ) -> ParseResult<Attendance> {
        let raw = require(raw.into(), "attendance");
        let range = self.limits.attendance;
        let invalid = || {
            reject(
                ParseErrorKind::InvalidAttendance,
                Attendance::constraints_message(range),
            )
        };

        let value = parse_unsigned(trim_input(raw)).ok_or_else(invalid)?;
        if !range.contains(value) {
            return Err(invalid());
        }
        Attendance::new(value).map_err(logged)
    }
}

/// Parse a one-based index using the default limits.
pub fn parse_index<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<Index> {
    FieldParser::default().parse_index(raw)
}

pub fn parse_name<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<StuName> {
    let raw = require(raw.into(), "name");
    StuName::new(trim_input(raw)).map_err(logged)
}

pub fn parse_telegram<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<Telegram> {
    let raw = require(raw.into(), "telegram");
    Telegram::new(trim_input(raw)).map_err(logged)
}

pub fn parse_stu_email<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<StuEmail> {
    let raw = require(raw.into(), "email");
    StuEmail::new(trim_input(raw)).map_err(logged)
}

pub fn parse_tag<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<Tag> {
    let raw = require(raw.into(), "tag");
    Tag::new(trim_input(raw)).map_err(logged)
}

/// Parse every tag, stopping at the first invalid one.
///
/// Duplicates collapse into one entry; iteration follows first appearance.
pub fn parse_tags<I, S>(raws: I) -> ParseResult<TagSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = TagSet::new();
    for raw in raws {
        tags.insert(parse_tag(raw.as_ref())?);
    }
    Ok(tags)
}

pub fn parse_response<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<Response> {
    FieldParser::default().parse_response(raw)
}

pub fn parse_attendance<'a>(raw: impl Into<Option<&'a str>>) -> ParseResult<Attendance> {
    FieldParser::default().parse_attendance(raw)
}

fn require<'a>(raw: Option<&'a str>, field: &str) -> &'a str {
    match raw {
        Some(raw) => raw,
        None => panic!("precondition violated: {field} input is required"),
    }
}

fn reject(kind: ParseErrorKind, message: String) -> ParseError {
    logged(ParseError::new(kind, message))
}

fn logged(err: ParseError) -> ParseError {
    tracing::debug!(field = err.kind().field(), "rejected field input");
    err
}

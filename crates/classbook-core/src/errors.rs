use std::fmt;

/// Core error type for classbook.
///
/// Consumer crates map their failures into this type so the application can
/// tell a user-facing validation message apart from setup problems.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which field rejected its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidIndex,
    InvalidName,
    InvalidTelegram,
    InvalidEmail,
    InvalidTag,
    InvalidResponse,
    InvalidAttendance,
}

impl ParseErrorKind {
    pub fn field(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidIndex => "index",
            ParseErrorKind::InvalidName => "name",
            ParseErrorKind::InvalidTelegram => "telegram",
            ParseErrorKind::InvalidEmail => "email",
            ParseErrorKind::InvalidTag => "tag",
            ParseErrorKind::InvalidResponse => "response",
            ParseErrorKind::InvalidAttendance => "attendance",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Recoverable validation failure for a single field.
///
/// The message is safe to show to the end user; it names the format the
/// field expects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

//! Validated field values for student records.
//!
//! Every type here is an immutable newtype. Construction is the only place a
//! value is checked, so holding one means the contents already passed the
//! field's format rule.

/// Shared surface of the string-backed field types.
///
/// The type must provide `is_valid(&str) -> bool` and `MESSAGE_CONSTRAINTS`.
macro_rules! string_field {
    ($ty:ident, $kind:expr) => {
        impl $ty {
            /// Wrap an already-trimmed value, rejecting it if the format rule fails.
            pub fn new(value: impl Into<String>) -> $crate::errors::ParseResult<Self> {
                let value = value.into();
                if !Self::is_valid(&value) {
                    return Err($crate::errors::ParseError::new(
                        $kind,
                        Self::MESSAGE_CONSTRAINTS,
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::errors::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new($crate::string_util::trim_input(s))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::errors::ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// Compile a fixed pattern once per process.
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("valid regex"))
    }};
}

pub mod index;
pub mod student;
pub mod tag;

pub use index::Index;
pub use student::{Attendance, Response, StuEmail, StuName, Telegram};
pub use tag::{Tag, TagSet};

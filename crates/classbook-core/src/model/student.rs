use serde::{Deserialize, Serialize};

use crate::{
    config::{ScoreRange, DEFAULT_ATTENDANCE_RANGE, DEFAULT_RESPONSE_RANGE},
    errors::{ParseError, ParseErrorKind, ParseResult},
    string_util::{parse_unsigned, trim_input},
};

// ============== Name ==============

/// A student's name: ASCII letters, digits and spaces, starting with a
/// letter or digit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StuName(String);

impl StuName {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        static_regex!(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").is_match(value)
    }
}

string_field!(StuName, ParseErrorKind::InvalidName);

// ============== Telegram ==============

/// Telegram handle including the leading `@`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Telegram(String);

impl Telegram {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Telegram handles should start with '@' followed by one or more letters, digits or underscores";

    pub fn is_valid(value: &str) -> bool {
        static_regex!(r"^@[A-Za-z0-9_]+$").is_match(value)
    }

    /// The handle without its `@` prefix.
    pub fn username(&self) -> &str {
        &self.0[1..]
    }
}

string_field!(Telegram, ParseErrorKind::InvalidTelegram);

// ============== Email ==============

/// Student email address in `local-part@domain` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StuEmail(String);

impl StuEmail {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special \
characters, and special characters may not appear next to each other.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain \
labels separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn is_valid(value: &str) -> bool {
        // local: alnum runs joined by one of + _ . -
        // domain: labels of alnum runs joined by single hyphens; the last label
        // repeats the label pattern at least twice, which forces 2+ characters.
        static_regex!(
            r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*){2,}$"
        )
        .is_match(value)
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or(&self.0)
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

string_field!(StuEmail, ParseErrorKind::InvalidEmail);

// ============== Numeric scores ==============

macro_rules! score_field {
    ($ty:ident, $kind:expr, $range:expr, $label:literal, $message:literal) => {
        impl $ty {
            pub const RANGE: ScoreRange = $range;
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            /// Message for a parser configured with a narrower range.
            pub fn constraints_message(range: ScoreRange) -> String {
                format!(
                    concat!($label, " must be an integer between {} and {}"),
                    range.min, range.max
                )
            }

            pub fn new(value: u32) -> ParseResult<Self> {
                if !Self::RANGE.contains(value) {
                    return Err(ParseError::new($kind, Self::MESSAGE_CONSTRAINTS));
                }
                Ok(Self(value))
            }

            /// `value` must be an unsigned decimal integer inside `RANGE`.
            pub fn is_valid(value: &str) -> bool {
                parse_unsigned(value).is_some_and(|v| Self::RANGE.contains(v))
            }

            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = parse_unsigned(trim_input(s))
                    .ok_or_else(|| ParseError::new($kind, Self::MESSAGE_CONSTRAINTS))?;
                Self::new(value)
            }
        }

        impl TryFrom<u32> for $ty {
            type Error = ParseError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for u32 {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// Score for a student's response, as a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Response(u32);

score_field!(
    Response,
    ParseErrorKind::InvalidResponse,
    DEFAULT_RESPONSE_RANGE,
    "Response",
    "Response must be an integer between 0 and 100"
);

/// Number of sessions a student attended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Attendance(u32);

score_field!(
    Attendance,
    ParseErrorKind::InvalidAttendance,
    DEFAULT_ATTENDANCE_RANGE,
    "Attendance",
    "Attendance must be an integer between 0 and 13"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation() {
        assert!(StuName::is_valid("Rachel Walker"));
        assert!(StuName::is_valid("peter the 2nd"));
        assert!(StuName::is_valid("12345"));
        assert!(StuName::is_valid("David Roger Jackson Ray Jr 2nd"));

        assert!(!StuName::is_valid(""));
        assert!(!StuName::is_valid(" "));
        assert!(!StuName::is_valid(" leading"));
        assert!(!StuName::is_valid("R@chel"));
        assert!(!StuName::is_valid("peter*"));
        assert!(!StuName::is_valid("Zoë"));
    }

    #[test]
    fn name_new_does_not_trim() {
        let err = StuName::new(" Rachel").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidName);
        assert_eq!(err.message(), StuName::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn name_from_str_trims() {
        let name: StuName = "  Rachel Walker \t".parse().unwrap();
        assert_eq!(name.as_str(), "Rachel Walker");
    }

    #[test]
    fn telegram_validation() {
        assert!(Telegram::is_valid("@hello"));
        assert!(Telegram::is_valid("@a"));
        assert!(Telegram::is_valid("@john_doe_99"));

        assert!(!Telegram::is_valid("hello"));
        assert!(!Telegram::is_valid("@"));
        assert!(!Telegram::is_valid("@@hello"));
        assert!(!Telegram::is_valid("@hello world"));
        assert!(!Telegram::is_valid("@hello-world"));
    }

    #[test]
    fn telegram_username_strips_at() {
        let handle = Telegram::new("@hello").unwrap();
        assert_eq!(handle.username(), "hello");
    }

    #[test]
    fn email_validation_accepts() {
        for ok in [
            "rachel@example.com",
            "PeterJack_1190@example.com",
            "a1+be.d@example1.com",
            "peter_jack@very-very-very-long-example.com",
            "if.you.dream.it_you.can.do.it@example.com",
            "e1234567@u.nus.edu",
            "a@bc",
            "test@localhost",
            "123@145",
        ] {
            assert!(StuEmail::is_valid(ok), "{ok} should be valid");
        }
    }

    #[test]
    fn email_validation_rejects() {
        for bad in [
            "",
            "example.com",
            "@example.com",
            "peterjack@",
            "peterjack@-",
            "peter jack@example.com",
            "peterjack@exam ple.com",
            "-peterjack@example.com",
            "peterjack-@example.com",
            "peter..jack@example.com",
            "peterjack@example_com",
            "peterjack@-example.com",
            "peterjack@example.com-",
            "peterjack@example.c",
            "peterjack@example.com.",
            "peter@jack@example.com",
            "peterjack@exam_ple.com",
        ] {
            assert!(!StuEmail::is_valid(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn email_parts() {
        let email = StuEmail::new("rachel@example.com").unwrap();
        assert_eq!(email.local_part(), "rachel");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn response_bounds() {
        assert_eq!(Response::new(0).unwrap().value(), 0);
        assert_eq!(Response::new(100).unwrap().value(), 100);
        let err = Response::new(101).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidResponse);
        assert_eq!(err.to_string(), "Response must be an integer between 0 and 100");
    }

    #[test]
    fn response_is_valid_requires_plain_digits() {
        assert!(Response::is_valid("81"));
        assert!(!Response::is_valid("rawr7"));
        assert!(!Response::is_valid("-1"));
        assert!(!Response::is_valid("+5"));
        assert!(!Response::is_valid("8 1"));
        assert!(!Response::is_valid("99999999999999999999"));
    }

    #[test]
    fn attendance_bounds() {
        assert_eq!("10".parse::<Attendance>().unwrap().value(), 10);
        assert_eq!(Attendance::new(13).unwrap().value(), 13);
        let err = Attendance::new(14).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidAttendance);
    }

    #[test]
    fn constraints_message_matches_default_constant() {
        assert_eq!(
            Response::constraints_message(Response::RANGE),
            Response::MESSAGE_CONSTRAINTS
        );
        assert_eq!(
            Attendance::constraints_message(Attendance::RANGE),
            Attendance::MESSAGE_CONSTRAINTS
        );
    }

    #[test]
    fn serde_goes_through_validation() {
        let name: StuName = serde_json::from_str(r#""Rachel Walker""#).unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""Rachel Walker""#);
        assert!(serde_json::from_str::<StuName>(r#""R@chel""#).is_err());

        let response: Response = serde_json::from_str("81").unwrap();
        assert_eq!(response.value(), 81);
        assert!(serde_json::from_str::<Response>("101").is_err());
        assert!(serde_json::from_str::<Attendance>("14").is_err());
        assert!(serde_json::from_str::<Telegram>(r#""hello""#).is_err());
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(StuName::new("Amy").unwrap(), StuName::new("Amy").unwrap());
        assert_ne!(StuName::new("Amy").unwrap(), StuName::new("amy").unwrap());
        assert_eq!(Response::new(5).unwrap(), Response::new(5).unwrap());
    }
}

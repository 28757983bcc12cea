use std::fmt;

use crate::{
    config::DEFAULT_MAX_INDEX,
    errors::{ParseError, ParseErrorKind, ParseResult},
};

/// Position in a displayed list.
///
/// Users see one-based numbers while lists are addressed zero-based, so the
/// type stores one form and converts on the way out. The one-based value is
/// always between 1 and `i32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: u32,
}

impl Index {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Index must be a positive integer no larger than 2147483647.";

    /// Message for a parser configured with a lower maximum.
    pub fn constraints_message(max: u32) -> String {
        format!("Index must be a positive integer no larger than {max}.")
    }

    pub fn from_one_based(one_based: usize) -> ParseResult<Self> {
        if one_based == 0 || one_based > DEFAULT_MAX_INDEX as usize {
            return Err(invalid_index());
        }
        Ok(Self {
            zero_based: (one_based - 1) as u32,
        })
    }

    pub fn from_zero_based(zero_based: usize) -> ParseResult<Self> {
        if zero_based >= DEFAULT_MAX_INDEX as usize {
            return Err(invalid_index());
        }
        Ok(Self {
            zero_based: zero_based as u32,
        })
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based as usize
    }

    pub fn one_based(&self) -> usize {
        self.zero_based as usize + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

fn invalid_index() -> ParseError {
    ParseError::new(ParseErrorKind::InvalidIndex, Index::MESSAGE_CONSTRAINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_and_zero_based_agree() {
        let a = Index::from_one_based(1).unwrap();
        let b = Index::from_zero_based(0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.zero_based(), 0);
        assert_eq!(a.one_based(), 1);
        assert_eq!(a.to_string(), "1");
    }

    #[test]
    fn zero_is_not_a_one_based_index() {
        let err = Index::from_one_based(0).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidIndex);
    }

    #[test]
    fn upper_bound_is_i32_max() {
        let max = i32::MAX as usize;
        assert_eq!(Index::from_one_based(max).unwrap().one_based(), max);
        assert!(Index::from_one_based(max + 1).is_err());
        assert_eq!(Index::from_zero_based(max - 1).unwrap().one_based(), max);
        assert!(Index::from_zero_based(max).is_err());
    }

    #[test]
    fn ordering_follows_position() {
        let first = Index::from_one_based(1).unwrap();
        let second = Index::from_one_based(2).unwrap();
        assert!(first < second);
    }

    #[test]
    fn constraints_message_names_the_maximum() {
        assert_eq!(
            Index::constraints_message(DEFAULT_MAX_INDEX),
            Index::MESSAGE_CONSTRAINTS
        );
    }
}

//! Small string helpers shared by the field types and command layer.

/// Parse a plain unsigned decimal (ASCII digits only, no sign or spaces).
///
/// Returns `None` for anything else, including values too large for `u32`.
pub fn parse_unsigned(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok()
}

/// `true` if `s` is an unsigned integer in `1..=i32::MAX`.
pub fn is_non_zero_unsigned_integer(s: &str) -> bool {
    parse_unsigned(s).is_some_and(|v| v > 0 && v <= i32::MAX as u32)
}

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Only code points up to U+0020 count, so a no-break space or other
/// Unicode separator stays part of the token and fails the field's format
/// rule instead of being silently dropped.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

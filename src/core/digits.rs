//! Digit-string helpers shared by the rules and checksum algorithms.
//!
//! Every helper fails closed: out-of-range positions yield `None` or
//! `false`, never a truncated slice or a panic.

/// True if `s` is non-empty and consists only of ASCII digits `0-9`.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True if `s` is exactly `len` bytes long.
pub fn has_exact_length(s: &str, len: usize) -> bool {
    s.len() == len
}

/// Extract `len` characters starting at 0-based `start`.
///
/// Returns `None` if the range does not lie entirely inside `s`.
pub fn slice(s: &str, start: usize, len: usize) -> Option<&str> {
    let end = start.checked_add(len)?;
    s.get(start..end)
}

/// Numeric value of the digit at 0-based `index`.
pub fn digit_at(s: &str, index: usize) -> Option<u32> {
    s.as_bytes()
        .get(index)
        .and_then(|&b| char::from(b).to_digit(10))
}

/// Parse a digit slice as an unsigned integer.
pub(crate) fn parse_number(s: &str) -> Option<u32> {
    if !is_all_digits(s) {
        return None;
    }
    s.bytes()
        .try_fold(0u32, |acc, b| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        assert!(is_all_digits("0123456789"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("ABCDEFG"));
        assert!(!is_all_digits("-0159623"));
        assert!(!is_all_digits("17100 34065"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_all_digits("١٢٣"));
    }

    #[test]
    fn exact_length() {
        assert!(has_exact_length("1710034065", 10));
        assert!(!has_exact_length("171003406", 10));
    }

    #[test]
    fn slice_in_bounds() {
        assert_eq!(slice("1710034065001", 10, 3), Some("001"));
        assert_eq!(slice("1710034065001", 0, 2), Some("17"));
        assert_eq!(slice("1710034065001", 13, 0), Some(""));
    }

    #[test]
    fn slice_fails_closed() {
        assert_eq!(slice("1710034065", 8, 3), None);
        assert_eq!(slice("1710034065", usize::MAX, 2), None);
    }

    #[test]
    fn digit_lookup() {
        assert_eq!(digit_at("1710034065", 2), Some(1));
        assert_eq!(digit_at("1710034065", 9), Some(5));
        assert_eq!(digit_at("1710034065", 10), None);
        assert_eq!(digit_at("17A", 2), None);
    }

    #[test]
    fn parse_prefix() {
        assert_eq!(parse_number("00"), Some(0));
        assert_eq!(parse_number("24"), Some(24));
        assert_eq!(parse_number("2a"), None);
        assert_eq!(parse_number(""), None);
    }
}

use crate::view::StringView;

/// Outcome of [`compare`].
///
/// Length is checked before content: strings of different lengths are never
/// reported as `Differ`, even when one is a prefix of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrDiff {
    Equal,
    FirstLonger,
    SecondLonger,
    /// Same length; holds `second[i] - first[i]` at the first index `i`
    /// where the (possibly folded) bytes differ. Never zero.
    Differ(i16),
}

impl StrDiff {
    /// Packs the outcome into one integer: `0` for equal, `300` when the
    /// first string is longer, `-300` when the second is longer, otherwise
    /// the byte difference. `300` is out of range for any byte difference.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            StrDiff::Equal => 0,
            StrDiff::FirstLonger => 300,
            StrDiff::SecondLonger => -300,
            StrDiff::Differ(diff) => i32::from(diff),
        }
    }

    #[must_use]
    pub fn is_equal(self) -> bool {
        self == StrDiff::Equal
    }
}

#[inline]
pub(crate) fn fold(byte: u8, case_sensitive: bool) -> u8 {
    if case_sensitive {
        byte
    } else {
        byte.to_ascii_lowercase()
    }
}

/// Byte equality of two same-length slices, optionally ASCII-case-folded.
#[inline]
pub(crate) fn bytes_match(a: &[u8], b: &[u8], case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

/// Compares two strings, first by length, then byte by byte.
///
/// With `case_sensitive == false`, ASCII letters compare equal regardless of
/// case and `Differ` carries the difference of the lowercased bytes.
pub fn compare<'a, 'b>(
    first: impl Into<StringView<'a>>,
    second: impl Into<StringView<'b>>,
    case_sensitive: bool,
) -> StrDiff {
    let first = first.into().as_bytes();
    let second = second.into().as_bytes();

    if first.len() > second.len() {
        return StrDiff::FirstLonger;
    }
    if first.len() < second.len() {
        return StrDiff::SecondLonger;
    }

    first
        .iter()
        .zip(second)
        .map(|(&a, &b)| (fold(a, case_sensitive), fold(b, case_sensitive)))
        .find(|(a, b)| a != b)
        .map_or(StrDiff::Equal, |(a, b)| {
            StrDiff::Differ(i16::from(b) - i16::from(a))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold(b'Q', false), b'q');
        assert_eq!(fold(b'Q', true), b'Q');
        assert_eq!(fold(0xC4, false), 0xC4);
    }

    #[test]
    fn test_bytes_match() {
        assert!(bytes_match(b"AbC", b"aBc", false));
        assert!(!bytes_match(b"AbC", b"aBc", true));
        assert!(bytes_match(b"", b"", true));
    }

    #[test]
    fn test_differ_sign() {
        // 'b' - 'a'
        assert_eq!(compare("a", "b", true), StrDiff::Differ(1));
        assert_eq!(compare("b", "a", true), StrDiff::Differ(-1));
        assert_eq!(compare(&[0u8], &[255u8], true).code(), 255);
    }
}

//! Multi-needle search over byte strings: first match, last match, and all
//! matches. Every scan is naive `O(haystack * total needle length)`.
//!
//! Needles are tried at each candidate position in array order, so when two
//! needles match at the same position the one with the lower index wins.
//! Empty needles never match.

use bufvec::{Vector, DEFAULT_CAPACITY};

use crate::compare::bytes_match;
use crate::error::{Error, Result};
use crate::view::StringView;

/// Where a needle matched and which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FindResult {
    /// Byte offset of the match start in the haystack.
    pub position: usize,
    /// Index of the matching needle in the needle array.
    pub needle_index: usize,
}

pub(crate) fn check_needles<N: AsRef<[u8]>>(needles: &[N]) -> Result<()> {
    if needles.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "needle set is empty",
        });
    }
    Ok(())
}

fn check_start(haystack: &[u8], start: usize) -> Result<()> {
    if start > haystack.len() {
        return Err(Error::InvalidArgument {
            reason: "search start is past the end of the haystack",
        });
    }
    Ok(())
}

/// The lowest needle index matching at `pos`, if any.
fn needle_at<N: AsRef<[u8]>>(
    haystack: &[u8],
    pos: usize,
    needles: &[N],
    case_sensitive: bool,
) -> Option<usize> {
    let rest = &haystack[pos..];
    needles.iter().position(|needle| {
        let needle = needle.as_ref();
        !needle.is_empty()
            && needle.len() <= rest.len()
            && bytes_match(&rest[..needle.len()], needle, case_sensitive)
    })
}

/// Finds the leftmost match of any needle.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `needles` is empty.
///
/// # Examples
///
/// ```
/// # use strview::{find, FindResult};
/// let found = find("abcabc", &["bc"], true).unwrap();
/// assert_eq!(found, Some(FindResult { position: 1, needle_index: 0 }));
/// ```
pub fn find<'a, N: AsRef<[u8]>>(
    haystack: impl Into<StringView<'a>>,
    needles: &[N],
    case_sensitive: bool,
) -> Result<Option<FindResult>> {
    find_from(haystack, 0, needles, case_sensitive)
}

/// Finds the leftmost match that starts at or after `start`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `needles` is empty or
/// `start > haystack.len()`.
pub fn find_from<'a, N: AsRef<[u8]>>(
    haystack: impl Into<StringView<'a>>,
    start: usize,
    needles: &[N],
    case_sensitive: bool,
) -> Result<Option<FindResult>> {
    let haystack = haystack.into().as_bytes();
    check_needles(needles)?;
    check_start(haystack, start)?;

    Ok((start..haystack.len()).find_map(|position| {
        needle_at(haystack, position, needles, case_sensitive).map(|needle_index| FindResult {
            position,
            needle_index,
        })
    }))
}

/// Finds the rightmost match of any needle, by start position.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `needles` is empty.
pub fn rfind<'a, N: AsRef<[u8]>>(
    haystack: impl Into<StringView<'a>>,
    needles: &[N],
    case_sensitive: bool,
) -> Result<Option<FindResult>> {
    let haystack = haystack.into();
    rfind_from(haystack, haystack.len(), needles, case_sensitive)
}

/// Finds the rightmost match that starts at or before `start`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `needles` is empty or
/// `start > haystack.len()`.
pub fn rfind_from<'a, N: AsRef<[u8]>>(
    haystack: impl Into<StringView<'a>>,
    start: usize,
    needles: &[N],
    case_sensitive: bool,
) -> Result<Option<FindResult>> {
    let haystack = haystack.into().as_bytes();
    check_needles(needles)?;
    check_start(haystack, start)?;

    if haystack.is_empty() {
        return Ok(None);
    }
    // `start == len` is accepted but no match can begin there
    let last = start.min(haystack.len() - 1);

    Ok((0..=last).rev().find_map(|position| {
        needle_at(haystack, position, needles, case_sensitive).map(|needle_index| FindResult {
            position,
            needle_index,
        })
    }))
}

/// Collects every match, left to right.
///
/// After a match at `p` the scan resumes at `p + 1`, so matches may overlap:
/// `"aa"` is found twice in `"aaa"`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `needles` is empty and
/// `Error::AllocationFailure` if the result vector cannot grow.
///
/// # Examples
///
/// ```
/// # use strview::find_all;
/// let matches = find_all("aXaXa", &["X"], true).unwrap();
/// let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
/// assert_eq!(positions, [1, 3]);
/// ```
pub fn find_all<'a, N: AsRef<[u8]>>(
    haystack: impl Into<StringView<'a>>,
    needles: &[N],
    case_sensitive: bool,
) -> Result<Vector<FindResult>> {
    let haystack = haystack.into();
    check_needles(needles)?;

    let mut matches = Vector::new(DEFAULT_CAPACITY)?;
    let mut offset = 0;
    while offset < haystack.len() {
        let suffix = haystack.substr(offset, None)?;
        let Some(found) = find(suffix, needles, case_sensitive)? else {
            break;
        };

        let position = offset + found.position;
        matches.push_back(FindResult {
            position,
            needle_index: found.needle_index,
        })?;
        offset = position + 1;
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needle_at_skips_empty_and_too_long() {
        let needles: [&[u8]; 3] = [b"", b"cde", b"c"];
        assert_eq!(needle_at(b"abcd", 2, &needles, true), Some(2));
        assert_eq!(needle_at(b"abcde", 2, &needles, true), Some(1));
        assert_eq!(needle_at(b"abcd", 0, &needles, true), None);
    }

    #[test]
    fn test_check_start() {
        assert!(check_start(b"abc", 3).is_ok());
        assert!(check_start(b"abc", 4).is_err());
        assert!(check_start(b"", 0).is_ok());
    }
}

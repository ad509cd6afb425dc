use bufvec::Vector;
use tracing::debug;

use crate::error::Result;
use crate::find::{check_needles, find_all};
use crate::view::StringView;

/// Splits `s` around every separator match.
///
/// Returns one more segment than accepted matches. A segment starts right
/// after the separator that ended the previous one, so adjacent separators
/// yield empty segments. All segments borrow from `s`.
///
/// A match that begins inside the previously accepted separator is skipped,
/// so `"aaa"` split on `"aa"` gives `["", "a"]`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `separators` is empty and
/// `Error::AllocationFailure` if a result vector cannot be allocated.
///
/// # Examples
///
/// ```
/// # use strview::separate;
/// let parts = separate("a,b,,c", &[","], true).unwrap();
/// assert_eq!(parts.as_slice(), ["a", "b", "", "c"]);
/// ```
pub fn separate<'a, N: AsRef<[u8]>>(
    s: impl Into<StringView<'a>>,
    separators: &[N],
    case_sensitive: bool,
) -> Result<Vector<StringView<'a>>> {
    let s = s.into();
    check_needles(separators)?;

    let matches = find_all(s, separators, case_sensitive)?;
    let mut segments = Vector::new(matches.len() + 1)?;
    let mut segment_start = 0;
    let mut skipped = 0usize;

    for found in &matches {
        if found.position < segment_start {
            skipped += 1;
            continue;
        }
        segments.push_back(s.substr(segment_start, Some(found.position))?)?;
        segment_start = found.position + separators[found.needle_index].as_ref().len();
    }
    segments.push_back(s.substr(segment_start, None)?)?;

    if skipped > 0 {
        debug!(skipped, "dropped separator matches overlapping an earlier one");
    }
    Ok(segments)
}

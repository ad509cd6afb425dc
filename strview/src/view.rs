use std::fmt;

use crate::error::{Error, Result};
use crate::string_buffer::StringBuffer;

/// A non-owning window `(data, len)` over bytes owned elsewhere.
///
/// The lifetime `'a` ties the view to its owner: while a view of a
/// [`StringBuffer`] is alive, the buffer cannot be mutated, reallocated or
/// dropped. The bytes are not NUL-terminated.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringView<'a> {
    data: &'a [u8],
}

impl<'a> StringView<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the view of bytes `[start, end)`. `end == None` means "to the
    /// end of this view". The result borrows the same data as `self`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `start > end` or if either bound
    /// is past the end of the view.
    pub fn substr(&self, start: usize, end: Option<usize>) -> Result<StringView<'a>> {
        let end = end.unwrap_or(self.data.len());
        if end > self.data.len() {
            return Err(Error::InvalidArgument {
                reason: "substring end is past the end of the view",
            });
        }
        if start > end {
            return Err(Error::InvalidArgument {
                reason: "substring start is past its end",
            });
        }
        Ok(Self::new(&self.data[start..end]))
    }

    /// Copies the viewed bytes into a new owned buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if the copy cannot be allocated.
    pub fn to_owned_buffer(&self) -> Result<StringBuffer> {
        StringBuffer::from_view(*self)
    }
}

impl<'a> From<&'a str> for StringView<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StringView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StringView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a StringBuffer> for StringView<'a> {
    fn from(buffer: &'a StringBuffer) -> Self {
        buffer.as_view()
    }
}

impl AsRef<[u8]> for StringView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl PartialEq<&str> for StringView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}

impl PartialEq<[u8]> for StringView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.data == other
    }
}

impl fmt::Debug for StringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.data))
    }
}

impl fmt::Display for StringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.data))
    }
}

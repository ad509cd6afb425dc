use std::ffi::CStr;
use std::fmt;

use bufvec::GrowthFactor;
use tracing::trace;

use crate::error::{alloc_failure, Error, Result};
use crate::view::StringView;

/// Growth applied when appending overflows the capacity.
pub const STRING_GROWTH: GrowthFactor = GrowthFactor::SEVEN_QUARTERS;

/// An owned, growable byte string kept NUL-terminated.
///
/// `len()` and `capacity()` both exclude the terminator, and
/// `capacity() >= len()` always holds.
pub struct StringBuffer {
    // Content followed by exactly one terminating 0
    data: Vec<u8>,
    capacity: usize,
}

fn allocate(capacity: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let with_nul = capacity.checked_add(1).ok_or(alloc_failure(capacity))?;
    data.try_reserve_exact(with_nul)
        .map_err(|_| alloc_failure(capacity))?;
    Ok(data)
}

impl StringBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: vec![0],
            capacity: 0,
        }
    }

    /// Creates a buffer holding a copy of `bytes`, with no spare capacity.
    /// An empty slice gives an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if the copy cannot be allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut data = allocate(bytes.len())?;
        data.extend_from_slice(bytes);
        data.push(0);
        trace!(len = bytes.len(), "string allocated");
        Ok(Self {
            data,
            capacity: bytes.len(),
        })
    }

    /// Creates a buffer from a C string, without its terminator.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if the copy cannot be allocated.
    pub fn from_c_str(c_str: &CStr) -> Result<Self> {
        Self::from_bytes(c_str.to_bytes())
    }

    /// Creates a buffer from the bytes before the first NUL in `bytes`, or
    /// from all of `bytes` if it contains no NUL.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if the copy cannot be allocated.
    pub fn from_nul_terminated(bytes: &[u8]) -> Result<Self> {
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Self::from_bytes(&bytes[..len])
    }

    /// Creates a buffer holding a copy of the viewed bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if the copy cannot be allocated.
    pub fn from_view(view: StringView<'_>) -> Result<Self> {
        Self::from_bytes(view.as_bytes())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// The content followed by its terminating NUL.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn as_view(&self) -> StringView<'_> {
        StringView::new(self.as_bytes())
    }

    /// Moves the content into storage for `new_capacity` bytes.
    fn expand(&mut self, new_capacity: usize) -> Result<()> {
        let with_nul = new_capacity
            .checked_add(1)
            .ok_or(alloc_failure(new_capacity))?;
        self.data
            .try_reserve_exact(with_nul - self.data.len())
            .map_err(|_| alloc_failure(new_capacity))?;
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "string reallocated"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Appends `appendee` to the end.
    ///
    /// If the combined length exceeds the capacity, the capacity first grows
    /// to `combined * 1.75`.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if growing failed; `self` is then
    /// unchanged.
    pub fn concat(&mut self, appendee: StringView<'_>) -> Result<()> {
        if appendee.is_empty() {
            return Ok(());
        }

        let needed = self
            .len()
            .checked_add(appendee.len())
            .ok_or(alloc_failure(usize::MAX))?;
        if needed > self.capacity {
            let new_capacity = STRING_GROWTH
                .scale(needed)
                .ok_or(alloc_failure(needed))?;
            self.expand(new_capacity)?;
        }

        self.data.pop();
        self.data.extend_from_slice(appendee.as_bytes());
        self.data.push(0);
        Ok(())
    }

    /// Replaces the content with a copy of `src`.
    ///
    /// Grows to exactly `src.len()` only when that exceeds the capacity.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if growing failed; `self` is then
    /// unchanged.
    pub fn copy_from(&mut self, src: StringView<'_>) -> Result<()> {
        if src.len() > self.capacity {
            self.expand(src.len())?;
        }

        self.data.clear();
        self.data.extend_from_slice(src.as_bytes());
        self.data.push(0);
        Ok(())
    }

    /// Ensures room for `capacity` bytes. Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `capacity < len()`.
    /// Returns `Error::AllocationFailure` if growing failed.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len() {
            return Err(Error::InvalidArgument {
                reason: "string capacity cannot be below its length",
            });
        }
        if capacity <= self.capacity {
            return Ok(());
        }
        self.expand(capacity)
    }

    /// Shrinks the capacity down to `len()`.
    ///
    /// # Errors
    ///
    /// Returns `Error::AllocationFailure` if the smaller block cannot be
    /// allocated; `self` is then unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity == self.len() {
            return Ok(());
        }

        let mut shrunk = allocate(self.len())?;
        shrunk.append(&mut self.data);
        trace!(
            old_capacity = self.capacity,
            new_capacity = shrunk.len() - 1,
            "string shrunk"
        );
        self.data = shrunk;
        self.capacity = self.len();
        Ok(())
    }

    /// ASCII-uppercases the content in place. Other bytes are unchanged.
    pub fn to_upper(&mut self) {
        let len = self.len();
        self.data[..len].make_ascii_uppercase();
    }

    /// ASCII-lowercases the content in place. Other bytes are unchanged.
    pub fn to_lower(&mut self) {
        let len = self.len();
        self.data[..len].make_ascii_lowercase();
    }

    /// Empties the string. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
        self.data.push(0);
    }
}

impl Default for StringBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for StringBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for StringBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StringBuffer {}

impl PartialEq<&str> for StringBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for StringBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<StringView<'_>> for StringBuffer {
    fn eq(&self, other: &StringView<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StringBuffer {{ data: {:?}, len: {:?}, capacity: {:?} }}",
            String::from_utf8_lossy(self.as_bytes()),
            self.len(),
            self.capacity
        )
    }
}

impl fmt::Display for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

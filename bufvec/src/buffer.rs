use core::mem::size_of;

use tracing::trace;

use crate::error::BufVecError;
use crate::iter::{BufferIter, BufferRevIter};

pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed-capacity, bounds-checked contiguous store.
///
/// The capacity only ever changes through an explicit [`Buffer::reserve`] or
/// [`Buffer::shrink_to_fit`]; inserting into a full buffer fails with
/// `BufVecError::CapacityExceeded`.
#[derive(Debug)]
pub struct Buffer<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    /// Creates an empty `Buffer` able to hold `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::InvalidArgument` if:
    /// - `capacity` is 0
    /// - `T` is a zero-sized type
    ///
    /// Returns `BufVecError::AllocationFailure` if the storage cannot be
    /// allocated.
    pub fn new(capacity: usize) -> Result<Self, BufVecError> {
        if capacity == 0 {
            return Err(BufVecError::InvalidArgument {
                reason: "capacity must be non-zero",
            });
        }
        if size_of::<T>() == 0 {
            return Err(BufVecError::InvalidArgument {
                reason: "element size must be non-zero",
            });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| BufVecError::alloc(capacity))?;
        trace!(capacity, element_size = size_of::<T>(), "buffer allocated");

        Ok(Self { data, capacity })
    }

    /// Creates a new `Buffer` with the default capacity (10).
    ///
    /// # Errors
    ///
    /// See [`Buffer::new`].
    pub fn with_default_capacity() -> Result<Self, BufVecError> {
        Self::new(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size in bytes of one element. Fixed for the lifetime of the buffer.
    #[must_use]
    pub fn element_size(&self) -> usize {
        size_of::<T>()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    fn check_bounds(&self, index: usize) -> Result<(), BufVecError> {
        if index >= self.data.len() {
            Err(BufVecError::OutOfBounds {
                index,
                length: self.data.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn at(&self, pos: usize) -> Result<&T, BufVecError> {
        self.check_bounds(pos)?;
        Ok(&self.data[pos])
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, BufVecError> {
        self.check_bounds(pos)?;
        Ok(&mut self.data[pos])
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Overwrites the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn set(&mut self, pos: usize, value: T) -> Result<(), BufVecError> {
        *self.at_mut(pos)? = value;
        Ok(())
    }

    /// Inserts `value` at `pos`, shifting the elements `[pos, len)` one slot
    /// to the right.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos > len()`.
    /// Returns `BufVecError::CapacityExceeded` if the buffer is full.
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<(), BufVecError> {
        if pos > self.data.len() {
            return Err(BufVecError::OutOfBounds {
                index: pos,
                length: self.data.len(),
            });
        }
        if self.is_full() {
            return Err(BufVecError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        // Storage was reserved for `capacity` elements, so this never reallocates
        self.data.insert(pos, value);
        Ok(())
    }

    /// Removes and returns the element at `pos`, shifting the elements after
    /// it one slot to the left. The relative order of the remaining elements
    /// is preserved.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, BufVecError> {
        self.check_bounds(pos)?;
        Ok(self.data.remove(pos))
    }

    /// Appends `value` after the last element.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::CapacityExceeded` if the buffer is full.
    pub fn push_back(&mut self, value: T) -> Result<(), BufVecError> {
        self.insert_at(self.data.len(), value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::EmptyContainer` if the buffer is empty.
    pub fn pop_back(&mut self) -> Result<T, BufVecError> {
        self.data.pop().ok_or(BufVecError::EmptyContainer)
    }

    /// Peeks at the last element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::EmptyContainer` if the buffer is empty.
    pub fn top(&self) -> Result<&T, BufVecError> {
        self.data.last().ok_or(BufVecError::EmptyContainer)
    }

    /// Grows the storage to hold `new_capacity` elements.
    ///
    /// Reserving the current capacity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::InvalidArgument` if `new_capacity` is below the
    /// current capacity; use [`Buffer::shrink_to_fit`] to shrink.
    /// Returns `BufVecError::AllocationFailure` if the allocator refuses, in
    /// which case the buffer is left unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), BufVecError> {
        if new_capacity < self.capacity {
            return Err(BufVecError::InvalidArgument {
                reason: "reserve cannot shrink the capacity",
            });
        }
        if new_capacity == self.capacity {
            return Ok(());
        }

        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| BufVecError::alloc(new_capacity))?;
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "buffer reallocated"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Shrinks the storage down to exactly `len()` elements.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::AllocationFailure` if the smaller block cannot
    /// be allocated, in which case the buffer is left unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<(), BufVecError> {
        if self.data.len() == self.capacity {
            return Ok(());
        }

        let mut shrunk = Vec::new();
        shrunk
            .try_reserve_exact(self.data.len())
            .map_err(|_| BufVecError::alloc(self.data.len()))?;
        shrunk.append(&mut self.data);
        trace!(
            old_capacity = self.capacity,
            new_capacity = shrunk.len(),
            "buffer shrunk"
        );
        self.capacity = shrunk.len();
        self.data = shrunk;
        Ok(())
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Releases the storage.
    pub fn destroy(self) {
        trace!(capacity = self.capacity, len = self.data.len(), "buffer released");
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the elements in insertion order.
    #[must_use]
    pub fn iter(&self) -> BufferIter<'_, T> {
        BufferIter::new(&self.data)
    }

    /// Returns an iterator from the last element to the first.
    #[must_use]
    pub fn iter_rev(&self) -> BufferRevIter<'_, T> {
        BufferRevIter::new(&self.data)
    }
}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Buffer<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_initialization() {
        let buffer = Buffer::<u32>::with_default_capacity().unwrap();

        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 10);
        assert_eq!(buffer.element_size(), 4);
        assert!(buffer.data.capacity() >= 10);
    }

    #[test]
    fn test_zero_sized_elements_rejected() {
        assert!(matches!(
            Buffer::<()>::new(4),
            Err(BufVecError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_insert_does_not_touch_storage_block() {
        let mut buffer = Buffer::new(4).unwrap();
        let before = buffer.data.as_ptr();

        for i in 0..4 {
            buffer.insert_at(0, i).unwrap();
        }

        assert_eq!(buffer.data.as_ptr(), before);
        assert_eq!(buffer.as_slice(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_shrink_to_fit_on_empty() {
        let mut buffer = Buffer::<u8>::new(8).unwrap();
        buffer.shrink_to_fit().unwrap();

        assert_eq!(buffer.capacity(), 0);
        assert_eq!(
            buffer.push_back(1),
            Err(BufVecError::CapacityExceeded { capacity: 0 })
        );

        buffer.reserve(1).unwrap();
        buffer.push_back(1).unwrap();
        assert_eq!(buffer.as_slice(), &[1]);
    }

    #[test]
    fn test_failed_operations_leave_state() {
        let mut buffer = Buffer::new(2).unwrap();
        buffer.push_back('a').unwrap();
        buffer.push_back('b').unwrap();

        assert!(buffer.insert_at(3, 'x').is_err());
        assert!(buffer.push_back('c').is_err());
        assert!(buffer.reserve(1).is_err());
        assert!(buffer.set(2, 'z').is_err());

        assert_eq!(buffer.as_slice(), &['a', 'b']);
        assert_eq!(buffer.capacity(), 2);
    }
}

use tracing::debug;

use crate::buffer::{Buffer, DEFAULT_CAPACITY};
use crate::error::BufVecError;
use crate::growth::GrowthFactor;
use crate::iter::{BufferIter, BufferRevIter};

/// A [`Buffer`] that grows its own capacity when an insert finds it full.
///
/// Growth multiplies the capacity by the vector's [`GrowthFactor`] (2.0 by
/// default). A failed growth leaves the vector exactly as it was.
#[derive(Debug)]
pub struct Vector<T> {
    buffer: Buffer<T>,
    growth: GrowthFactor,
}

impl<T> Vector<T> {
    /// Creates an empty `Vector` with room for `capacity` elements that
    /// doubles its capacity when full.
    ///
    /// # Errors
    ///
    /// See [`Buffer::new`].
    pub fn new(capacity: usize) -> Result<Self, BufVecError> {
        Self::with_growth(capacity, GrowthFactor::DOUBLE)
    }

    /// Creates an empty `Vector` with a custom growth policy.
    ///
    /// # Errors
    ///
    /// See [`Buffer::new`].
    pub fn with_growth(capacity: usize, growth: GrowthFactor) -> Result<Self, BufVecError> {
        Ok(Self {
            buffer: Buffer::new(capacity)?,
            growth,
        })
    }

    /// Creates a new `Vector` with the default capacity (10).
    ///
    /// # Errors
    ///
    /// See [`Buffer::new`].
    pub fn with_default_capacity() -> Result<Self, BufVecError> {
        Self::new(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        self.buffer.element_size()
    }

    #[must_use]
    pub fn growth(&self) -> GrowthFactor {
        self.growth
    }

    fn grow_if_full(&mut self) -> Result<(), BufVecError> {
        if !self.buffer.is_full() {
            return Ok(());
        }

        let new_capacity = self.growth.next_capacity(self.buffer.capacity())?;
        debug!(
            len = self.buffer.len(),
            capacity = self.buffer.capacity(),
            new_capacity,
            "vector full, growing"
        );
        self.buffer.reserve(new_capacity)
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn at(&self, pos: usize) -> Result<&T, BufVecError> {
        self.buffer.at(pos)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, BufVecError> {
        self.buffer.at_mut(pos)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Overwrites the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn set(&mut self, pos: usize, value: T) -> Result<(), BufVecError> {
        self.buffer.set(pos, value)
    }

    /// Inserts `value` at `pos`, growing the storage first if the vector is
    /// full.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos > len()`.
    /// Returns `BufVecError::AllocationFailure` if growing failed; the vector
    /// is then unchanged.
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<(), BufVecError> {
        // Reject bad positions before growing so that a failing call has no effect
        if pos > self.buffer.len() {
            return Err(BufVecError::OutOfBounds {
                index: pos,
                length: self.buffer.len(),
            });
        }
        self.grow_if_full()?;
        self.buffer.insert_at(pos, value)
    }

    /// Appends `value`, growing the storage first if the vector is full.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::AllocationFailure` if growing failed.
    pub fn push_back(&mut self, value: T) -> Result<(), BufVecError> {
        self.insert_at(self.buffer.len(), value)
    }

    /// Removes and returns the element at `pos`, preserving the order of the
    /// remaining elements.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::OutOfBounds` if `pos >= len()`.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, BufVecError> {
        self.buffer.remove_at(pos)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::EmptyContainer` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<T, BufVecError> {
        self.buffer.pop_back()
    }

    /// Peeks at the last element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::EmptyContainer` if the vector is empty.
    pub fn top(&self) -> Result<&T, BufVecError> {
        self.buffer.top()
    }

    /// Grows the storage to hold `new_capacity` elements.
    ///
    /// # Errors
    ///
    /// See [`Buffer::reserve`].
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), BufVecError> {
        self.buffer.reserve(new_capacity)
    }

    /// Shrinks the storage down to exactly `len()` elements.
    ///
    /// # Errors
    ///
    /// See [`Buffer::shrink_to_fit`].
    pub fn shrink_to_fit(&mut self) -> Result<(), BufVecError> {
        self.buffer.shrink_to_fit()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Releases the storage.
    pub fn destroy(self) {
        self.buffer.destroy();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    #[must_use]
    pub fn iter(&self) -> BufferIter<'_, T> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn iter_rev(&self) -> BufferRevIter<'_, T> {
        self.buffer.iter_rev()
    }

    /// Gives up the growth policy and returns the fixed-capacity storage.
    #[must_use]
    pub fn into_buffer(self) -> Buffer<T> {
        self.buffer
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a `Vector` holding a copy of `items`, sized to fit them
    /// (with a minimum capacity of one).
    ///
    /// # Errors
    ///
    /// Returns `BufVecError::InvalidArgument` if `T` is zero-sized.
    /// Returns `BufVecError::AllocationFailure` if the storage cannot be
    /// allocated.
    pub fn try_from_slice(items: &[T]) -> Result<Self, BufVecError> {
        let mut vector = Self::new(items.len().max(1))?;
        for item in items {
            vector.push_back(item.clone())?;
        }
        Ok(vector)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for Vector<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_from_one() {
        let mut vector = Vector::new(1).unwrap();

        vector.push_back(1u64).unwrap();
        assert_eq!(vector.capacity(), 1);

        vector.push_back(2).unwrap();
        assert_eq!(vector.capacity(), 2);

        vector.push_back(3).unwrap();
        assert_eq!(vector.capacity(), 4);

        assert_eq!(vector.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_custom_growth_factor() {
        let growth = GrowthFactor::new(3, 2).unwrap();
        let mut vector = Vector::with_growth(4, growth).unwrap();

        for i in 0..5 {
            vector.push_back(i).unwrap();
        }

        assert_eq!(vector.capacity(), 6);
        assert_eq!(vector.growth(), growth);
    }

    #[test]
    fn test_bad_position_does_not_grow() {
        let mut vector = Vector::new(2).unwrap();
        vector.push_back('a').unwrap();
        vector.push_back('b').unwrap();

        assert_eq!(
            vector.insert_at(5, 'x'),
            Err(BufVecError::OutOfBounds {
                index: 5,
                length: 2
            })
        );
        assert_eq!(vector.capacity(), 2);
    }

    #[test]
    fn test_grows_after_shrink_to_empty() {
        let mut vector = Vector::<i32>::new(16).unwrap();
        vector.shrink_to_fit().unwrap();
        assert_eq!(vector.capacity(), 0);

        vector.push_back(7).unwrap();
        assert_eq!(vector.capacity(), 1);
        assert_eq!(vector.top(), Ok(&7));
    }

    #[test]
    fn test_try_from_slice() {
        let vector = Vector::try_from_slice(&["x", "y"]).unwrap();
        assert_eq!(vector.as_slice(), &["x", "y"]);
        assert_eq!(vector.capacity(), 2);

        let empty = Vector::<u8>::try_from_slice(&[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 1);
    }
}

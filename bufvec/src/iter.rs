use crate::buffer::Buffer;
use crate::vector::Vector;

/// Iterator over the elements of a `Buffer` or `Vector`, in insertion order
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct BufferIter<'a, T> {
    elements: &'a [T],
    current: usize,
}

// No `T: Clone` bound
impl<T> Clone for BufferIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            current: self.current,
        }
    }
}

impl<'a, T> BufferIter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            current: 0,
        }
    }
}

impl<'a, T> Iterator for BufferIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.elements.get(self.current)?;
        self.current += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for BufferIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = BufferIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = BufferIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a `Buffer` or `Vector`, last to first
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct BufferRevIter<'a, T> {
    elements: &'a [T],
    remaining: usize,
}

impl<T> Clone for BufferRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> BufferRevIter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            remaining: elements.len(),
        }
    }
}

impl<'a, T> Iterator for BufferRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.elements.get(self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for BufferRevIter<'_, T> {}

use thiserror::Error;

/// Error types for `Buffer`, `Vector` and the string types built on them.
///
/// Every failing operation leaves its receiver exactly as it was before the
/// call, so all variants are recoverable.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BufVecError {
    /// A parameter was zero, out of its valid range, or otherwise unusable
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected parameter
        reason: &'static str,
    },
    /// Index is beyond the current element count
    #[error("Index out of bounds: index {index} is beyond length {length}")]
    OutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current element count
        length: usize,
    },
    /// A fixed-capacity `Buffer` is full and never grows by itself
    #[error("Capacity exceeded: buffer is full at {capacity} elements")]
    CapacityExceeded {
        /// Capacity of the buffer at the time of the call
        capacity: usize,
    },
    /// Pop attempted on a container without elements
    #[error("Operation on empty container")]
    EmptyContainer,
    /// The allocator could not provide the requested storage
    #[error("Allocation failure: could not reserve room for {requested} elements")]
    AllocationFailure {
        /// Capacity (in elements) that was being reserved
        requested: usize,
    },
}

impl BufVecError {
    pub(crate) fn alloc(requested: usize) -> Self {
        BufVecError::AllocationFailure { requested }
    }
}

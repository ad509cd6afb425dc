//! `bufvec`: bounds-checked contiguous containers with explicit capacity control.
//!
//! Two containers share one operation set:
//!
//! - [`Buffer<T>`]: a fixed-capacity store. Inserting into a full buffer fails
//!   with [`BufVecError::CapacityExceeded`]; capacity only changes through
//!   [`Buffer::reserve`] and [`Buffer::shrink_to_fit`].
//! - [`Vector<T>`]: a `Buffer` plus a [`GrowthFactor`]. When an insert finds it
//!   full, it reserves `capacity * factor` (at least `capacity + 1`) first.
//!
//! Every fallible operation returns `Result<_, BufVecError>` and leaves the
//! container unchanged when it fails. Allocation failures are reported as
//! [`BufVecError::AllocationFailure`] instead of aborting.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `pop_back()`, `at()`, `set()`: O(1)
//! - `insert_at()`, `remove_at()`: O(n) - elements after `pos` are shifted by one block move
//! - `Vector::push_back()`: amortized O(1)
//! - `reserve()`, `shrink_to_fit()`: O(n) when the block moves
//!
//! ## Space Complexity
//! - `capacity * size_of::<T>()` bytes of storage, exclusively owned
//! - Zero-sized element types are rejected
//!
//! # Fixed Capacity
//!
//! ```
//! # use bufvec::{Buffer, BufVecError};
//! let mut buffer = Buffer::new(2).unwrap();
//!
//! buffer.push_back(10).unwrap();
//! buffer.push_back(30).unwrap();
//! assert_eq!(
//!     buffer.push_back(40),
//!     Err(BufVecError::CapacityExceeded { capacity: 2 })
//! );
//!
//! // Make room explicitly, then retry
//! buffer.reserve(4).unwrap();
//! buffer.insert_at(1, 20).unwrap();
//! assert_eq!(buffer.as_slice(), &[10, 20, 30]);
//! ```
//!
//! # Automatic Growth
//!
//! ```
//! # use bufvec::Vector;
//! let mut vector = Vector::new(1).unwrap();
//!
//! for i in 0..100 {
//!     vector.push_back(i).unwrap();
//! }
//!
//! assert_eq!(vector.len(), 100);
//! assert_eq!(vector.capacity(), 128);
//! assert_eq!(vector.remove_at(0), Ok(0));
//! assert_eq!(vector.at(0), Ok(&1));
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use bufvec::{Vector, BufVecError};
//! let mut stack = Vector::with_default_capacity().unwrap();
//!
//! stack.push_back("first").unwrap();
//! stack.push_back("second").unwrap();
//!
//! assert_eq!(stack.top(), Ok(&"second"));
//! assert_eq!(stack.pop_back(), Ok("second"));
//! assert_eq!(stack.pop_back(), Ok("first"));
//! assert_eq!(stack.pop_back(), Err(BufVecError::EmptyContainer));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use bufvec::Vector;
//! let mut vector = Vector::new(4).unwrap();
//! vector.push_back('a').unwrap();
//! vector.push_back('b').unwrap();
//!
//! let forward: String = vector.iter().collect();
//! let backward: String = vector.iter_rev().collect();
//! assert_eq!(forward, "ab");
//! assert_eq!(backward, "ba");
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through `tracing` at `trace` level, and a
//! `Vector` deciding to grow is reported at `debug` level. Install any
//! `tracing` subscriber to see them.

mod buffer;
mod error;
mod growth;
mod iter;
mod vector;

// Re-export public types
pub use buffer::{Buffer, DEFAULT_CAPACITY};
pub use error::BufVecError;
pub use growth::GrowthFactor;
pub use iter::{BufferIter, BufferRevIter};
pub use vector::Vector;

//! `strview`: owned byte strings, borrowed views, and a multi-needle search engine.
//!
//! - [`StringBuffer`] owns a NUL-terminated, growable byte string.
//! - [`StringView`] is a `(data, len)` window over bytes owned elsewhere. It
//!   borrows its source, so a `StringBuffer` cannot change while a view of it
//!   is alive.
//! - [`find`], [`rfind`], [`find_all`] and [`separate`] search a haystack for
//!   any of several needles, optionally ignoring ASCII case.
//! - [`compare`] orders by length first and content second.
//!
//! Collections of results come back as [`bufvec::Vector`]s. Errors share the
//! [`bufvec::BufVecError`] taxonomy, re-exported here as [`Error`].
//!
//! # Building Strings
//!
//! ```
//! # use strview::{StringBuffer, StringView};
//! let mut s = StringBuffer::from_bytes(b"Hello").unwrap();
//! s.concat(StringView::from(", world")).unwrap();
//! assert_eq!(s, "Hello, world");
//! assert!(s.capacity() >= s.len());
//!
//! s.to_upper();
//! assert_eq!(s.to_string(), "HELLO, WORLD");
//! assert_eq!(s.as_bytes_with_nul().last(), Some(&0));
//! ```
//!
//! # Views
//!
//! ```
//! # use strview::{StringBuffer, StringView};
//! let s = StringBuffer::from_bytes(b"key=value").unwrap();
//! let view = s.as_view();
//! let value = view.substr(4, None).unwrap();
//! assert_eq!(value, "value");
//!
//! let owned = value.to_owned_buffer().unwrap();
//! drop(s);
//! assert_eq!(owned, "value");
//! ```
//!
//! # Searching
//!
//! ```
//! # use strview::{find, rfind, separate, FindResult};
//! let needles = ["bc", "ab"];
//! assert_eq!(
//!     find("xxabcabc", &needles, true).unwrap(),
//!     Some(FindResult { position: 2, needle_index: 1 })
//! );
//! assert_eq!(
//!     rfind("xxabcabc", &needles, true).unwrap(),
//!     Some(FindResult { position: 6, needle_index: 0 })
//! );
//! assert_eq!(find("ABC", &["bc"], false).unwrap().map(|m| m.position), Some(1));
//!
//! let fields = separate("a; b;c", &["; ", ";"], true).unwrap();
//! assert_eq!(fields.as_slice(), ["a", "b", "c"]);
//! ```
//!
//! # Comparing
//!
//! ```
//! # use strview::{compare, StrDiff};
//! assert_eq!(compare("ab", "abc", true), StrDiff::SecondLonger);
//! assert_eq!(compare("Hello", "hello", false), StrDiff::Equal);
//! assert_eq!(compare("Hello", "hello", true).code(), i32::from(b'h') - i32::from(b'H'));
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through `tracing` at `trace` level. Install a
//! subscriber to see them.

mod compare;
mod error;
mod find;
mod separate;
mod string_buffer;
mod view;

pub use compare::{compare, StrDiff};
pub use error::{Error, Result};
pub use find::{find, find_all, find_from, rfind, rfind_from, FindResult};
pub use separate::separate;
pub use string_buffer::{StringBuffer, STRING_GROWTH};
pub use view::StringView;

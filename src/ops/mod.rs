//! Free-function operation surface over [`crate::types::Sequence`].
//!
//! Every operation here takes the receiver sequence as an explicit first
//! argument, wrapped in `Option` to model a possibly-undefined receiver: a
//! `None` receiver fails with [`crate::SequenceError::UndefinedReceiver`]
//! before any element is processed. Callers that statically hold a sequence
//! can use the inherent methods on [`crate::types::Sequence`] directly and
//! skip the guard.
//!
//! Implemented operations:
//!
//! - [`map()`]: element mapping into a new sequence
//! - [`filter()`]: element selection by predicate
//! - [`reduce()`]: left fold with a mandatory initial accumulator
//! - [`sort()`] / [`sort_by()`]: in-place adjacent-exchange sort
//! - [`apply()`]: mutating element-wise map (in place)
//! - [`at()`]: bounded index access with negative indices
//! - [`concat()`]: shallow concatenation of sequences and scalars
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use sequence_ops::ops::{filter, map, reduce};
//! use sequence_ops::types::Sequence;
//!
//! # fn main() -> Result<(), sequence_ops::SequenceError> {
//! let seq = Sequence::new(vec![1, 2, 3, 4, 5]);
//!
//! // Keep even elements, double them, then sum.
//! let evens = filter(Some(&seq), |v| v % 2 == 0)?;
//! let doubled = map(Some(&evens), |v| v * 2)?;
//! let sum = reduce(Some(&doubled), 0, |acc, v| acc + v)?;
//! assert_eq!(sum, 12);
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod at;
pub mod concat;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod sort;

pub use apply::apply;
pub use at::at;
pub use concat::concat;
pub use filter::filter;
pub use map::map;
pub use reduce::reduce;
pub use sort::{ascending, descending, sort, sort_by};

//! `sequence-ops` is a small library of standalone sequence-manipulation
//! operations (map, filter, reduce/fold, in-place exchange sort, mutating
//! element-wise apply, bounded index access, shallow concatenation) over an
//! ordered, indexable [`types::Sequence`].
//!
//! Each operation is an independent, stateless transformation of a single
//! caller-owned sequence: no configuration, no I/O, no shared state across
//! calls. Non-mutating operations return a new sequence or a scalar; the
//! sort and apply operations reorder or rewrite the caller's sequence in
//! place and hand the same instance back by mutable reference.
//!
//! ## Two call surfaces
//!
//! - **Inherent methods** on [`types::Sequence`] for callers that statically
//!   hold a sequence.
//! - **Free functions** in [`ops`] that take the receiver as an explicit
//!   `Option<&Sequence<T>>` (or `Option<&mut Sequence<T>>`) and fail with
//!   [`SequenceError::UndefinedReceiver`] on a `None` receiver, before any
//!   element is processed. Nothing patches or extends any built-in type.
//!
//! ## Quick examples
//!
//! ```rust
//! use sequence_ops::ops::{at, concat, map, reduce, sort_by};
//! use sequence_ops::types::{ConcatPart, Sequence};
//!
//! # fn main() -> Result<(), sequence_ops::SequenceError> {
//! let seq = Sequence::new(vec![3, 1, 2]);
//!
//! let doubled = map(Some(&seq), |v| v * 2)?;
//! assert_eq!(doubled.elements, vec![6, 2, 4]);
//!
//! let sum = reduce(Some(&seq), 0, |acc, v| acc + v)?;
//! assert_eq!(sum, 6);
//!
//! let mut sortable = seq.clone();
//! sort_by(Some(&mut sortable), |a, b| a - b)?;
//! assert_eq!(sortable.elements, vec![1, 2, 3]);
//!
//! assert_eq!(at(Some(&sortable), -1)?, Some(&3));
//! assert_eq!(at(Some(&sortable), 5)?, None);
//!
//! let extended = concat(Some(&sortable), [ConcatPart::from(vec![4, 5])])?;
//! assert_eq!(extended.elements, vec![1, 2, 3, 4, 5]);
//! # Ok(())
//! # }
//! ```
//!
//! Method-style usage, without the receiver guard:
//!
//! ```rust
//! use sequence_ops::types::Sequence;
//!
//! let mut seq = Sequence::new(vec![5.0, f64::NAN, 1.0]);
//! // The default comparator ranks incomparable pairs (NaN) as equal.
//! seq.sort_elements();
//!
//! let seq = Sequence::new(vec!["a", "bb", "ccc"]);
//! let lengths = seq.map_elements(|s| s.len());
//! assert_eq!(lengths.elements, vec![1, 2, 3]);
//! ```
//!
//! ## Sort semantics
//!
//! The sort is an adjacent-exchange (bubble) sort: O(n²) comparisons, O(1)
//! extra space, in place, not guaranteed stable for equal-ranked elements.
//! Comparators return a signed signal (negative = first argument sorts
//! before the second, positive = the reverse, zero = equal rank); the
//! default comparator is ascending over `PartialOrd`, and
//! [`ops::descending`] is available for the reverse order. Non-mutating
//! variants ([`types::Sequence::to_sorted`],
//! [`types::Sequence::to_sorted_by`]) sort a clone instead.
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Sequence`] data model and inherent operations
//! - [`ops`]: the guarded free-function surface
//! - [`error`]: error types shared across operations

pub mod error;
pub mod ops;
pub mod types;

pub use error::{SequenceError, SequenceResult};
pub use types::{ConcatPart, Sequence};

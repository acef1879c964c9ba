//! In-place exchange sort for [`crate::types::Sequence`].
//!
//! The sort mutates the receiver and returns the same instance by mutable
//! reference, so callers observing the original binding see the reordering.
//! O(n²) adjacent-exchange (bubble) sort; ties are not guaranteed to keep
//! their relative order.

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

pub use crate::types::{ascending, descending};

/// Sort the receiver in place with an explicit comparator and return it.
///
/// Comparator contract: negative means the first argument sorts before the
/// second, positive means the second sorts before the first, zero means
/// equal rank. Convenience wrapper around [`Sequence::sort_elements_by`]
/// with the undefined-receiver guard.
pub fn sort_by<'a, T, F>(
    seq: Option<&'a mut Sequence<T>>,
    cmp: F,
) -> SequenceResult<&'a mut Sequence<T>>
where
    F: FnMut(&T, &T) -> i32,
{
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.sort_elements_by(cmp))
}

/// Sort the receiver in place in ascending order and return it.
///
/// Uses the [`ascending`] default comparator over `PartialOrd`; pass
/// [`descending`] to [`sort_by`] for the reverse order.
pub fn sort<'a, T>(seq: Option<&'a mut Sequence<T>>) -> SequenceResult<&'a mut Sequence<T>>
where
    T: PartialOrd,
{
    sort_by(seq, ascending())
}

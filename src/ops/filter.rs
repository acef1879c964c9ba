//! Element selection for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

/// Returns a new [`Sequence`] containing only the elements for which
/// `predicate` returns `true`, in their original relative order.
///
/// The receiver is never mutated. This is a convenience wrapper around
/// [`Sequence::filter_elements`] with the undefined-receiver guard.
pub fn filter<T, F>(seq: Option<&Sequence<T>>, predicate: F) -> SequenceResult<Sequence<T>>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.filter_elements(predicate))
}

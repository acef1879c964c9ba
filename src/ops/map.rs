//! Element mapping for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

/// Returns a new [`Sequence`] by applying `mapper` to every element.
///
/// The result has the same length and index order as the receiver; the
/// receiver is never mutated. This is a convenience wrapper around
/// [`Sequence::map_elements`] with the undefined-receiver guard.
pub fn map<T, U, F>(seq: Option<&Sequence<T>>, mapper: F) -> SequenceResult<Sequence<U>>
where
    F: FnMut(&T) -> U,
{
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.map_elements(mapper))
}

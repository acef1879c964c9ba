//! Bounded index access for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

/// Returns the element at `index`, or `None` when the index is out of range.
///
/// Indices in `-len..len` are valid; negative indices count from the end
/// (`-1` is the last element). Index `0` is the first element. Out-of-range
/// indices are not an error: they return the `None` sentinel. Convenience
/// wrapper around [`Sequence::element_at`] with the undefined-receiver
/// guard.
pub fn at<T>(seq: Option<&Sequence<T>>, index: i64) -> SequenceResult<Option<&T>> {
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.element_at(index))
}

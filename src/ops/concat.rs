//! Shallow concatenation for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::{ConcatPart, Sequence};

/// Returns a new [`Sequence`]: a shallow copy of the receiver followed by
/// each part in order.
///
/// Each [`ConcatPart::Seq`] part has its elements spliced in (flattened one
/// level); each [`ConcatPart::Scalar`] part is appended as a single element.
/// With no parts, this is a shallow copy of the receiver. Neither the
/// receiver nor any part is mutated. Convenience wrapper around
/// [`Sequence::concat_with`] with the undefined-receiver guard.
pub fn concat<T, I>(seq: Option<&Sequence<T>>, parts: I) -> SequenceResult<Sequence<T>>
where
    T: Clone,
    I: IntoIterator<Item = ConcatPart<T>>,
{
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.concat_with(parts))
}

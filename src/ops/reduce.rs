//! Left fold for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

/// Fold all elements into an accumulator, left to right, seeded with `init`.
///
/// The combining function is applied once per element in index order:
/// `folder(...folder(folder(init, &seq[0]), &seq[1])..., &seq[n-1])`. An
/// initial accumulator is mandatory; an empty receiver returns `init`
/// unchanged. The receiver is never mutated. Convenience wrapper around
/// [`Sequence::fold_elements`] with the undefined-receiver guard.
pub fn reduce<T, A, F>(seq: Option<&Sequence<T>>, init: A, folder: F) -> SequenceResult<A>
where
    F: FnMut(A, &T) -> A,
{
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.fold_elements(init, folder))
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::error::SequenceError;
    use crate::types::Sequence;

    #[test]
    fn reduce_sums_with_a_zero_seed() {
        let seq = Sequence::new(vec![1, 2, 3]);
        assert_eq!(reduce(Some(&seq), 0, |acc, v| acc + v), Ok(6));
    }

    #[test]
    fn reduce_folds_left_to_right() {
        // Subtraction is order-sensitive: ((10 - 1) - 2) - 3 = 4.
        let seq = Sequence::new(vec![1, 2, 3]);
        assert_eq!(reduce(Some(&seq), 10, |acc, v| acc - v), Ok(4));
    }

    #[test]
    fn reduce_can_change_the_accumulator_type() {
        let seq = Sequence::new(vec![1, 2, 3]);
        let joined = reduce(Some(&seq), String::new(), |mut acc, v| {
            acc.push_str(&v.to_string());
            acc
        })
        .unwrap();
        assert_eq!(joined, "123");
    }

    #[test]
    fn reduce_on_empty_sequence_returns_the_seed() {
        let seq: Sequence<i32> = Sequence::default();
        assert_eq!(reduce(Some(&seq), 42, |acc, v| acc + v), Ok(42));
    }

    #[test]
    fn reduce_errors_on_undefined_receiver() {
        let err = reduce::<i32, i32, _>(None, 0, |acc, v| acc + v).unwrap_err();
        assert_eq!(err, SequenceError::UndefinedReceiver);
    }
}

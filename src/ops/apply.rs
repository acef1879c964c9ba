//! Mutating element-wise map for [`crate::types::Sequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::Sequence;

/// Replace every element `i` of the receiver with `apply_fn(&seq[i])`, in
/// place, and return the same instance by mutable reference.
///
/// This is a mutating map-in-place, not a read-only traversal. Convenience
/// wrapper around [`Sequence::apply_elements`] with the undefined-receiver
/// guard.
pub fn apply<'a, T, F>(
    seq: Option<&'a mut Sequence<T>>,
    apply_fn: F,
) -> SequenceResult<&'a mut Sequence<T>>
where
    F: FnMut(&T) -> T,
{
    let seq = seq.ok_or(SequenceError::UndefinedReceiver)?;
    Ok(seq.apply_elements(apply_fn))
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::error::SequenceError;
    use crate::types::Sequence;

    #[test]
    fn apply_rewrites_every_element_in_place() {
        let mut seq = Sequence::new(vec![1, 2, 3]);
        apply(Some(&mut seq), |v| v + 100).unwrap();
        assert_eq!(seq.elements, vec![101, 102, 103]);
    }

    #[test]
    fn apply_preserves_length_and_index_order() {
        let mut seq = Sequence::new(vec!["a".to_string(), "b".to_string()]);
        apply(Some(&mut seq), |s| s.to_uppercase()).unwrap();
        assert_eq!(seq.elements, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn apply_on_empty_sequence_is_a_no_op() {
        let mut seq: Sequence<i32> = Sequence::default();
        apply(Some(&mut seq), |v| v * 2).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn apply_errors_on_undefined_receiver() {
        let err = apply::<i32, _>(None, |v| *v).unwrap_err();
        assert_eq!(err, SequenceError::UndefinedReceiver);
    }
}

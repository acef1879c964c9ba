//! Core data model types for sequence operations.
//!
//! The crate operates on an in-memory [`Sequence`], an ordered, indexable,
//! mutable collection of elements of a single type `T`. Operations borrow the
//! sequence for the duration of a call; the mutating ones (sort, apply) hand
//! the same instance back by mutable reference.

use std::cmp::Ordering;

/// Ordered, indexable, mutable collection of elements.
///
/// Non-mutating operations ([`map_elements`](Sequence::map_elements),
/// [`filter_elements`](Sequence::filter_elements),
/// [`fold_elements`](Sequence::fold_elements),
/// [`concat_with`](Sequence::concat_with)) return a new sequence or a scalar
/// and leave `self` untouched. Mutating operations
/// ([`sort_elements`](Sequence::sort_elements),
/// [`apply_elements`](Sequence::apply_elements)) reorder or rewrite elements
/// in place and return `&mut Self` so callers can observe the aliasing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    /// Element storage, in index order.
    pub elements: Vec<T>,
}

/// One argument to [`Sequence::concat_with`]: either a single element or a
/// whole sequence whose elements get spliced in (flattened one level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcatPart<T> {
    /// Appended as a single element.
    Scalar(T),
    /// Elements appended in order.
    Seq(Sequence<T>),
}

impl<T> From<T> for ConcatPart<T> {
    fn from(value: T) -> Self {
        ConcatPart::Scalar(value)
    }
}

impl<T> From<Vec<T>> for ConcatPart<T> {
    fn from(elements: Vec<T>) -> Self {
        ConcatPart::Seq(Sequence::new(elements))
    }
}

impl<T> From<Sequence<T>> for ConcatPart<T> {
    fn from(seq: Sequence<T>) -> Self {
        ConcatPart::Seq(seq)
    }
}

/// Comparator returning the conventional ascending ordering signal:
/// negative when `a` sorts before `b`, positive when `b` sorts before `a`,
/// zero for equal rank. Incomparable pairs (e.g. NaN) rank as equal.
pub fn ascending<T: PartialOrd>() -> impl FnMut(&T, &T) -> i32 {
    |a: &T, b: &T| match a.partial_cmp(b) {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        _ => 0,
    }
}

/// Comparator producing descending order; the mirror of [`ascending`].
pub fn descending<T: PartialOrd>() -> impl FnMut(&T, &T) -> i32 {
    |a: &T, b: &T| match a.partial_cmp(b) {
        Some(Ordering::Less) => 1,
        Some(Ordering::Greater) => -1,
        _ => 0,
    }
}

/// Adjacent-exchange (bubble) sort over a mutable slice.
///
/// Pass `i` bubbles the largest remaining element to position `len - 1 - i`;
/// each pass scans one fewer pair. Swaps whenever the comparator reports the
/// pair out of order (positive signal). O(n²) comparisons, O(1) extra space.
/// Ties are not guaranteed to keep their relative order.
fn exchange_sort<T, F>(elements: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> i32,
{
    let n = elements.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if cmp(&elements[j], &elements[j + 1]) > 0 {
                elements.swap(j, j + 1);
            }
        }
    }
}

impl<T> Sequence<T> {
    /// Create a sequence from its elements.
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Create a new sequence by applying `mapper` to every element.
    ///
    /// The result has the same length and index order as `self`; `self` is
    /// never mutated.
    pub fn map_elements<U, F>(&self, mapper: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence {
            elements: self.elements.iter().map(mapper).collect(),
        }
    }

    /// Create a new sequence containing only the elements that match
    /// `predicate`, in their original relative order.
    pub fn filter_elements<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|value| predicate(*value))
                .cloned()
                .collect(),
        }
    }

    /// Fold all elements into an accumulator value, left to right.
    ///
    /// This is similar to `Iterator::fold`; the initial accumulator is
    /// mandatory and is returned unchanged for an empty sequence.
    pub fn fold_elements<A, F>(&self, init: A, mut folder: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.elements.iter().fold(init, |acc, value| folder(acc, value))
    }

    /// Sort in place with an explicit comparator and return `&mut self`.
    ///
    /// Comparator contract: negative means the first argument sorts before
    /// the second, positive means the second sorts before the first, zero
    /// means equal rank. Adjacent-exchange sort; see module docs for the
    /// stability caveat.
    pub fn sort_elements_by<F>(&mut self, mut cmp: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> i32,
    {
        exchange_sort(&mut self.elements, &mut cmp);
        self
    }

    /// Sort in place in ascending order and return `&mut self`.
    ///
    /// Uses the [`ascending`] default comparator; incomparable pairs (NaN)
    /// rank as equal and stay where the exchange scan leaves them.
    pub fn sort_elements(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.sort_elements_by(ascending())
    }

    /// Like [`sort_elements_by`](Sequence::sort_elements_by), but sorts a
    /// clone and leaves `self` untouched.
    pub fn to_sorted_by<F>(&self, cmp: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> i32,
    {
        let mut out = self.clone();
        out.sort_elements_by(cmp);
        out
    }

    /// Like [`sort_elements`](Sequence::sort_elements), but sorts a clone
    /// and leaves `self` untouched.
    pub fn to_sorted(&self) -> Self
    where
        T: Clone + PartialOrd,
    {
        self.to_sorted_by(ascending())
    }

    /// Replace every element `i` with `apply(&self[i])`, in place, and
    /// return `&mut self`.
    ///
    /// This is a mutating map-in-place, not a read-only traversal.
    pub fn apply_elements<F>(&mut self, mut apply: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        for value in &mut self.elements {
            *value = apply(&*value);
        }
        self
    }

    /// Bounded element access with negative-index support.
    ///
    /// Indices in `-len..len` are valid; negative indices count from the end
    /// (`-1` is the last element, index `0` the first). Anything outside
    /// that range returns `None`.
    pub fn element_at(&self, index: i64) -> Option<&T> {
        let len = self.elements.len() as i64;
        let offset = if index < 0 { index + len } else { index };
        if offset < 0 || offset >= len {
            return None;
        }
        self.elements.get(offset as usize)
    }

    /// Shallow concatenation: a copy of `self` followed by each part.
    ///
    /// Sequence parts are spliced in (flattened one level); scalar parts are
    /// appended as single elements. With no parts this is a shallow copy.
    /// Neither `self` nor any part sequence is mutated.
    pub fn concat_with<I>(&self, parts: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = ConcatPart<T>>,
    {
        let mut elements = self.elements.clone();
        for part in parts {
            match part {
                ConcatPart::Scalar(value) => elements.push(value),
                ConcatPart::Seq(seq) => elements.extend(seq.elements),
            }
        }
        Self { elements }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

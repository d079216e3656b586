//! Capability trait for containers that support direct sub-range extraction.

use std::ops::Range;

/// A container whose contiguous sub-ranges can be extracted directly, without
/// consuming or copying the elements that precede them.
///
/// Implementing this trait is what makes a container eligible for the slicing
/// paths ([`Slices`](crate::Slices), [`EvenSlices`](crate::EvenSlices)); it
/// replaces a runtime "is this type sliceable?" check with a compile-time
/// bound. Sources that only support forward consumption go through the
/// iterator paths ([`Chunks`](crate::Chunks), [`EvenChunks`](crate::EvenChunks))
/// instead.
///
/// # Requirements
///
/// [`slice`](Indexable::slice) must be O(1) setup: producing the sub-range
/// for `a..b` must not pay for the `a` skipped elements. [`len`](Indexable::len)
/// must be cheap and must not consume the container.
///
/// # Recognized kinds
///
/// Implementations are provided for flat sequences (`[T]`, `Vec<T>`,
/// `[T; N]`, which covers byte and numeric buffers) and for integer ranges
/// (`Range<usize>` and friends), which act as lazy numeric sequences and are
/// chunked without being materialized.
///
/// Tabular containers should implement the trait with *positional* row
/// semantics: `slice(a..b)` is rows `a..b` in storage order, never a lookup
/// by label or key. Mapping-like containers (`HashMap`, `BTreeMap`) are
/// deliberately not implementable in a meaningful way here, since indexing
/// into them is by key rather than by position.
pub trait Indexable {
    /// The sub-range type produced by [`slice`](Indexable::slice).
    ///
    /// For borrowed storage this is typically a borrowed view (eg. `&[T]`);
    /// for lazy sequences it can be an owned value (eg. a narrower `Range`).
    type Chunk<'a>
    where
        Self: 'a;

    /// Return the number of elements in the container.
    fn len(&self) -> usize;

    /// Return true if the container has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extract the sub-range of elements at positions `range`.
    ///
    /// Panics if `range` extends past the end of the container.
    fn slice(&self, range: Range<usize>) -> Self::Chunk<'_>;
}

impl<T> Indexable for [T] {
    type Chunk<'a>
        = &'a [T]
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.len()
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

impl<T> Indexable for Vec<T> {
    type Chunk<'a>
        = &'a [T]
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    type Chunk<'a>
        = &'a [T]
    where
        Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

macro_rules! impl_indexable_for_range {
    ($($int:ty),*) => {$(
        impl Indexable for Range<$int> {
            type Chunk<'a>
                = Range<$int>
            where
                Self: 'a;

            fn len(&self) -> usize {
                if self.end <= self.start {
                    0
                } else {
                    (self.end - self.start) as usize
                }
            }

            fn slice(&self, range: Range<usize>) -> Range<$int> {
                assert!(
                    range.end <= Indexable::len(self),
                    "range {:?} out of bounds for range of length {}",
                    range,
                    Indexable::len(self),
                );
                let start = self.start + range.start as $int;
                let end = self.start + range.end as $int;
                start..end
            }
        }
    )*};
}

impl_indexable_for_range!(usize, u64, u32, i64, i32);

//! Evenly balanced chunking: sequential [`EvenChunks`] and indexable
//! [`EvenSlices`], both replaying a [`Plan`].

use std::iter::FusedIterator;

use crate::errors::ChunkError;
use crate::indexable::Indexable;
use crate::plan::{Plan, Target};

/// Determine an iterator's length from its `size_hint`, requiring the hint
/// to be exact.
fn exact_len<I: Iterator>(iter: &I) -> Result<usize, ChunkError> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Ok(lower),
        _ => Err(ChunkError::LengthUnavailable),
    }
}

/// Iterator over evenly balanced groups pulled from an arbitrary iterator.
///
/// The partition is planned once at construction; each call to
/// [`next`](Iterator::next) then consumes exactly the planned number of
/// elements into a `Vec`. The chunk count is available up front via
/// [`ExactSizeIterator::len`] without consuming any input.
///
/// If the length used for planning overstates the source's true length, the
/// trailing chunks come up short or empty; iteration still ends after the
/// planned number of chunks.
pub struct EvenChunks<I: Iterator> {
    iter: I,
    plan: Plan,
    index: usize,
}

impl<I: Iterator> EvenChunks<I> {
    /// Create a balanced chunker over `iter`.
    ///
    /// The source's length is taken from its `size_hint`, which must be
    /// exact (as it is for slices, ranges and other sized iterators). Fails
    /// with [`ChunkError::LengthUnavailable`] otherwise; use
    /// [`with_len`](EvenChunks::with_len) to supply the length yourself.
    pub fn new(iter: I, target: Target) -> Result<Self, ChunkError> {
        let len = exact_len(&iter)?;
        Ok(EvenChunks {
            iter,
            plan: Plan::new(len, target)?,
            index: 0,
        })
    }

    /// Create a balanced chunker over `iter`, planning for `len` elements.
    ///
    /// Use this when the source cannot report its own length. `len` must be
    /// positive; fails with [`ChunkError::InvalidLengthHint`] otherwise.
    pub fn with_len(iter: I, len: usize, target: Target) -> Result<Self, ChunkError> {
        if len == 0 {
            return Err(ChunkError::InvalidLengthHint);
        }
        Ok(EvenChunks {
            iter,
            plan: Plan::new(len, target)?,
            index: 0,
        })
    }

    /// Return the partition plan being replayed.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}

impl<I: Iterator> Iterator for EvenChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.plan.chunk_count() {
            return None;
        }
        let size = self.plan.size_at(self.index);
        self.index += 1;
        Some(self.iter.by_ref().take(size).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.chunk_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for EvenChunks<I> {}

impl<I: Iterator> FusedIterator for EvenChunks<I> {}

/// Iterator over evenly balanced sub-ranges of an [`Indexable`] container.
///
/// The partition is planned once at construction; chunks are then produced
/// by direct range extraction, tracking a running element offset. The chunk
/// count is available up front via [`ExactSizeIterator::len`].
///
/// If a length supplied via [`with_len`](EvenSlices::with_len) does not match
/// the container's true length, each affected extraction logs a warning and
/// yields the clamped (possibly shorter) sub-range; iteration continues.
pub struct EvenSlices<'a, S: Indexable + ?Sized> {
    source: &'a S,
    plan: Plan,
    index: usize,
    offset: usize,
}

impl<'a, S: Indexable + ?Sized> EvenSlices<'a, S> {
    /// Create a balanced slicer over `source`, planning for its full length.
    pub fn new(source: &'a S, target: Target) -> Result<Self, ChunkError> {
        Ok(EvenSlices {
            plan: Plan::new(source.len(), target)?,
            source,
            index: 0,
            offset: 0,
        })
    }

    /// Create a balanced slicer planning for `len` elements instead of the
    /// container's reported length.
    ///
    /// `len` must be positive; fails with [`ChunkError::InvalidLengthHint`]
    /// otherwise.
    pub fn with_len(source: &'a S, len: usize, target: Target) -> Result<Self, ChunkError> {
        if len == 0 {
            return Err(ChunkError::InvalidLengthHint);
        }
        Ok(EvenSlices {
            plan: Plan::new(len, target)?,
            source,
            index: 0,
            offset: 0,
        })
    }

    /// Return the partition plan being replayed.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}

impl<'a, S: Indexable + ?Sized> Iterator for EvenSlices<'a, S> {
    type Item = S::Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.plan.chunk_count() {
            return None;
        }
        let size = self.plan.size_at(self.index);
        let len = self.source.len();
        let start = self.offset.min(len);
        let end = (self.offset + size).min(len);
        if end - start != size {
            log::warn!(
                "planned chunk size is {} but got slice of len {}; was the length hint correct?",
                size,
                end - start
            );
        }
        self.index += 1;
        self.offset += size;

        // Copy the reference out so the chunk borrows the container for 'a
        // rather than for the duration of this call.
        let source = self.source;
        Some(source.slice(start..end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.chunk_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl<S: Indexable + ?Sized> ExactSizeIterator for EvenSlices<'_, S> {}

impl<S: Indexable + ?Sized> FusedIterator for EvenSlices<'_, S> {}

#[cfg(test)]
mod tests {
    use super::{EvenChunks, EvenSlices};
    use crate::errors::ChunkError;
    use crate::plan::Target;

    #[test]
    fn test_even_chunks() {
        #[derive(Debug)]
        struct Case {
            len: usize,
            target: Target,
            expected_sizes: Vec<usize>,
        }

        let cases = [
            Case {
                len: 10,
                target: Target::Count(3),
                expected_sizes: vec![4, 3, 3],
            },
            Case {
                len: 10,
                target: Target::Size(4),
                expected_sizes: vec![4, 3, 3],
            },
            Case {
                len: 14,
                target: Target::Count(5),
                expected_sizes: vec![3, 3, 3, 3, 2],
            },
            Case {
                len: 3,
                target: Target::Count(8),
                expected_sizes: vec![1, 1, 1],
            },
            Case {
                len: 0,
                target: Target::Count(0),
                expected_sizes: vec![],
            },
        ];

        for Case { len, target, expected_sizes } in cases {
            let chunks = EvenChunks::new(0..len, target).unwrap();
            assert_eq!(chunks.len(), expected_sizes.len());

            let chunks: Vec<Vec<usize>> = chunks.collect();
            let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
            assert_eq!(sizes, expected_sizes, "len {} target {:?}", len, target);

            // Chunks rejoin into the original sequence.
            let rejoined: Vec<usize> = chunks.into_iter().flatten().collect();
            assert_eq!(rejoined, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_even_chunks_errors() {
        assert_eq!(
            EvenChunks::new(0..5, Target::Count(0)).err(),
            Some(ChunkError::InvalidCount { len: 5 })
        );
        assert_eq!(
            EvenChunks::new(0..5, Target::Size(0)).err(),
            Some(ChunkError::InvalidSize)
        );

        // An iterator with an inexact size hint needs an explicit length.
        let filtered = (0..10).filter(|x| x % 2 == 0);
        assert_eq!(
            EvenChunks::new(filtered, Target::Count(2)).err(),
            Some(ChunkError::LengthUnavailable)
        );

        let filtered = (0..10).filter(|x| x % 2 == 0);
        assert_eq!(
            EvenChunks::with_len(filtered, 0, Target::Count(2)).err(),
            Some(ChunkError::InvalidLengthHint)
        );
    }

    #[test]
    fn test_even_chunks_with_len() {
        let filtered = (0..10).filter(|x| x % 2 == 0);
        let chunks: Vec<Vec<i32>> =
            EvenChunks::with_len(filtered, 5, Target::Count(2)).unwrap().collect();
        assert_eq!(chunks, [vec![0, 2, 4], vec![6, 8]]);
    }

    #[test]
    fn test_even_chunks_overstated_len() {
        // Planning for more elements than exist: trailing chunks run short
        // or empty, but iteration still ends after the planned chunk count.
        let chunks: Vec<Vec<usize>> =
            EvenChunks::with_len(0..5, 10, Target::Count(3)).unwrap().collect();
        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, [4, 1, 0]);
    }

    #[test]
    fn test_even_slices() {
        let items: Vec<i32> = (0..10).collect();

        let mut slices = EvenSlices::new(&items, Target::Count(3)).unwrap();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices.next(), Some(&items[0..4]));
        assert_eq!(slices.next(), Some(&items[4..7]));
        assert_eq!(slices.next(), Some(&items[7..10]));
        assert_eq!(slices.next(), None);
        assert_eq!(slices.next(), None);

        // Empty container with a zero count: no chunks, no error.
        let empty: Vec<i32> = Vec::new();
        assert_eq!(EvenSlices::new(&empty, Target::Count(0)).unwrap().count(), 0);

        assert_eq!(
            EvenSlices::new(&items, Target::Count(0)).err(),
            Some(ChunkError::InvalidCount { len: 10 })
        );
    }

    #[test]
    fn test_even_slices_over_range() {
        let slices: Vec<_> = EvenSlices::new(&(0..10usize), Target::Size(4))
            .unwrap()
            .collect();
        assert_eq!(slices, [0..4, 4..7, 7..10]);
    }

    #[test]
    fn test_even_slices_mismatched_len() {
        // A stale length hint clamps the affected chunks instead of failing.
        let items: Vec<i32> = (0..5).collect();
        let slices: Vec<&[i32]> =
            EvenSlices::with_len(&items, 10, Target::Count(3)).unwrap().collect();
        let sizes: Vec<usize> = slices.iter().map(|s| s.len()).collect();
        assert_eq!(sizes, [4, 1, 0]);
        assert_eq!(slices[0], &items[0..4]);
        assert_eq!(slices[1], &items[4..5]);
    }

    // The sequential and slicing replays of the same plan must agree on
    // boundaries and contents.
    #[test]
    fn test_even_parity() {
        for len in [0usize, 1, 7, 10, 11, 24] {
            let items: Vec<usize> = (0..len).collect();
            let mut targets = vec![Target::Size(4), Target::Size(30)];
            targets.extend((1..=len + 2).map(Target::Count));

            for target in targets {
                let sliced: Result<Vec<Vec<usize>>, _> = EvenSlices::new(&items, target)
                    .map(|slices| slices.map(|chunk| chunk.to_vec()).collect());
                let chunked: Result<Vec<Vec<usize>>, _> = EvenChunks::new(items.iter().copied(), target)
                    .map(|chunks| chunks.collect());
                assert_eq!(sliced, chunked, "len {} target {:?}", len, target);

                if let Ok(chunks) = sliced {
                    let total: usize = chunks.iter().map(|c| c.len()).sum();
                    assert_eq!(total, len);
                    let rejoined: Vec<usize> = chunks.into_iter().flatten().collect();
                    assert_eq!(rejoined, items);
                }
            }
        }
    }

    // Both variants report the chunk count without consuming input.
    #[test]
    fn test_even_len_reporting() {
        let items: Vec<u8> = (0..20).collect();

        let slices = EvenSlices::new(&items, Target::Size(6)).unwrap();
        assert_eq!(slices.len(), 4);

        let mut inner = items.iter();
        let chunks = EvenChunks::new(inner.by_ref(), Target::Size(6)).unwrap();
        assert_eq!(chunks.len(), 4);
        drop(chunks);
        assert_eq!(inner.len(), 20);
    }

    #[test]
    fn test_even_slices_restart() {
        let items: Vec<u8> = (0..17).collect();
        let first: Vec<_> = EvenSlices::new(&items, Target::Count(4)).unwrap().collect();
        let second: Vec<_> = EvenSlices::new(&items, Target::Count(4)).unwrap().collect();
        assert_eq!(first, second);
    }
}

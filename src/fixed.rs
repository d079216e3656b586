//! Fixed-size chunking: sequential [`Chunks`] and indexable [`Slices`].

use std::iter::FusedIterator;
use std::ops::Range;

use crate::errors::ChunkError;
use crate::indexable::Indexable;

/// Iterator over fixed-size groups pulled from an arbitrary iterator.
///
/// Each call to [`next`](Iterator::next) consumes up to `size` elements from
/// the source and materializes them as a `Vec`. The final chunk may be
/// shorter than `size`; an empty chunk is never yielded. A chunk is produced
/// only once its last contributing element has been pulled (or the source is
/// exhausted), so no element is consumed ahead of the chunk that needs it.
///
/// `Chunks` owns its iterator. Rust iterators are single-use, so "restarting"
/// means building a new `Chunks` from a fresh iterator; there is no way to
/// accidentally resume a half-consumed source under a new chunker.
pub struct Chunks<I: Iterator> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    /// Create a chunker yielding groups of up to `size` elements.
    ///
    /// Fails with [`ChunkError::InvalidSize`] if `size` is zero.
    pub fn new(iter: I, size: usize) -> Result<Self, ChunkError> {
        if size == 0 {
            return Err(ChunkError::InvalidSize);
        }
        Ok(Chunks { iter, size })
    }

    /// Return the size of each chunk, except possibly the last.
    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(self.size), upper.map(|n| n.div_ceil(self.size)))
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}

/// Iterator over fixed-size sub-ranges of an [`Indexable`] container.
///
/// Chunks are produced by direct range extraction at positions
/// `[0, size)`, `[size, 2*size)`, ... with the last range clipped to the
/// container's end, so skipped elements are never touched. The chunk count
/// is `len.div_ceil(size)` and is available up front via
/// [`ExactSizeIterator::len`].
pub struct Slices<'a, S: Indexable + ?Sized> {
    source: &'a S,
    remainder: Range<usize>,
    size: usize,
}

impl<'a, S: Indexable + ?Sized> Slices<'a, S> {
    /// Create a slicer yielding sub-ranges of up to `size` elements.
    ///
    /// The container's length is read once here; mutating the container
    /// through interior mutability during iteration is not supported.
    ///
    /// Fails with [`ChunkError::InvalidSize`] if `size` is zero.
    pub fn new(source: &'a S, size: usize) -> Result<Self, ChunkError> {
        if size == 0 {
            return Err(ChunkError::InvalidSize);
        }
        Ok(Slices {
            remainder: 0..source.len(),
            source,
            size,
        })
    }

    /// Return the size of each chunk, except possibly the last.
    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<'a, S: Indexable + ?Sized> Iterator for Slices<'a, S> {
    type Item = S::Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remainder.is_empty() {
            return None;
        }
        let start = self.remainder.start;
        let end = (start + self.size).min(self.remainder.end);
        self.remainder.start = end;

        // Copy the reference out so the chunk borrows the container for 'a
        // rather than for the duration of this call.
        let source = self.source;
        Some(source.slice(start..end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = ExactSizeIterator::len(&self.remainder).div_ceil(self.size);
        (len, Some(len))
    }
}

impl<S: Indexable + ?Sized> ExactSizeIterator for Slices<'_, S> {}

impl<S: Indexable + ?Sized> FusedIterator for Slices<'_, S> {}

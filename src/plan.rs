//! Equal-partition planning.
//!
//! A [`Plan`] describes how to split `len` elements into contiguous chunks
//! whose sizes differ by at most one. It is computed once, up front, from the
//! total length and a [`Target`]; [`EvenChunks`](crate::EvenChunks) and
//! [`EvenSlices`](crate::EvenSlices) then replay it against a data source
//! without ever re-deriving sizes.

use crate::errors::ChunkError;

/// Balancing target for a [`Plan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Upper bound on the size of each chunk. The chunk count becomes
    /// `len.div_ceil(size)`.
    Size(usize),

    /// Number of chunks to produce. Capped at the element count, so a count
    /// larger than `len` yields `len` chunks of one element each; zero-length
    /// chunks are never planned.
    Count(usize),
}

/// An equal partition of `len` elements into `chunk_count` contiguous chunks.
///
/// All chunks have size `small` or `big`, where `big = small + 1`. The
/// `num_big` big chunks come first, followed by the `num_small` small ones,
/// and the sizes sum to `len` exactly:
///
/// ```text
/// num_small * small + num_big * big == len
/// num_small + num_big == chunk_count
/// ```
///
/// A plan is immutable once constructed. An empty source with
/// [`Target::Count(0)`](Target::Count) produces the empty plan (no chunks,
/// all fields zero).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    len: usize,
    nchunks: usize,
    small: usize,
    big: usize,
    numbig: usize,
    numsmall: usize,
}

impl Plan {
    /// Compute the partition of `len` elements described by `target`.
    ///
    /// Fails with [`ChunkError::InvalidSize`] for a zero target size, and
    /// with [`ChunkError::InvalidCount`] when zero chunks are requested for
    /// a nonzero `len`.
    pub fn new(len: usize, target: Target) -> Result<Plan, ChunkError> {
        let mut nchunks = match target {
            Target::Size(0) => return Err(ChunkError::InvalidSize),
            Target::Size(size) => len.div_ceil(size),
            Target::Count(0) if len != 0 => return Err(ChunkError::InvalidCount { len }),
            Target::Count(count) => count.min(len),
        };

        if nchunks == 0 {
            return Ok(Plan {
                len: 0,
                nchunks: 0,
                small: 0,
                big: 0,
                numbig: 0,
                numsmall: 0,
            });
        }

        let mut small = len / nchunks;
        let mut numbig = len % nchunks;

        // Guard against rounding pushing the base size above a requested
        // size cap.
        if let Target::Size(size) = target {
            if small > size {
                nchunks += 1;
                small = len / nchunks;
                numbig = len % nchunks;
            }
        }

        let big = small + 1;
        let numsmall = nchunks - numbig;
        debug_assert_eq!(numsmall * small + numbig * big, len);

        Ok(Plan {
            len,
            nchunks,
            small,
            big,
            numbig,
            numsmall,
        })
    }

    /// Return the total number of elements covered by the plan.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the plan covers no elements and yields no chunks.
    pub fn is_empty(&self) -> bool {
        self.nchunks == 0
    }

    /// Return the number of chunks the plan describes.
    pub fn chunk_count(&self) -> usize {
        self.nchunks
    }

    /// Return the smaller of the two chunk sizes (0 for the empty plan).
    pub fn small(&self) -> usize {
        self.small
    }

    /// Return the larger of the two chunk sizes, `small() + 1` (0 for the
    /// empty plan).
    pub fn big(&self) -> usize {
        self.big
    }

    /// Return the number of chunks of size [`small`](Plan::small).
    pub fn num_small(&self) -> usize {
        self.numsmall
    }

    /// Return the number of chunks of size [`big`](Plan::big).
    pub fn num_big(&self) -> usize {
        self.numbig
    }

    /// Return the planned size of the chunk at `index`.
    ///
    /// Big chunks are emitted before small ones; this ordering determines
    /// chunk boundaries for both the sequential and the slicing replays.
    ///
    /// Panics if `index` is out of bounds.
    pub fn size_at(&self, index: usize) -> usize {
        assert!(
            index < self.nchunks,
            "chunk index {} out of bounds for plan of {} chunks",
            index,
            self.nchunks
        );
        if index < self.numbig {
            self.big
        } else {
            self.small
        }
    }

    /// Return an iterator over the planned chunk sizes, in emission order.
    pub fn sizes(&self) -> PlanSizes<'_> {
        PlanSizes { plan: self, index: 0 }
    }
}

/// Iterator over the chunk sizes of a [`Plan`], returned by [`Plan::sizes`].
pub struct PlanSizes<'a> {
    plan: &'a Plan,
    index: usize,
}

impl Iterator for PlanSizes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.index >= self.plan.nchunks {
            return None;
        }
        let size = self.plan.size_at(self.index);
        self.index += 1;
        Some(size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.nchunks - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlanSizes<'_> {}

impl std::iter::FusedIterator for PlanSizes<'_> {}

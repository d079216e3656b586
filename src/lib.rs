//! even_chunks splits sequence-like data into consecutive groups, either of
//! a fixed declared size or of sizes balanced to be as equal as possible.
//!
//! # Two kinds of source
//!
//! Sources come in two capability flavors, and each operation has a path for
//! both:
//!
//! - *Indexable* containers implement the [`Indexable`] trait: they know
//!   their length and can hand out a contiguous sub-range in O(1) without
//!   touching the skipped elements. Slices, `Vec`s, arrays and integer
//!   ranges are indexable out of the box; tabular types can opt in with
//!   positional row semantics. The slicing paths ([`Slices`],
//!   [`EvenSlices`]) never copy elements.
//! - *Sequential* sources are ordinary [`Iterator`]s, consumed one element
//!   at a time. The sequential paths ([`Chunks`], [`EvenChunks`])
//!   materialize each chunk as a `Vec` as it is requested.
//!
//! Where the original idea of "is this container sliceable?" would be a
//! runtime check, here it is a trait bound: calling [`batched`] on a source
//! that is not [`Indexable`] is a compile error, and the sequential
//! fallback is spelled [`batched_iter`].
//!
//! # Fixed-size vs. balanced chunks
//!
//! [`batched`]/[`batched_iter`] yield chunks of a declared size, with a
//! shorter final chunk when the length is not a multiple.
//!
//! [`even_batched`]/[`even_batched_iter`] instead compute a [`Plan`] up
//! front: given a [`Target`] chunk size or chunk count, the plan distributes
//! the remainder so that all chunk sizes differ by at most one and sum to
//! the total length exactly. Both chunkers replay the same plan, so their
//! chunk boundaries always agree.
//!
//! ```
//! use even_chunks::{batched, even_batched, Target};
//!
//! let items: Vec<i32> = (0..10).collect();
//!
//! let fixed: Vec<&[i32]> = batched(&items, 3).unwrap().collect();
//! assert_eq!(fixed, [&items[0..3], &items[3..6], &items[6..9], &items[9..10]]);
//!
//! let sizes: Vec<usize> = even_batched(&items, Target::Count(3))
//!     .unwrap()
//!     .map(|chunk| chunk.len())
//!     .collect();
//! assert_eq!(sizes, [4, 3, 3]);
//! ```
//!
//! # Laziness and errors
//!
//! Chunk production is pull-based: nothing is consumed or extracted until
//! the next chunk is requested. All argument validation happens eagerly at
//! construction and is reported as a [`ChunkError`]; iteration itself never
//! fails. Balanced chunking needs the total length up front, so it does not
//! apply to sources of unknown length (supply one with
//! [`EvenChunks::with_len`]) or to infinite sequences.

pub mod errors;

mod even;
mod fixed;
mod helpers;
mod indexable;
mod plan;

pub use errors::ChunkError;
pub use even::{EvenChunks, EvenSlices};
pub use fixed::{Chunks, Slices};
pub use helpers::{pad_tail, peek, probe_empty, zip_apply};
pub use indexable::Indexable;
pub use plan::{Plan, PlanSizes, Target};

/// Split an indexable container into chunks of `size` elements, the last
/// possibly shorter, by direct range extraction.
///
/// Fails with [`ChunkError::InvalidSize`] if `size` is zero.
pub fn batched<S: Indexable + ?Sized>(source: &S, size: usize) -> Result<Slices<'_, S>, ChunkError> {
    Slices::new(source, size)
}

/// Split a sequential source into chunks of `size` elements, the last
/// possibly shorter, materializing each chunk as a `Vec`.
///
/// Fails with [`ChunkError::InvalidSize`] if `size` is zero.
pub fn batched_iter<I: IntoIterator>(
    source: I,
    size: usize,
) -> Result<Chunks<I::IntoIter>, ChunkError> {
    Chunks::new(source.into_iter(), size)
}

/// Split an indexable container into evenly balanced chunks per `target`,
/// by direct range extraction.
pub fn even_batched<S: Indexable + ?Sized>(
    source: &S,
    target: Target,
) -> Result<EvenSlices<'_, S>, ChunkError> {
    EvenSlices::new(source, target)
}

/// Split a sequential source into evenly balanced chunks per `target`.
///
/// The source must report an exact length via its `size_hint`; otherwise
/// this fails with [`ChunkError::LengthUnavailable`] and
/// [`even_batched_iter_with_len`] must be used instead.
pub fn even_batched_iter<I: IntoIterator>(
    source: I,
    target: Target,
) -> Result<EvenChunks<I::IntoIter>, ChunkError> {
    EvenChunks::new(source.into_iter(), target)
}

/// Split a sequential source into evenly balanced chunks per `target`,
/// planning for an explicitly supplied length.
///
/// `len` must be positive; fails with [`ChunkError::InvalidLengthHint`]
/// otherwise.
pub fn even_batched_iter_with_len<I: IntoIterator>(
    source: I,
    len: usize,
    target: Target,
) -> Result<EvenChunks<I::IntoIter>, ChunkError> {
    EvenChunks::with_len(source.into_iter(), len, target)
}

#[cfg(test)]
mod tests {
    use super::{batched, batched_iter, even_batched, even_batched_iter, Target};

    #[test]
    fn test_batched_dispatch() {
        let items: Vec<u32> = (0..10).collect();

        let sliced: Vec<&[u32]> = batched(&items, 3).unwrap().collect();
        let chunked: Vec<Vec<u32>> = batched_iter(items.iter().copied(), 3).unwrap().collect();
        assert_eq!(sliced.len(), 4);
        assert_eq!(sliced, chunked);
    }

    #[test]
    fn test_even_batched_dispatch() {
        let items: Vec<u32> = (0..10).collect();

        let sliced: Vec<&[u32]> = even_batched(&items, Target::Size(4)).unwrap().collect();
        let chunked: Vec<Vec<u32>> = even_batched_iter(items.iter().copied(), Target::Size(4))
            .unwrap()
            .collect();
        assert_eq!(sliced, chunked);
        assert_eq!(
            sliced.iter().map(|c| c.len()).collect::<Vec<_>>(),
            [4, 3, 3]
        );
    }
}

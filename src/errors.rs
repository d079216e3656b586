//! Error types reported when constructing chunk iterators.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that can occur when constructing a chunk iterator.
///
/// All argument validation happens eagerly at construction. Once a chunker
/// has been built, iterating it never fails: running out of input is normal
/// termination, and a length-hint mismatch in
/// [`EvenSlices`](crate::EvenSlices) is reported as a logged warning rather
/// than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChunkError {
    /// A chunk size or target size of zero was requested.
    InvalidSize,

    /// Zero chunks were requested for a source with a nonzero length.
    InvalidCount {
        /// Length of the source that cannot fit into zero chunks.
        len: usize,
    },

    /// An explicit length hint of zero was supplied. A hint must be a
    /// positive count of elements; a genuinely empty source has a computable
    /// length and needs no hint.
    InvalidLengthHint,

    /// The length of a sequential source could not be determined and no
    /// length hint was supplied. Equal partitioning requires a known total
    /// length.
    LengthUnavailable,
}

impl Display for ChunkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkError::InvalidSize => write!(f, "chunk size must be positive"),
            ChunkError::InvalidCount { len } => {
                write!(f, "cannot split {} elements into zero chunks", len)
            }
            ChunkError::InvalidLengthHint => write!(f, "length hint must be positive"),
            ChunkError::LengthUnavailable => {
                write!(f, "source length is unavailable and no length hint was given")
            }
        }
    }
}

impl Error for ChunkError {}

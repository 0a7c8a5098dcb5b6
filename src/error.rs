//! Typed failures of the embed/extract pipelines.
//!
//! File-level problems (unreadable paths, bad arguments) are reported with
//! `anyhow` context at the handler layer; this enum covers only the
//! failures the format itself can produce.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// The carrier cannot hold the payload. Raised before any byte of the
    /// stego image is produced.
    #[error(
        "not enough capacity in the carrier image: payload needs {required} bits, image holds {available}"
    )]
    InsufficientCapacity { required: u64, available: u64 },

    /// The decoded marker differs from [`crate::constants::MAGIC_MARKER`].
    /// The image is not a stego image, or was made by a different tool.
    #[error("magic marker mismatch (found {found:?}): not a stego image")]
    MagicMismatch { found: String },

    /// The carrier ran out of bytes in the middle of a field. Indicates a
    /// truncated or corrupted image.
    #[error("carrier exhausted at byte {offset}: {needed} more bytes needed to finish the field")]
    CarrierExhausted { offset: usize, needed: usize },

    /// The file is shorter than the 54-byte BMP header.
    #[error("image is {len} bytes, shorter than the 54-byte BMP header")]
    TruncatedHeader { len: usize },

    /// Write fault on the decode output sink.
    #[error(transparent)]
    Io(#[from] io::Error),
}

//! Extract pipeline.
//!
//! Mirrors the encoder field for field. The marker check is the only
//! integrity guard the format has: past it, every extracted value is
//! trusted, and a corrupted image surfaces as exhaustion of the carrier
//! rather than a checksum failure. Secret bytes are handed to the output
//! sink one at a time; nothing already written is retracted on a later
//! failure.

use std::io::Write;

use crate::constants::{BMP_HEADER_SIZE, MAGIC_MARKER};
use crate::error::StegoError;
use crate::lsb;

/// Borrows the stego image and owns a read cursor into it.
///
/// Call order matters and mirrors the wire layout: [`verify_magic`],
/// [`extract_extension`], [`extract_secret_size`], then
/// [`extract_secret_data`].
///
/// [`verify_magic`]: Decoder::verify_magic
/// [`extract_extension`]: Decoder::extract_extension
/// [`extract_secret_size`]: Decoder::extract_secret_size
/// [`extract_secret_data`]: Decoder::extract_secret_data
pub struct Decoder<'a> {
    stego: &'a [u8],
    cursor: usize,
}

impl<'a> Decoder<'a> {
    /// Positions the cursor on the first pixel byte, past the header.
    pub fn new(stego: &'a [u8]) -> Result<Self, StegoError> {
        if stego.len() < BMP_HEADER_SIZE {
            return Err(StegoError::TruncatedHeader { len: stego.len() });
        }
        Ok(Self {
            stego,
            cursor: BMP_HEADER_SIZE,
        })
    }

    /// Extracts the marker and compares it against the expected constant.
    pub fn verify_magic(&mut self) -> Result<(), StegoError> {
        let mut found = String::with_capacity(MAGIC_MARKER.len());
        for _ in 0..MAGIC_MARKER.len() {
            found.push(char::from(self.extract_byte()?));
        }
        if found == MAGIC_MARKER {
            Ok(())
        } else {
            Err(StegoError::MagicMismatch { found })
        }
    }

    /// Extracts the extension length field and then the extension text
    /// itself (leading dot included, e.g. ".txt").
    pub fn extract_extension(&mut self) -> Result<String, StegoError> {
        let len = self.extract_size()? as usize;

        // A length whose text cannot fit in the remaining carrier is
        // corruption; fail before allocating for it.
        let needed = len.saturating_mul(8);
        if needed > self.stego.len() - self.cursor {
            return Err(StegoError::CarrierExhausted {
                offset: self.cursor,
                needed,
            });
        }

        let mut extension = String::with_capacity(len);
        for _ in 0..len {
            extension.push(char::from(self.extract_byte()?));
        }
        Ok(extension)
    }

    /// Extracts the secret size field (byte count of the secret data).
    pub fn extract_secret_size(&mut self) -> Result<u32, StegoError> {
        self.extract_size()
    }

    /// Extracts `count` secret bytes, writing each to the sink as soon as
    /// it is recovered. On failure the sink keeps what it already got.
    pub fn extract_secret_data<W: Write>(
        &mut self,
        count: u32,
        sink: &mut W,
    ) -> Result<(), StegoError> {
        for _ in 0..count {
            let byte = self.extract_byte()?;
            sink.write_all(&[byte])?;
        }
        Ok(())
    }

    fn extract_byte(&mut self) -> Result<u8, StegoError> {
        Ok(lsb::unpack_byte(self.window::<8>()?))
    }

    fn extract_size(&mut self) -> Result<u32, StegoError> {
        Ok(lsb::unpack_size(self.window::<32>()?))
    }

    /// Next `N` carrier bytes at the cursor, advancing past them.
    fn window<const N: usize>(&mut self) -> Result<&'a [u8; N], StegoError> {
        let offset = self.cursor;
        let (window, _) = self.stego[offset..]
            .split_first_chunk::<N>()
            .ok_or(StegoError::CarrierExhausted { offset, needed: N })?;
        self.cursor = offset + N;
        Ok(window)
    }
}

//! Embed pipeline.
//!
//! Works on an in-memory copy of the carrier bytes: fields are packed
//! into consecutive LSB windows starting right after the BMP header, and
//! the untouched bytes (header, everything past the last field) come out
//! byte-identical to the carrier. Wire order is fixed:
//!
//! `[magic][u32 extension length][extension][u32 secret size][secret]`

use crate::bmp;
use crate::constants::{BMP_HEADER_SIZE, MAGIC_MARKER};
use crate::error::StegoError;
use crate::lsb;

/// Owns the stego image being built and a write cursor into it.
/// One-shot: [`embed`](Encoder::embed) consumes the encoder and returns
/// the finished bytes.
pub struct Encoder {
    stego: Vec<u8>,
    cursor: usize,
}

impl Encoder {
    /// Takes ownership of the carrier bytes. The cursor starts at the
    /// first pixel byte; the header region is never written to.
    pub fn new(carrier: Vec<u8>) -> Result<Self, StegoError> {
        if carrier.len() < BMP_HEADER_SIZE {
            return Err(StegoError::TruncatedHeader { len: carrier.len() });
        }
        Ok(Self {
            stego: carrier,
            cursor: BMP_HEADER_SIZE,
        })
    }

    /// Runs the whole embed sequence and returns the stego image bytes.
    ///
    /// The capacity check runs first; on failure nothing has been
    /// modified. Any later failure aborts the sequence immediately.
    pub fn embed(mut self, extension: &str, secret: &[u8]) -> Result<Vec<u8>, StegoError> {
        let capacity = bmp::carrier_capacity(&self.stego)?;
        bmp::check_capacity(capacity, extension.len(), secret.len() as u64)?;

        self.embed_bytes(MAGIC_MARKER.as_bytes())?;
        self.embed_size(extension.len() as u32)?;
        self.embed_bytes(extension.as_bytes())?;
        self.embed_size(secret.len() as u32)?;
        self.embed_bytes(secret)?;

        Ok(self.stego)
    }

    /// Packs each byte of `data` into the next 8-byte carrier window.
    fn embed_bytes(&mut self, data: &[u8]) -> Result<(), StegoError> {
        for &byte in data {
            lsb::pack_byte(byte, self.window_mut::<8>()?);
        }
        Ok(())
    }

    fn embed_size(&mut self, value: u32) -> Result<(), StegoError> {
        lsb::pack_size(value, self.window_mut::<32>()?);
        Ok(())
    }

    /// Next `N` carrier bytes at the cursor, advancing past them.
    /// Fails when the image runs out mid-field.
    fn window_mut<const N: usize>(&mut self) -> Result<&mut [u8; N], StegoError> {
        let offset = self.cursor;
        let (window, _) = self.stego[offset..]
            .split_first_chunk_mut::<N>()
            .ok_or(StegoError::CarrierExhausted { offset, needed: N })?;
        self.cursor = offset + N;
        Ok(window)
    }
}

//! BMP geometry and the capacity check.
//!
//! Only three facts about the carrier are ever read: width at offset 18,
//! height at offset 22 (both 4-byte little-endian), and that pixel data
//! starts at offset 54. Compressed or non-24bpp variants are not
//! supported and not detected; feeding one in simply produces a broken
//! stego image.

use crate::constants::{
    BMP_HEADER_SIZE, BYTES_PER_SECRET_BYTE, HEIGHT_OFFSET, MAGIC_MARKER, SIZE_FIELD_BYTES,
    WIDTH_OFFSET,
};
use crate::error::StegoError;

/// Carrier capacity in bytes: width × height × 3 bytes per pixel.
///
/// Because each carrier byte stores exactly one payload bit, this number
/// doubles as the capacity in bits.
pub fn carrier_capacity(image: &[u8]) -> Result<u64, StegoError> {
    if image.len() < BMP_HEADER_SIZE {
        return Err(StegoError::TruncatedHeader { len: image.len() });
    }
    let width = read_u32_le(image, WIDTH_OFFSET);
    let height = read_u32_le(image, HEIGHT_OFFSET);
    Ok(u64::from(width) * u64::from(height) * 3)
}

/// Total payload bits: magic marker, extension length field, extension
/// text, secret size field, secret data.
pub fn required_bits(extension_len: usize, secret_len: u64) -> u64 {
    (MAGIC_MARKER.len() * BYTES_PER_SECRET_BYTE) as u64
        + SIZE_FIELD_BYTES as u64
        + (extension_len * BYTES_PER_SECRET_BYTE) as u64
        + SIZE_FIELD_BYTES as u64
        + secret_len * BYTES_PER_SECRET_BYTE as u64
}

/// Rejects a payload the carrier cannot hold, before anything is written.
///
/// Capacity must be strictly greater than the required bits; a carrier
/// with exactly enough room is rejected.
pub fn check_capacity(
    capacity: u64,
    extension_len: usize,
    secret_len: u64,
) -> Result<(), StegoError> {
    let required = required_bits(extension_len, secret_len);
    if capacity > required {
        Ok(())
    } else {
        Err(StegoError::InsufficientCapacity {
            required,
            available: capacity,
        })
    }
}

fn read_u32_le(image: &[u8], offset: usize) -> u32 {
    // Caller has checked the image covers the 54-byte header.
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&image[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

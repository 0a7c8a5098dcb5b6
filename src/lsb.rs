//! Bit packing between semantic values and carrier byte windows.
//!
//! One semantic bit goes into the least-significant bit of one carrier
//! byte, MSB first, so a byte spreads over 8 carrier bytes and a 32-bit
//! size over 32. Only the LSB of each carrier byte is touched, which is
//! what makes the change invisible in an 8-bit color channel.

/// Writes the bits of `value` into the LSBs of `carrier`, MSB first.
/// The upper 7 bits of every carrier byte are preserved.
pub fn pack_byte(value: u8, carrier: &mut [u8; 8]) {
    let mut mask = 1u8 << 7;
    for slot in carrier.iter_mut() {
        *slot = (*slot & 0xFE) | u8::from(value & mask != 0);
        mask >>= 1;
    }
}

/// Rebuilds a byte from the LSBs of `carrier`, MSB first.
pub fn unpack_byte(carrier: &[u8; 8]) -> u8 {
    carrier.iter().fold(0u8, |acc, &byte| (acc << 1) | (byte & 1))
}

/// Same as [`pack_byte`] over 32 bits, mask starting at bit 31.
pub fn pack_size(value: u32, carrier: &mut [u8; 32]) {
    let mut mask = 1u32 << 31;
    for slot in carrier.iter_mut() {
        *slot = (*slot & 0xFE) | u8::from(value & mask != 0);
        mask >>= 1;
    }
}

/// Rebuilds a 32-bit size from the LSBs of `carrier`, MSB first.
pub fn unpack_size(carrier: &[u8; 32]) -> u32 {
    carrier
        .iter()
        .fold(0u32, |acc, &byte| (acc << 1) | u32::from(byte & 1))
}

//! # stegbmp
//!
//! LSB steganography over uncompressed 24-bit BMP images: a secret file
//! is spread one bit per pixel byte into the least-significant bits of
//! the carrier, prefixed by a magic marker, its extension and its size,
//! and recovered by walking the same layout back.

pub mod bmp;
pub mod cli;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod handler;
pub mod lsb;

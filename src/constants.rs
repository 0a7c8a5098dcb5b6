/// Marker embedded ahead of every payload. Decoding checks it before
/// anything else; a mismatch means the image was not produced by this tool.
pub const MAGIC_MARKER: &str = "#*";

/// Standard BMP header size (bytes). Embedding skips this region entirely
/// so the header of the stego image stays byte-identical to the carrier's.
pub const BMP_HEADER_SIZE: usize = 54;

/// Byte offset of the 4-byte little-endian image width in the BMP header.
pub const WIDTH_OFFSET: usize = 18;

/// Byte offset of the 4-byte little-endian image height in the BMP header.
pub const HEIGHT_OFFSET: usize = 22;

/// Carrier bytes consumed per secret byte. Each carrier byte stores one
/// secret bit in its least-significant bit, so one byte spreads over 8.
pub const BYTES_PER_SECRET_BYTE: usize = 8;

/// Carrier bytes consumed per 32-bit size field (one bit each).
pub const SIZE_FIELD_BYTES: usize = 32;

/// File extensions accepted for the secret input and the decoded output.
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".txt", ".c", ".sh"];

/// Default stego image name used when encode is given no output path.
pub const DEFAULT_STEGO_NAME: &str = "stego.bmp";

/// Prefix for the decode output name synthesized from the recovered
/// extension when no output path was given (e.g. "decoded.txt").
pub const DEFAULT_DECODE_PREFIX: &str = "decoded";

//! Command-line surface, defined with `clap`.
//!
//! Two subcommands mirror the two pipelines: `encode` hides a secret
//! file in a carrier BMP, `decode` recovers it from a stego BMP.

use clap::Parser;
use std::path::PathBuf;

/// LSB steganography tool: hide a secret file inside the pixel bytes of
/// an uncompressed 24-bit BMP image, or recover one hidden earlier.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub enum Commands {
    /// Hide a secret file inside a carrier BMP image.
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Recover the secret file hidden in a stego BMP image.
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),
}

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Carrier image (.bmp) whose pixel bytes will hide the secret.
    pub carrier: PathBuf,

    /// Secret file to hide (.txt, .c or .sh).
    pub secret: PathBuf,

    /// Where to write the stego image; defaults to stego.bmp next to the
    /// carrier.
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Stego image (.bmp) produced by the encode subcommand.
    pub image: PathBuf,

    /// Where to write the recovered secret; defaults to a name built
    /// from the decoded extension, next to the stego image.
    pub output: Option<PathBuf>,
}

//! High-level logic behind the `encode` and `decode` subcommands.
//!
//! Coordinates argument validation, file I/O and the embed/extract
//! pipelines, and reports results to the user. Argument problems are
//! caught before any file is touched; pipeline failures abort on the
//! spot and leave whatever partial output exists on disk.

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::{ALLOWED_EXTENSIONS, DEFAULT_DECODE_PREFIX, DEFAULT_STEGO_NAME};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::path::Path;

/// Handles the 'encode' subcommand.
///
/// Validates both input names, reads the carrier and the secret fully
/// into memory, runs the embed pipeline and writes the stego image.
///
/// # Errors
///
/// * The carrier is not a `.bmp` file, or the secret's extension is not
///   on the allow-list.
/// * The carrier or secret file cannot be read.
/// * The carrier is too small for the payload, or runs out mid-field.
/// * The stego image cannot be written.
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    anyhow::ensure!(
        dot_extension(&args.carrier) == Some(".bmp"),
        "Carrier must be a .bmp image, got: {}",
        args.carrier.to_string_lossy().red().bold()
    );

    let extension = dot_extension(&args.secret)
        .filter(|extn| ALLOWED_EXTENSIONS.contains(extn))
        .with_context(|| {
            format!(
                "Secret file must be one of {} — got: {}",
                ALLOWED_EXTENSIONS.join(", ").green(),
                args.secret.to_string_lossy().red().bold()
            )
        })?;

    let output = match args.output {
        Some(path) if dot_extension(&path) == Some(".bmp") => path,
        other => {
            let path = args.carrier.with_file_name(DEFAULT_STEGO_NAME);
            if other.is_some() {
                println!(
                    "Output name does not end in .bmp; writing to {} instead",
                    path.to_string_lossy().yellow().bold()
                );
            }
            path
        }
    };

    let carrier = fs::read(&args.carrier).with_context(|| {
        format!(
            "Unable to read carrier image: {}",
            args.carrier.to_string_lossy().red().bold()
        )
    })?;

    let secret = fs::read(&args.secret).with_context(|| {
        format!(
            "Unable to read secret file: {}",
            args.secret.to_string_lossy().red().bold()
        )
    })?;

    // The secret size travels as a 32-bit field.
    anyhow::ensure!(
        u32::try_from(secret.len()).is_ok(),
        "Secret file is too large to embed: {} bytes",
        secret.len().to_string().red().bold()
    );

    let encoder = Encoder::new(carrier).with_context(|| {
        format!(
            "Invalid carrier image: {}",
            args.carrier.to_string_lossy().red().bold()
        )
    })?;

    let stego = encoder.embed(extension, &secret).with_context(|| {
        format!(
            "Unable to hide {} inside {}",
            args.secret.to_string_lossy().red().bold(),
            args.carrier.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&output, stego).with_context(|| {
        format!(
            "Unable to write stego image: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The secret has been hidden and saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'decode' subcommand.
///
/// Reads the stego image, verifies the magic marker, recovers the
/// extension, and only then decides the output name — when none was
/// given it is synthesized from the decoded extension. The secret bytes
/// are streamed to the output file as they are recovered.
///
/// # Errors
///
/// * The image is not a `.bmp` file or cannot be read.
/// * The magic marker does not match (not a stego image).
/// * The carrier is exhausted mid-field (truncated or corrupted image).
/// * The output file cannot be created or written.
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    anyhow::ensure!(
        dot_extension(&args.image) == Some(".bmp"),
        "Stego image must be a .bmp file, got: {}",
        args.image.to_string_lossy().red().bold()
    );

    let chosen = match args.output {
        Some(path) if dot_extension(&path).is_some_and(|extn| ALLOWED_EXTENSIONS.contains(&extn)) => {
            Some(path)
        }
        Some(path) => {
            println!(
                "Ignoring output name {}: extension is not one of {}",
                path.to_string_lossy().yellow().bold(),
                ALLOWED_EXTENSIONS.join(", ").green()
            );
            None
        }
        None => None,
    };

    let stego = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let mut decoder = Decoder::new(&stego).with_context(|| {
        format!(
            "Invalid stego image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    decoder.verify_magic().with_context(|| {
        format!(
            "{} does not carry a hidden secret",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let extension = decoder
        .extract_extension()
        .context("Unable to recover the secret file extension; the image appears corrupted")?;

    // The output name may depend on decoded content, so the file is only
    // opened once the extension is known.
    let output = match chosen {
        Some(path) => path,
        None => {
            let path = args
                .image
                .with_file_name(format!("{DEFAULT_DECODE_PREFIX}{extension}"));
            println!(
                "No output file name given; recovering to {}",
                path.to_string_lossy().yellow().bold()
            );
            path
        }
    };

    let size = decoder
        .extract_secret_size()
        .context("Unable to recover the secret file size; the image appears corrupted")?;

    let mut output_file = File::create(&output).with_context(|| {
        format!(
            "Unable to create output file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    decoder
        .extract_secret_data(size, &mut output_file)
        .with_context(|| {
            format!(
                "Unable to recover the secret data; partial output left in {}",
                output.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "The secret has been recovered and saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Extension of `path`'s file name from its first dot, dot included
/// (e.g. "secret.txt" → ".txt"). `None` when there is no dot.
fn dot_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.find('.').map(|dot| &name[dot..])
}

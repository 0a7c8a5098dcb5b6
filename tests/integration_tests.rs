use image::{ImageBuffer, Rgb};
use rand::RngCore;
use std::fs;
use std::path::Path;
use stegbmp::{
    bmp,
    cli::{DecodeArgs, EncodeArgs},
    constants::BMP_HEADER_SIZE,
    handler::{handle_decode, handle_encode},
};
use tempfile::tempdir;

/// Writes a 24-bit BMP carrier with random pixels to `path`.
fn create_test_carrier(path: &Path, width: u32, height: u32) {
    let mut raw_pixels = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    let img: ImageBuffer<Rgb<u8>, _> =
        ImageBuffer::from_raw(width, height, raw_pixels).expect("buffer matches dimensions");
    img.save(path).expect("Failed to create test carrier.");
}

#[test]
fn encode_then_decode_recovers_the_secret() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let carrier_path = dir.path().join("carrier.bmp");
    let secret_path = dir.path().join("secret.txt");
    let stego_path = dir.path().join("out.bmp");
    let recovered_path = dir.path().join("recovered.txt");

    create_test_carrier(&carrier_path, 64, 64);
    fs::write(&secret_path, "hi")?;

    handle_encode(EncodeArgs {
        carrier: carrier_path.clone(),
        secret: secret_path.clone(),
        output: Some(stego_path.clone()),
    })?;
    assert!(stego_path.exists(), "Stego image should be created.");

    handle_decode(DecodeArgs {
        image: stego_path,
        output: Some(recovered_path.clone()),
    })?;

    let recovered = fs::read_to_string(&recovered_path)?;
    assert_eq!(recovered, "hi", "Recovered secret must match the original.");

    Ok(())
}

#[test]
fn default_output_names_are_synthesized() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let carrier_path = dir.path().join("carrier.bmp");
    let secret_path = dir.path().join("payload.sh");

    create_test_carrier(&carrier_path, 64, 64);
    fs::write(&secret_path, "echo hidden\n")?;

    // No output path: the stego image lands next to the carrier.
    handle_encode(EncodeArgs {
        carrier: carrier_path.clone(),
        secret: secret_path,
        output: None,
    })?;
    let stego_path = dir.path().join("stego.bmp");
    assert!(
        stego_path.exists(),
        "Default stego image should be created at: {stego_path:?}"
    );

    // No output path: the name is built from the decoded extension.
    handle_decode(DecodeArgs {
        image: stego_path,
        output: None,
    })?;
    let recovered_path = dir.path().join("decoded.sh");
    assert!(
        recovered_path.exists(),
        "Default decode output should be created at: {recovered_path:?}"
    );
    assert_eq!(fs::read_to_string(&recovered_path)?, "echo hidden\n");

    Ok(())
}

#[test]
fn header_and_tail_are_byte_identical() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let carrier_path = dir.path().join("carrier.bmp");
    let secret_path = dir.path().join("secret.c");
    let stego_path = dir.path().join("out.bmp");

    create_test_carrier(&carrier_path, 32, 32);
    let secret = "int main(void) { return 0; }\n";
    fs::write(&secret_path, secret)?;

    handle_encode(EncodeArgs {
        carrier: carrier_path.clone(),
        secret: secret_path,
        output: Some(stego_path.clone()),
    })?;

    let original = fs::read(&carrier_path)?;
    let stego = fs::read(&stego_path)?;
    assert_eq!(original.len(), stego.len());

    assert_eq!(
        original[..BMP_HEADER_SIZE],
        stego[..BMP_HEADER_SIZE],
        "BMP header must be untouched."
    );

    let embedded_end = BMP_HEADER_SIZE + bmp::required_bits(".c".len(), secret.len() as u64) as usize;
    assert_eq!(
        original[embedded_end..],
        stego[embedded_end..],
        "Pixel bytes past the embedded region must be untouched."
    );

    // Inside the embedded region only LSBs may differ.
    for (before, after) in original[BMP_HEADER_SIZE..embedded_end]
        .iter()
        .zip(&stego[BMP_HEADER_SIZE..embedded_end])
    {
        assert_eq!(before & 0xFE, after & 0xFE);
    }

    Ok(())
}

#[test]
fn encode_fails_when_the_carrier_is_too_small() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let carrier_path = dir.path().join("small.bmp");
    let secret_path = dir.path().join("large.txt");

    // 10x10 image: 300 bytes of capacity, far below the payload bits.
    create_test_carrier(&carrier_path, 10, 10);
    fs::write(&secret_path, "a".repeat(5000))?;

    let result = handle_encode(EncodeArgs {
        carrier: carrier_path,
        secret: secret_path,
        output: Some(dir.path().join("out.bmp")),
    });

    let err = result.expect_err("Encoding must fail for an undersized carrier.");
    assert!(
        format!("{err:#}").contains("not enough capacity"),
        "Unexpected error: {err:#}"
    );

    Ok(())
}

#[test]
fn decoding_a_plain_image_fails_the_magic_check() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let plain_path = dir.path().join("plain.bmp");
    create_test_carrier(&plain_path, 32, 32);

    let result = handle_decode(DecodeArgs {
        image: plain_path,
        output: Some(dir.path().join("out.txt")),
    });

    let err = result.expect_err("Decoding a plain image must fail.");
    assert!(
        format!("{err:#}").contains("not a stego image"),
        "Unexpected error: {err:#}"
    );

    Ok(())
}

#[test]
fn arguments_are_validated_before_any_io() -> anyhow::Result<()> {
    let dir = tempdir()?;

    // None of these files exist; validation must reject the names first.
    let result = handle_encode(EncodeArgs {
        carrier: dir.path().join("carrier.png"),
        secret: dir.path().join("secret.txt"),
        output: None,
    });
    let err = result.expect_err("A non-BMP carrier name must be rejected.");
    assert!(format!("{err:#}").contains("must be a .bmp"));

    let result = handle_encode(EncodeArgs {
        carrier: dir.path().join("carrier.bmp"),
        secret: dir.path().join("secret.exe"),
        output: None,
    });
    let err = result.expect_err("An off-list secret extension must be rejected.");
    assert!(format!("{err:#}").contains("Secret file must be one of"));

    Ok(())
}

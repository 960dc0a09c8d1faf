use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::flip_vertical_in_place;

/// Decoded 8-bit RGBA pixels, rows bottom-to-top (flipped on load).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes an encoded image (PNG, JPEG, BMP) to RGBA8 and flips it vertically,
/// so that row 0 is the bottom of the picture and UV (0, 0) is bottom-left.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    let decoded = image::load_from_memory(bytes).context("failed to decode image")?;

    let mut rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    anyhow::ensure!(
        width > 0 && height > 0,
        "image has zero extent ({width}x{height})"
    );

    flip_vertical_in_place(&mut rgba);

    Ok(RgbaImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Reads and decodes an image file. See [`decode_rgba`].
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image {}", path.display()))?;

    let image =
        decode_rgba(&bytes).with_context(|| format!("failed to load image {}", path.display()))?;

    log::info!("loaded image {} ({}x{})", path.display(), image.width, image.height);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba};

    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 128];

    /// 2x2 PNG: top row red, bottom row blue.
    fn two_row_png() -> Vec<u8> {
        let img = image::RgbaImage::from_fn(2, 2, |_, y| if y == 0 { Rgba(RED) } else { Rgba(BLUE) });
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    // ── decode ────────────────────────────────────────────────────────────

    #[test]
    fn decoded_size_is_rgba8() {
        let img = decode_rgba(&two_row_png()).unwrap();
        assert_eq!((img.width, img.height), (2, 2));
        assert_eq!(img.pixels.len(), 2 * 2 * 4);
    }

    #[test]
    fn rows_are_flipped_vertically() {
        let img = decode_rgba(&two_row_png()).unwrap();
        // First stored row is the bottom of the picture.
        assert_eq!(&img.pixels[0..4], &BLUE);
        assert_eq!(&img.pixels[4..8], &BLUE);
        assert_eq!(&img.pixels[8..12], &RED);
        assert_eq!(&img.pixels[12..16], &RED);
    }

    #[test]
    fn rgb_input_gains_opaque_alpha() {
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");

        let decoded = decode_rgba(&bytes).unwrap();
        assert_eq!(decoded.pixels, vec![10, 20, 30, 255]);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn garbage_is_rejected() {
        assert!(decode_rgba(b"definitely not an image").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_rgba(Path::new("no/such/image.png")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/image.png"));
    }
}

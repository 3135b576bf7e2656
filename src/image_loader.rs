//! Image decoding helpers.
//!
//! Decoding runs on a rayon worker thread, so only raw RGB8 data crosses
//! thread boundaries; the `slint::Image` is constructed on the UI thread.

use crate::error::{AppError, Result};
use slint::{Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes the image at `path` into RGB8 pixel data.
///
/// Blocking; call from a worker thread, not the UI thread.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .decode()?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width, height))
}

/// Wraps previously decoded RGB8 data in a `slint::Image`.
///
/// Must run on the UI thread.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    slint::Image::from_rgb8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn decoding_a_real_png_yields_pixels() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("pixel.png");

        let img = image::RgbImage::from_pixel(2, 3, image::Rgb([10, 20, 30]));
        img.save(&path).expect("failed to write test png");

        let (data, width, height) = load_image_blocking(&path).expect("decode failed");
        assert_eq!((width, height), (2, 3));
        assert_eq!(data.len(), 2 * 3 * 3);
        assert_eq!(&data[..3], &[10, 20, 30]);
    }

    #[test]
    fn missing_file_is_an_image_load_error() {
        let err = load_image_blocking(Path::new("does-not-exist.png")).unwrap_err();
        assert!(matches!(err, AppError::ImageLoad(_)));
    }

    #[test]
    fn corrupt_file_is_an_image_load_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not an image").unwrap();

        let err = load_image_blocking(&path).unwrap_err();
        assert!(matches!(err, AppError::ImageLoad(_)));
    }
}

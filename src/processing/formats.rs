//! Maps output formats to the image crate's encoders.
//!
//! One save function per allow-listed format, dispatched on the output
//! path's extension. Lossy quality is fixed at 85; PNG gets its strongest
//! compression since it has no lossy quality knob.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};

use crate::utils::{ImageFormat, ResizerError, format_from_path};

type Result<T> = std::result::Result<T, ResizerError>;

/// Quality applied to lossy output (0-100 scale).
const JPEG_QUALITY: u8 = 85;

/// Writes `image` to `output_path`, picking the encoder from the path's
/// extension.
///
/// The extension must be on the supported allow-list; anything else fails
/// with [`ResizerError::Format`].
pub fn save_image(image: &DynamicImage, output_path: &Path) -> Result<()> {
    let format = format_from_path(output_path).ok_or_else(|| {
        ResizerError::format(format!(
            "Unsupported output format: {}",
            output_path.display()
        ))
    })?;

    match format {
        ImageFormat::Jpeg => save_jpeg(image, output_path),
        ImageFormat::Png => save_png(image, output_path),
        ImageFormat::Gif => save_gif(image, output_path),
        ImageFormat::Bmp => save_bmp(image, output_path),
    }
}

fn create_writer(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ResizerError::write(path, e))
}

/// Saves `image` as JPEG at the fixed lossy quality.
///
/// JPEG carries no alpha channel, so transparent sources are flattened to
/// RGB before encoding.
fn save_jpeg(image: &DynamicImage, path: &Path) -> Result<()> {
    let flattened;
    let image = if image.color().has_alpha() {
        flattened = DynamicImage::ImageRgb8(image.to_rgb8());
        &flattened
    } else {
        image
    };

    let encoder = JpegEncoder::new_with_quality(create_writer(path)?, JPEG_QUALITY);
    image
        .write_with_encoder(encoder)
        .map_err(|e| ResizerError::write(path, e))
}

/// Saves `image` as PNG with the strongest compression the encoder offers.
fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(
        create_writer(path)?,
        CompressionType::Best,
        PngFilter::Adaptive,
    );
    image
        .write_with_encoder(encoder)
        .map_err(|e| ResizerError::write(path, e))
}

/// Saves `image` as a single-frame GIF.
fn save_gif(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut writer = create_writer(path)?;
    image
        .write_to(&mut writer, image::ImageFormat::Gif)
        .map_err(|e| ResizerError::write(path, e))
}

/// Saves `image` as BMP.
fn save_bmp(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut writer = create_writer(path)?;
    image
        .write_to(&mut writer, image::ImageFormat::Bmp)
        .map_err(|e| ResizerError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn rgba_fixture(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 100, 50, 128]),
        ))
    }

    #[test]
    fn unsupported_extension_fails_with_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_image(&rgba_fixture(4, 4), &dir.path().join("out.webp"));
        assert!(matches!(result, Err(ResizerError::Format(_))));
    }

    #[test]
    fn jpeg_flattens_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save_image(&rgba_fixture(8, 8), &path).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert!(!reloaded.color().has_alpha());
        assert_eq!(reloaded.dimensions(), (8, 8));
    }

    #[test]
    fn every_allow_listed_format_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["out.png", "out.jpg", "out.gif", "out.bmp"] {
            let path = dir.path().join(name);
            save_image(&rgba_fixture(6, 4), &path).unwrap();
            let reloaded = image::open(&path).unwrap();
            assert_eq!(reloaded.dimensions(), (6, 4), "{name}");
        }
    }

    #[test]
    fn unwritable_destination_fails_with_write_error() {
        let result = save_image(
            &rgba_fixture(4, 4),
            Path::new("/nonexistent-dir/out.png"),
        );
        assert!(matches!(result, Err(ResizerError::Write { .. })));
    }
}

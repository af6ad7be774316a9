// Iconsmith - core/reference.rs
//
// Standalone reference bitmap encoding (PNG via the `image` crate).

use crate::core::model::RasterImage;
use crate::util::error::{EncodeSource, IconError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;

/// Encode `image` as an RGBA8 PNG. `path` is only used to give errors context.
pub fn encode_png(image: &RasterImage, path: &Path) -> Result<Vec<u8>> {
    let encode_err = |source: EncodeSource| IconError::Encode {
        path: path.to_path_buf(),
        format: "PNG",
        source,
    };

    let expected = RasterImage::expected_len(image.size);
    if image.rgba.len() != expected {
        return Err(encode_err(EncodeSource::BufferSize {
            expected,
            actual: image.rgba.len(),
        }));
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(&image.rgba, image.size, image.size, ExtendedColorType::Rgba8)
        .map_err(|e| encode_err(EncodeSource::Image(e)))?;
    Ok(bytes)
}

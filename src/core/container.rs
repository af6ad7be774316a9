// Iconsmith - core/container.rs
//
// Multi-resolution ICO encoding. Core layer: produces bytes, never touches
// the filesystem, so a failed encode cannot leave a truncated file behind.

use crate::core::model::RasterImage;
use crate::util::error::{EncodeSource, IconError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::io::Cursor;
use std::path::Path;

/// Encode `images` into one ICO, in the order given.
///
/// The first image is the base entry; the rest follow as additional frames.
/// Each entry is tagged with its own (width, height). `path` is only used to
/// give errors context.
pub fn encode_ico(images: &[RasterImage], path: &Path) -> Result<Vec<u8>> {
    let encode_err = |source: EncodeSource| IconError::Encode {
        path: path.to_path_buf(),
        format: "ICO",
        source,
    };

    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for image in images {
        let expected = RasterImage::expected_len(image.size);
        if image.rgba.len() != expected {
            return Err(encode_err(EncodeSource::BufferSize {
                expected,
                actual: image.rgba.len(),
            }));
        }

        // ico 0.3: from_rgba_data returns IconImage directly (no Result).
        let icon_image = IconImage::from_rgba_data(image.size, image.size, image.rgba.clone());
        let entry =
            IconDirEntry::encode(&icon_image).map_err(|e| encode_err(EncodeSource::Io(e)))?;
        icon_dir.add_entry(entry);
        tracing::debug!(size = image.size, "ICO layer added");
    }

    let mut bytes = Vec::new();
    icon_dir
        .write(&mut bytes)
        .map_err(|e| encode_err(EncodeSource::Io(e)))?;
    Ok(bytes)
}

/// List the (width, height) of every entry in an encoded ICO, in file order.
pub fn entry_dimensions(ico_bytes: &[u8]) -> std::io::Result<Vec<(u32, u32)>> {
    let icon_dir = IconDir::read(Cursor::new(ico_bytes))?;
    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}

/// Decode every entry of an encoded ICO back into raster images.
pub fn decode_entries(ico_bytes: &[u8]) -> std::io::Result<Vec<RasterImage>> {
    let icon_dir = IconDir::read(Cursor::new(ico_bytes))?;
    icon_dir
        .entries()
        .iter()
        .map(|entry| -> std::io::Result<RasterImage> {
            let image = entry.decode()?;
            Ok(RasterImage {
                size: image.width(),
                rgba: image.rgba_data().to_vec(),
            })
        })
        .collect()
}

// Iconsmith - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::{Path, PathBuf};

// =============================================================================
// Size list
// =============================================================================

/// Ordered list of edge lengths embedded in the icon container.
///
/// Guaranteed non-empty, free of duplicates, and within
/// `MIN_RASTER_SIZE..=MAX_ICO_SIZE`. The first entry is the base image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeList(Vec<u32>);

impl SizeList {
    /// Validate and wrap a list of sizes, preserving order.
    pub fn new(sizes: Vec<u32>) -> Result<Self, ConfigError> {
        if sizes.is_empty() {
            return Err(ConfigError::EmptySizeList);
        }
        for (i, &size) in sizes.iter().enumerate() {
            if !(constants::MIN_RASTER_SIZE..=constants::MAX_ICO_SIZE).contains(&size) {
                return Err(ConfigError::ValueOutOfRange {
                    field: "sizes".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{}",
                        constants::MIN_RASTER_SIZE,
                        constants::MAX_ICO_SIZE
                    ),
                });
            }
            if sizes[..i].contains(&size) {
                return Err(ConfigError::DuplicateSize { size });
            }
        }
        Ok(Self(sizes))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// The base image size (first entry).
    pub fn base(&self) -> u32 {
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built through `new`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SizeList {
    fn default() -> Self {
        Self(constants::DEFAULT_ICO_SIZES.to_vec())
    }
}

// =============================================================================
// Raster image
// =============================================================================

/// A square, straight-alpha RGBA8 bitmap.
///
/// Owned by whichever build step produced it and dropped once encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Edge length in pixels (width == height).
    pub size: u32,

    /// Row-major RGBA bytes, `size * size * 4` long.
    pub rgba: Vec<u8>,
}

impl RasterImage {
    /// Number of bytes a raster of this edge length must hold.
    pub fn expected_len(size: u32) -> usize {
        size as usize * size as usize * 4
    }

    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = (y as usize * self.size as usize + x as usize) * 4;
        self.rgba
            .get(i..i + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

// =============================================================================
// Build plan
// =============================================================================

/// Everything one build run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// The SVG to render.
    pub source_path: PathBuf,

    /// Where the multi-resolution ICO is written.
    pub ico_path: PathBuf,

    /// Where the standalone reference PNG is written.
    pub png_path: PathBuf,

    /// Sizes embedded in the ICO, in order.
    pub sizes: SizeList,

    /// Edge length of the reference PNG.
    pub reference_size: u32,
}

impl BuildPlan {
    /// Default plan: `icon.svg` in, `icon.ico` and `icon.png` out, all in `asset_dir`.
    pub fn for_asset_dir(asset_dir: &Path) -> Self {
        Self {
            source_path: asset_dir.join(constants::SOURCE_FILE_NAME),
            ico_path: asset_dir.join(constants::ICO_FILE_NAME),
            png_path: asset_dir.join(constants::PNG_FILE_NAME),
            sizes: SizeList::default(),
            reference_size: constants::DEFAULT_REFERENCE_SIZE,
        }
    }

    /// Check invariants that the type system does not already enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(constants::MIN_RASTER_SIZE..=constants::MAX_REFERENCE_SIZE)
            .contains(&self.reference_size)
        {
            return Err(ConfigError::ValueOutOfRange {
                field: "reference_size".to_string(),
                value: self.reference_size.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_RASTER_SIZE,
                    constants::MAX_REFERENCE_SIZE
                ),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Progress and results
// =============================================================================

/// Progress events emitted while a build runs, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildProgress {
    /// The build has started reading `source`.
    Started { source: PathBuf },

    /// The SVG parsed; these are its intrinsic dimensions.
    SourceLoaded { width: f32, height: f32 },

    /// One container frame has been rendered.
    SizeRendered { size: u32 },

    /// The ICO is on disk.
    ContainerWritten { path: PathBuf, sizes: Vec<u32> },

    /// The reference PNG is on disk.
    ReferenceWritten { path: PathBuf, size: u32 },
}

/// Summary of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub ico_path: PathBuf,
    pub ico_sizes: Vec<u32>,
    pub ico_bytes: usize,
    pub png_path: PathBuf,
    pub png_size: u32,
    pub png_bytes: usize,
}

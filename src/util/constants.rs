// Iconsmith - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Iconsmith";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Asset layout
// =============================================================================

/// Name of the asset directory that sits beside the crate root.
pub const ASSET_DIR_NAME: &str = "public";

/// Vector source file name inside the asset directory.
pub const SOURCE_FILE_NAME: &str = "icon.svg";

/// Multi-resolution icon container file name.
pub const ICO_FILE_NAME: &str = "icon.ico";

/// Reference bitmap file name.
pub const PNG_FILE_NAME: &str = "icon.png";

// =============================================================================
// Raster sizes
// =============================================================================

/// Sizes embedded in the icon container, in container order.
/// The first entry is the base image; the rest are appended frames.
pub const DEFAULT_ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// Edge length of the standalone reference bitmap.
pub const DEFAULT_REFERENCE_SIZE: u32 = 512;

/// Smallest edge length any raster may have.
pub const MIN_RASTER_SIZE: u32 = 1;

/// Largest edge length an ICO directory entry can describe.
/// The format stores dimensions in one byte, with 0 meaning 256.
pub const MAX_ICO_SIZE: u32 = 256;

/// Upper bound on the reference bitmap edge length.
/// 4096² RGBA is 64 MiB, which is already far beyond any store listing.
pub const MAX_REFERENCE_SIZE: u32 = 4096;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in the config file.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name, looked up in the parent of the asset directory.
pub const CONFIG_FILE_NAME: &str = "iconsmith.toml";

/// Largest config file that will be read.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// Console guidance
// =============================================================================

/// Command that installs a build with rendering support.
pub const INSTALL_HINT: &str = "cargo install iconsmith --features render";

/// Online converter suggested when the build cannot run.
pub const FALLBACK_CONVERTER_URL: &str = "https://convertio.co/svg-ico/";

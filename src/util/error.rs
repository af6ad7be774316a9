// Iconsmith - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every failure point of the build has its own variant so callers can tell
// them apart; the binary collapses them into two console tiers.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Coarse classification of an [`IconError`] used for console reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    /// The rasterisation capability is missing from this build.
    EnvironmentUnavailable,
    /// Anything else: reading, parsing, rendering, encoding, writing.
    OperationFailed,
}

/// Top-level error type for all Iconsmith operations.
#[derive(Debug)]
pub enum IconError {
    /// The binary was built without a rasteriser.
    CapabilityUnavailable {
        capability: &'static str,
        feature: &'static str,
    },

    /// The vector source could not be read.
    SourceRead { path: PathBuf, source: io::Error },

    /// The vector source is not a valid SVG document.
    SourceParse { path: PathBuf, reason: String },

    /// Rendering at a particular size failed.
    Rasterize { size: u32, reason: String },

    /// An output could not be encoded.
    Encode {
        path: PathBuf,
        format: &'static str,
        source: EncodeSource,
    },

    /// An encoded output could not be written to disk.
    Write { path: PathBuf, source: io::Error },

    /// The build plan is invalid.
    Config(ConfigError),
}

/// Underlying encoder failure.
#[derive(Debug)]
pub enum EncodeSource {
    /// The ICO encoder reports through `std::io`.
    Io(io::Error),
    /// The PNG encoder.
    Image(image::ImageError),
    /// Pixel buffer does not match the declared dimensions.
    BufferSize { expected: usize, actual: usize },
}

impl IconError {
    /// Which console tier this error belongs to.
    pub fn tier(&self) -> ErrorTier {
        match self {
            Self::CapabilityUnavailable { .. } => ErrorTier::EnvironmentUnavailable,
            _ => ErrorTier::OperationFailed,
        }
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapabilityUnavailable {
                capability,
                feature,
            } => write!(
                f,
                "{capability} is not available in this build (enable the '{feature}' feature)"
            ),
            Self::SourceRead { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::SourceParse { path, reason } => {
                write!(f, "'{}' is not a valid SVG document: {reason}", path.display())
            }
            Self::Rasterize { size, reason } => {
                write!(f, "Failed to render {size}x{size}: {reason}")
            }
            Self::Encode {
                path,
                format,
                source,
            } => write!(
                f,
                "Failed to encode {format} for '{}': {source}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceRead { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for EncodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Image(e) => write!(f, "{e}"),
            Self::BufferSize { expected, actual } => write!(
                f,
                "pixel buffer holds {actual} bytes, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for EncodeSource {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::BufferSize { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration and build-plan validation.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file exceeds the maximum allowed size.
    FileTooLarge { path: PathBuf, size: u64, max_size: u64 },

    /// The size list has no entries.
    EmptySizeList,

    /// A size appears more than once in the size list.
    DuplicateSize { size: u32 },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::EmptySizeList => write!(f, "Size list must contain at least one size"),
            Self::DuplicateSize { size } => {
                write!(f, "Size {size} appears more than once in the size list")
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "'{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for IconError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Iconsmith results.
pub type Result<T> = std::result::Result<T, IconError>;

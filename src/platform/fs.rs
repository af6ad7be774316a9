// Iconsmith - platform/fs.rs
//
// Filesystem access for the build: default asset location, reading the
// vector source, and writing finished outputs.

use crate::util::constants;
use crate::util::error::{IconError, Result};
use std::path::{Path, PathBuf};

/// The asset directory beside the crate root (`<crate>/public`).
///
/// Resolved from where the tool lives rather than the working directory, so
/// `cargo run` from any subdirectory targets the same assets.
pub fn default_asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(constants::ASSET_DIR_NAME)
}

/// Read the whole vector source into memory.
pub fn read_source(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| IconError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Vector source read");
    Ok(text)
}

/// Write an encoded output in one go.
///
/// The file is created, written, and closed here; nothing is left open on
/// any return path.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| IconError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Output written");
    Ok(())
}

// Iconsmith - platform/config.rs
//
// Optional iconsmith.toml loading with startup validation.
//
// The file lives beside the asset directory (in the project root) unless a
// path is given explicitly. Every key is optional; with no file at all the
// tool runs the standard pipeline.

use crate::core::model::{BuildPlan, SizeList};
use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::{Path, PathBuf};

/// Where the config file is expected for a given asset directory.
pub fn default_config_path(asset_dir: &Path) -> PathBuf {
    asset_dir
        .parent()
        .unwrap_or(asset_dir)
        .join(constants::CONFIG_FILE_NAME)
}

/// Raw deserialisable shape of iconsmith.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[paths]` section.
    pub paths: PathsSection,
    /// `[icon]` section.
    pub icon: IconSection,
    /// `[build]` section.
    pub build: BuildSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[paths]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Asset directory, relative to the config file's directory.
    pub asset_dir: Option<String>,
    /// Vector source file name inside the asset directory.
    pub source: Option<String>,
    /// ICO output file name inside the asset directory.
    pub ico: Option<String>,
    /// PNG output file name inside the asset directory.
    pub png: Option<String>,
}

/// `[icon]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct IconSection {
    /// Sizes embedded in the ICO, in order.
    pub sizes: Option<Vec<u32>>,
    /// Reference PNG edge length.
    pub reference_size: Option<u32>,
}

/// `[build]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Exit non-zero when the build fails.
    pub strict: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from iconsmith.toml.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Asset directory override, already resolved against the config file.
    pub asset_dir: Option<PathBuf>,
    pub source_name: String,
    pub ico_name: String,
    pub png_name: String,
    pub sizes: SizeList,
    pub reference_size: u32,
    pub strict: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            source_name: constants::SOURCE_FILE_NAME.to_string(),
            ico_name: constants::ICO_FILE_NAME.to_string(),
            png_name: constants::PNG_FILE_NAME.to_string(),
            sizes: SizeList::default(),
            reference_size: constants::DEFAULT_REFERENCE_SIZE,
            strict: false,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Build plan for `asset_dir` using this configuration.
    pub fn plan(&self, asset_dir: &Path) -> BuildPlan {
        BuildPlan {
            source_path: asset_dir.join(&self.source_name),
            ico_path: asset_dir.join(&self.ico_name),
            png_path: asset_dir.join(&self.png_name),
            sizes: self.sizes.clone(),
            reference_size: self.reference_size,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings.
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config file found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match read_limited(config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "{}. Using defaults.",
                ConfigError::TomlParse {
                    path: config_path.to_path_buf(),
                    source: e,
                }
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config file");

    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    let config = validate(raw, base_dir, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_limited(path: &Path) -> Result<String, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }
    std::fs::read_to_string(path).map_err(io_err)
}

/// Validate each field, accumulating warnings for anything rejected.
fn validate(raw: RawConfig, base_dir: &Path, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Paths --
    if let Some(dir) = raw.paths.asset_dir.filter(|d| !d.is_empty()) {
        config.asset_dir = Some(base_dir.join(dir));
    }
    for (field, value, slot) in [
        ("source", raw.paths.source, &mut config.source_name),
        ("ico", raw.paths.ico, &mut config.ico_name),
        ("png", raw.paths.png, &mut config.png_name),
    ] {
        match value {
            Some(name) if is_plain_file_name(&name) => *slot = name,
            Some(name) => warnings.push(format!(
                "[paths] {field} = \"{name}\" must be a plain file name. Using default ({slot})."
            )),
            None => {}
        }
    }

    // -- Icon: sizes --
    if let Some(sizes) = raw.icon.sizes {
        match SizeList::new(sizes) {
            Ok(list) => config.sizes = list,
            Err(e) => warnings.push(format!(
                "[icon] sizes: {e}. Using default ({:?}).",
                constants::DEFAULT_ICO_SIZES
            )),
        }
    }

    // -- Icon: reference_size --
    if let Some(size) = raw.icon.reference_size {
        if (constants::MIN_RASTER_SIZE..=constants::MAX_REFERENCE_SIZE).contains(&size) {
            config.reference_size = size;
        } else {
            warnings.push(format!(
                "[icon] reference_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_RASTER_SIZE,
                constants::MAX_REFERENCE_SIZE,
                constants::DEFAULT_REFERENCE_SIZE,
            ));
        }
    }

    // -- Build: strict --
    if let Some(strict) = raw.build.strict {
        config.strict = strict;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    config
}

/// True when `name` has exactly one normal path component.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn missing_file_gives_defaults_silently() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&tmp.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn full_config_is_applied() {
        let (tmp, path) = write_config(
            r#"
            [paths]
            asset_dir = "assets"
            source = "logo.svg"

            [icon]
            sizes = [32, 16]
            reference_size = 1024

            [build]
            strict = true

            [logging]
            level = "DEBUG"
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.asset_dir, Some(tmp.path().join("assets")));
        assert_eq!(config.source_name, "logo.svg");
        assert_eq!(config.ico_name, "icon.ico");
        assert_eq!(config.sizes.as_slice(), &[32, 16]);
        assert_eq!(config.reference_size, 1024);
        assert!(config.strict);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let (_tmp, path) = write_config(
            r#"
            [paths]
            ico = "../elsewhere.ico"

            [icon]
            sizes = [16, 300]
            reference_size = 0

            [logging]
            level = "loud"
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 4, "warnings: {warnings:?}");
        assert_eq!(config.ico_name, "icon.ico");
        assert_eq!(config.sizes, SizeList::default());
        assert_eq!(config.reference_size, 512);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn unparseable_file_gives_defaults_and_warning() {
        let (_tmp, path) = write_config("[icon\nsizes = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_tmp, path) = write_config("[future]\nshiny = true\n");
        let (_config, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }

    #[test]
    fn plan_uses_configured_names() {
        let config = AppConfig {
            png_name: "store.png".to_string(),
            reference_size: 300,
            ..AppConfig::default()
        };
        let plan = config.plan(Path::new("public"));
        assert_eq!(plan.png_path, Path::new("public/store.png"));
        assert_eq!(plan.source_path, Path::new("public/icon.svg"));
        assert_eq!(plan.reference_size, 300);
    }

    #[test]
    fn config_path_sits_beside_asset_dir() {
        assert_eq!(
            default_config_path(Path::new("proj/public")),
            Path::new("proj/iconsmith.toml")
        );
    }
}

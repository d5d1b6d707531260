//! Map configuration file handling.
//!
//! Groups the user-adjustable parts of the draw session: polygon shape
//! style, tile layer options and UI language. Files are JSON or TOML,
//! picked by extension, and live in the platform config directory by
//! default.

use std::path::{Path, PathBuf};

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

use crate::draw::ShapeStyle;
use crate::error::{SettingsError, SettingsResult};
use crate::map_options::TileLayerOptions;

const APP_DIR: &str = "wktmap";
const CONFIG_FILE: &str = "config.json";

/// File formats accepted by [`MapConfig::load_from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Map drawing configuration
///
/// Keys are camelCase at every level, matching the nested option records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Style of drawn polygons
    pub shape_style: ShapeStyle,
    /// Background tile layer
    pub tile_layer: TileLayerOptions,
    /// Tile URL template
    pub tile_url: String,
    /// UI language code used to translate tooltip text
    pub language: String,
    /// CSS class given to every drawn polygon path
    pub shape_class_name: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            shape_style: ShapeStyle::default(),
            tile_layer: TileLayerOptions::default(),
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            language: "en".to_string(),
            shape_class_name: String::new(),
        }
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a `.json` or `.toml` file and validate it.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded map config");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "no map config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file, in the format named by its extension.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved map config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let style = &self.shape_style;
        if !(0.0..=1.0).contains(&style.opacity) {
            return Err(SettingsError::invalid(
                "shapeStyle.opacity",
                "must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&style.fill_opacity) {
            return Err(SettingsError::invalid(
                "shapeStyle.fillOpacity",
                "must be between 0 and 1",
            ));
        }
        if !style.weight.is_finite() || style.weight <= 0.0 {
            return Err(SettingsError::invalid("shapeStyle.weight", "must be finite and > 0"));
        }

        if self.tile_layer.min_zoom > self.tile_layer.max_zoom {
            return Err(SettingsError::invalid(
                "tileLayer.minZoom",
                format!(
                    "{} is above maxZoom {}",
                    self.tile_layer.min_zoom, self.tile_layer.max_zoom
                ),
            ));
        }

        if self.language.trim().is_empty() {
            return Err(SettingsError::invalid("language", "must not be empty"));
        }

        Ok(())
    }

    /// Default config file location in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }
}

static GLOBAL_CONFIG: OnceCell<MapConfig> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<MapConfig> = Lazy::new(MapConfig::default);

/// Installs the process-wide configuration. Only the first call succeeds.
pub fn init_global_config(config: MapConfig) -> SettingsResult<()> {
    config.validate()?;
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| SettingsError::AlreadyInitialized)?;
    tracing::info!("map config initialized");
    Ok(())
}

/// The process-wide configuration, or the defaults if none was installed.
pub fn global_config() -> &'static MapConfig {
    GLOBAL_CONFIG.get().unwrap_or(&*DEFAULT_CONFIG)
}

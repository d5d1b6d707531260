//! # WktMap
//!
//! Draw points and polygons on a map and exchange them as Well-Known Text.
//!
//! ## Architecture
//!
//! WktMap is organized as a workspace with multiple crates:
//!
//! 1. **wktmap-core** - Geometry types, layer kinds, draw mode, errors
//! 2. **wktmap-designer** - WKT codec, GeoJSON bridge, layer tree flattening, map draw state
//! 3. **wktmap-settings** - Draw element table, draw and map option tables, config files
//! 4. **wktmap-ui** - Element tree, tooltip augmentation, draw toolbar wiring
//! 5. **wktmap** - This facade: re-exports, logging and startup
//!
//! ## Features
//!
//! - **WKT Interchange**: `POINT` and `POLYGON` decode/encode with positioned parse errors
//! - **Layer Normalization**: nested groups flattened to ordered, classified leaves
//! - **Draw Session Setup**: per-kind toolbar metadata, shape style, map option tables
//! - **Toolbar Tooltips**: custom tooltips with cancel text while drawing

use std::path::Path;

use anyhow::Context;

pub use wktmap_core::{
    Coordinate, DrawMode, Error, Geometry, LayerKind, Polygon, Result, WktError,
};

pub use wktmap_designer::{
    classify, classify_all, decode, encode, flatten, flatten_group, flatten_into_group,
    geojson_to_wkt, parse_geojson, wkt_to_geojson, DrawEvent, DrawableLayer, Editing,
    GeoJsonGeometry, LayerGroup, LayerId, LayerNode, MapDrawState, ToWkt,
};

pub use wktmap_settings::{
    draw_element_options, draw_options, global_config, init_global_config, ControlPosition,
    DrawElementOptions, DrawOptions, MapConfig, SettingsError, ShapeStyle, TileLayerOptions,
    ATTRIBUTION_OPTIONS, MAP_OPTIONS, MAP_READ_ONLY_OPTIONS, POLYGON_SHAPE_STYLE, ZOOM_OPTIONS,
};

pub use wktmap_ui::{
    attach_draw_tooltips, augment_tooltip, DrawControlElements, DrawControls, ElementId,
    ElementTree, TextCatalog, Translator, UiError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

/// Initialize logging with the given output format.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
    }
    .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Loads the map configuration and installs it process-wide.
///
/// With no `path`, the platform default location is used; a missing file
/// there means defaults.
pub fn init_config(path: Option<&Path>) -> anyhow::Result<&'static MapConfig> {
    let config = match path {
        Some(path) => MapConfig::load_from_file(path)
            .with_context(|| format!("Failed to load map config from {}", path.display()))?,
        None => {
            let path = MapConfig::default_path().context("Failed to locate config directory")?;
            MapConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load map config from {}", path.display()))?
        }
    };

    init_global_config(config).context("Failed to install map config")?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "wktmap configured");
    Ok(global_config())
}

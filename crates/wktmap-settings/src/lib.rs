//! WktMap Settings Crate
//!
//! Draw-session configuration, map option tables and config file handling.

pub mod config;
pub mod draw;
pub mod error;
pub mod map_options;

pub use config::{global_config, init_global_config, ConfigFormat, MapConfig};
pub use draw::{
    draw_element_options, draw_options, draw_options_with_style, DrawElementOptions, DrawOptions,
    ShapeStyle, POLYGON_SHAPE_STYLE,
};
pub use error::{SettingsError, SettingsResult};
pub use map_options::{
    AttributionOptions, ControlPosition, MapOptions, TileLayerOptions, ZoomOptions,
    ATTRIBUTION_OPTIONS, MAP_OPTIONS, MAP_READ_ONLY_OPTIONS, ZOOM_OPTIONS,
};

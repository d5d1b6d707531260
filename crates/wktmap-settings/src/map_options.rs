//! Fixed option tables for the map view.
//!
//! These are handed to the rendering engine unchanged when a map, its
//! controls and its tile layer are created.

use serde::{Deserialize, Serialize};

/// Corner of the map a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }
}

impl std::fmt::Display for ControlPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for creating a map.
///
/// The built-in zoom and attribution controls are turned off so they can be
/// re-added with [`ZOOM_OPTIONS`] and [`ATTRIBUTION_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub zoom_control: bool,
    pub attribution_control: bool,
    pub scroll_wheel_zoom: bool,
    pub dragging: bool,
    pub tap: bool,
}

pub const MAP_OPTIONS: MapOptions = MapOptions {
    zoom_control: false,
    attribution_control: false,
    scroll_wheel_zoom: true,
    dragging: true,
    tap: true,
};

/// Map options for a view the user can look at but not move.
pub const MAP_READ_ONLY_OPTIONS: MapOptions = MapOptions {
    scroll_wheel_zoom: false,
    dragging: false,
    tap: false,
    ..MAP_OPTIONS
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionOptions {
    pub prefix: &'static str,
    pub position: ControlPosition,
}

pub const ATTRIBUTION_OPTIONS: AttributionOptions = AttributionOptions {
    prefix: "",
    position: ControlPosition::BottomLeft,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomOptions {
    pub position: ControlPosition,
    pub zoom_in_text: &'static str,
    pub zoom_out_text: &'static str,
}

/// Zoom buttons carry no text; they are drawn with icons.
pub const ZOOM_OPTIONS: ZoomOptions = ZoomOptions {
    position: ControlPosition::BottomRight,
    zoom_in_text: "",
    zoom_out_text: "",
};

/// Tile layer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub cross_origin: String,
}

pub const DEFAULT_MIN_ZOOM: u8 = 2;
pub const DEFAULT_MAX_ZOOM: u8 = 19;
pub const DEFAULT_CROSS_ORIGIN: &str = "anonymous";

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            cross_origin: DEFAULT_CROSS_ORIGIN.to_string(),
        }
    }
}

impl TileLayerOptions {
    /// Clamps `zoom` into the layer's zoom range.
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_options() {
        assert!(!MAP_OPTIONS.zoom_control);
        assert!(!MAP_OPTIONS.attribution_control);
        assert!(MAP_OPTIONS.dragging);
    }

    #[test]
    fn test_read_only_options() {
        assert!(!MAP_READ_ONLY_OPTIONS.scroll_wheel_zoom);
        assert!(!MAP_READ_ONLY_OPTIONS.dragging);
        assert!(!MAP_READ_ONLY_OPTIONS.tap);
        assert!(!MAP_READ_ONLY_OPTIONS.zoom_control);
        assert!(!MAP_READ_ONLY_OPTIONS.attribution_control);
    }

    #[test]
    fn test_control_positions() {
        assert_eq!(ATTRIBUTION_OPTIONS.position, ControlPosition::BottomLeft);
        assert_eq!(ATTRIBUTION_OPTIONS.prefix, "");
        assert_eq!(ZOOM_OPTIONS.position, ControlPosition::BottomRight);
        assert_eq!(ZOOM_OPTIONS.zoom_in_text, "");
        assert_eq!(ZOOM_OPTIONS.zoom_out_text, "");
    }

    #[test]
    fn test_control_position_serde() {
        let json = serde_json::to_string(&ControlPosition::BottomRight).unwrap();
        assert_eq!(json, "\"bottomright\"");
        let back: ControlPosition = serde_json::from_str("\"topleft\"").unwrap();
        assert_eq!(back, ControlPosition::TopLeft);
        assert_eq!(ControlPosition::TopRight.to_string(), "topright");
    }

    #[test]
    fn test_tile_layer_defaults() {
        let tiles = TileLayerOptions::default();
        assert_eq!(tiles.min_zoom, 2);
        assert_eq!(tiles.max_zoom, 19);
        assert_eq!(tiles.cross_origin, "anonymous");
        assert_eq!(tiles.clamp_zoom(0), 2);
        assert_eq!(tiles.clamp_zoom(25), 19);
        assert_eq!(tiles.clamp_zoom(10), 10);
    }

    #[test]
    fn test_options_json_names() {
        let json = serde_json::to_value(MAP_READ_ONLY_OPTIONS).unwrap();
        assert_eq!(json["scrollWheelZoom"], false);
        assert_eq!(json["attributionControl"], false);

        let json = serde_json::to_value(TileLayerOptions::default()).unwrap();
        assert_eq!(json["crossOrigin"], "anonymous");
        assert_eq!(json["minZoom"], 2);
    }
}

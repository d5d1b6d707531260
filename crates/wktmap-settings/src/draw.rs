//! Draw-session configuration.
//!
//! Per-kind metadata for the drawing toolbar and the option record handed
//! to the drawing toolkit when the draw control is created. The per-kind
//! table is a total `match` over [`LayerKind`], so a new kind does not
//! compile until it has an entry here.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use wktmap_core::LayerKind;

/// Toolbar and tooltip metadata for one drawable kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawElementOptions {
    /// CSS class of the toolkit's toolbar button for this kind
    pub button_class: &'static str,
    /// Text key of the tooltip shown on the button
    pub tooltip_text_key: &'static str,
    /// Text key of the tooltip shown while this kind is being drawn
    pub tooltip_cancel_text_key: &'static str,
    /// CSS class applied to popups of shapes of this kind
    pub popup_class: &'static str,
}

pub const MARKER_DRAW_OPTIONS: DrawElementOptions = DrawElementOptions {
    button_class: "leaflet-draw-draw-marker",
    tooltip_text_key: "markerTooltip",
    tooltip_cancel_text_key: "cancelMarker",
    popup_class: "is-marker",
};

pub const POLYGON_DRAW_OPTIONS: DrawElementOptions = DrawElementOptions {
    button_class: "leaflet-draw-draw-polygon",
    tooltip_text_key: "polygonTooltip",
    tooltip_cancel_text_key: "cancelOutline",
    popup_class: "is-polygon",
};

/// Looks up the draw element options for a kind.
pub const fn draw_element_options(kind: LayerKind) -> &'static DrawElementOptions {
    match kind {
        LayerKind::Marker => &MARKER_DRAW_OPTIONS,
        LayerKind::Polygon => &POLYGON_DRAW_OPTIONS,
    }
}

/// Stroke and fill parameters for drawn shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    pub color: Cow<'static, str>,
    pub weight: f64,
    pub opacity: f64,
    /// Dash pattern as space-separated lengths, e.g. `"6 3"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<Cow<'static, str>>,
    pub fill_opacity: f64,
}

pub const POLYGON_SHAPE_STYLE: ShapeStyle = ShapeStyle {
    color: Cow::Borrowed("#00A0DE"),
    weight: 1.0,
    opacity: 1.0,
    dash_array: Some(Cow::Borrowed("6 3")),
    fill_opacity: 0.25,
};

impl Default for ShapeStyle {
    fn default() -> Self {
        POLYGON_SHAPE_STYLE
    }
}

/// Vertex handle icon shown while drawing a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions {
    pub icon_size: [u32; 2],
    pub class_name: String,
}

/// Shape style plus the CSS class given to the drawn path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathOptions {
    #[serde(flatten)]
    pub style: ShapeStyle,
    pub class_name: String,
}

/// Polygon tool options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonDrawOptions {
    pub icon: DivIconOptions,
    pub shape_options: PathOptions,
    pub guideline_distance: u32,
}

/// Options for the drawing toolkit's draw control.
///
/// Line, rectangle, circle and circle-marker tools are switched off; only
/// the marker and polygon tools are offered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawOptions {
    pub polyline: bool,
    pub rectangle: bool,
    pub circle: bool,
    pub circlemarker: bool,
    pub polygon: PolygonDrawOptions,
}

pub const POLYGON_VERTEX_ICON_SIZE: [u32; 2] = [7, 7];
pub const POLYGON_VERTEX_ICON_CLASS: &str = "polygon-marker";
pub const POLYGON_GUIDELINE_DISTANCE: u32 = 10;

/// Draw control options using `style` for polygons and `class_name` on
/// each drawn polygon path.
pub fn draw_options_with_style(style: &ShapeStyle, class_name: &str) -> DrawOptions {
    DrawOptions {
        polyline: false,
        rectangle: false,
        circle: false,
        circlemarker: false,
        polygon: PolygonDrawOptions {
            icon: DivIconOptions {
                icon_size: POLYGON_VERTEX_ICON_SIZE,
                class_name: POLYGON_VERTEX_ICON_CLASS.to_string(),
            },
            shape_options: PathOptions {
                style: style.clone(),
                class_name: class_name.to_string(),
            },
            guideline_distance: POLYGON_GUIDELINE_DISTANCE,
        },
    }
}

/// Draw control options using the process-wide shape style.
pub fn draw_options(class_name: &str) -> DrawOptions {
    draw_options_with_style(&crate::config::global_config().shape_style, class_name)
}

//! Layer kinds, coordinates and draw modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A map coordinate in (x, y) = (longitude, latitude) order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Longitude component (alias for `x`).
    pub fn lng(&self) -> f64 {
        self.x
    }

    /// Latitude component (alias for `y`).
    pub fn lat(&self) -> f64 {
        self.y
    }

    /// Both ordinates are finite; only such coordinates can be written as WKT.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

/// Kind of a drawable layer.
///
/// This set is closed. Every consumer matches it exhaustively, so adding a
/// variant fails to compile until each lookup table handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// A single point rendered as a marker
    Marker,
    /// A closed ring rendered as a filled outline
    Polygon,
}

impl LayerKind {
    /// Every kind, in toolbar order.
    pub const ALL: [LayerKind; 2] = [LayerKind::Marker, LayerKind::Polygon];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Marker => "marker",
            LayerKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "marker" => Ok(LayerKind::Marker),
            "polygon" => Ok(LayerKind::Polygon),
            other => Err(format!("Unknown layer kind: {}", other)),
        }
    }
}

/// The drawing operation the external toolkit currently has active.
///
/// At most one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    None,
    Drawing(LayerKind),
}

impl DrawMode {
    pub fn is_drawing(&self) -> bool {
        matches!(self, DrawMode::Drawing(_))
    }

    /// The kind being drawn, if any.
    pub fn kind(&self) -> Option<LayerKind> {
        match self {
            DrawMode::None => None,
            DrawMode::Drawing(kind) => Some(*kind),
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawMode::None => write!(f, "none"),
            DrawMode::Drawing(kind) => write!(f, "drawing {}", kind),
        }
    }
}

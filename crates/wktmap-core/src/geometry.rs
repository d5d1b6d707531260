//! Canonical geometry value exchanged between the map and WKT.

use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, LayerKind};

/// A polygon with a single, always-closed outer ring.
///
/// The ring's first and last coordinates are equal and every coordinate is
/// finite. Constructors close an open ring by repeating the first vertex;
/// deserialization goes through the same path. Self-intersection is not
/// checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Polygon {
    ring: Vec<Coordinate>,
}

impl Polygon {
    /// Builds a polygon from its vertices, closing the ring if needed.
    ///
    /// Returns `None` when no vertices are given or any of them is not
    /// finite.
    pub fn new<I, C>(vertices: I) -> Option<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let mut ring: Vec<Coordinate> = vertices.into_iter().map(Into::into).collect();
        if !ring.iter().all(Coordinate::is_finite) {
            return None;
        }
        let first = *ring.first()?;
        if ring.last() != Some(&first) || ring.len() == 1 {
            ring.push(first);
        }
        Some(Self { ring })
    }

    /// The closed ring, including the repeated closing coordinate.
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    /// The ring without its closing coordinate.
    pub fn vertices(&self) -> &[Coordinate] {
        &self.ring[..self.ring.len() - 1]
    }

    pub fn vertex_count(&self) -> usize {
        self.ring.len() - 1
    }

    pub fn is_closed(&self) -> bool {
        self.ring.first() == self.ring.last()
    }

    /// Unsigned planar area of the ring (shoelace formula).
    pub fn area(&self) -> f64 {
        let twice: f64 = self
            .ring
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum();
        twice.abs() / 2.0
    }

    /// Bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.ring.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(x1, y1, x2, y2), c| (x1.min(c.x), y1.min(c.y), x2.max(c.x), y2.max(c.y)),
        )
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = String;

    fn try_from(ring: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Polygon::new(ring)
            .ok_or_else(|| "polygon ring is empty or has non-finite coordinates".to_string())
    }
}

impl From<Polygon> for Vec<Coordinate> {
    fn from(polygon: Polygon) -> Self {
        polygon.ring
    }
}

/// A drawable geometry: a point or a single-ring polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Coordinate),
    Polygon(Polygon),
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point(Coordinate::new(x, y))
    }

    /// The layer kind that draws this geometry.
    pub fn kind(&self) -> LayerKind {
        match self {
            Geometry::Point(_) => LayerKind::Marker,
            Geometry::Polygon(_) => LayerKind::Polygon,
        }
    }

    /// Number of coordinates the geometry encodes, including a polygon's
    /// closing coordinate.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::Polygon(p) => p.ring().len(),
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(p) => Some(p),
            Geometry::Point(_) => None,
        }
    }

    pub fn as_point(&self) -> Option<Coordinate> {
        match self {
            Geometry::Point(c) => Some(*c),
            Geometry::Polygon(_) => None,
        }
    }
}

impl From<Coordinate> for Geometry {
    fn from(c: Coordinate) -> Self {
        Geometry::Point(c)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

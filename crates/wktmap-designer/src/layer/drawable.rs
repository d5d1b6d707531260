use wktmap_core::{Coordinate, Geometry, Polygon};

/// Identifier assigned to a layer by whoever creates it.
pub type LayerId = u64;

/// Interactive editing capability of a drawn layer.
pub trait Editing {
    fn enable(&mut self);
    fn disable(&mut self);
    fn is_enabled(&self) -> bool;
}

/// A leaf shape on the map: a marker or a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableLayer {
    id: LayerId,
    geometry: Geometry,
    editing: bool,
}

impl DrawableLayer {
    pub fn new(id: LayerId, geometry: Geometry) -> Self {
        Self {
            id,
            geometry,
            editing: false,
        }
    }

    pub fn marker(id: LayerId, position: Coordinate) -> Self {
        Self::new(id, Geometry::Point(position))
    }

    pub fn polygon(id: LayerId, polygon: Polygon) -> Self {
        Self::new(id, Geometry::Polygon(polygon))
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Replaces the geometry, as the toolkit does after an edit.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// Polygon capability check: the layer's ring, if it has one.
    pub fn ring(&self) -> Option<&Polygon> {
        self.geometry.as_polygon()
    }

    /// Enclosed area, only for layers with a ring.
    pub fn area(&self) -> Option<f64> {
        self.ring().map(Polygon::area)
    }
}

impl Editing for DrawableLayer {
    fn enable(&mut self) {
        self.editing = true;
    }

    fn disable(&mut self) {
        self.editing = false;
    }

    fn is_enabled(&self) -> bool {
        self.editing
    }
}

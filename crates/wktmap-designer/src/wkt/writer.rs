//! WKT writer.

use std::fmt::Write;

use wktmap_core::{Coordinate, Geometry, Polygon};

/// Serialize a value to Well-Known Text.
pub trait ToWkt {
    fn to_wkt(&self) -> String;
}

impl ToWkt for Geometry {
    fn to_wkt(&self) -> String {
        encode(self)
    }
}

impl ToWkt for Coordinate {
    fn to_wkt(&self) -> String {
        encode(&Geometry::Point(*self))
    }
}

impl ToWkt for Polygon {
    fn to_wkt(&self) -> String {
        let mut out = String::from("POLYGON ((");
        // ring() already repeats the first vertex
        write_ring(&mut out, self.ring());
        out.push_str("))");
        out
    }
}

// f64's Display is the shortest text that parses back to the same value
// and never uses exponent notation.
fn write_coordinate(out: &mut String, c: &Coordinate) {
    let _ = write!(out, "{} {}", c.x, c.y);
}

fn write_ring(out: &mut String, ring: &[Coordinate]) {
    for (i, c) in ring.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_coordinate(out, c);
    }
}

/// Serializes a [`Geometry`] to WKT.
///
/// Output is `POINT (x y)` or `POLYGON ((x y, ..., x y))` with the ring
/// always closed.
///
/// Coordinates are expected to be finite. Decoded geometries and every
/// [`Polygon`] are; a point built in code from `inf` or `NaN` is written
/// as-is and will not decode again.
pub fn encode(geometry: &Geometry) -> String {
    let text = match geometry {
        Geometry::Point(c) => {
            if !c.is_finite() {
                tracing::warn!(x = c.x, y = c.y, "encoding non-finite point");
            }
            let mut out = String::from("POINT (");
            write_coordinate(&mut out, c);
            out.push(')');
            out
        }
        Geometry::Polygon(polygon) => polygon.to_wkt(),
    };
    tracing::trace!(wkt = %text, "encoded geometry");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_point() {
        assert_eq!(encode(&Geometry::point(10.0, 20.0)), "POINT (10 20)");
        assert_eq!(encode(&Geometry::point(-0.5, 51.25)), "POINT (-0.5 51.25)");
    }

    #[test]
    fn test_encode_polygon() {
        let polygon = Polygon::new([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
        assert_eq!(
            encode(&Geometry::Polygon(polygon)),
            "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))"
        );
    }

    #[test]
    fn test_encode_large_and_small_values() {
        assert_eq!(
            encode(&Geometry::point(1e21, 1e-7)),
            "POINT (1000000000000000000000 0.0000001)"
        );
    }

    #[test]
    fn test_to_wkt_trait() {
        assert_eq!(Coordinate::new(1.0, 2.0).to_wkt(), "POINT (1 2)");
        let polygon = Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(polygon.to_wkt(), "POLYGON ((0 0, 1 0, 1 1, 0 0))");
    }
}

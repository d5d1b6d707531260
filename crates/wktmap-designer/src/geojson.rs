//! GeoJSON geometry bridge.
//!
//! Converts [`Geometry`] to and from GeoJSON geometry objects so decoded WKT
//! can be handed to consumers that speak GeoJSON, and GeoJSON produced by the
//! map can be written back out as WKT.

use serde::{Deserialize, Serialize};
use wktmap_core::{Coordinate, Error, Geometry, Polygon, Result, WktError};

use crate::wkt;

/// GeoJSON geometry types that exist but are not drawable here.
const UNSUPPORTED_TYPES: &[&str] = &[
    "LineString",
    "MultiPoint",
    "MultiLineString",
    "MultiPolygon",
    "GeometryCollection",
];

/// A GeoJSON geometry object restricted to the supported types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// Loosely typed geometry object, so unsupported types can be reported by name.
#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

impl From<&Geometry> for GeoJsonGeometry {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(c) => GeoJsonGeometry::Point {
                coordinates: (*c).into(),
            },
            Geometry::Polygon(p) => GeoJsonGeometry::Polygon {
                coordinates: vec![p.ring().iter().map(|c| (*c).into()).collect()],
            },
        }
    }
}

impl TryFrom<GeoJsonGeometry> for Geometry {
    type Error = Error;

    fn try_from(value: GeoJsonGeometry) -> Result<Self> {
        match value {
            GeoJsonGeometry::Point { coordinates } => {
                let point = Coordinate::from(coordinates);
                if !point.is_finite() {
                    return Err(Error::GeoJson("Point has non-finite coordinates".to_string()));
                }
                Ok(Geometry::Point(point))
            }
            GeoJsonGeometry::Polygon { mut coordinates } => {
                if coordinates.len() > 1 {
                    return Err(WktError::unsupported("Polygon with interior rings").into());
                }
                let outer = coordinates
                    .pop()
                    .ok_or_else(|| Error::GeoJson("Polygon has no rings".to_string()))?;
                Polygon::new(outer.into_iter().map(Coordinate::from))
                    .map(Geometry::Polygon)
                    .ok_or_else(|| Error::GeoJson("Polygon ring is empty or not finite".to_string()))
            }
        }
    }
}

/// Parses a GeoJSON geometry object into a [`Geometry`].
pub fn parse_geojson(json: &str) -> Result<Geometry> {
    let raw: RawGeometry = serde_json::from_str(json)?;
    let typed = match raw.kind.as_str() {
        "Point" => GeoJsonGeometry::Point {
            coordinates: serde_json::from_value(raw.coordinates)?,
        },
        "Polygon" => GeoJsonGeometry::Polygon {
            coordinates: serde_json::from_value(raw.coordinates)?,
        },
        kind if UNSUPPORTED_TYPES.contains(&kind) => {
            return Err(WktError::unsupported(kind).into());
        }
        other => {
            return Err(Error::GeoJson(format!("unknown geometry type '{}'", other)));
        }
    };
    Geometry::try_from(typed)
}

/// Serializes a [`Geometry`] as a GeoJSON geometry object.
pub fn to_geojson_string(geometry: &Geometry) -> Result<String> {
    Ok(serde_json::to_string(&GeoJsonGeometry::from(geometry))?)
}

/// Decodes WKT and re-encodes it as a GeoJSON geometry object.
pub fn wkt_to_geojson(text: &str) -> Result<String> {
    let geometry = wkt::decode(text)?;
    to_geojson_string(&geometry)
}

/// Parses a GeoJSON geometry object and encodes it as WKT.
pub fn geojson_to_wkt(json: &str) -> Result<String> {
    let geometry = parse_geojson(json)?;
    Ok(wkt::encode(&geometry))
}

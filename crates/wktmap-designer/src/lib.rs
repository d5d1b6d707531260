//! # WktMap Designer
//!
//! Geometry interchange and layer normalization for the map drawing tools.
//!
//! ## Core Components
//!
//! - **WKT codec** ([`wkt`]): `POINT` / `POLYGON` text to [`Geometry`] and back
//! - **GeoJSON bridge** ([`geojson`]): the same geometries as GeoJSON objects
//! - **Layer tree** ([`layer`]): leaf shapes and nested groups as owned by the map
//! - **Flattener** ([`flatten`]): ordered leaf lists and marker/polygon classification
//! - **Map state** ([`map_state`]): drawn shapes, toolkit events, import/export
//!
//! ## Architecture
//!
//! ```text
//! Drawing toolkit (external)
//!   └── DrawEvent ──> MapDrawState
//!                       ├── LayerGroup (drawn items, any nesting)
//!                       ├── flatten / classify
//!                       └── wkt::encode / wkt::decode
//! ```
//!
//! ## Usage
//!
//! ```
//! use wktmap_designer::MapDrawState;
//!
//! let mut state = MapDrawState::new();
//! state.import_wkt("POINT (10 20)").unwrap();
//! state.import_wkt("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap();
//!
//! assert_eq!(
//!     state.export_wkt(),
//!     vec!["POINT (10 20)", "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))"]
//! );
//! ```

pub mod flatten;
pub mod geojson;
pub mod layer;
pub mod map_state;
pub mod wkt;

pub use flatten::{classify, classify_all, flatten, flatten_group, flatten_into_group};
pub use geojson::{geojson_to_wkt, parse_geojson, wkt_to_geojson, GeoJsonGeometry};
pub use layer::{DrawableLayer, Editing, LayerGroup, LayerId, LayerNode};
pub use map_state::{DrawEvent, MapDrawState};
pub use wkt::{decode, encode, ToWkt};

pub use wktmap_core::{Coordinate, DrawMode, Geometry, LayerKind, Polygon, WktError};

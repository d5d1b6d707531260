//! Read and write geometries encoded as Well-Known Text.
//!
//! Only the subset the map can draw is supported:
//!
//! ```text
//! POINT (x y)
//! POLYGON ((x1 y1, x2 y2, ..., x1 y1))
//! ```
//!
//! Other WKT geometry types are recognized and rejected with
//! [`WktError::UnsupportedGeometry`](wktmap_core::WktError), so callers can
//! tell "not supported" apart from "invalid".
//!
//! ## Example
//!
//! ```
//! use wktmap_designer::wkt::{decode, encode};
//!
//! let geometry = decode("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap();
//! assert_eq!(geometry.coordinate_count(), 5);
//! assert_eq!(encode(&geometry), "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))");
//! ```

mod reader;
mod writer;

pub use reader::decode;
pub use writer::{encode, ToWkt};

//! # WktMap Core
//!
//! Core types shared by every WktMap crate:
//! - [`Geometry`] - the canonical point/polygon value exchanged as WKT
//! - [`LayerKind`] - the closed set of drawable layer kinds
//! - [`DrawMode`] - the drawing operation currently active in the toolkit
//! - [`Error`] / [`WktError`] - the error taxonomy for geometry interchange

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result, WktError};
pub use geometry::{Geometry, Polygon};
pub use types::{Coordinate, DrawMode, LayerKind};

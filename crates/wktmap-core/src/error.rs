//! Error handling for WktMap
//!
//! Provides the error types for geometry interchange:
//! - WKT errors (malformed text vs. unsupported geometry kinds)
//! - GeoJSON errors (structurally valid JSON that is not a usable geometry)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// WKT error type
///
/// Callers are expected to message the two variants differently: a
/// `Parse` error means the input is invalid, an `UnsupportedGeometry`
/// error means it is valid WKT that this application cannot draw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WktError {
    /// The text does not conform to the WKT grammar
    #[error("Invalid WKT at offset {position}: {reason}")]
    Parse {
        /// Byte offset into the input where the problem was detected.
        position: usize,
        /// What was expected or found.
        reason: String,
    },

    /// The text is a recognized WKT geometry that cannot be represented
    #[error("Unsupported geometry: {keyword}")]
    UnsupportedGeometry {
        /// The geometry keyword (or qualifier) that was rejected.
        keyword: String,
    },
}

impl WktError {
    /// Create a parse error at the given byte offset
    pub fn parse(position: usize, reason: impl Into<String>) -> Self {
        WktError::Parse {
            position,
            reason: reason.into(),
        }
    }

    /// Create an unsupported-geometry error for a keyword
    pub fn unsupported(keyword: impl Into<String>) -> Self {
        WktError::UnsupportedGeometry {
            keyword: keyword.into(),
        }
    }
}

/// Main error type for WktMap
#[derive(Error, Debug)]
pub enum Error {
    /// WKT decoding error
    #[error(transparent)]
    Wkt(#[from] WktError),

    /// JSON could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parsed, but does not describe a supported GeoJSON geometry
    #[error("Invalid GeoJSON geometry: {0}")]
    GeoJson(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a WKT grammar error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Wkt(WktError::Parse { .. }))
    }

    /// Check if this is an unsupported geometry error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Wkt(WktError::UnsupportedGeometry { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wkt_error_display() {
        let err = WktError::parse(7, "expected number, found 'a'");
        assert_eq!(
            err.to_string(),
            "Invalid WKT at offset 7: expected number, found 'a'"
        );

        let err = WktError::unsupported("LINESTRING");
        assert_eq!(err.to_string(), "Unsupported geometry: LINESTRING");
    }

    #[test]
    fn test_error_classification() {
        let err: Error = WktError::parse(0, "empty input").into();
        assert!(err.is_parse_error());
        assert!(!err.is_unsupported());

        let err: Error = WktError::unsupported("MULTIPOINT").into();
        assert!(err.is_unsupported());
        assert!(!err.is_parse_error());

        let err = Error::other("something else");
        assert!(!err.is_parse_error());
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_transparent_display() {
        let err: Error = WktError::unsupported("POLYGON Z").into();
        assert_eq!(err.to_string(), "Unsupported geometry: POLYGON Z");
    }
}

//! Error types for element tree manipulation.

use thiserror::Error;

use crate::element::ElementId;

/// Errors raised by [`ElementTree`](crate::ElementTree) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The id does not belong to this tree.
    #[error("Unknown element {0}")]
    UnknownElement(ElementId),

    /// `reference` is not a child of `parent`.
    #[error("Element {reference} is not a child of {parent}")]
    NotAChild {
        parent: ElementId,
        reference: ElementId,
    },

    /// The move would make an element its own ancestor.
    #[error("Cannot move element {0} below itself")]
    Cycle(ElementId),

    /// The text catalog could not be parsed.
    #[error("Invalid text catalog: {0}")]
    Catalog(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Catalog(err.to_string())
    }
}

/// Result type alias for UI operations.
pub type UiResult<T> = Result<T, UiError>;

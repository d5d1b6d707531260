//! WktMap UI Crate
//!
//! Post-render wiring for the drawing toolkit's controls: custom tooltips
//! on the toolbar buttons and their state-dependent text.
//!
//! ```
//! use wktmap_ui::{augment_tooltip, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! let button = tree.create_element("a");
//! let content = augment_tooltip(&mut tree, Some(button), "Add marker").unwrap();
//! assert_eq!(tree.text(content), Some("Add marker"));
//! ```

pub mod catalog;
pub mod draw_controls;
pub mod element;
pub mod error;
pub mod tooltip;

pub use catalog::{TextCatalog, Translator};
pub use draw_controls::{attach_draw_tooltips, DrawControlElements, DrawControls};
pub use element::{ElementId, ElementTree};
pub use error::{UiError, UiResult};
pub use tooltip::{augment_tooltip, TOOLTIP_CLASS, TOOLTIP_CONTENT_CLASS};

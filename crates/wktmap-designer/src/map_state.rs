//! Map drawing state for UI integration.
//!
//! Tracks the shapes drawn on a map and mirrors the drawing toolkit's
//! active mode from the events it emits. Import and export go through the
//! WKT codec; export always walks the flattened layer tree so output order
//! is the order shapes were added.

use std::fmt;

use wktmap_core::{DrawMode, Geometry, LayerKind, WktError};

use crate::flatten::{classify, flatten_group};
use crate::layer::{DrawableLayer, Editing, LayerGroup, LayerId};
use crate::wkt;

/// Events emitted by the external drawing toolkit.
#[derive(Debug, Clone)]
pub enum DrawEvent {
    /// The user picked a draw tool
    DrawStart(LayerKind),
    /// The draw tool was finished or cancelled
    DrawStop,
    /// A new shape was drawn
    Created {
        /// Kind reported by the toolkit.
        kind: LayerKind,
        /// The new layer.
        layer: DrawableLayer,
    },
    /// Existing shapes were edited in place
    Edited {
        /// The edited layers carrying their new geometry.
        layers: Vec<DrawableLayer>,
    },
    /// Delete mode was entered
    DeleteStarted,
    /// Shapes were removed
    Deleted {
        /// Ids of the removed layers.
        ids: Vec<LayerId>,
    },
}

impl fmt::Display for DrawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawEvent::DrawStart(kind) => write!(f, "Draw start: {}", kind),
            DrawEvent::DrawStop => write!(f, "Draw stop"),
            DrawEvent::Created { kind, layer } => {
                write!(f, "Created {} #{}", kind, layer.id())
            }
            DrawEvent::Edited { layers } => write!(f, "Edited {} layer(s)", layers.len()),
            DrawEvent::DeleteStarted => write!(f, "Delete started"),
            DrawEvent::Deleted { ids } => write!(f, "Deleted {} layer(s)", ids.len()),
        }
    }
}

/// Drawing state of one map.
#[derive(Debug, Clone, Default)]
pub struct MapDrawState {
    drawn_items: LayerGroup,
    draw_mode: DrawMode,
    next_id: LayerId,
    is_modified: bool,
}

impl MapDrawState {
    /// Creates an empty map state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawn_items(&self) -> &LayerGroup {
        &self.drawn_items
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// Allocates an id for a layer about to be created.
    pub fn next_layer_id(&mut self) -> LayerId {
        self.next_id += 1;
        self.next_id
    }

    /// All drawn leaves in the order they were added.
    pub fn layers(&self) -> Vec<&DrawableLayer> {
        flatten_group(&self.drawn_items)
    }

    /// Counts drawn leaves per kind as `(markers, polygons)`.
    pub fn count_by_kind(&self) -> (usize, usize) {
        self.layers()
            .into_iter()
            .fold((0, 0), |(markers, polygons), layer| match classify(layer) {
                LayerKind::Marker => (markers + 1, polygons),
                LayerKind::Polygon => (markers, polygons + 1),
            })
    }

    /// Applies a toolkit event.
    pub fn handle_event(&mut self, event: DrawEvent) {
        tracing::debug!(event = %event, "map draw event");
        match event {
            DrawEvent::DrawStart(kind) => self.draw_mode = DrawMode::Drawing(kind),
            DrawEvent::DrawStop => self.draw_mode = DrawMode::None,
            DrawEvent::Created { kind, layer } => {
                let actual = classify(&layer);
                if actual != kind {
                    tracing::warn!(
                        reported = %kind,
                        actual = %actual,
                        id = layer.id(),
                        "created layer kind does not match its geometry"
                    );
                }
                self.next_id = self.next_id.max(layer.id());
                self.drawn_items.add_layer(layer);
                self.is_modified = true;
            }
            DrawEvent::Edited { layers } => {
                for edited in layers {
                    match self.drawn_items.find_mut(edited.id()) {
                        Some(layer) => {
                            layer.set_geometry(edited.geometry().clone());
                            self.is_modified = true;
                        }
                        None => tracing::warn!(id = edited.id(), "edit for unknown layer"),
                    }
                }
            }
            DrawEvent::DeleteStarted => {
                self.draw_mode = DrawMode::None;
                self.set_editing(false);
            }
            DrawEvent::Deleted { ids } => {
                for id in ids {
                    if self.drawn_items.remove_layer(id).is_some() {
                        self.is_modified = true;
                    } else {
                        tracing::warn!(id, "delete for unknown layer");
                    }
                }
            }
        }
    }

    /// Decodes `text` and adds it as a new layer.
    pub fn import_wkt(&mut self, text: &str) -> Result<LayerId, WktError> {
        let geometry = wkt::decode(text)?;
        Ok(self.add_geometry(geometry))
    }

    /// Imports one geometry per non-blank line.
    ///
    /// Every line is decoded before anything is added, so a failure leaves
    /// the map unchanged.
    pub fn import_wkt_many<'a, I>(&mut self, lines: I) -> Result<Vec<LayerId>, WktError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let geometries = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(wkt::decode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(geometries
            .into_iter()
            .map(|geometry| self.add_geometry(geometry))
            .collect())
    }

    fn add_geometry(&mut self, geometry: Geometry) -> LayerId {
        let id = self.next_layer_id();
        tracing::debug!(id, kind = %geometry.kind(), "imported geometry");
        self.drawn_items.add_layer(DrawableLayer::new(id, geometry));
        self.is_modified = true;
        id
    }

    /// Encodes every drawn leaf as WKT, in insertion order.
    pub fn export_wkt(&self) -> Vec<String> {
        self.layers()
            .into_iter()
            .map(|layer| wkt::encode(layer.geometry()))
            .collect()
    }

    /// Encodes a single layer as WKT.
    pub fn layer_wkt(&self, id: LayerId) -> Option<String> {
        self.drawn_items
            .find(id)
            .map(|layer| wkt::encode(layer.geometry()))
    }

    /// Enables or disables interactive editing on every drawn leaf.
    pub fn set_editing(&mut self, enabled: bool) {
        self.drawn_items.for_each_leaf_mut(&mut |layer: &mut DrawableLayer| {
            if enabled {
                layer.enable();
            } else {
                layer.disable();
            }
        });
    }

    /// Removes every drawn shape.
    pub fn clear(&mut self) {
        if !self.drawn_items.is_empty() {
            self.drawn_items.clear();
            self.is_modified = true;
        }
    }
}

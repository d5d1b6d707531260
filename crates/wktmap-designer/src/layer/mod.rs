//! Scene-graph types mirrored from the map rendering engine.
//!
//! The engine owns a tree of layers: leaf shapes ([`DrawableLayer`]) and
//! containers ([`LayerGroup`]) that may nest to any depth. [`LayerNode`] is the
//! explicit tree node type the flattener walks.

mod drawable;
mod group;

pub use drawable::{DrawableLayer, Editing, LayerId};
pub use group::LayerGroup;

/// A node in the layer tree: either a leaf shape or a group.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerNode {
    Layer(DrawableLayer),
    Group(LayerGroup),
}

impl LayerNode {
    pub fn is_group(&self) -> bool {
        matches!(self, LayerNode::Group(_))
    }

    pub fn as_layer(&self) -> Option<&DrawableLayer> {
        match self {
            LayerNode::Layer(layer) => Some(layer),
            LayerNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&LayerGroup> {
        match self {
            LayerNode::Group(group) => Some(group),
            LayerNode::Layer(_) => None,
        }
    }
}

impl From<DrawableLayer> for LayerNode {
    fn from(layer: DrawableLayer) -> Self {
        LayerNode::Layer(layer)
    }
}

impl From<LayerGroup> for LayerNode {
    fn from(group: LayerGroup) -> Self {
        LayerNode::Group(group)
    }
}

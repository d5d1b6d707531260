use super::{DrawableLayer, LayerId, LayerNode};

/// A container of layers and nested groups. Carries no geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerGroup {
    children: Vec<LayerNode>,
}

impl LayerGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child; children keep insertion order.
    pub fn add_layer(&mut self, child: impl Into<LayerNode>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Builder form of [`add_layer`](Self::add_layer).
    pub fn with(mut self, child: impl Into<LayerNode>) -> Self {
        self.add_layer(child);
        self
    }

    /// Visits direct children in insertion order.
    pub fn for_each_child<F>(&self, f: F)
    where
        F: FnMut(&LayerNode),
    {
        self.children.iter().for_each(f);
    }

    pub fn children(&self) -> &[LayerNode] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Finds a leaf anywhere below this group.
    pub fn find(&self, id: LayerId) -> Option<&DrawableLayer> {
        self.children.iter().find_map(|child| match child {
            LayerNode::Layer(layer) if layer.id() == id => Some(layer),
            LayerNode::Layer(_) => None,
            LayerNode::Group(group) => group.find(id),
        })
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, id: LayerId) -> Option<&mut DrawableLayer> {
        self.children.iter_mut().find_map(|child| match child {
            LayerNode::Layer(layer) if layer.id() == id => Some(layer),
            LayerNode::Layer(_) => None,
            LayerNode::Group(group) => group.find_mut(id),
        })
    }

    /// Removes a leaf anywhere below this group. Returns it if found.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<DrawableLayer> {
        if let Some(index) = self
            .children
            .iter()
            .position(|c| matches!(c, LayerNode::Layer(l) if l.id() == id))
        {
            return match self.children.remove(index) {
                LayerNode::Layer(layer) => Some(layer),
                LayerNode::Group(_) => None,
            };
        }
        self.children.iter_mut().find_map(|child| match child {
            LayerNode::Group(group) => group.remove_layer(id),
            LayerNode::Layer(_) => None,
        })
    }

    /// Applies `f` to every leaf below this group, depth-first.
    pub fn for_each_leaf_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut DrawableLayer),
    {
        for child in &mut self.children {
            match child {
                LayerNode::Layer(layer) => f(layer),
                LayerNode::Group(group) => group.for_each_leaf_mut(f),
            }
        }
    }
}

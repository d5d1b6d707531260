//! Layer classification and tree flattening.
//!
//! The map hands us whatever the user built: a lone shape, or groups
//! nested inside groups. Export and editing need a flat, ordered list of
//! leaf shapes, each tagged with the kind of draw element that produced it.

use wktmap_core::LayerKind;

use crate::layer::{DrawableLayer, LayerGroup, LayerNode};

/// Classifies a layer by capability: anything with a polygon ring is a
/// polygon, everything else is a marker.
pub fn classify(layer: &DrawableLayer) -> LayerKind {
    match layer.ring() {
        Some(_) => LayerKind::Polygon,
        None => LayerKind::Marker,
    }
}

/// Collects every leaf below `root`, depth-first, in insertion order.
///
/// Groups never appear in the output and empty groups contribute nothing.
/// A root that is itself a leaf yields a one-element list. The input is
/// not modified.
pub fn flatten(root: &LayerNode) -> Vec<&DrawableLayer> {
    match root {
        LayerNode::Layer(layer) => vec![layer],
        LayerNode::Group(group) => flatten_group(group),
    }
}

/// [`flatten`] for a root that is known to be a group.
pub fn flatten_group(group: &LayerGroup) -> Vec<&DrawableLayer> {
    let mut leaves = Vec::new();
    // Explicit stack; nesting depth is unbounded.
    let mut stack = vec![group.children().iter()];
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some(LayerNode::Layer(layer)) => leaves.push(layer),
            Some(LayerNode::Group(inner)) => stack.push(inner.children().iter()),
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(leaves = leaves.len(), "flattened layer tree");
    leaves
}

/// Flattens `root` into a new group holding copies of its leaves.
pub fn flatten_into_group(root: &LayerNode) -> LayerGroup {
    flatten(root)
        .into_iter()
        .cloned()
        .fold(LayerGroup::new(), |group, layer| group.with(layer))
}

/// Flattens `root` and pairs each leaf with its kind.
pub fn classify_all(root: &LayerNode) -> Vec<(LayerKind, &DrawableLayer)> {
    flatten(root)
        .into_iter()
        .map(|layer| (classify(layer), layer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wktmap_core::{Coordinate, Polygon};

    fn marker(id: u64) -> DrawableLayer {
        DrawableLayer::marker(id, Coordinate::new(id as f64, id as f64))
    }

    fn square(id: u64) -> DrawableLayer {
        let polygon = Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        DrawableLayer::polygon(id, polygon)
    }

    fn ids(leaves: &[&DrawableLayer]) -> Vec<u64> {
        leaves.iter().map(|l| l.id()).collect()
    }

    #[test]
    fn test_flatten_preserves_order() {
        // [A, [B, C], D]
        let root = LayerNode::from(
            LayerGroup::new()
                .with(marker(1))
                .with(LayerGroup::new().with(marker(2)).with(square(3)))
                .with(marker(4)),
        );
        assert_eq!(ids(&flatten(&root)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_single_leaf() {
        let leaf = marker(7);
        let root = LayerNode::from(leaf.clone());
        assert_eq!(flatten(&root), vec![&leaf]);
    }

    #[test]
    fn test_flatten_empty_group() {
        let root = LayerNode::from(LayerGroup::new());
        assert!(flatten(&root).is_empty());

        let nested_empty = LayerNode::from(
            LayerGroup::new()
                .with(LayerGroup::new())
                .with(LayerGroup::new().with(LayerGroup::new())),
        );
        assert!(flatten(&nested_empty).is_empty());
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let mut group = LayerGroup::new().with(marker(0));
        for depth in 1..=1_000u64 {
            group = LayerGroup::new().with(group).with(marker(depth));
        }
        let root = LayerNode::from(group);
        let leaves = flatten(&root);
        assert_eq!(leaves.len(), 1_001);
        assert_eq!(leaves[0].id(), 0);
        assert_eq!(leaves[1_000].id(), 1_000);
    }

    #[test]
    fn test_flatten_does_not_mutate() {
        let root = LayerNode::from(
            LayerGroup::new()
                .with(LayerGroup::new().with(marker(1)))
                .with(square(2)),
        );
        let before = root.clone();
        let _ = flatten(&root);
        assert_eq!(root, before);
    }

    #[test]
    fn test_flatten_into_group() {
        let root = LayerNode::from(
            LayerGroup::new()
                .with(LayerGroup::new().with(marker(1)).with(square(2)))
                .with(marker(3)),
        );
        let flat = flatten_into_group(&root);
        assert_eq!(flat.len(), 3);
        assert!(flat.children().iter().all(|c| !c.is_group()));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&square(1)), LayerKind::Polygon);
        assert_eq!(classify(&marker(2)), LayerKind::Marker);
    }

    #[test]
    fn test_classify_all() {
        let root = LayerNode::from(LayerGroup::new().with(marker(1)).with(square(2)));
        let kinds: Vec<LayerKind> = classify_all(&root).into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![LayerKind::Marker, LayerKind::Polygon]);
    }
}

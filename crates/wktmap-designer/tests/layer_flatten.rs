use wktmap_designer::{
    classify, decode, encode, flatten, DrawableLayer, LayerGroup, LayerKind, LayerNode,
};

fn layer(id: u64, wkt: &str) -> DrawableLayer {
    DrawableLayer::new(id, decode(wkt).expect("decode failed"))
}

#[test]
fn test_flatten_then_export_nested_scene() {
    let scene = LayerNode::from(
        LayerGroup::new()
            .with(layer(1, "POINT (10 20)"))
            .with(
                LayerGroup::new()
                    .with(layer(2, "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))"))
                    .with(LayerGroup::new().with(layer(3, "POINT (-1 -2)"))),
            )
            .with(LayerGroup::new())
            .with(layer(4, "POINT (5 6)")),
    );

    let leaves = flatten(&scene);
    let kinds: Vec<LayerKind> = leaves.iter().map(|l| classify(l)).collect();
    let text: Vec<String> = leaves.iter().map(|l| encode(l.geometry())).collect();

    assert_eq!(
        kinds,
        vec![
            LayerKind::Marker,
            LayerKind::Polygon,
            LayerKind::Marker,
            LayerKind::Marker
        ]
    );
    assert_eq!(
        text,
        vec![
            "POINT (10 20)",
            "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))",
            "POINT (-1 -2)",
            "POINT (5 6)",
        ]
    );
}

#[test]
fn test_for_each_child_visits_direct_children_only() {
    let group = LayerGroup::new()
        .with(layer(1, "POINT (0 0)"))
        .with(LayerGroup::new().with(layer(2, "POINT (1 1)")));

    let mut visited = Vec::new();
    group.for_each_child(|child| visited.push(child.is_group()));
    assert_eq!(visited, vec![false, true]);
}

#[test]
fn test_remove_nested_layer() {
    let mut group = LayerGroup::new()
        .with(layer(1, "POINT (0 0)"))
        .with(LayerGroup::new().with(layer(2, "POINT (1 1)")));

    let removed = group.remove_layer(2).expect("layer 2 not found");
    assert_eq!(removed.id(), 2);
    assert!(group.find(2).is_none());
    assert!(group.find(1).is_some());
    assert!(group.remove_layer(99).is_none());
}

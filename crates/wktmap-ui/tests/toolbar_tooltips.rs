use wktmap_core::{DrawMode, LayerKind};
use wktmap_designer::{DrawEvent, MapDrawState};
use wktmap_settings::draw_element_options;
use wktmap_ui::{attach_draw_tooltips, ElementTree, TextCatalog, TOOLTIP_CLASS};

/// Builds the toolbar the way the toolkit renders it: a section holding
/// one anchor per draw tool, each with a native title.
fn render_toolbar(tree: &mut ElementTree) {
    let container = tree.create_element("div");
    tree.set_class_name(container, "leaflet-draw").unwrap();
    let section = tree
        .create_child(container, "div", "leaflet-draw-toolbar")
        .unwrap();
    for kind in LayerKind::ALL {
        let button = tree
            .create_child(section, "a", draw_element_options(kind).button_class)
            .unwrap();
        tree.set_attribute(button, "title", "Toolkit title").unwrap();
        tree.add_event_listener(button, "click").unwrap();
    }
}

#[test]
fn test_toolbar_keeps_button_order() {
    let mut tree = ElementTree::new();
    render_toolbar(&mut tree);
    let controls = attach_draw_tooltips(&mut tree, &TextCatalog::english());

    let marker = controls.get(LayerKind::Marker).button.unwrap();
    let polygon = controls.get(LayerKind::Polygon).button.unwrap();
    let marker_wrapper = tree.parent(marker).unwrap();
    let polygon_wrapper = tree.parent(polygon).unwrap();

    assert!(tree.has_class(marker_wrapper, TOOLTIP_CLASS));
    assert!(tree.has_class(polygon_wrapper, TOOLTIP_CLASS));

    let section = tree.parent(marker_wrapper).unwrap();
    assert_eq!(tree.children(section), &[marker_wrapper, polygon_wrapper]);
    assert!(tree.has_listener(marker, "click"));
    assert!(tree.has_listener(polygon, "click"));
}

#[test]
fn test_translated_catalog() {
    let catalog = TextCatalog::from_json(
        r#"{
            "language": "de",
            "entries": {
                "markerTooltip": "Markierung setzen",
                "cancelMarker": "Abbrechen"
            }
        }"#,
    )
    .unwrap();

    let mut tree = ElementTree::new();
    render_toolbar(&mut tree);
    let controls = attach_draw_tooltips(&mut tree, &catalog);
    let marker = controls.get(LayerKind::Marker).tooltip_content.unwrap();
    let polygon = controls.get(LayerKind::Polygon).tooltip_content.unwrap();

    assert_eq!(tree.text(marker), Some("Markierung setzen"));
    // No German text for polygons; the key is shown.
    assert_eq!(tree.text(polygon), Some("polygonTooltip"));

    controls.set_draw_mode_active(&mut tree, &catalog, LayerKind::Marker, true);
    assert_eq!(tree.text(marker), Some("Abbrechen"));
}

#[test]
fn test_tooltips_follow_map_draw_events() {
    let catalog = TextCatalog::english();
    let mut tree = ElementTree::new();
    render_toolbar(&mut tree);
    let controls = attach_draw_tooltips(&mut tree, &catalog);
    let polygon = controls.get(LayerKind::Polygon).tooltip_content.unwrap();

    let mut state = MapDrawState::new();
    state.handle_event(DrawEvent::DrawStart(LayerKind::Polygon));
    controls.sync_draw_mode(&mut tree, &catalog, state.draw_mode());
    assert_eq!(tree.text(polygon), Some("Cancel outline"));

    state.handle_event(DrawEvent::DrawStop);
    assert_eq!(state.draw_mode(), DrawMode::None);
    controls.sync_draw_mode(&mut tree, &catalog, state.draw_mode());
    assert_eq!(tree.text(polygon), Some("Draw outline"));
}

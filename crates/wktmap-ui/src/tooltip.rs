//! Custom tooltips for toolkit-rendered controls.

use crate::element::{ElementId, ElementTree};
use crate::error::{UiError, UiResult};

pub const TOOLTIP_CLASS: &str = "control-tooltip";
pub const TOOLTIP_CONTENT_CLASS: &str = "control-tooltip-content";

/// Wraps `element` in a tooltip container and returns the content node.
///
/// The native `title` tooltip is removed. The wrapper takes the element's
/// place in its parent and holds the content node followed by the element,
/// which keeps its id and listener bindings. A detached element ends up
/// inside a detached wrapper.
///
/// Returns `None` when `element` is `None`, since the toolkit may not have
/// rendered the control yet, or when the id is not part of `tree`.
pub fn augment_tooltip(
    tree: &mut ElementTree,
    element: Option<ElementId>,
    text: &str,
) -> Option<ElementId> {
    let element = element?;
    match wrap_with_tooltip(tree, element, text) {
        Ok(content) => {
            tracing::trace!(%element, %content, "tooltip attached");
            Some(content)
        }
        Err(err) => {
            tracing::warn!(%element, error = %err, "could not attach tooltip");
            None
        }
    }
}

fn wrap_with_tooltip(
    tree: &mut ElementTree,
    element: ElementId,
    text: &str,
) -> UiResult<ElementId> {
    if !tree.contains(element) {
        return Err(UiError::UnknownElement(element));
    }

    let tooltip = tree.create_element("div");
    tree.set_class_name(tooltip, TOOLTIP_CLASS)?;

    let content = tree.create_element("div");
    tree.set_class_name(content, TOOLTIP_CONTENT_CLASS)?;
    tree.set_text(content, text)?;

    if let Some(parent) = tree.parent(element) {
        tree.insert_before(parent, tooltip, element)?;
    }

    tree.append_child(tooltip, content)?;
    tree.append_child(tooltip, element)?;
    tree.remove_attribute(element, "title")?;
    Ok(content)
}

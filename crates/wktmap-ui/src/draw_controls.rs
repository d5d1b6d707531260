//! Tooltips on the drawing toolbar.
//!
//! After the toolkit has rendered its toolbar, each kind's button is found
//! by its class and given a custom tooltip. While a kind is being drawn its
//! tooltip shows the cancel text instead.

use wktmap_core::{DrawMode, LayerKind};
use wktmap_settings::draw_element_options;

use crate::catalog::Translator;
use crate::element::{ElementId, ElementTree};
use crate::tooltip::augment_tooltip;

/// Toolbar button of one kind and the tooltip content node attached to it.
///
/// Either may be missing when the toolkit has not rendered the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawControlElements {
    pub button: Option<ElementId>,
    pub tooltip_content: Option<ElementId>,
}

/// Draw control elements for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawControls {
    marker: DrawControlElements,
    polygon: DrawControlElements,
}

/// Finds each kind's toolbar button and attaches its tooltip.
pub fn attach_draw_tooltips(tree: &mut ElementTree, translator: &dyn Translator) -> DrawControls {
    let mut controls = DrawControls::default();
    for kind in LayerKind::ALL {
        let options = draw_element_options(kind);
        let button = tree.find_by_class(options.button_class);
        if button.is_none() {
            tracing::debug!(%kind, class = options.button_class, "draw button not rendered");
        }
        let text = translator.translate(options.tooltip_text_key);
        let tooltip_content = augment_tooltip(tree, button, &text);
        *controls.get_mut(kind) = DrawControlElements {
            button,
            tooltip_content,
        };
    }
    controls
}

impl DrawControls {
    pub fn get(&self, kind: LayerKind) -> &DrawControlElements {
        match kind {
            LayerKind::Marker => &self.marker,
            LayerKind::Polygon => &self.polygon,
        }
    }

    fn get_mut(&mut self, kind: LayerKind) -> &mut DrawControlElements {
        match kind {
            LayerKind::Marker => &mut self.marker,
            LayerKind::Polygon => &mut self.polygon,
        }
    }

    /// Switches `kind`'s tooltip between its normal and cancel text.
    ///
    /// Returns `false` when the kind has no tooltip to update.
    pub fn set_draw_mode_active(
        &self,
        tree: &mut ElementTree,
        translator: &dyn Translator,
        kind: LayerKind,
        active: bool,
    ) -> bool {
        let Some(content) = self.get(kind).tooltip_content else {
            return false;
        };
        let options = draw_element_options(kind);
        let key = if active {
            options.tooltip_cancel_text_key
        } else {
            options.tooltip_text_key
        };
        tree.set_text(content, &translator.translate(key)).is_ok()
    }

    /// Updates every tooltip to match `mode`.
    pub fn sync_draw_mode(
        &self,
        tree: &mut ElementTree,
        translator: &dyn Translator,
        mode: DrawMode,
    ) {
        for kind in LayerKind::ALL {
            self.set_draw_mode_active(tree, translator, kind, mode.kind() == Some(kind));
        }
    }
}

//! Minimal element tree standing in for the page the drawing toolkit
//! renders its controls into.
//!
//! Elements live in an arena and are addressed by [`ElementId`]. Moving an
//! element changes only its parent link, so ids, attributes and listener
//! bindings survive any re-parenting.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{UiError, UiResult};

/// Handle to an element in an [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    listeners: Vec<String>,
}

/// Arena of elements with parent/child links.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            tag: tag.to_string(),
            ..Element::default()
        });
        id
    }

    /// Creates an element with a class and appends it to `parent`.
    pub fn create_child(
        &mut self,
        parent: ElementId,
        tag: &str,
        class_name: &str,
    ) -> UiResult<ElementId> {
        self.get(parent)?;
        let id = self.create_element(tag);
        self.set_class_name(id, class_name)?;
        self.append_child(parent, id)?;
        Ok(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        id.0 < self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn get(&self, id: ElementId) -> UiResult<&Element> {
        self.elements.get(id.0).ok_or(UiError::UnknownElement(id))
    }

    fn get_mut(&mut self, id: ElementId) -> UiResult<&mut Element> {
        self.elements.get_mut(id.0).ok_or(UiError::UnknownElement(id))
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.get(id).ok().map(|e| e.tag.as_str())
    }

    /// Space-separated class list, like a `className` property.
    pub fn class_name(&self, id: ElementId) -> Option<String> {
        self.get(id).ok().map(|e| e.classes.join(" "))
    }

    pub fn set_class_name(&mut self, id: ElementId, class_name: &str) -> UiResult<()> {
        self.get_mut(id)?.classes = class_name.split_whitespace().map(str::to_string).collect();
        Ok(())
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) -> UiResult<()> {
        let element = self.get_mut(id)?;
        if !element.classes.iter().any(|c| c == class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id)
            .map(|e| e.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).ok()?.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> UiResult<()> {
        self.get_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Removes an attribute, returning its old value.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> UiResult<Option<String>> {
        Ok(self.get_mut(id)?.attributes.remove(name))
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).ok().map(|e| e.text.as_str())
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) -> UiResult<()> {
        let element = self.get_mut(id)?;
        element.text.clear();
        element.text.push_str(text);
        Ok(())
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).ok()?.parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Binds a named event handler to an element.
    pub fn add_event_listener(&mut self, id: ElementId, event: &str) -> UiResult<()> {
        self.get_mut(id)?.listeners.push(event.to_string());
        Ok(())
    }

    pub fn has_listener(&self, id: ElementId, event: &str) -> bool {
        self.get(id)
            .map(|e| e.listeners.iter().any(|l| l == event))
            .unwrap_or(false)
    }

    fn is_ancestor_or_self(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Unlinks an element from its parent. Detached elements stay valid.
    pub fn detach(&mut self, id: ElementId) -> UiResult<()> {
        let parent = self.get_mut(id)?.parent.take();
        if let Some(parent) = parent {
            self.get_mut(parent)?.children.retain(|c| *c != id);
        }
        Ok(())
    }

    fn check_move(&self, parent: ElementId, child: ElementId) -> UiResult<()> {
        self.get(parent)?;
        self.get(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(UiError::Cycle(child));
        }
        Ok(())
    }

    /// Moves `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> UiResult<()> {
        self.check_move(parent, child)?;
        self.detach(child)?;
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Moves `child` into `parent` directly before `reference`.
    pub fn insert_before(
        &mut self,
        parent: ElementId,
        child: ElementId,
        reference: ElementId,
    ) -> UiResult<()> {
        self.check_move(parent, child)?;
        if self.parent(reference) != Some(parent) {
            return Err(UiError::NotAChild { parent, reference });
        }
        if child == reference {
            return Ok(());
        }
        self.detach(child)?;
        let siblings = &mut self.get_mut(parent)?.children;
        let index = siblings
            .iter()
            .position(|c| *c == reference)
            .ok_or(UiError::NotAChild { parent, reference })?;
        siblings.insert(index, child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// First element carrying `class` in depth-first document order,
    /// searching every detached root in creation order.
    pub fn find_by_class(&self, class: &str) -> Option<ElementId> {
        let roots = (0..self.elements.len())
            .map(ElementId)
            .filter(|id| self.elements[id.0].parent.is_none());
        for root in roots {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                if self.has_class(id, class) {
                    return Some(id);
                }
                stack.extend(self.children(id).iter().rev());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toolbar() -> (ElementTree, ElementId, ElementId, ElementId) {
        let mut tree = ElementTree::new();
        let bar = tree.create_element("div");
        let a = tree.create_child(bar, "a", "first").unwrap();
        let b = tree.create_child(bar, "a", "second").unwrap();
        (tree, bar, a, b)
    }

    #[test]
    fn test_append_and_children() {
        let (tree, bar, a, b) = toolbar();
        assert_eq!(tree.children(bar), &[a, b]);
        assert_eq!(tree.parent(a), Some(bar));
        assert_eq!(tree.parent(bar), None);
    }

    #[test]
    fn test_insert_before() {
        let (mut tree, bar, a, b) = toolbar();
        let c = tree.create_element("span");
        tree.insert_before(bar, c, b).unwrap();
        assert_eq!(tree.children(bar), &[a, c, b]);

        // Moving an attached element re-links it.
        tree.insert_before(bar, b, a).unwrap();
        assert_eq!(tree.children(bar), &[b, a, c]);
    }

    #[test]
    fn test_insert_before_requires_child() {
        let (mut tree, bar, a, _) = toolbar();
        let other = tree.create_element("div");
        let c = tree.create_element("span");
        assert_eq!(
            tree.insert_before(other, c, a),
            Err(UiError::NotAChild {
                parent: other,
                reference: a
            })
        );
        assert_eq!(tree.parent(c), None);
        assert_eq!(tree.children(bar).len(), 2);
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut tree, bar, a, _) = toolbar();
        assert_eq!(tree.append_child(a, bar), Err(UiError::Cycle(bar)));
        assert_eq!(tree.append_child(a, a), Err(UiError::Cycle(a)));
    }

    #[test]
    fn test_unknown_element() {
        let mut tree = ElementTree::new();
        let ghost = ElementId::from_raw(3);
        assert_eq!(
            tree.set_text(ghost, "x"),
            Err(UiError::UnknownElement(ghost))
        );
        assert_eq!(tree.text(ghost), None);
        assert!(tree.children(ghost).is_empty());
    }

    #[test]
    fn test_attributes_and_classes() {
        let (mut tree, _, a, _) = toolbar();
        tree.set_attribute(a, "title", "Draw").unwrap();
        assert_eq!(tree.attribute(a, "title"), Some("Draw"));
        assert_eq!(
            tree.remove_attribute(a, "title").unwrap().as_deref(),
            Some("Draw")
        );
        assert_eq!(tree.attribute(a, "title"), None);

        tree.add_class(a, "active").unwrap();
        tree.add_class(a, "active").unwrap();
        assert_eq!(tree.class_name(a).as_deref(), Some("first active"));
    }

    #[test]
    fn test_find_by_class_document_order() {
        let (mut tree, bar, a, _) = toolbar();
        let nested = tree.create_child(a, "span", "second").unwrap();
        assert_eq!(tree.find_by_class("second"), Some(nested));
        assert_eq!(tree.find_by_class("first"), Some(a));
        assert_eq!(tree.find_by_class("missing"), None);
        tree.detach(a).unwrap();
        assert_eq!(tree.children(bar).len(), 1);
        assert_eq!(tree.find_by_class("first"), Some(a));
    }
}

//! Document - High-level document API
//!
//! Wraps the tree with the bits of browser state focus navigation
//! needs: the active element and the native default actions of keys.

use crate::{DomError, DomTree, ElementData, KeyboardEvent, KeyboardEventType, NodeId, KEY_TAB};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    focused: Option<NodeId>,
}

impl Document {
    /// Create a document with the basic html/head/body structure
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let tree = &mut doc.tree;
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes under the root cannot violate the hierarchy.
        let _ = tree.append_child(NodeId::ROOT, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        doc.finalize();
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
        }
    }

    /// Locate the html/head/body elements after the tree was built
    pub fn finalize(&mut self) {
        self.html_element = self.find_child_element(NodeId::ROOT, "html").unwrap_or(NodeId::NONE);
        self.head_element = self.find_child_element(self.html_element, "head").unwrap_or(NodeId::NONE);
        self.body_element = self.find_child_element(self.html_element, "body").unwrap_or(NodeId::NONE);
    }

    fn find_child_element(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .find(|&id| self.tree.element(id).is_some_and(|e| e.tag == tag))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Element data for `id`
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        if self.tree.get(id).is_none() {
            return Err(DomError::InvalidNode(id));
        }
        self.tree.element_mut(id).ok_or(DomError::NotAnElement(id))
    }

    /// First connected element with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .find(|&node| self.tree.element(node).and_then(ElementData::id) == Some(id))
    }

    /// `id` attribute of a node, for diagnostics
    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.tree.element(node).and_then(ElementData::id)
    }

    /// Create an element with attributes and append it under `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        let id = self.tree.create_element(tag);
        if let Some(el) = self.tree.element_mut(id) {
            for (name, value) in attrs {
                el.set_attr(name, value);
            }
        }
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Remove a node and its subtree from the document
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        self.tree.detach(id)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element_mut(id)?.remove_attr(name))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.add_class(class))
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.remove_class(class))
    }

    /// Connected element that accepts focus
    pub fn is_focusable(&self, id: NodeId) -> bool {
        self.tree.element(id).is_some_and(ElementData::is_focusable) && self.tree.is_connected(id)
    }

    /// Connected element reached by Tab
    pub fn is_tabbable(&self, id: NodeId) -> bool {
        self.tree.element(id).is_some_and(ElementData::is_tabbable) && self.tree.is_connected(id)
    }

    /// Currently focused element, if it is still focusable
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused.filter(|&id| self.is_focusable(id))
    }

    /// Move focus to `id`. Returns false, leaving focus untouched, when
    /// the node cannot take focus.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.is_focusable(id) {
            tracing::trace!("Refusing focus on {}", id);
            return false;
        }
        if self.focused != Some(id) {
            tracing::trace!(
                "Focus {} -> {}",
                self.focused.map_or_else(|| "none".to_string(), |f| f.to_string()),
                id
            );
            self.focused = Some(id);
        }
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Connected tabbable elements in document order
    pub fn tabbable_elements(&self) -> Vec<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .filter(|&id| self.tree.element(id).is_some_and(ElementData::is_tabbable))
            .collect()
    }

    /// Run the browser's default action for a key event that nobody
    /// cancelled. Returns true if the document changed.
    ///
    /// - keypress with a character on a text field appends it to `value`
    /// - keydown of Tab moves focus along the tabbable elements
    pub fn perform_default_action(&mut self, event: &KeyboardEvent) -> bool {
        if event.is_default_prevented() {
            return false;
        }
        match event.event_type {
            KeyboardEventType::KeyPress => {
                let Some(c) = event.key_char else {
                    return false;
                };
                let Some(el) = self.tree.element_mut(event.target) else {
                    return false;
                };
                if !el.is_text_field() {
                    return false;
                }
                let mut value = el.get_attr("value").unwrap_or_default().to_string();
                value.push(c);
                el.set_attr("value", &value);
                true
            }
            KeyboardEventType::KeyDown if event.key_code == KEY_TAB => {
                let order = self.tabbable_elements();
                let Some(pos) = order.iter().position(|&id| id == event.target) else {
                    return false;
                };
                let next = if event.modifiers.shift {
                    pos.checked_sub(1)
                } else {
                    Some(pos + 1).filter(|&i| i < order.len())
                };
                next.is_some_and(|i| self.focus(order[i]))
            }
            _ => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

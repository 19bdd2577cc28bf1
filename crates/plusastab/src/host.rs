//! Focus host
//!
//! The handful of DOM capabilities the resolver and the interceptor
//! need. `Document` implements it; tests plug in their own trees.

use pat_dom::{Document, ElementData, NodeId};

use crate::{MarkerKind, MarkerVocabulary};

/// DOM access used by focus navigation
pub trait FocusHost {
    /// Document root
    fn root(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Focusable elements strictly below `root`, in document order.
    /// Unknown or detached roots yield nothing.
    fn focusable_descendants(&self, root: NodeId) -> Vec<NodeId>;

    fn is_focusable(&self, element: NodeId) -> bool;

    /// Reached by a real Tab press
    fn is_tabbable(&self, element: NodeId) -> bool;

    fn has_class(&self, element: NodeId, class: &str) -> bool;

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str>;

    fn current_focus(&self) -> Option<NodeId>;

    /// Apply native focus. Returns false if the element refused it.
    fn set_focus(&mut self, element: NodeId) -> bool;

    /// `element` itself carries the marker `kind`. Defaults to reading
    /// the vocabulary's class and data attribute.
    fn is_marked(&self, element: NodeId, kind: MarkerKind, vocabulary: &MarkerVocabulary) -> bool {
        vocabulary.marker(self, element) == Some(kind)
    }

    /// Reachable from the root through parent links
    fn is_connected(&self, node: NodeId) -> bool {
        let root = self.root();
        std::iter::successors(Some(node), |&n| self.parent(n)).any(|n| n == root)
    }
}

impl FocusHost for Document {
    fn root(&self) -> NodeId {
        self.tree().root()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree().parent(node)
    }

    fn focusable_descendants(&self, root: NodeId) -> Vec<NodeId> {
        let tree = self.tree();
        if !tree.is_connected(root) {
            return Vec::new();
        }
        tree.descendants(root)
            .filter(|&id| tree.element(id).is_some_and(ElementData::is_focusable))
            .collect()
    }

    fn is_focusable(&self, element: NodeId) -> bool {
        Document::is_focusable(self, element)
    }

    fn is_tabbable(&self, element: NodeId) -> bool {
        Document::is_tabbable(self, element)
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.element(element).is_some_and(|e| e.has_class(class))
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.element(element)?.get_attr(name)
    }

    fn current_focus(&self) -> Option<NodeId> {
        self.active_element()
    }

    fn set_focus(&mut self, element: NodeId) -> bool {
        self.focus(element)
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.tree().is_connected(node)
    }
}

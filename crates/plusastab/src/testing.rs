//! In-memory focus host for unit tests

use pat_dom::NodeId;

use crate::{FocusHost, MarkerKind, MarkerVocabulary};

#[derive(Debug, Default)]
struct FakeNode {
    parent: Option<NodeId>,
    focusable: bool,
    tabbable: bool,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    /// Markers the host reports without any markup
    marks: Vec<MarkerKind>,
}

/// Flat node list; parents always precede their children
#[derive(Debug)]
pub(crate) struct FakeHost {
    nodes: Vec<FakeNode>,
    focus: Option<NodeId>,
}

pub(crate) struct FakeNodeBuilder<'a> {
    host: &'a mut FakeHost,
    id: NodeId,
}

impl FakeNodeBuilder<'_> {
    fn node(&mut self) -> &mut FakeNode {
        &mut self.host.nodes[self.id.index()]
    }

    pub(crate) fn class(mut self, class: &str) -> Self {
        self.node().classes.push(class.to_string());
        self
    }

    pub(crate) fn attr(mut self, name: &str, value: &str) -> Self {
        self.node().attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub(crate) fn marked(mut self, kind: MarkerKind) -> Self {
        self.node().marks.push(kind);
        self
    }

    /// Focusable by script only
    pub(crate) fn untabbable(mut self) -> Self {
        self.node().tabbable = false;
        self
    }

    pub(crate) fn id(self) -> NodeId {
        self.id
    }
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![FakeNode::default()],
            focus: None,
        }
    }

    pub(crate) fn add(&mut self, parent: NodeId, focusable: bool) -> FakeNodeBuilder<'_> {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(FakeNode {
            parent: Some(parent),
            focusable,
            tabbable: focusable,
            ..FakeNode::default()
        });
        FakeNodeBuilder { host: self, id }
    }

    /// Unlink a node from its parent
    pub(crate) fn detach(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.parent = None;
        }
    }

    fn node(&self, id: NodeId) -> Option<&FakeNode> {
        self.nodes.get(id.index())
    }

    fn collect_descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for (index, node) in self.nodes.iter().enumerate() {
            if node.parent == Some(root) {
                let child = NodeId::from_raw(index as u32);
                out.push(child);
                self.collect_descendants(child, out);
            }
        }
    }
}

impl FocusHost for FakeHost {
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn focusable_descendants(&self, root: NodeId) -> Vec<NodeId> {
        if self.node(root).is_none() {
            return Vec::new();
        }
        let mut all = Vec::new();
        self.collect_descendants(root, &mut all);
        all.retain(|&id| self.is_focusable(id));
        all
    }

    fn is_focusable(&self, element: NodeId) -> bool {
        self.node(element).is_some_and(|n| n.focusable)
    }

    fn is_tabbable(&self, element: NodeId) -> bool {
        self.node(element).is_some_and(|n| n.tabbable)
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.node(element).is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.node(element)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn is_marked(&self, element: NodeId, kind: MarkerKind, vocabulary: &MarkerVocabulary) -> bool {
        self.node(element).is_some_and(|n| n.marks.contains(&kind))
            || vocabulary.marker(self, element) == Some(kind)
    }

    fn current_focus(&self) -> Option<NodeId> {
        self.focus
    }

    fn set_focus(&mut self, element: NodeId) -> bool {
        if !self.is_focusable(element) {
            return false;
        }
        self.focus = Some(element);
        true
    }
}

//! Eligibility resolver
//!
//! Computes, from the live tree, which focusable elements take part in
//! plus-as-Tab navigation and in what order. Nothing is cached: every
//! call reads the host again.
//!
//! An element's eligibility is decided by the nearest node, walking
//! from the element itself up to the root, that carries either a
//! programmatic toggle or a static marker. Enable admits it, disable
//! excludes it, and no decision at all excludes it.

use std::collections::HashMap;

use pat_dom::NodeId;

use crate::{FocusHost, MarkerKind, MarkerVocabulary};

/// Programmatic enable/disable calls, keyed by node. A toggle beats
/// the static marker on the same node.
#[derive(Debug, Clone, Default)]
pub struct Toggles {
    toggles: HashMap<NodeId, bool>,
}

impl Toggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a toggle. Returns false if it was already recorded.
    pub fn set(&mut self, node: NodeId, enabled: bool) -> bool {
        self.toggles.insert(node, enabled) != Some(enabled)
    }

    /// Forget the toggle on `node`, falling back to its markup
    pub fn clear(&mut self, node: NodeId) -> bool {
        self.toggles.remove(&node).is_some()
    }

    pub fn get(&self, node: NodeId) -> Option<bool> {
        self.toggles.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// Keep only the toggles whose node satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(NodeId) -> bool) -> usize {
        let before = self.toggles.len();
        self.toggles.retain(|&node, _| keep(node));
        before - self.toggles.len()
    }
}

/// Direction of a focus step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// Ordered elements taking part in navigation at one moment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilitySet {
    elements: Vec<NodeId>,
}

impl EligibilitySet {
    pub fn new(elements: Vec<NodeId>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.elements.iter().copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.elements.contains(&node)
    }

    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.elements.iter().position(|&id| id == node)
    }

    /// Neighbour of `from` in `direction`, clamped at both ends. A
    /// result equal to `from` means it was already at the boundary.
    /// `None` if `from` is not a member.
    pub fn step(&self, from: NodeId, direction: Direction) -> Option<NodeId> {
        let i = self.position(from)?;
        let target = match direction {
            Direction::Forward => (i + 1).min(self.elements.len() - 1),
            Direction::Backward => i.saturating_sub(1),
        };
        Some(self.elements[target])
    }
}

impl IntoIterator for EligibilitySet {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Reads markers and toggles against a host
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    vocabulary: &'a MarkerVocabulary,
    toggles: &'a Toggles,
}

impl<'a> Resolver<'a> {
    pub fn new(vocabulary: &'a MarkerVocabulary, toggles: &'a Toggles) -> Self {
        Self { vocabulary, toggles }
    }

    /// Eligible elements under `root` (the whole document when `None`),
    /// `root` included, in document order
    pub fn resolve<H: FocusHost + ?Sized>(&self, host: &H, root: Option<NodeId>) -> EligibilitySet {
        let root = root.unwrap_or_else(|| host.root());

        let mut candidates = Vec::new();
        if root != host.root() && host.is_focusable(root) {
            candidates.push(root);
        }
        candidates.extend(host.focusable_descendants(root));

        let elements: Vec<_> = candidates
            .into_iter()
            .filter(|&id| self.decision(host, id) == Some(MarkerKind::Enable))
            .collect();

        tracing::trace!("Resolved {} eligible elements under {}", elements.len(), root);
        EligibilitySet::new(elements)
    }

    /// Focusable and admitted by its nearest marker
    pub fn is_eligible<H: FocusHost + ?Sized>(&self, host: &H, element: NodeId) -> bool {
        host.is_focusable(element) && self.decision(host, element) == Some(MarkerKind::Enable)
    }

    /// Toggle or static marker set on `node` itself
    pub fn marker<H: FocusHost + ?Sized>(&self, host: &H, node: NodeId) -> Option<MarkerKind> {
        match self.toggles.get(node) {
            Some(true) => Some(MarkerKind::Enable),
            Some(false) => Some(MarkerKind::Disable),
            None if host.is_marked(node, MarkerKind::Disable, self.vocabulary) => {
                Some(MarkerKind::Disable)
            }
            None if host.is_marked(node, MarkerKind::Enable, self.vocabulary) => {
                Some(MarkerKind::Enable)
            }
            None => None,
        }
    }

    /// Nearest marker on `element` or its ancestors
    fn decision<H: FocusHost + ?Sized>(&self, host: &H, element: NodeId) -> Option<MarkerKind> {
        std::iter::successors(Some(element), |&node| host.parent(node))
            .find_map(|node| self.marker(host, node))
    }
}

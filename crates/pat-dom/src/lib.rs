//! Plus-as-Tab DOM
//!
//! Arena-based DOM tree carrying just enough of the element model
//! (attributes, class lists, focusability, focus state, keyboard
//! events) to host keyboard focus navigation without a browser.

mod classlist;
mod document;
mod error;
mod events;
mod focusable;
mod node;
mod tree;

use std::fmt;

pub use document::Document;
pub use error::DomError;
pub use events::{KeyModifiers, KeyboardEvent, KeyboardEventType, KEY_NUMPAD_ADD, KEY_TAB};
pub use focusable::TabIndex;
pub use node::{ElementData, Node, NodeData};
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// No node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Build an ID from a raw arena index.
    ///
    /// Mostly useful for hosts that keep their own node storage and
    /// only borrow the identifier type.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}

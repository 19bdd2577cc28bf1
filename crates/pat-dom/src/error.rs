//! DOM errors

use crate::NodeId;

/// Errors raised by tree and element mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {0} does not exist")]
    InvalidNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Cannot insert {child} under {parent}: the result would not be a tree")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

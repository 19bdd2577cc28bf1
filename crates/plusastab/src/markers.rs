//! Marker vocabulary
//!
//! Each marker has two synonymous spellings, a class name and a data
//! attribute value. The attribute wins when it holds `"true"` or
//! `"false"`; anything else falls back to the classes.

use serde::{Deserialize, Serialize};

use crate::{FocusHost, NodeId};

/// Intent carried by a marked node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// The node, and every focusable descendant, takes part
    Enable,
    /// The node and its subtree are excluded
    Disable,
}

/// Names the markers are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerVocabulary {
    pub enable_class: String,
    pub disable_class: String,
    pub data_attribute: String,
}

impl Default for MarkerVocabulary {
    fn default() -> Self {
        Self {
            enable_class: "plus-as-tab".to_string(),
            disable_class: "disable-plus-as-tab".to_string(),
            data_attribute: "data-plus-as-tab".to_string(),
        }
    }
}

impl MarkerVocabulary {
    /// Static marker on `element`, if any
    pub fn marker<H: FocusHost + ?Sized>(&self, host: &H, element: NodeId) -> Option<MarkerKind> {
        match host.attribute(element, &self.data_attribute) {
            Some("true") => return Some(MarkerKind::Enable),
            Some("false") => return Some(MarkerKind::Disable),
            _ => {}
        }

        if host.has_class(element, &self.disable_class) {
            Some(MarkerKind::Disable)
        } else if host.has_class(element, &self.enable_class) {
            Some(MarkerKind::Enable)
        } else {
            None
        }
    }
}

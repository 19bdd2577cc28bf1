//! Configuration

use serde::{Deserialize, Serialize};

use crate::{MarkerVocabulary, PlusAsTabError, KEY_NUMPAD_ADD};

/// Which elements the intercepted key moves focus between
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationScope {
    /// Only members of the eligibility set
    #[default]
    Eligible,
    /// Every tabbable element, as a real Tab press would. The key is
    /// still only intercepted on eligible elements.
    Tabbable,
}

/// Plus-as-Tab options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Key codes that act as Tab
    pub keys: Vec<u32>,

    pub scope: NavigationScope,

    pub markers: MarkerVocabulary,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            keys: vec![KEY_NUMPAD_ADD],
            scope: NavigationScope::Eligible,
            markers: MarkerVocabulary::default(),
        }
    }
}

impl Options {
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = u32>) -> Self {
        self.keys = keys.into_iter().collect();
        self
    }

    pub fn with_scope(mut self, scope: NavigationScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_markers(mut self, markers: MarkerVocabulary) -> Self {
        self.markers = markers;
        self
    }

    pub fn is_plus_key(&self, key_code: u32) -> bool {
        self.keys.contains(&key_code)
    }

    pub fn validate(&self) -> Result<(), PlusAsTabError> {
        if self.keys.is_empty() {
            return Err(PlusAsTabError::NoKeys);
        }
        let markers = [
            ("enable_class", &self.markers.enable_class),
            ("disable_class", &self.markers.disable_class),
            ("data_attribute", &self.markers.data_attribute),
        ];
        for (name, value) in markers {
            if value.trim().is_empty() {
                return Err(PlusAsTabError::EmptyMarker(name));
            }
        }
        Ok(())
    }
}

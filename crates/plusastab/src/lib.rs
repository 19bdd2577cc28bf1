//! Plus-as-Tab
//!
//! Makes the numeric-keypad plus key move focus like Tab does, but only
//! across elements a page opted in through markers:
//!
//! - class `plus-as-tab` or `data-plus-as-tab="true"` on an element or
//!   a container enables it (a container enables every focusable
//!   descendant)
//! - class `disable-plus-as-tab` or `data-plus-as-tab="false"` excludes
//!   an element or container, overriding any enabling ancestor
//!
//! The order is always document order and movement stops at the first
//! and last element instead of wrapping.
//!
//! # Example
//! ```rust,ignore
//! use plusastab::{Options, PlusAsTab};
//!
//! let mut doc = plusastab::html::parse(markup)?;
//! let mut plus = PlusAsTab::new(Options::default())?;
//! plus.init(&doc);
//! plus.simulate_key_press(&mut doc, false);
//! ```

mod error;
mod host;
mod interceptor;
mod markers;
mod options;
mod resolver;

pub use error::PlusAsTabError;
pub use host::FocusHost;
pub use interceptor::{Dispatch, PlusAsTab};
pub use markers::{MarkerKind, MarkerVocabulary};
pub use options::{NavigationScope, Options};
pub use resolver::{Direction, EligibilitySet, Resolver, Toggles};

pub use pat_dom::{Document, KeyModifiers, KeyboardEvent, KeyboardEventType, NodeId, KEY_NUMPAD_ADD};

// Re-export sub-crates for hosts that build documents themselves
pub use pat_dom as dom;
pub use pat_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod testing;

//! Keyboard Events
//!
//! Synthetic keyboard events addressed at a node. Key identity uses
//! legacy `keyCode` values, which is what numpad handling keys off.

use crate::NodeId;

/// `keyCode` of the numeric-keypad plus key
pub const KEY_NUMPAD_ADD: u32 = 107;

/// `keyCode` of Tab
pub const KEY_TAB: u32 = 9;

/// Keyboard event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEventType {
    KeyDown,
    KeyPress,
    KeyUp,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Keyboard event
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    pub event_type: KeyboardEventType,
    pub key_code: u32,
    /// Character the key would insert into a text field
    pub key_char: Option<char>,
    pub target: NodeId,
    pub modifiers: KeyModifiers,
    pub cancelable: bool,
    default_prevented: bool,
}

impl KeyboardEvent {
    pub fn new(event_type: KeyboardEventType, key_code: u32, target: NodeId) -> Self {
        Self {
            event_type,
            key_code,
            key_char: None,
            target,
            modifiers: KeyModifiers::default(),
            cancelable: true,
            default_prevented: false,
        }
    }

    /// Numpad plus event of the given phase
    pub fn numpad_add(event_type: KeyboardEventType, target: NodeId) -> Self {
        Self::new(event_type, KEY_NUMPAD_ADD, target).with_char('+')
    }

    pub fn with_char(mut self, c: char) -> Self {
        self.key_char = Some(c);
        self
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.modifiers.shift = shift;
        self
    }

    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

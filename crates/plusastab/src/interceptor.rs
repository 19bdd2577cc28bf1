//! Key interceptor and focus mover
//!
//! Turns plus key presses on eligible elements into focus moves. A
//! press is handled synchronously: cancel the key's default, resolve
//! the set afresh, step from the focused element, clamp, focus.

use std::collections::BTreeSet;

use pat_dom::{Document, KeyboardEvent, KeyboardEventType, NodeId};

use crate::{
    Direction, EligibilitySet, FocusHost, NavigationScope, Options, PlusAsTabError, Resolver,
    Toggles,
};

/// What a key event led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a plus key, a modified chord, or a keyup
    Ignored,
    /// Plus key on an element that is not intercepted; its default runs
    Passthrough,
    /// Keypress cancelled so no character is inserted
    Suppressed,
    /// Intercepted, but focus is outside the set or the set is empty
    Stayed,
    Moved { from: NodeId, to: NodeId },
    /// Already at the first or last element
    Clamped { at: NodeId },
}

/// Plus-as-Tab state for one document.
///
/// Toggles and listened scopes are keyed by node id and outlive the
/// nodes they name. `init` (or `prune`) drops the ones whose node has
/// left the document.
#[derive(Debug, Default)]
pub struct PlusAsTab {
    options: Options,
    toggles: Toggles,
    /// Nodes whose subtree the key handler listens on
    scopes: BTreeSet<NodeId>,
}

impl PlusAsTab {
    pub fn new(options: Options) -> Result<Self, PlusAsTabError> {
        options.validate()?;
        Ok(Self {
            options,
            toggles: Toggles::new(),
            scopes: BTreeSet::new(),
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. The old ones stay in place if the new ones
    /// are invalid.
    pub fn set_options(&mut self, options: Options) -> Result<(), PlusAsTabError> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Listen on the whole document so statically marked elements are
    /// served, and return the first snapshot of the set
    pub fn init<H: FocusHost + ?Sized>(&mut self, host: &H) -> EligibilitySet {
        self.prune(host);
        self.scopes.insert(host.root());
        let set = self.resolve(host, None);
        tracing::debug!("Plus-as-tab initialized with {} eligible elements", set.len());
        set
    }

    /// Enable (`on`) or explicitly disable `target` and its subtree.
    ///
    /// Enabling also starts listening on `target`; disabling stops it.
    /// Returns false when nothing changed, so repeated calls are no-ops.
    pub fn enable(&mut self, target: NodeId, on: bool) -> bool {
        let toggled = self.toggles.set(target, on);
        let registered = if on {
            self.scopes.insert(target)
        } else {
            self.scopes.remove(&target)
        };
        if toggled || registered {
            tracing::debug!("Plus-as-tab {} on {}", if on { "enabled" } else { "disabled" }, target);
        }
        toggled || registered
    }

    pub fn disable(&mut self, target: NodeId) -> bool {
        self.enable(target, false)
    }

    /// Enable or disable every node of a collection
    pub fn plus_as_tab<I>(&mut self, targets: I, enabled: bool) -> &mut Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        for target in targets {
            self.enable(target, enabled);
        }
        self
    }

    /// Drop the programmatic state of `target`, leaving only its markup
    pub fn reset(&mut self, target: NodeId) -> bool {
        let cleared = self.toggles.clear(target);
        let unregistered = self.scopes.remove(&target);
        cleared || unregistered
    }

    /// Forget toggles and scopes of nodes no longer in the document.
    /// Returns how many entries were dropped.
    pub fn prune<H: FocusHost + ?Sized>(&mut self, host: &H) -> usize {
        let toggles = self.toggles.retain(|node| host.is_connected(node));
        let before = self.scopes.len();
        self.scopes.retain(|&node| host.is_connected(node));
        let dropped = toggles + before - self.scopes.len();
        if dropped > 0 {
            tracing::debug!("Pruned {} entries for detached nodes", dropped);
        }
        dropped
    }

    pub fn is_registered(&self, target: NodeId) -> bool {
        self.scopes.contains(&target)
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.options.markers, &self.toggles)
    }

    /// Current eligibility set under `root` (whole document when `None`)
    pub fn resolve<H: FocusHost + ?Sized>(&self, host: &H, root: Option<NodeId>) -> EligibilitySet {
        self.resolver().resolve(host, root)
    }

    /// The plus key would be handled on `target`: it sits inside a
    /// listened scope and is eligible itself
    pub fn is_intercepted<H: FocusHost + ?Sized>(&self, host: &H, target: NodeId) -> bool {
        let in_scope = std::iter::successors(Some(target), |&node| host.parent(node))
            .any(|node| self.scopes.contains(&node));
        in_scope && self.resolver().is_eligible(host, target)
    }

    /// Handle one key event addressed at `event.target`
    pub fn handle_key_event<H: FocusHost + ?Sized>(
        &self,
        host: &mut H,
        event: &mut KeyboardEvent,
    ) -> Dispatch {
        let mods = event.modifiers;
        if !self.options.is_plus_key(event.key_code) || mods.ctrl || mods.alt || mods.meta {
            return Dispatch::Ignored;
        }

        match event.event_type {
            KeyboardEventType::KeyUp => Dispatch::Ignored,
            _ if !self.is_intercepted(&*host, event.target) => {
                tracing::trace!("Plus key passes through on {}", event.target);
                Dispatch::Passthrough
            }
            KeyboardEventType::KeyPress => {
                event.prevent_default();
                Dispatch::Suppressed
            }
            KeyboardEventType::KeyDown => {
                event.prevent_default();
                self.move_focus(host, Direction::from_shift(mods.shift))
            }
        }
    }

    fn move_focus<H: FocusHost + ?Sized>(&self, host: &mut H, direction: Direction) -> Dispatch {
        let Some(from) = host.current_focus() else {
            return Dispatch::Stayed;
        };
        let step = match self.options.scope {
            NavigationScope::Eligible => self.resolve(&*host, None).step(from, direction),
            NavigationScope::Tabbable => tabbable_step(&*host, from, direction),
        };
        let Some(to) = step else {
            tracing::trace!("Focused element {} is outside the navigation order", from);
            return Dispatch::Stayed;
        };

        if to == from {
            return Dispatch::Clamped { at: from };
        }
        if !host.set_focus(to) {
            tracing::warn!("Element {} refused focus", to);
            return Dispatch::Stayed;
        }
        tracing::debug!("Plus-as-tab moved focus {} -> {} ({:?})", from, to, direction);
        Dispatch::Moved { from, to }
    }

    /// Press and release the plus key on the focused element of `doc`
    /// (keydown, keypress, keyup), running the document's default
    /// actions for whatever was not cancelled. Returns the keydown
    /// outcome.
    pub fn simulate_key_press(&self, doc: &mut Document, shift: bool) -> Dispatch {
        let Some(&key_code) = self.options.keys.first() else {
            return Dispatch::Ignored;
        };
        let target = doc.active_element().unwrap_or_else(|| doc.body());

        let mut outcome = Dispatch::Ignored;
        for phase in [
            KeyboardEventType::KeyDown,
            KeyboardEventType::KeyPress,
            KeyboardEventType::KeyUp,
        ] {
            let mut event = KeyboardEvent::new(phase, key_code, target)
                .with_char('+')
                .with_shift(shift);
            let dispatch = self.handle_key_event(doc, &mut event);
            doc.perform_default_action(&event);
            if phase == KeyboardEventType::KeyDown {
                outcome = dispatch;
            }
        }
        outcome
    }
}

/// Nearest tabbable element after (or before) `from` in document order,
/// as a Tab press would pick it. `from` itself need not be tabbable and
/// is returned at either end.
fn tabbable_step<H: FocusHost + ?Sized>(host: &H, from: NodeId, direction: Direction) -> Option<NodeId> {
    let order = host.focusable_descendants(host.root());
    let i = order.iter().position(|&id| id == from)?;
    let next = match direction {
        Direction::Forward => order[i + 1..].iter().find(|&&id| host.is_tabbable(id)),
        Direction::Backward => order[..i].iter().rev().find(|&&id| host.is_tabbable(id)),
    };
    Some(next.copied().unwrap_or(from))
}

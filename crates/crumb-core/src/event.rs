#![forbid(unsafe_code)]

//! Host events delivered to a mounted component.
//!
//! The host rendering framework selects nodes by [`Selector`] and subscribes
//! to named DOM-style events on that selection. This module models the two
//! event names the banner consumes: `change` (checkbox toggles) and `click`
//! (the dismiss button).

use crate::selector::Selector;

/// A DOM-style event targeted at a selected node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// An input's value changed (a checkbox was toggled).
    Change {
        /// Selector of the input that changed.
        selector: Selector,
    },

    /// A node was clicked.
    Click {
        /// Selector of the clicked node.
        selector: Selector,
    },
}

impl Event {
    /// Convenience constructor for a `change` event.
    pub fn change(selector: impl Into<Selector>) -> Self {
        Self::Change {
            selector: selector.into(),
        }
    }

    /// Convenience constructor for a `click` event.
    pub fn click(selector: impl Into<Selector>) -> Self {
        Self::Click {
            selector: selector.into(),
        }
    }

    /// The selector this event targets.
    pub fn selector(&self) -> &Selector {
        match self {
            Self::Change { selector } | Self::Click { selector } => selector,
        }
    }

    /// The named event kind, as the host subscribes to it.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Change { .. } => EventKind::Change,
            Self::Click { .. } => EventKind::Click,
        }
    }
}

/// Named event kinds a host can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The `change` event name.
    Change,
    /// The `click` event name.
    Click,
}

impl EventKind {
    /// The DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Click => "click",
        }
    }
}

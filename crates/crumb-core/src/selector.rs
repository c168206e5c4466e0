#![forbid(unsafe_code)]

//! Stable node selectors for event binding.
//!
//! Interactive elements are addressed by a [`Selector`]: a collision-free
//! identifier scoped to one component instance. Selectors for repeated
//! elements are generated deterministically from their index
//! (`prefix-{index}`), so the same tree always binds the same identifiers:
//! no opaque runtime-unique tokens, and event routing stays reproducible
//! under test.
//!
//! # Design Invariants
//!
//! 1. **Uniqueness**: two distinct interactive nodes in one tree must carry
//!    distinct selectors. Indexed construction guarantees this within a
//!    group; group prefixes must not collide.
//! 2. **Round trip**: `Selector::indexed(p, i).index_of(p) == Some(i)` for
//!    every prefix and index.
//! 3. **No allocation for static ids**: fixed elements (the dismiss button)
//!    use `&'static str` identifiers.

use core::fmt;
use std::borrow::Cow;

/// Identifier binding an interactive node to its event stream.
///
/// ```
/// use crumb_core::selector::Selector;
///
/// let dismiss = Selector::from_static("cookie-dismiss");
/// let third = Selector::indexed("cookie-checkbox", 2);
/// assert_eq!(third.as_str(), "cookie-checkbox-2");
/// assert_eq!(third.index_of("cookie-checkbox"), Some(2));
/// assert_eq!(dismiss.index_of("cookie-checkbox"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(Cow<'static, str>);

impl Selector {
    /// Create a selector from a static identifier.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Create a selector from an owned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Selector for the `index`-th element of an indexed group.
    #[must_use]
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(Cow::Owned(format!("{prefix}-{index}")))
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the index out of a selector created by [`indexed`](Self::indexed).
    ///
    /// Returns `None` when the selector does not belong to the group named
    /// by `prefix`.
    #[must_use]
    pub fn index_of(&self, prefix: &str) -> Option<usize> {
        let rest = self.0.strip_prefix(prefix)?.strip_prefix('-')?;
        rest.parse().ok()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Selector {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

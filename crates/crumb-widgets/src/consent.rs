#![forbid(unsafe_code)]

//! Per-category consent state.
//!
//! A boolean vector, index-aligned with the configured category list. The
//! length is fixed at construction and never changes; the only mutation is
//! flipping a single entry. Consent is never persisted and lives only for
//! the mounted lifetime of the component.

/// Boolean vector tracking per-category opt-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentState {
    flags: Vec<bool>,
}

impl ConsentState {
    /// All-false state for `len` categories.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Number of categories tracked.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no categories are tracked.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The entry at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.flags.get(index).copied()
    }

    /// Flip the entry at `index`, leaving every other entry unchanged.
    ///
    /// An out-of-range index is ignored. Returns whether a flip happened.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Count of accepted categories.
    pub fn accepted(&self) -> usize {
        self.flags.iter().filter(|&&accepted| accepted).count()
    }

    /// Whether every category is accepted.
    ///
    /// Vacuously true for an empty category list.
    pub fn all_accepted(&self) -> bool {
        self.flags.iter().all(|&accepted| accepted)
    }

    /// The entries, index-aligned with the category list.
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

impl From<Vec<bool>> for ConsentState {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags }
    }
}

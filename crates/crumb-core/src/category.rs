#![forbid(unsafe_code)]

//! Cookie categories shown as checkboxes.
//!
//! The category list is an explicit configuration input: it is built once,
//! passed into the component, and never mutated at runtime. Each category
//! carries the deterministic selector of its checkbox so that event routing
//! needs no shared lookup table.

use crate::selector::Selector;

/// Selector prefix for category checkboxes.
///
/// The checkbox for the category at index `i` binds
/// `Selector::indexed(CHECKBOX_PREFIX, i)`, i.e. `cookie-checkbox-{i}`.
pub const CHECKBOX_PREFIX: &str = "cookie-checkbox";

/// One cookie-consent classification shown as a checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    label: String,
    selector: Selector,
}

impl Category {
    /// Create the category at `index`, deriving its checkbox selector.
    pub fn new(label: impl Into<String>, index: usize) -> Self {
        Self {
            label: label.into(),
            selector: Selector::indexed(CHECKBOX_PREFIX, index),
        }
    }

    /// Display label shown next to the checkbox.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Selector of this category's checkbox.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// Build a category list from labels, assigning selectors by position.
///
/// ```
/// use crumb_core::category::categories;
///
/// let list = categories(["Analytics", "Marketing"]);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1].selector().as_str(), "cookie-checkbox-1");
/// ```
pub fn categories<I, S>(labels: I) -> Vec<Category>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| Category::new(label, index))
        .collect()
}

#![forbid(unsafe_code)]

//! Declarative node tree returned by view functions.
//!
//! A view is a pure function from component state to a [`Node`] tree. The
//! tree is plain data: the host maps it onto real UI nodes, and tests walk
//! it directly. Interactive elements carry a [`Selector`] so the host can
//! subscribe to their events; the component never touches live UI handles.

use crate::selector::Selector;
use crate::style::Style;

/// Element kinds the banner view produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Top-level dialog container.
    Dialog,
    /// Generic block container.
    Div,
    /// Paragraph of explanatory text.
    Paragraph,
    /// Grouping container for the checkbox list.
    Fieldset,
    /// Label wrapping a checkbox and its text.
    Label,
    /// A checkbox input.
    Checkbox,
    /// An action button.
    Button,
}

impl Tag {
    /// Lowercase tag name used in previews and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Div => "div",
            Self::Paragraph => "p",
            Self::Fieldset => "fieldset",
            Self::Label => "label",
            Self::Checkbox => "checkbox",
            Self::Button => "button",
        }
    }
}

/// A node in the tree: an element or a text run.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// An element with tag, bindings, and children.
    Element(Element),
    /// A text run.
    Text(String),
}

impl Node {
    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// This node as an element, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// This node as text, if it is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Depth-first, document-order iterator over this subtree.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Find the element bound to `selector`, depth-first.
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        self.walk()
            .filter_map(Node::as_element)
            .find(|element| element.binding() == Some(selector))
    }

    /// Concatenated text content of this subtree, in document order.
    pub fn text_content(&self) -> String {
        self.walk().filter_map(Node::as_text).collect()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Depth-first iterator over the nodes of a subtree.
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(element) = node {
            // Reverse so children pop in document order.
            self.stack.extend(element.children().iter().rev());
        }
        Some(node)
    }
}

/// An element: tag, optional event-binding selector, style, attributes,
/// and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: Tag,
    selector: Option<Selector>,
    style: Style,
    open: Option<bool>,
    checked: Option<bool>,
    children: Vec<Node>,
}

impl Element {
    /// A new, empty element.
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            selector: None,
            style: Style::default(),
            open: None,
            checked: None,
            children: Vec::new(),
        }
    }

    /// Bind this element to a selector for event subscription.
    #[must_use]
    pub fn selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Set the inline style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the `open` attribute (dialogs).
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Set the `checked` attribute (checkboxes).
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append child nodes.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// The element's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The event-binding selector, if any.
    pub fn binding(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    /// The inline style.
    pub fn inline_style(&self) -> &Style {
        &self.style
    }

    /// Whether the `open` attribute is set to true.
    pub fn is_open(&self) -> bool {
        self.open == Some(true)
    }

    /// Whether the `checked` attribute is set to true.
    pub fn is_checked(&self) -> bool {
        self.checked == Some(true)
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text content of this element's subtree.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Wrap into a [`Node`].
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        Element::new(Tag::Dialog)
            .open(true)
            .child(
                Element::new(Tag::Fieldset)
                    .child(Element::new(Tag::Div).text("2 / 3"))
                    .child(
                        Element::new(Tag::Label).text("Analytics").child(
                            Element::new(Tag::Checkbox)
                                .selector(Selector::indexed("cookie-checkbox", 0))
                                .checked(true),
                        ),
                    ),
            )
            .child(
                Element::new(Tag::Button)
                    .selector(Selector::from_static("cookie-dismiss"))
                    .text("Reject"),
            )
            .into_node()
    }

    #[test]
    fn find_locates_bound_elements() {
        let tree = sample_tree();
        let checkbox = tree
            .find(&Selector::indexed("cookie-checkbox", 0))
            .expect("checkbox present");
        assert_eq!(checkbox.tag(), Tag::Checkbox);
        assert!(checkbox.is_checked());

        let button = tree
            .find(&Selector::from_static("cookie-dismiss"))
            .expect("button present");
        assert_eq!(button.tag(), Tag::Button);
    }

    #[test]
    fn find_misses_unbound_selectors() {
        let tree = sample_tree();
        assert!(tree.find(&Selector::indexed("cookie-checkbox", 9)).is_none());
    }

    #[test]
    fn text_content_concatenates_in_document_order() {
        let tree = sample_tree();
        assert_eq!(tree.text_content(), "2 / 3AnalyticsReject");
    }

    #[test]
    fn walk_visits_every_node_once() {
        let tree = sample_tree();
        // dialog, fieldset, div, text, label, text, checkbox, button, text
        assert_eq!(tree.walk().count(), 9);
    }

    #[test]
    fn attributes_default_to_unset() {
        let element = Element::new(Tag::Div);
        assert!(!element.is_open());
        assert!(!element.is_checked());
        assert!(element.binding().is_none());
        assert!(element.inline_style().is_empty());
    }
}

#![forbid(unsafe_code)]

//! The cookie-consent banner.
//!
//! A dialog fixed to the bottom of the viewport listing cookie categories as
//! checkboxes, with a counter of accepted categories and a dismiss button.
//! Dismissal is remembered: the banner persists `"false"` under its storage
//! key when hidden, and a later mount that reads `"false"` starts hidden.
//!
//! # Visibility
//!
//! Visibility is a two-state machine: SHOWN or HIDDEN. The initial state is
//! seeded asynchronously from storage at mount (`"false"` ⇒ hidden; any
//! other value, or no value at all, ⇒ shown). Clicking the dismiss button
//! moves SHOWN → HIDDEN and persists the flag; nothing moves out of HIDDEN
//! within a single mount. Until the seed arrives the banner renders nothing.
//!
//! # The dismiss button label
//!
//! The button label varies with consent state ("accept all" when every
//! category is accepted, "reject partial" otherwise), but clicking it only
//! ever dismisses the dialog; per-category consent is not committed
//! anywhere. The label is cosmetic.

use crumb_core::category::{CHECKBOX_PREFIX, Category};
use crumb_core::{
    Color, Display, Element, Event, FlexDirection, Length, Node, Position, Selector, Style, Tag,
};
use crumb_runtime::program::{Cmd, Model};

use crate::consent::ConsentState;

/// Storage key holding the dialog visibility flag.
pub const SHOW_DIALOG_KEY: &str = "showCookieDialog";

/// Selector of the dismiss button.
pub const DISMISS_SELECTOR: Selector = Selector::from_static("cookie-dismiss");

const DEFAULT_MESSAGE: &str = "This site uses a few cookies to improve your experience.";
const DEFAULT_COUNTER_PREFIX: &str = "Cookies accepted";
const DEFAULT_ACCEPT_ALL_LABEL: &str = "Accept all cookies";
const DEFAULT_REJECT_PARTIAL_LABEL: &str = "Reject some cookies";

/// Configuration for one banner instance.
///
/// The category list is fixed for the lifetime of the instance; every piece
/// of user-facing copy can be overridden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerConfig {
    categories: Vec<Category>,
    message: String,
    counter_prefix: String,
    accept_all_label: String,
    reject_partial_label: String,
    storage_key: String,
}

impl BannerConfig {
    /// Configuration over the given category list, with default copy.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            message: DEFAULT_MESSAGE.to_string(),
            counter_prefix: DEFAULT_COUNTER_PREFIX.to_string(),
            accept_all_label: DEFAULT_ACCEPT_ALL_LABEL.to_string(),
            reject_partial_label: DEFAULT_REJECT_PARTIAL_LABEL.to_string(),
            storage_key: SHOW_DIALOG_KEY.to_string(),
        }
    }

    /// Set the explanatory text shown above the checkbox list.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the counter prefix ("<prefix> N / M").
    #[must_use]
    pub fn counter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.counter_prefix = prefix.into();
        self
    }

    /// Set the button label used when every category is accepted.
    #[must_use]
    pub fn accept_all_label(mut self, label: impl Into<String>) -> Self {
        self.accept_all_label = label.into();
        self
    }

    /// Set the button label used when some category is not accepted.
    #[must_use]
    pub fn reject_partial_label(mut self, label: impl Into<String>) -> Self {
        self.reject_partial_label = label.into();
        self
    }

    /// Set the storage key holding the visibility flag.
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// The configured categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Messages driving the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerMsg {
    /// The checkbox of the category at this index was toggled.
    Toggle(usize),
    /// The dismiss button was clicked.
    Hide,
    /// The initial visibility flag resolved from storage.
    Visibility(bool),
    /// An event that targets nothing the banner owns.
    Ignored,
}

impl From<Event> for BannerMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Change { selector } => match selector.index_of(CHECKBOX_PREFIX) {
                Some(index) => Self::Toggle(index),
                None => Self::Ignored,
            },
            Event::Click { selector } if selector == DISMISS_SELECTOR => Self::Hide,
            Event::Click { .. } => Self::Ignored,
        }
    }
}

/// The banner model: consent state plus the visibility flag.
pub struct CookieBanner {
    config: BannerConfig,
    consent: ConsentState,
    visibility: Option<bool>,
}

impl CookieBanner {
    /// A banner over `config`, with all-false consent and unresolved
    /// visibility.
    #[must_use]
    pub fn new(config: BannerConfig) -> Self {
        let consent = ConsentState::new(config.categories().len());
        Self {
            config,
            consent,
            visibility: None,
        }
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// Current per-category consent.
    pub fn consent(&self) -> &ConsentState {
        &self.consent
    }

    /// The visibility flag; `None` until the storage seed resolves.
    pub fn visibility(&self) -> Option<bool> {
        self.visibility
    }

    /// Whether the dialog is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visibility == Some(true)
    }
}

impl Model for CookieBanner {
    type Message = BannerMsg;

    fn init(&mut self) -> Cmd<BannerMsg> {
        // Shown unless storage says exactly "false"; an absent key shows.
        Cmd::read_storage(self.config.storage_key.clone(), |value| {
            BannerMsg::Visibility(value.as_deref() != Some("false"))
        })
    }

    fn update(&mut self, msg: BannerMsg) -> Cmd<BannerMsg> {
        match msg {
            BannerMsg::Toggle(index) => {
                if self.consent.toggle(index) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(index, accepted = self.consent.accepted(), "consent toggled");
                }
                Cmd::none()
            }
            BannerMsg::Visibility(shown) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(shown, "visibility seeded");
                self.visibility = Some(shown);
                Cmd::none()
            }
            BannerMsg::Hide => {
                #[cfg(feature = "tracing")]
                tracing::debug!("dialog dismissed");
                self.visibility = Some(false);
                Cmd::write_storage(self.config.storage_key.clone(), "false")
            }
            BannerMsg::Ignored => Cmd::none(),
        }
    }

    fn view(&self) -> Option<Node> {
        let visible = self.visibility?;
        Some(view(&self.config, &self.consent, visible))
    }
}

/// Build the dialog tree for the given configuration and state.
///
/// Pure: the tree depends only on the arguments, and is re-evaluated by the
/// runtime whenever either state input changes.
pub fn view(config: &BannerConfig, consent: &ConsentState, visible: bool) -> Node {
    let counter = format!(
        "{} {} / {}",
        config.counter_prefix,
        consent.accepted(),
        config.categories.len()
    );
    let label = if consent.all_accepted() {
        config.accept_all_label.as_str()
    } else {
        config.reject_partial_label.as_str()
    };

    Element::new(Tag::Dialog)
        .open(visible)
        .style(
            Style::new()
                .position(Position::Fixed)
                .bottom(Length::Zero)
                .width(Length::Percent(100)),
        )
        .child(
            Element::new(Tag::Div)
                .style(
                    Style::new()
                        .max_width(Length::Rem(40.0))
                        .display(Display::Flex)
                        .flex_direction(FlexDirection::Column)
                        .gap(Length::Rem(0.5))
                        .padding_block(Length::Rem(0.5))
                        .margin_inline(Length::Auto),
                )
                .child(Element::new(Tag::Paragraph).text(config.message.as_str()))
                .child(
                    Element::new(Tag::Fieldset)
                        .child(Element::new(Tag::Div).text(counter))
                        .with_children(checkbox_list(&config.categories, consent)),
                )
                .child(
                    Element::new(Tag::Button)
                        .selector(DISMISS_SELECTOR)
                        .style(Style::new().background(Color::RED))
                        .text(label),
                ),
        )
        .into_node()
}

/// One `div > label > (text, checkbox)` row per category; checkbox `i`
/// reflects `consent[i]`.
fn checkbox_list(categories: &[Category], consent: &ConsentState) -> Vec<Node> {
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            Element::new(Tag::Div)
                .child(
                    Element::new(Tag::Label).text(category.label()).child(
                        Element::new(Tag::Checkbox)
                            .selector(category.selector().clone())
                            .checked(consent.get(index).unwrap_or(false)),
                    ),
                )
                .into_node()
        })
        .collect()
}

#![forbid(unsafe_code)]

//! Domain vocabulary for the crumb cookie-consent component.
//!
//! This crate defines the pure data types shared by the runtime, the widget,
//! and the test harness:
//!
//! - [`Selector`] — stable, deterministic identifiers binding interactive
//!   nodes to their event streams.
//! - [`Event`] — DOM-style events (`change`, `click`) targeted at a selector.
//! - [`Category`] — one cookie-consent classification shown as a checkbox.
//! - [`Node`] / [`Element`] — the declarative UI tree returned by view
//!   functions.
//! - [`Style`] — the small typed style model the dialog uses.
//!
//! Nothing here performs IO or holds global state; every type is a plain
//! value that can be constructed in tests without a host environment.

pub mod category;
pub mod dom;
pub mod event;
pub mod selector;
pub mod style;

pub use category::{Category, categories};
pub use dom::{Element, Node, Tag};
pub use event::{Event, EventKind};
pub use selector::Selector;
pub use style::{Color, Display, FlexDirection, Length, Position, Style};

#![forbid(unsafe_code)]

//! crumb public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use crumb::prelude::*;
//!
//! let config = BannerConfig::new(categories(["Analytics", "Marketing"]));
//! let storage = Arc::new(MemoryStorage::new());
//! let mut program = Program::new(CookieBanner::new(config), storage.clone());
//!
//! // Mount: the persisted visibility flag seeds the dialog. No flag stored
//! // yet, so the dialog shows.
//! program.mount();
//! assert!(program.model().is_visible());
//!
//! // The user accepts one category, then dismisses the banner.
//! program.dispatch(Event::change(Selector::indexed("cookie-checkbox", 0)));
//! program.dispatch(Event::click(crumb::DISMISS_SELECTOR));
//!
//! assert!(!program.model().is_visible());
//! assert_eq!(
//!     storage.get(crumb::SHOW_DIALOG_KEY).unwrap().as_deref(),
//!     Some("false"),
//! );
//! ```

// --- Core re-exports -------------------------------------------------------

pub use crumb_core::{
    Category, Color, Display, Element, Event, EventKind, FlexDirection, Length, Node, Position,
    Selector, Style, Tag, categories,
};

// --- Runtime re-exports ----------------------------------------------------

pub use crumb_runtime::{
    Cmd, MemoryStorage, Model, Program, StorageBackend, StorageError, StorageResult,
};

#[cfg(feature = "state-persistence")]
pub use crumb_runtime::FileStorage;

// --- Widget re-exports -----------------------------------------------------

pub use crumb_widgets::{
    BannerConfig, BannerMsg, ConsentState, CookieBanner, DISMISS_SELECTOR, SHOW_DIALOG_KEY, banner,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    //! Commonly used types, importable in one line.

    pub use crate::{
        BannerConfig, BannerMsg, Category, Cmd, ConsentState, CookieBanner, Event, MemoryStorage,
        Model, Node, Program, Selector, StorageBackend, categories,
    };
}

#![forbid(unsafe_code)]

//! The crumb cookie-consent banner widget.

pub mod banner;
pub mod consent;

pub use banner::{BannerConfig, BannerMsg, CookieBanner, DISMISS_SELECTOR, SHOW_DIALOG_KEY};
pub use consent::ConsentState;

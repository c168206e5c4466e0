#![forbid(unsafe_code)]

//! Deterministic test harness for crumb components.
//!
//! Everything here exists so tests can look at what a user would see
//! without a host UI:
//!
//! - [`preview`] — render a node tree as a plain-text outline or a framed
//!   fixed-width box.
//! - [`golden`] — stable content checksums over preview output.
//! - [`recorder`] — JSONL session logs with a stable schema.

pub mod golden;
pub mod preview;
pub mod recorder;

pub use golden::{checksum_lines, checksum_view};
pub use preview::{fit, framed, outline};
pub use recorder::SessionRecorder;

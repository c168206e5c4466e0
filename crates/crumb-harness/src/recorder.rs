#![forbid(unsafe_code)]

//! JSONL session recording.
//!
//! A [`SessionRecorder`] captures a mounted component's observable life as
//! one JSON object per line, with a stable schema:
//!
//! ```json
//! {"event":"mount","storage":"MemoryStorage"}
//! {"event":"view","open":true,"checksum":"h64:..."}
//! {"event":"dispatch","kind":"click","selector":"cookie-dismiss"}
//! {"event":"view","open":false,"checksum":"h64:..."}
//! ```
//!
//! The log is plain lines, so tests can diff whole sessions or parse
//! individual records back with `serde_json`.

use crumb_core::{Event, Node};

use crate::golden::checksum_view;

/// Records mount, dispatch, and view events as JSONL.
#[derive(Debug, Default)]
pub struct SessionRecorder {
    lines: Vec<String>,
}

impl SessionRecorder {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mount against the named storage backend.
    pub fn mount(&mut self, storage: &str) {
        self.push(serde_json::json!({ "event": "mount", "storage": storage }));
    }

    /// Record a dispatched host event.
    pub fn dispatch(&mut self, event: &Event) {
        self.push(serde_json::json!({
            "event": "dispatch",
            "kind": event.kind().name(),
            "selector": event.selector().as_str(),
        }));
    }

    /// Record an emitted view.
    pub fn view(&mut self, node: &Node) {
        let open = node.as_element().map(crumb_core::Element::is_open);
        self.push(serde_json::json!({
            "event": "view",
            "open": open,
            "checksum": checksum_view(node),
        }));
    }

    /// The recorded lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the recorder, yielding its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn push(&mut self, record: serde_json::Value) {
        self.lines.push(record.to_string());
    }
}

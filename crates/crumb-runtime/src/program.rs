#![forbid(unsafe_code)]

//! Elm-style runtime for reactive components.
//!
//! The runtime separates state ([`Model`]) from rendering (the node tree
//! returned by [`Model::view`]) and funnels every side effect through the
//! command type ([`Cmd`]). A [`Program`] owns one mounted model, its message
//! inbox, and a handle to persisted storage, and drives the
//! update/view loop in response to dispatched host events.
//!
//! # Delivery contract
//!
//! Commands never call back into `update` re-entrantly. A command that
//! produces a message (`Cmd::Msg`, or the continuation of a storage read)
//! enqueues it on the inbox, and the inbox drains only after the current
//! command pass has completed. In particular, the value read from storage
//! during [`Program::mount`] is always observed by the fully-mounted model:
//! there is no window in which an emission can fire before its subscriber
//! is attached.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use crumb_core::{Event, Node};
//! use crumb_runtime::program::{Cmd, Model, Program};
//! use crumb_runtime::storage::MemoryStorage;
//!
//! struct Counter {
//!     clicks: usize,
//! }
//!
//! enum Msg {
//!     Clicked,
//!     Other,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Click { .. } => Msg::Clicked,
//!             _ => Msg::Other,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         if let Msg::Clicked = msg {
//!             self.clicks += 1;
//!         }
//!         Cmd::none()
//!     }
//!
//!     fn view(&self) -> Option<Node> {
//!         None
//!     }
//! }
//!
//! let mut program = Program::new(Counter { clicks: 0 }, Arc::new(MemoryStorage::new()));
//! program.mount();
//! program.dispatch(Event::click("anywhere"));
//! assert_eq!(program.model().clicks, 1);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crumb_core::{Event, Node};
use tracing::{debug, debug_span, warn};

use crate::storage::StorageBackend;

/// The Model trait defines component state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state. Every host
    /// event must map to some message, so the type converts from [`Event`].
    type Message: From<Event>;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program mounts. Return commands to execute
    /// initial side effects like reading persisted state.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns commands for any
    /// side effects that should be executed.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state as a node tree.
    ///
    /// Returns `None` while the component has nothing to show, for
    /// instance before asynchronously-seeded state has resolved.
    fn view(&self) -> Option<Node>;
}

/// A side effect requested by a model.
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Enqueue a message for the model.
    Msg(M),
    /// Read a value from persisted storage.
    ///
    /// The continuation receives `None` when the key is absent (or the
    /// backend failed; failures are logged and degraded to absence). The
    /// resulting message is queued, never delivered re-entrantly.
    ReadStorage {
        /// Storage key to read.
        key: String,
        /// Maps the stored value to a model message.
        on_value: Box<dyn FnOnce(Option<String>) -> M>,
    },
    /// Write a value to persisted storage.
    WriteStorage {
        /// Storage key to write.
        key: String,
        /// Value to store.
        value: String,
    },
}

impl<M> Cmd<M> {
    /// No operation.
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// Enqueue a message.
    pub fn msg(msg: M) -> Self {
        Self::Msg(msg)
    }

    /// Execute commands in order.
    pub fn batch(cmds: impl IntoIterator<Item = Cmd<M>>) -> Self {
        Self::Batch(cmds.into_iter().collect())
    }

    /// Read `key` from storage and map the result through `on_value`.
    pub fn read_storage(
        key: impl Into<String>,
        on_value: impl FnOnce(Option<String>) -> M + 'static,
    ) -> Self {
        Self::ReadStorage {
            key: key.into(),
            on_value: Box::new(on_value),
        }
    }

    /// Write `value` under `key` in storage.
    pub fn write_storage(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::WriteStorage {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether this is `Cmd::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M: fmt::Debug> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Cmd::None"),
            Self::Batch(cmds) => write!(f, "Cmd::Batch({} commands)", cmds.len()),
            Self::Msg(m) => write!(f, "Cmd::Msg({m:?})"),
            Self::ReadStorage { key, .. } => write!(f, "Cmd::ReadStorage({key:?})"),
            Self::WriteStorage { key, value } => {
                write!(f, "Cmd::WriteStorage({key:?} = {value:?})")
            }
        }
    }
}

/// Drives one mounted model: owns the inbox, the storage handle, and the
/// most recent rendered view.
pub struct Program<M: Model> {
    model: M,
    storage: Arc<dyn StorageBackend>,
    inbox: VecDeque<M::Message>,
    view: Option<Node>,
    view_listener: Option<Box<dyn FnMut(&Node)>>,
    mounted: bool,
}

impl<M: Model> Program<M> {
    /// Create a program over `model`, persisting through `storage`.
    ///
    /// Nothing runs until [`mount`](Self::mount) is called.
    pub fn new(model: M, storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            model,
            storage,
            inbox: VecDeque::new(),
            view: None,
            view_listener: None,
            mounted: false,
        }
    }

    /// Register a listener invoked with every rendered view.
    ///
    /// This is a debugging tap: the listener observes the same trees the
    /// host receives, in the same order.
    pub fn on_view(&mut self, listener: impl FnMut(&Node) + 'static) {
        self.view_listener = Some(Box::new(listener));
    }

    /// Mount the component: run [`Model::init`], execute its commands, and
    /// deliver any queued messages.
    ///
    /// Mounting twice is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let _span = debug_span!("mount", storage = self.storage.name()).entered();
        let cmd = self.model.init();
        self.run_cmd(cmd);
        self.drain();
    }

    /// Dispatch a host event to the model.
    pub fn dispatch(&mut self, event: Event) {
        debug!(kind = event.kind().name(), selector = %event.selector(), "dispatch");
        self.inbox.push_back(M::Message::from(event));
        self.drain();
    }

    /// Send a message directly to the model, bypassing event routing.
    pub fn send(&mut self, msg: M::Message) {
        self.inbox.push_back(msg);
        self.drain();
    }

    /// The mounted model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The most recent rendered view, if the model has produced one.
    pub fn view(&self) -> Option<&Node> {
        self.view.as_ref()
    }

    /// The storage backend this program persists through.
    pub fn storage(&self) -> &Arc<dyn StorageBackend> {
        &self.storage
    }

    /// Whether [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn run_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.run_cmd(cmd);
                }
            }
            Cmd::Msg(msg) => self.inbox.push_back(msg),
            Cmd::ReadStorage { key, on_value } => {
                let value = match self.storage.get(&key) {
                    Ok(value) => value,
                    Err(err) => {
                        warn!(key = %key, error = %err, "storage read failed; treating as absent");
                        None
                    }
                };
                debug!(key = %key, value = value.as_deref(), "storage read");
                self.inbox.push_back(on_value(value));
            }
            Cmd::WriteStorage { key, value } => match self.storage.set(&key, &value) {
                Ok(()) => debug!(key = %key, value = %value, "storage write"),
                Err(err) => warn!(key = %key, error = %err, "storage write failed; value dropped"),
            },
        }
    }

    /// Deliver queued messages in FIFO order, then re-render.
    ///
    /// Messages enqueued while draining (via `Cmd::Msg` or storage reads)
    /// are processed in the same pass, after everything queued before them.
    fn drain(&mut self) {
        while let Some(msg) = self.inbox.pop_front() {
            let cmd = self.model.update(msg);
            self.run_cmd(cmd);
        }
        self.render();
    }

    fn render(&mut self) {
        let Some(next) = self.model.view() else {
            return;
        };
        debug!("view emitted");
        if let Some(listener) = self.view_listener.as_mut() {
            listener(&next);
        }
        self.view = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError, StorageResult};
    use crumb_core::{Element, Selector, Tag};

    #[derive(Debug, PartialEq)]
    enum TestMsg {
        Loaded(Option<String>),
        Clicked,
        Echo(u32),
        Other,
    }

    impl From<Event> for TestMsg {
        fn from(event: Event) -> Self {
            match event {
                Event::Click { .. } => TestMsg::Clicked,
                Event::Change { .. } => TestMsg::Other,
            }
        }
    }

    /// Records every delivered message; init reads a storage key.
    struct Recorder {
        seen: Vec<TestMsg>,
        render_clicks: bool,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                seen: Vec::new(),
                render_clicks: false,
            }
        }
    }

    impl Model for Recorder {
        type Message = TestMsg;

        fn init(&mut self) -> Cmd<TestMsg> {
            Cmd::read_storage("showCookieDialog", TestMsg::Loaded)
        }

        fn update(&mut self, msg: TestMsg) -> Cmd<TestMsg> {
            let cmd = match msg {
                TestMsg::Clicked => Cmd::batch([
                    Cmd::write_storage("showCookieDialog", "false"),
                    Cmd::msg(TestMsg::Echo(1)),
                ]),
                _ => Cmd::none(),
            };
            self.seen.push(msg);
            cmd
        }

        fn view(&self) -> Option<Node> {
            if self.render_clicks {
                Some(Element::new(Tag::Div).text(format!("{}", self.seen.len())).into_node())
            } else {
                None
            }
        }
    }

    #[test]
    fn mount_delivers_stored_value_through_inbox() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("showCookieDialog", "false").unwrap();
        let mut program = Program::new(Recorder::new(), storage);
        program.mount();
        assert_eq!(
            program.model().seen,
            vec![TestMsg::Loaded(Some("false".into()))]
        );
    }

    #[test]
    fn mount_delivers_absent_value_as_none() {
        let mut program = Program::new(Recorder::new(), Arc::new(MemoryStorage::new()));
        program.mount();
        assert_eq!(program.model().seen, vec![TestMsg::Loaded(None)]);
    }

    #[test]
    fn mount_twice_reads_storage_once() {
        let mut program = Program::new(Recorder::new(), Arc::new(MemoryStorage::new()));
        program.mount();
        program.mount();
        assert_eq!(program.model().seen.len(), 1);
    }

    #[test]
    fn command_messages_are_delivered_after_earlier_queue_entries() {
        let storage = Arc::new(MemoryStorage::new());
        let mut program = Program::new(Recorder::new(), storage.clone());
        program.mount();
        program.dispatch(Event::click(Selector::from_static("cookie-dismiss")));
        // The write lands in storage, and the echoed message follows the click.
        assert_eq!(
            storage.get("showCookieDialog").unwrap().as_deref(),
            Some("false")
        );
        assert_eq!(
            program.model().seen,
            vec![TestMsg::Loaded(None), TestMsg::Clicked, TestMsg::Echo(1)]
        );
    }

    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn name(&self) -> &str {
            "BrokenStorage"
        }

        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Corruption("unreadable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Corruption("unwritable".into()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn failed_read_degrades_to_absent_value() {
        let mut program = Program::new(Recorder::new(), Arc::new(BrokenStorage));
        program.mount();
        assert_eq!(program.model().seen, vec![TestMsg::Loaded(None)]);
    }

    #[test]
    fn failed_write_does_not_panic_or_stall_the_loop() {
        let mut program = Program::new(Recorder::new(), Arc::new(BrokenStorage));
        program.mount();
        program.dispatch(Event::click(Selector::from_static("cookie-dismiss")));
        assert_eq!(program.model().seen.len(), 3);
    }

    #[test]
    fn view_is_retained_and_listener_observes_emissions() {
        let mut model = Recorder::new();
        model.render_clicks = true;
        let mut program = Program::new(model, Arc::new(MemoryStorage::new()));
        let emitted = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = emitted.clone();
        program.on_view(move |view| sink.borrow_mut().push(view.text_content()));
        program.mount();
        program.dispatch(Event::click(Selector::from_static("cookie-dismiss")));
        assert_eq!(*emitted.borrow(), vec!["1".to_string(), "3".to_string()]);
        assert_eq!(program.view().map(Node::text_content).as_deref(), Some("3"));
    }

    #[test]
    fn no_view_is_emitted_while_model_returns_none() {
        let mut program = Program::new(Recorder::new(), Arc::new(MemoryStorage::new()));
        program.mount();
        assert!(program.view().is_none());
    }
}

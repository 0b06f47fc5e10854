//! Output Lines and Sinks
//!
//! Commands produce typed `OutputLine`s. Anything that wants to observe
//! output as it is produced installs an `OutputSink`; the returned
//! `SinkRegistration` uninstalls it when dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Command,
    Output,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub kind: OutputKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: OutputKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(OutputKind::Success, text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }
}

/// Split text into output lines. A trailing newline does not add an
/// empty line; empty text gives no lines.
pub fn text_lines(text: &str) -> Vec<OutputLine> {
    text.lines().map(OutputLine::output).collect()
}

/// Receiver of output as it is appended to a session.
pub trait OutputSink {
    fn emit(&self, kind: OutputKind, text: &str);
}

type SinkList = RefCell<Vec<(u64, Rc<dyn OutputSink>)>>;

/// Set of installed sinks.
#[derive(Default)]
pub struct OutputSinks {
    sinks: Rc<SinkList>,
    next_id: Cell<u64>,
}

impl OutputSinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `sink` until the returned registration is dropped.
    #[must_use = "the sink is removed as soon as the registration is dropped"]
    pub fn install(&self, sink: Rc<dyn OutputSink>) -> SinkRegistration {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.sinks.borrow_mut().push((id, sink));
        SinkRegistration { id, sinks: Rc::downgrade(&self.sinks) }
    }

    pub fn len(&self) -> usize {
        self.sinks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn emit(&self, line: &OutputLine) {
        // Snapshot so a sink may install or drop registrations while emitting.
        let sinks: Vec<Rc<dyn OutputSink>> = self.sinks.borrow().iter().map(|(_, s)| s.clone()).collect();
        for sink in sinks {
            sink.emit(line.kind, &line.text);
        }
    }
}

/// Scoped registration of an `OutputSink`.
pub struct SinkRegistration {
    id: u64,
    sinks: Weak<SinkList>,
}

impl Drop for SinkRegistration {
    fn drop(&mut self) {
        if let Some(sinks) = self.sinks.upgrade() {
            sinks.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Sink that records every line it sees.
#[derive(Default)]
pub struct BufferSink {
    lines: RefCell<Vec<OutputLine>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines.borrow().clone()
    }
}

impl OutputSink for BufferSink {
    fn emit(&self, kind: OutputKind, text: &str) {
        self.lines.borrow_mut().push(OutputLine::new(kind, text));
    }
}

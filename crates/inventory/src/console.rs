//! Line-oriented console output used for the human-readable stock report.
//!
//! This is separate from `tracing`: console lines are part of the ledger's
//! observable contract, structured logs are not.

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for console lines.
pub trait Console {
    fn line(&self, text: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Copy, Clone)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// Records lines in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to a ledger and
/// keep another to inspect what was written.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Drain the buffer, returning what it held.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl Console for BufferConsole {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

//! In-memory sink
//!
//! Collects everything the writer appends into a shared string. Clones share
//! the same buffer, so one clone can be handed to the logger while another
//! is kept to inspect the output.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything appended so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn append(&mut self, text: &str) -> Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

//! Unbounded FIFO hand-off between producers and the writer
//!
//! Any number of threads may [`push`](EntryQueue::push); exactly one consumer,
//! the writer loop, takes entries out. Pushing never blocks.

use super::log_entry::LogEntry;
use crossbeam_channel::{unbounded, Receiver, Sender};

#[derive(Debug, Clone)]
pub struct EntryQueue {
    sender: Sender<LogEntry>,
    receiver: Receiver<LogEntry>,
}

impl EntryQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Append an entry at the tail.
    #[inline]
    pub fn push(&self, entry: LogEntry) {
        // The receiver half lives in `self`, so the channel is never disconnected.
        let _ = self.sender.send(entry);
    }

    /// Remove the head entry without waiting.
    #[inline]
    pub fn try_take(&self) -> Option<LogEntry> {
        self.receiver.try_recv().ok()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Consumer handle for blocking selection in the writer loop.
    pub(crate) fn receiver(&self) -> &Receiver<LogEntry> {
        &self.receiver
    }
}

impl Default for EntryQueue {
    fn default() -> Self {
        Self::new()
    }
}

//! Sink trait for the log destination

use super::error::Result;

/// Append-only destination for rendered entry text.
///
/// Only the writer loop calls `append`, one entry at a time.
pub trait Sink: Send {
    fn append(&mut self, text: &str) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

//! Clipboard sinks for table export.
//!
//! The SDK never touches a real clipboard itself; the host application
//! injects a primary sink and a legacy fallback, mirroring the
//! `navigator.clipboard` → `execCommand` chain of the site's workflow.

use thiserror::Error;

/// A clipboard write was rejected by the sink.
#[derive(Error, Debug)]
#[error("Clipboard write rejected: {0}")]
pub struct ClipboardError(pub String);

/// Somewhere exported text can be placed.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory sink for tests and headless callers.
#[derive(Debug, Default)]
pub struct BufferClipboard {
    contents: Option<String>,
}

impl BufferClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for BufferClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

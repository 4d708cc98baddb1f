//! In-memory sink for tests and embedding.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::sink::OutputSink;

#[derive(Debug, Default)]
struct Captured {
    emitted: Vec<String>,
    warnings: Vec<String>,
}

/// Sink that stores everything it receives.
///
/// Clones share the same buffers, so a handle kept by the caller sees what
/// was written through a clone boxed into a `ServiceContext`.
#[derive(Debug, Clone, Default)]
pub struct CapturingSink {
    captured: Arc<Mutex<Captured>>,
}

impl CapturingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order.
    #[must_use]
    pub fn emitted(&self) -> Vec<String> {
        self.lock().emitted.clone()
    }

    /// Every warning reported so far, in order.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.lock().warnings.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Captured> {
        // A panic while holding the lock leaves plain vectors behind; keep using them.
        self.captured
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl OutputSink for CapturingSink {
    fn emit(&self, text: &str) {
        self.lock().emitted.push(text.to_string());
    }

    fn warn(&self, message: &str) {
        self.lock().warnings.push(message.to_string());
    }
}

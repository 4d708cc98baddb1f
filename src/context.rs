//! Service context bundling the port trait objects.

use crate::adapters::live::StdoutSink;
use crate::ports::sink::OutputSink;

/// Bundles the external boundaries a command needs.
pub struct ServiceContext {
    /// Where rendered results and warnings go.
    pub sink: Box<dyn OutputSink>,
}

impl ServiceContext {
    /// Creates a live context that writes to stdout and stderr.
    #[must_use]
    pub fn live() -> Self {
        Self {
            sink: Box::new(StdoutSink),
        }
    }

    /// Creates a context around the given sink.
    #[must_use]
    pub fn with_sink(sink: Box<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

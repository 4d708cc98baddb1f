//! Live sink using standard output and standard error.

use crate::ports::sink::OutputSink;

/// Live sink that prints results to stdout and warnings to stderr.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, text: &str) {
        println!("{text}");
    }

    fn warn(&self, message: &str) {
        eprintln!("Warning: {message}");
    }
}

//! Live adapters writing to the process's standard streams.

pub mod sink;

pub use sink::StdoutSink;

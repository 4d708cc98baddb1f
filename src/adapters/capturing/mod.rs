//! Capturing adapters that keep output in memory.

pub mod sink;

pub use sink::CapturingSink;

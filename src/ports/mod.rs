//! Port traits defining external boundaries.
//!
//! Implementations live in `src/adapters/`.

pub mod sink;

pub use sink::OutputSink;

//! Output sink port for emitting results.

/// Receives rendered output and warnings.
///
/// The remap core only builds values; anything shown to a user goes
/// through a sink so that it can be swapped for capture in tests or for
/// another display mechanism.
pub trait OutputSink: Send + Sync {
    /// Emits one rendered result.
    fn emit(&self, text: &str);

    /// Reports a non-fatal condition, such as a missing lookup key.
    fn warn(&self, message: &str);
}

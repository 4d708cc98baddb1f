//! Error types for remap.

use thiserror::Error;

/// Result type alias using [`RemapError`].
pub type Result<T> = std::result::Result<T, RemapError>;

/// Errors raised around the remap operation.
///
/// The remap itself never fails: a lookup key missing from the target is
/// recorded as an absent value. These errors come from the call boundary
/// (parsing arguments) or from callers that opt into strict handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemapError {
    /// An argument could not be read as a flat string-to-string mapping.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument (e.g. "source").
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// One or more source values had no entry in the target.
    #[error("missing lookup keys for source keys: {}", keys.join(", "))]
    MissingLookupKeys {
        /// Source keys whose lookup failed, in source order.
        keys: Vec<String>,
    },

    /// The result could not be rendered in the requested style.
    #[error("failed to render result: {0}")]
    Render(String),
}

impl RemapError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

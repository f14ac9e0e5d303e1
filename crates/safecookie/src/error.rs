//! Error types for safecookie.

use safecookie_core::CoreError;
use thiserror::Error;

/// Errors that can occur while sealing or opening a cookie.
///
/// Opening reports tampering, corruption and wrong keys uniformly as
/// `Core(CoreError::InvalidCookie)`. A payload that authenticates but does not
/// deserialize into the requested type is reported separately as
/// [`Error::Deserialization`]; callers who want a single failure can use
/// [`Error::is_invalid_cookie`].
#[derive(Debug, Error)]
pub enum Error {
    /// Core protocol error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The authenticated payload could not be deserialized.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// True for any failure to turn a cookie back into a trusted value.
    pub fn is_invalid_cookie(&self) -> bool {
        matches!(
            self,
            Error::Core(CoreError::InvalidCookie) | Error::Deserialization(_)
        )
    }
}

/// Result type for safecookie operations.
pub type Result<T> = std::result::Result<T, Error>;

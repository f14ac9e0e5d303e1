//! Error types for safecookie core.

use thiserror::Error;

/// Errors produced while constructing a cipher, sealing, or opening a cookie.
///
/// Opening never reports *why* a token was rejected: every adversarial or
/// corrupt input collapses into [`CoreError::InvalidCookie`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The key does not match any length the algorithm accepts.
    #[error("invalid key length: expected {expected}, got {actual} bytes")]
    InvalidKeyLength { expected: &'static str, actual: usize },

    /// A nonce of the wrong size was handed to the AEAD.
    #[error("invalid nonce length: expected {expected}, got {actual} bytes")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// The secure random source could not supply a nonce.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// The AEAD refused to seal the payload.
    #[error("encryption error: {0}")]
    Encryption(String),

    /// The cookie attributes could not be written as canonical CBOR.
    #[error("canonicalization error: {0}")]
    Canonicalization(String),

    /// The sealed token would not fit in a cookie value.
    #[error("sealed token too large: {len} bytes exceeds limit of {max}")]
    TokenTooLarge { len: usize, max: usize },

    /// A string is not valid under the envelope alphabet.
    ///
    /// Only returned by [`EnvelopeCodec::decode`](crate::EnvelopeCodec::decode)
    /// itself; the binding protocol folds it into [`CoreError::InvalidCookie`].
    #[error("malformed envelope encoding")]
    MalformedEncoding,

    /// The cookie failed to open.
    #[error("invalid cookie")]
    InvalidCookie,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

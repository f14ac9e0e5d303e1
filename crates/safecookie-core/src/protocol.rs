//! The binding protocol: seal a payload to a context, open it again.
//!
//! ```text
//! seal: nonce <- NonceSource
//!       aad   <- canonicalize(context)
//!       token <- encode(nonce || AEAD.seal(nonce, payload, aad))
//!
//! open: raw   <- decode(token)                 else InvalidCookie
//!       require len(raw) > nonce_size          else InvalidCookie
//!       aad   <- canonicalize(current context)
//!       AEAD.open(raw[..n], raw[n..], aad)     else InvalidCookie
//! ```
//!
//! Every opening failure is reported as [`CoreError::InvalidCookie`] so the
//! error itself cannot serve as an oracle. The rejecting stage is only
//! recorded in a `debug` event alongside the cookie name. Sealing failures
//! (bad nonce source, oversized token) propagate as-is.

use crate::aead::{AeadPrimitive, Algorithm, Cipher};
use crate::context::Context;
use crate::envelope::{encoded_len, Base64Url, EnvelopeCodec};
use crate::error::{CoreError, Result};
use crate::nonce::{NonceSource, OsNonceSource};

/// Default cap on token length: the common per-cookie browser limit.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 4096;

/// Seals payloads to contexts and opens them again.
///
/// A `Binder` is immutable after construction and safe to share between
/// threads; each call is independent.
#[derive(Debug, Clone)]
pub struct Binder<A = Cipher, E = Base64Url, N = OsNonceSource> {
    aead: A,
    envelope: E,
    nonces: N,
    max_token_len: usize,
}

impl Binder {
    /// AES-GCM binder from a 128-, 192-, or 256-bit key.
    pub fn aes_gcm(key: &[u8]) -> Result<Self> {
        Ok(Self::new(Cipher::aes_gcm(key)?))
    }

    /// Binder for a specific algorithm.
    pub fn with_algorithm(algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        Ok(Self::new(Cipher::new(algorithm, key)?))
    }
}

impl<A: AeadPrimitive> Binder<A> {
    /// Binder over `aead` with the default envelope and the OS nonce source.
    pub fn new(aead: A) -> Self {
        Self::from_parts(aead, Base64Url, OsNonceSource)
    }
}

impl<A, E, N> Binder<A, E, N>
where
    A: AeadPrimitive,
    E: EnvelopeCodec,
    N: NonceSource,
{
    /// Assemble a binder from its parts.
    pub fn from_parts(aead: A, envelope: E, nonces: N) -> Self {
        Self {
            aead,
            envelope,
            nonces,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }

    /// Replace the token length limit.
    pub fn max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = max;
        self
    }

    /// The AEAD in use.
    pub fn aead(&self) -> &A {
        &self.aead
    }

    /// The algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.aead.algorithm()
    }

    /// The current token length limit.
    pub fn token_limit(&self) -> usize {
        self.max_token_len
    }

    /// Seal `payload`, binding it to `context`.
    pub fn seal(&self, payload: &[u8], context: &Context<'_>) -> Result<String> {
        let mut nonce = vec![0u8; self.aead.nonce_size()];
        self.nonces.fill(&mut nonce)?;

        let aad = context.associated_data()?;
        let ciphertext = self.aead.seal(&nonce, payload, &aad)?;

        let len = encoded_len(nonce.len() + ciphertext.len());
        if len > self.max_token_len {
            return Err(CoreError::TokenTooLarge {
                len,
                max: self.max_token_len,
            });
        }

        Ok(self.envelope.encode(&nonce, &ciphertext))
    }

    /// Open `token`, verifying it against the current `context`.
    ///
    /// The length limit applies to the token without trailing `=` padding,
    /// so a padded copy of a token `seal` produced still opens.
    pub fn open(&self, token: &str, context: &Context<'_>) -> Result<Vec<u8>> {
        let rejected = |stage: &'static str| {
            tracing::debug!(cookie = %context.name(), stage, "token rejected");
            CoreError::InvalidCookie
        };

        if token.trim_end_matches('=').len() > self.max_token_len {
            return Err(rejected("length"));
        }

        let raw = self
            .envelope
            .decode(token)
            .map_err(|_| rejected("decode"))?;

        let nonce_size = self.aead.nonce_size();
        if raw.len() <= nonce_size {
            return Err(rejected("truncated"));
        }
        let (nonce, ciphertext) = raw.split_at(nonce_size);

        let aad = context
            .associated_data()
            .map_err(|_| rejected("canonicalize"))?;
        self.aead
            .open(nonce, ciphertext, &aad)
            .map_err(|_| rejected("authenticate"))
    }
}

//! Nonce sources.
//!
//! Sealing draws a fresh nonce per call from a [`NonceSource`]. Production
//! code uses [`OsNonceSource`]; tests may inject a deterministic source to
//! reproduce fixed vectors.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CoreError, Result};

/// A source of nonce bytes.
///
/// Must never repeat a nonce under the same key. Implementations are shared
/// across threads, so any internal state needs its own synchronization.
pub trait NonceSource: Send + Sync {
    /// Fill `nonce` with fresh bytes.
    fn fill(&self, nonce: &mut [u8]) -> Result<()>;
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fill(&self, nonce: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(nonce)
            .map_err(|e| CoreError::RandomnessUnavailable(e.to_string()))
    }
}

impl<T: NonceSource + ?Sized> NonceSource for &T {
    fn fill(&self, nonce: &mut [u8]) -> Result<()> {
        (**self).fill(nonce)
    }
}

impl<T: NonceSource + ?Sized> NonceSource for Box<T> {
    fn fill(&self, nonce: &mut [u8]) -> Result<()> {
        (**self).fill(nonce)
    }
}

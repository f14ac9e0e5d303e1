//! Test fixtures and helpers.
//!
//! Deterministic nonce sources and the reference `yellow submarine` setup.
//! **Never use these nonce sources outside tests**: a repeated nonce under
//! one key breaks both confidentiality and authenticity.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use safecookie::{Cookie, SafeCookie, SafeCookieConfig};
use safecookie_core::{Algorithm, Base64Url, Binder, Cipher, CoreError, NonceSource};

/// The reference key.
pub const YELLOW_SUBMARINE: &[u8; 16] = b"yellow submarine";

/// Always yields the same nonce.
#[derive(Debug, Clone)]
pub struct FixedNonceSource(pub Vec<u8>);

impl NonceSource for FixedNonceSource {
    fn fill(&self, nonce: &mut [u8]) -> safecookie_core::Result<()> {
        if nonce.len() != self.0.len() {
            return Err(CoreError::InvalidNonceLength {
                expected: nonce.len(),
                actual: self.0.len(),
            });
        }
        nonce.copy_from_slice(&self.0);
        Ok(())
    }
}

/// Reproducible nonce stream from a seeded `StdRng`.
#[derive(Debug)]
pub struct SeededNonceSource(Mutex<StdRng>);

impl SeededNonceSource {
    /// Seed the stream.
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl NonceSource for SeededNonceSource {
    fn fill(&self, nonce: &mut [u8]) -> safecookie_core::Result<()> {
        let mut rng = self
            .0
            .lock()
            .map_err(|_| CoreError::RandomnessUnavailable("seeded rng poisoned".into()))?;
        rng.fill_bytes(nonce);
        Ok(())
    }
}

/// Binder with a fixed nonce, for reproducing vectors.
pub fn fixed_binder(
    algorithm: Algorithm,
    key: &[u8],
    nonce: &[u8],
) -> safecookie_core::Result<Binder<Cipher, Base64Url, FixedNonceSource>> {
    Ok(Binder::from_parts(
        Cipher::new(algorithm, key)?,
        Base64Url,
        FixedNonceSource(nonce.to_vec()),
    ))
}

/// The reference setup: a `yellow submarine` instance and the `wingle` cookie.
pub struct TestFixture<N: NonceSource = safecookie_core::OsNonceSource> {
    pub safe_cookie: SafeCookie<safecookie::CborCodec, N>,
    pub cookie: Cookie,
}

impl TestFixture {
    /// Fixture with OS randomness.
    pub fn new() -> Self {
        Self::with_config(SafeCookieConfig::default())
    }

    /// Fixture with OS randomness and a custom configuration.
    pub fn with_config(config: SafeCookieConfig) -> Self {
        Self {
            safe_cookie: SafeCookie::new(YELLOW_SUBMARINE, config)
                .expect("16-byte key is valid for AES-128-GCM"),
            cookie: wingle(),
        }
    }
}

impl TestFixture<SeededNonceSource> {
    /// Fixture whose tokens are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        let cipher = Cipher::aes_gcm(YELLOW_SUBMARINE).expect("16-byte key is valid");
        let binder = Binder::from_parts(cipher, Base64Url, SeededNonceSource::new(seed));
        Self {
            safe_cookie: SafeCookie::from_binder(binder, SafeCookieConfig::default()),
            cookie: wingle(),
        }
    }
}

impl<N: NonceSource> TestFixture<N> {
    /// Seal `payload` into a fresh copy of the fixture cookie.
    pub fn sealed(&self, payload: &[u8]) -> Cookie {
        let mut cookie = self.cookie.clone();
        self.safe_cookie
            .seal(&mut cookie, payload)
            .expect("sealing the fixture cookie succeeds");
        cookie
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The reference cookie: `wingle` on `example.com`, path `/`.
pub fn wingle() -> Cookie {
    Cookie::named("wingle").domain("example.com").path("/")
}

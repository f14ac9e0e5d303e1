//! AEAD providers.
//!
//! An [`AeadPrimitive`] is built once from a raw key and then used for any
//! number of seal/open calls. It holds only the cipher's key schedule, never
//! a copy of the caller's key bytes.

use std::fmt;

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use chacha20poly1305::ChaCha20Poly1305;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// AES-192 in Galois/Counter Mode with a 96-bit nonce.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// Nonce length shared by every supported algorithm (96 bits).
pub const NONCE_LEN: usize = 12;

/// Authentication tag length appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// A keyed authenticated-encryption primitive.
///
/// Implementations must be pure functions of `(nonce, input, aad)`: the
/// same inputs always produce the same output, and no call mutates state
/// observable by another call.
pub trait AeadPrimitive: Send + Sync {
    /// The algorithm this primitive implements.
    fn algorithm(&self) -> Algorithm;

    /// Required nonce length in bytes.
    fn nonce_size(&self) -> usize;

    /// Encrypt `plaintext`, authenticating `aad`. The tag is appended.
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt and authenticate `ciphertext` against `aad`.
    ///
    /// Fails with [`CoreError::InvalidCookie`] on any authentication failure.
    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;
}

/// Supported AEAD algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// AES-128-GCM, 16-byte key.
    #[serde(rename = "aes-128-gcm")]
    Aes128Gcm,
    /// AES-192-GCM, 24-byte key.
    #[serde(rename = "aes-192-gcm")]
    Aes192Gcm,
    /// AES-256-GCM, 32-byte key.
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,
    /// ChaCha20-Poly1305, 32-byte key.
    #[serde(rename = "chacha20-poly1305")]
    ChaCha20Poly1305,
}

impl Algorithm {
    /// Pick the AES-GCM variant matching a key length.
    pub fn for_aes_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Algorithm::Aes128Gcm),
            24 => Ok(Algorithm::Aes192Gcm),
            32 => Ok(Algorithm::Aes256Gcm),
            actual => Err(CoreError::InvalidKeyLength {
                expected: "16, 24, or 32",
                actual,
            }),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Algorithm::Aes128Gcm => 16,
            Algorithm::Aes192Gcm => 24,
            Algorithm::Aes256Gcm | Algorithm::ChaCha20Poly1305 => 32,
        }
    }

    const fn key_len_str(self) -> &'static str {
        match self {
            Algorithm::Aes128Gcm => "16",
            Algorithm::Aes192Gcm => "24",
            Algorithm::Aes256Gcm | Algorithm::ChaCha20Poly1305 => "32",
        }
    }

    /// Human-readable algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Aes128Gcm => "AES-128-GCM",
            Algorithm::Aes192Gcm => "AES-192-GCM",
            Algorithm::Aes256Gcm => "AES-256-GCM",
            Algorithm::ChaCha20Poly1305 => "ChaCha20-Poly1305",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A keyed AEAD cipher for one of the supported [`Algorithm`]s.
#[derive(Clone)]
pub enum Cipher {
    Aes128Gcm(Aes128Gcm),
    Aes192Gcm(Aes192Gcm),
    Aes256Gcm(Aes256Gcm),
    ChaCha20Poly1305(ChaCha20Poly1305),
}

impl Cipher {
    /// Build a cipher for `algorithm` from a raw key.
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        let invalid = || CoreError::InvalidKeyLength {
            expected: algorithm.key_len_str(),
            actual: key.len(),
        };
        if key.len() != algorithm.key_len() {
            return Err(invalid());
        }

        let cipher = match algorithm {
            Algorithm::Aes128Gcm => {
                Cipher::Aes128Gcm(Aes128Gcm::new_from_slice(key).map_err(|_| invalid())?)
            }
            Algorithm::Aes192Gcm => {
                Cipher::Aes192Gcm(Aes192Gcm::new_from_slice(key).map_err(|_| invalid())?)
            }
            Algorithm::Aes256Gcm => {
                Cipher::Aes256Gcm(Aes256Gcm::new_from_slice(key).map_err(|_| invalid())?)
            }
            Algorithm::ChaCha20Poly1305 => Cipher::ChaCha20Poly1305(
                ChaCha20Poly1305::new_from_slice(key).map_err(|_| invalid())?,
            ),
        };
        Ok(cipher)
    }

    /// Build an AES-GCM cipher from a 128-, 192-, or 256-bit key.
    pub fn aes_gcm(key: &[u8]) -> Result<Self> {
        Self::new(Algorithm::for_aes_key_len(key.len())?, key)
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cipher").field(&self.algorithm()).finish()
    }
}

fn check_nonce(nonce: &[u8]) -> Result<()> {
    if nonce.len() != NONCE_LEN {
        return Err(CoreError::InvalidNonceLength {
            expected: NONCE_LEN,
            actual: nonce.len(),
        });
    }
    Ok(())
}

impl AeadPrimitive for Cipher {
    fn algorithm(&self) -> Algorithm {
        match self {
            Cipher::Aes128Gcm(_) => Algorithm::Aes128Gcm,
            Cipher::Aes192Gcm(_) => Algorithm::Aes192Gcm,
            Cipher::Aes256Gcm(_) => Algorithm::Aes256Gcm,
            Cipher::ChaCha20Poly1305(_) => Algorithm::ChaCha20Poly1305,
        }
    }

    fn nonce_size(&self) -> usize {
        NONCE_LEN
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        check_nonce(nonce)?;
        let payload = Payload {
            msg: plaintext,
            aad,
        };

        let sealed = match self {
            Cipher::Aes128Gcm(c) => c.encrypt(aes_gcm::Nonce::from_slice(nonce), payload),
            Cipher::Aes192Gcm(c) => c.encrypt(aes_gcm::Nonce::from_slice(nonce), payload),
            Cipher::Aes256Gcm(c) => c.encrypt(aes_gcm::Nonce::from_slice(nonce), payload),
            Cipher::ChaCha20Poly1305(c) => {
                c.encrypt(chacha20poly1305::Nonce::from_slice(nonce), payload)
            }
        };
        sealed.map_err(|e| CoreError::Encryption(e.to_string()))
    }

    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if nonce.len() != NONCE_LEN {
            return Err(CoreError::InvalidCookie);
        }
        let payload = Payload {
            msg: ciphertext,
            aad,
        };

        let opened = match self {
            Cipher::Aes128Gcm(c) => c.decrypt(aes_gcm::Nonce::from_slice(nonce), payload),
            Cipher::Aes192Gcm(c) => c.decrypt(aes_gcm::Nonce::from_slice(nonce), payload),
            Cipher::Aes256Gcm(c) => c.decrypt(aes_gcm::Nonce::from_slice(nonce), payload),
            Cipher::ChaCha20Poly1305(c) => {
                c.decrypt(chacha20poly1305::Nonce::from_slice(nonce), payload)
            }
        };
        opened.map_err(|_| CoreError::InvalidCookie)
    }
}

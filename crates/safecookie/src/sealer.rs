//! SafeCookie: seal and open cookie records.
//!
//! Wraps a core [`Binder`] with a configured [`Binding`] and a payload codec,
//! and works directly on [`Cookie`] records.

use safecookie_core::{
    Algorithm, Base64Url, Binder, Binding, Cipher, Cookie, NonceSource, OsNonceSource,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::SafeCookieConfig;
use crate::error::Result;
use crate::payload::{CborCodec, PayloadCodec};

/// Seals payloads into cookie values and opens them again.
///
/// Immutable after construction; share it across request handlers behind an
/// `Arc` or a `&'static`.
#[derive(Debug, Clone)]
pub struct SafeCookie<C = CborCodec, N = OsNonceSource> {
    binder: Binder<Cipher, Base64Url, N>,
    config: SafeCookieConfig,
    codec: C,
}

impl SafeCookie {
    /// AES-GCM instance from a 128-, 192-, or 256-bit key with default config.
    pub fn new_gcm(key: &[u8]) -> Result<Self> {
        Self::new(key, SafeCookieConfig::default())
    }

    /// Instance from a key and configuration.
    pub fn new(key: &[u8], config: SafeCookieConfig) -> Result<Self> {
        let cipher = match config.algorithm {
            Some(algorithm) => Cipher::new(algorithm, key)?,
            None => Cipher::aes_gcm(key)?,
        };
        let binder = Binder::new(cipher);
        Ok(Self::from_binder(binder, config))
    }
}

impl<N: NonceSource> SafeCookie<CborCodec, N> {
    /// Instance over an existing binder.
    ///
    /// The config's `max_token_len` replaces the binder's limit; its
    /// `algorithm` is ignored in favour of the binder's cipher.
    pub fn from_binder(binder: Binder<Cipher, Base64Url, N>, config: SafeCookieConfig) -> Self {
        let binder = binder.max_token_len(config.max_token_len);
        Self {
            binder,
            config,
            codec: CborCodec,
        }
    }
}

impl<C: PayloadCodec, N: NonceSource> SafeCookie<C, N> {
    /// Swap the payload codec used by [`seal_value`](Self::seal_value) and
    /// [`open_value`](Self::open_value).
    pub fn with_codec<D: PayloadCodec>(self, codec: D) -> SafeCookie<D, N> {
        SafeCookie {
            binder: self.binder,
            config: self.config,
            codec,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SafeCookieConfig {
        &self.config
    }

    /// The AEAD algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.binder.algorithm()
    }

    /// The binding in use.
    pub fn binding(&self) -> Binding {
        self.config.binding
    }

    /// Seal `payload` for `cookie` and return the token, leaving `cookie`
    /// untouched.
    pub fn seal_token(&self, payload: &[u8], cookie: &Cookie) -> Result<String> {
        let context = self.config.binding.context(cookie);
        match self.binder.seal(payload, &context) {
            Ok(token) => {
                tracing::trace!(cookie = %cookie.name, len = token.len(), "sealed cookie");
                Ok(token)
            }
            Err(e) => {
                tracing::warn!(cookie = %cookie.name, error = %e, "failed to seal cookie");
                Err(e.into())
            }
        }
    }

    /// Open `token` against `cookie`'s current name and attributes.
    ///
    /// `cookie.value` is ignored. The binder records which stage rejected a
    /// token in a `debug` event; the returned error is always the same.
    pub fn open_token(&self, token: &str, cookie: &Cookie) -> Result<Vec<u8>> {
        let context = self.config.binding.context(cookie);
        let payload = self.binder.open(token, &context)?;
        tracing::trace!(cookie = %cookie.name, "opened cookie");
        Ok(payload)
    }

    /// Seal `payload` and store the token in `cookie.value`.
    ///
    /// On error `cookie` is left unchanged.
    pub fn seal(&self, cookie: &mut Cookie, payload: &[u8]) -> Result<()> {
        cookie.value = self.seal_token(payload, cookie)?;
        Ok(())
    }

    /// Open the token in `cookie.value`.
    pub fn open(&self, cookie: &Cookie) -> Result<Vec<u8>> {
        self.open_token(&cookie.value, cookie)
    }

    /// Serialize `value` with the codec and seal it into `cookie`.
    pub fn seal_value<T: Serialize + ?Sized>(&self, cookie: &mut Cookie, value: &T) -> Result<()> {
        let payload = self.codec.marshal(value)?;
        self.seal(cookie, &payload)
    }

    /// Open `cookie` and deserialize its payload as `T`.
    ///
    /// A payload that authenticates but is not a valid `T` yields
    /// [`Error::Deserialization`](crate::Error::Deserialization). Nothing
    /// partially decoded is ever returned.
    pub fn open_value<T: DeserializeOwned>(&self, cookie: &Cookie) -> Result<T> {
        let payload = self.open(cookie)?;
        self.codec.unmarshal(&payload).map_err(|e| {
            tracing::debug!(cookie = %cookie.name, "authenticated payload did not deserialize");
            e
        })
    }
}

//! # safecookie core
//!
//! Pure primitives for sealing a payload into a cookie value so that it is
//! confidential, tamper-evident, and bound to the cookie it travels in.
//!
//! This crate contains no I/O and no HTTP types. It is pure computation over
//! a cookie-shaped record.
//!
//! ## Layers
//!
//! - [`aead`] - keyed AEAD primitives (AES-GCM, ChaCha20-Poly1305)
//! - [`envelope`] - `nonce || ciphertext` to and from URL-safe base64
//! - [`canonical`] / [`context`] - the associated data a token is bound to
//! - [`protocol`] - [`Binder`], which seals and opens tokens
//!
//! ## Example
//!
//! ```rust
//! use safecookie_core::{Binder, Binding, Cookie};
//!
//! let binder = Binder::aes_gcm(b"yellow submarine").unwrap();
//! let cookie = Cookie::named("wingle").domain("example.com").path("/");
//!
//! let token = binder.seal(b"this is a secret", &Binding::Attributes.context(&cookie)).unwrap();
//! let payload = binder.open(&token, &Binding::Attributes.context(&cookie)).unwrap();
//! assert_eq!(payload, b"this is a secret");
//! ```

pub mod aead;
pub mod canonical;
pub mod context;
pub mod cookie;
pub mod envelope;
pub mod error;
pub mod nonce;
pub mod protocol;

pub use aead::{AeadPrimitive, Algorithm, Cipher, NONCE_LEN, TAG_LEN};
pub use canonical::canonical_attributes;
pub use context::{Binding, Context};
pub use cookie::{Cookie, SameSite};
pub use envelope::{Base64Url, EnvelopeCodec};
pub use error::{CoreError, Result};
pub use nonce::{NonceSource, OsNonceSource};
pub use protocol::{Binder, DEFAULT_MAX_TOKEN_LEN};

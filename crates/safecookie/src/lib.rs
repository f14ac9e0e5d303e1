//! # safecookie
//!
//! Confidential, tamper-evident cookie values bound to the cookie they
//! travel in.
//!
//! ## Overview
//!
//! A cookie's value is encrypted with an AEAD. The associated data is a
//! canonical encoding of the cookie's other attributes (or just its name),
//! so opening fails if anything about the cookie has changed:
//!
//! - No one without the key can read the payload.
//! - No one without the key can produce a cookie that opens.
//! - Moving a sealed value to a cookie with a different name, domain, path,
//!   expiry or flags makes it fail to open.
//!
//! Every opening failure is reported as the same `invalid cookie` error.
//!
//! ## Usage
//!
//! ```rust
//! use safecookie::{Cookie, SafeCookie};
//!
//! let sc = SafeCookie::new_gcm(b"yellow submarine").unwrap();
//!
//! let mut cookie = Cookie::named("session")
//!     .domain("example.com")
//!     .path("/")
//!     .secure(true)
//!     .http_only(true);
//!
//! sc.seal(&mut cookie, b"this is secret").unwrap();
//! assert_eq!(sc.open(&cookie).unwrap(), b"this is secret");
//!
//! cookie.path = Some("/admin".into());
//! assert!(sc.open(&cookie).is_err());
//! ```
//!
//! ## Structured payloads
//!
//! [`SafeCookie::seal_value`] and [`SafeCookie::open_value`] run a
//! [`PayloadCodec`] (CBOR by default, JSON via [`JsonCodec`]) in front of the
//! byte-level protocol.
//!
//! ## Re-exports
//!
//! `safecookie::core` is the `safecookie-core` crate: the AEAD providers,
//! envelope codec and [`Binder`] for callers who want the protocol without
//! the cookie-record conveniences.

pub mod config;
pub mod error;
pub mod payload;
pub mod sealer;

pub use safecookie_core as core;

pub use config::SafeCookieConfig;
pub use error::{Error, Result};
pub use payload::{CborCodec, JsonCodec, PayloadCodec};
pub use sealer::SafeCookie;

pub use safecookie_core::{
    Algorithm, Binder, Binding, Context, CoreError, Cookie, SameSite, DEFAULT_MAX_TOKEN_LEN,
};

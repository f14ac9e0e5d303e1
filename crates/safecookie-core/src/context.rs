//! Binding contexts: what a sealed token is bound to.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_attributes;
use crate::cookie::Cookie;
use crate::error::Result;

/// Which part of a cookie a token is bound to.
///
/// `Attributes` is strict: any attribute change (including a refreshed
/// expiry) invalidates the token, so the cookie must be re-sealed whenever an
/// attribute legitimately changes. `Name` only binds the token to the cookie
/// name, leaving the transport free to rewrite domain, path, expiry and
/// flags without detection.
///
/// Use one binding per key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    /// Bind to every attribute except the value.
    #[default]
    Attributes,
    /// Bind to the cookie name only.
    Name,
}

impl Binding {
    /// The context this binding derives from `cookie`.
    pub fn context(self, cookie: &Cookie) -> Context<'_> {
        match self {
            Binding::Attributes => Context::Attributes(cookie),
            Binding::Name => Context::Name(&cookie.name),
        }
    }
}

/// Authenticated-but-not-encrypted data for one seal or open call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context<'a> {
    /// Every attribute of the cookie except its value.
    Attributes(&'a Cookie),
    /// Only the cookie name.
    Name(&'a str),
}

impl<'a> Context<'a> {
    /// The canonical associated data for this context.
    pub fn associated_data(&self) -> Result<Vec<u8>> {
        match self {
            Context::Attributes(cookie) => canonical_attributes(cookie),
            Context::Name(name) => Ok(name.as_bytes().to_vec()),
        }
    }

    /// The binding mode this context was built with.
    pub fn binding(&self) -> Binding {
        match self {
            Context::Attributes(_) => Binding::Attributes,
            Context::Name(_) => Binding::Name,
        }
    }

    /// The cookie name this context covers.
    pub fn name(&self) -> &'a str {
        match self {
            Context::Attributes(cookie) => &cookie.name,
            Context::Name(name) => name,
        }
    }
}

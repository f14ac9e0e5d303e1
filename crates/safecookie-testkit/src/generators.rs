//! Proptest generators for property-based testing.

use proptest::prelude::*;

use safecookie_core::{Algorithm, Binder, Binding, Cipher, Context, Cookie, SameSite};

/// Generate an AEAD algorithm.
pub fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Aes128Gcm),
        Just(Algorithm::Aes192Gcm),
        Just(Algorithm::Aes256Gcm),
        Just(Algorithm::ChaCha20Poly1305),
    ]
}

/// Generate a key of the right length for `algorithm`.
pub fn key(algorithm: Algorithm) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), algorithm.key_len())
}

/// Generate a binding.
pub fn binding() -> impl Strategy<Value = Binding> {
    prop_oneof![Just(Binding::Attributes), Just(Binding::Name)]
}

/// Generate a SameSite mode.
pub fn same_site() -> impl Strategy<Value = SameSite> {
    prop_oneof![
        Just(SameSite::Strict),
        Just(SameSite::Lax),
        Just(SameSite::None),
    ]
}

/// Generate a cookie name.
pub fn cookie_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,24}".prop_map(String::from)
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a cookie with an empty value and arbitrary attributes.
pub fn cookie() -> impl Strategy<Value = Cookie> {
    (
        cookie_name(),
        proptest::option::of("[a-z]{1,12}(\\.[a-z]{2,6}){1,2}"),
        proptest::option::of("/[a-z0-9/]{0,16}"),
        proptest::option::of(any::<i64>()),
        proptest::option::of(any::<i64>()),
        any::<[bool; 3]>(),
        proptest::option::of(same_site()),
    )
        .prop_map(
            |(name, domain, path, expires, max_age, [secure, http_only, partitioned], same_site)| {
                Cookie {
                    name,
                    value: String::new(),
                    domain,
                    path,
                    expires,
                    max_age,
                    secure,
                    http_only,
                    same_site,
                    partitioned,
                }
            },
        )
}

/// Parameters for one seal operation.
#[derive(Debug, Clone)]
pub struct SealParams {
    pub algorithm: Algorithm,
    pub key: Vec<u8>,
    pub binding: Binding,
    pub cookie: Cookie,
    pub payload: Vec<u8>,
}

impl SealParams {
    /// A binder over this key with OS randomness.
    pub fn binder(&self) -> safecookie_core::Result<Binder> {
        Ok(Binder::new(Cipher::new(self.algorithm, &self.key)?))
    }

    /// The context this seal binds to.
    pub fn context(&self) -> Context<'_> {
        self.binding.context(&self.cookie)
    }
}

impl Arbitrary for SealParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        algorithm()
            .prop_flat_map(|algorithm| {
                (
                    Just(algorithm),
                    key(algorithm),
                    binding(),
                    cookie(),
                    payload(1000),
                )
            })
            .prop_map(|(algorithm, key, binding, cookie, payload)| SealParams {
                algorithm,
                key,
                binding,
                cookie,
                payload,
            })
            .boxed()
    }
}

//! Golden test vectors for deterministic verification.
//!
//! Each vector fixes the key, nonce, cookie and payload, and records the
//! associated data and token any conforming implementation must produce.

use safecookie_core::{canonical_attributes, Algorithm, Binding, Cookie, SameSite};

use crate::fixtures::fixed_binder;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub algorithm: Algorithm,
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub cookie: Cookie,
    pub binding: Binding,
    pub payload: &'static [u8],
    /// Expected associated data (hex).
    pub expected_aad: &'static str,
    /// Expected token.
    pub expected_token: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "name_binding_aes128",
            algorithm: Algorithm::Aes128Gcm,
            key: b"yellow submarine".to_vec(),
            nonce: (0u8..12).collect(),
            cookie: Cookie::named("wingle").domain("example.com").path("/"),
            binding: Binding::Name,
            payload: b"this is a secret",
            expected_aad: "77696e676c65",
            expected_token: "AAECAwQFBgcICQoL6vQIOWwKSsP5xY8VpZlwTc67uURBdVvTNS_UNIxvRR0",
        },
        GoldenVector {
            name: "attribute_binding_aes128",
            algorithm: Algorithm::Aes128Gcm,
            key: b"yellow submarine".to_vec(),
            nonce: (0u8..12).collect(),
            cookie: Cookie::named("wingle").domain("example.com").path("/"),
            binding: Binding::Attributes,
            payload: b"this is a secret",
            expected_aad: "a9006677696e676c65016b6578616d706c652e636f6d02612f03f604f605f406f407f608f4",
            expected_token: "AAECAwQFBgcICQoL6vQIOWwKSsP5xY8VpZlwTfmuZ2qkB-txZg-f5Yg8eKA",
        },
        GoldenVector {
            name: "session_cookie_aes192",
            algorithm: Algorithm::Aes192Gcm,
            key: (0u8..24).collect(),
            nonce: vec![0x24; 12],
            cookie: Cookie::named("session")
                .domain("example.com")
                .path("/")
                .expires(1_900_000_000)
                .max_age(3600)
                .secure(true)
                .http_only(true)
                .same_site(SameSite::Lax),
            binding: Binding::Attributes,
            payload: br#"{"user_id":42}"#,
            expected_aad: "a9006773657373696f6e016b6578616d706c652e636f6d02612f031a713fb30004190e1005f506f507634c617808f4",
            expected_token: "JCQkJCQkJCQkJCQkX_qDZN4lHniT9TgqlnutH2326nLZ2ONUrfnKiBBr",
        },
        GoldenVector {
            name: "empty_payload_aes256",
            algorithm: Algorithm::Aes256Gcm,
            key: vec![0x42; 32],
            nonce: vec![0x00; 12],
            cookie: Cookie::named("__Host-id")
                .path("/")
                .secure(true)
                .same_site(SameSite::None)
                .partitioned(true),
            binding: Binding::Attributes,
            payload: b"",
            expected_aad: "a900695f5f486f73742d696401f602612f03f604f605f506f407644e6f6e6508f5",
            expected_token: "AAAAAAAAAAAAAAAAXkkUr5lSoFh39zvLHk1RFA",
        },
        GoldenVector {
            name: "negative_expiry_chacha20",
            algorithm: Algorithm::ChaCha20Poly1305,
            key: (1u8..=32).collect(),
            nonce: vec![0xff; 12],
            cookie: Cookie::named("prefs").expires(-1),
            binding: Binding::Attributes,
            payload: b"dark-mode",
            expected_aad: "a90065707265667301f602f6032004f605f406f407f608f4",
            expected_token: "________________-K0Av6cDqy9-IacPLPKj0MLZb-XLoPOJ9g",
        },
    ]
}

/// Outcome of checking one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorResult {
    pub name: String,
    pub aad_hex: String,
    pub token: String,
    pub opened: bool,
}

impl VectorResult {
    /// Whether this result matches `vector`.
    pub fn matches(&self, vector: &GoldenVector) -> bool {
        self.opened && self.aad_hex == vector.expected_aad && self.token == vector.expected_token
    }
}

/// Compute the associated data and token for a vector, and check that the
/// expected token opens.
pub fn run_vector(vector: &GoldenVector) -> safecookie_core::Result<VectorResult> {
    let context = vector.binding.context(&vector.cookie);
    let aad = match vector.binding {
        Binding::Attributes => canonical_attributes(&vector.cookie)?,
        Binding::Name => vector.cookie.name.as_bytes().to_vec(),
    };

    let binder = fixed_binder(vector.algorithm, &vector.key, &vector.nonce)?;
    let token = binder.seal(vector.payload, &context)?;
    let opened = binder
        .open(vector.expected_token, &context)
        .map(|p| p == vector.payload)
        .unwrap_or(false);

    Ok(VectorResult {
        name: vector.name.to_string(),
        aad_hex: hex::encode(aad),
        token,
        opened,
    })
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, token)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match run_vector(v) {
            Ok(result) => (result.name.clone(), result.matches(v), result.token),
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}

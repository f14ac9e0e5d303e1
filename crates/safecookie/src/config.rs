//! Configuration for [`SafeCookie`](crate::SafeCookie).

use safecookie_core::{Algorithm, Binding, DEFAULT_MAX_TOKEN_LEN};
use serde::{Deserialize, Serialize};

/// Configuration for a [`SafeCookie`](crate::SafeCookie) instance.
///
/// Deserializable so hosts can embed it in their own configuration files:
///
/// ```toml
/// algorithm = "aes-256-gcm"
/// binding = "name"
/// max_token_len = 4096
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeCookieConfig {
    /// AEAD algorithm. `None` picks AES-GCM from the key length.
    pub algorithm: Option<Algorithm>,
    /// What a token is bound to.
    pub binding: Binding,
    /// Longest token that will be produced or accepted.
    pub max_token_len: usize,
}

impl Default for SafeCookieConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            binding: Binding::Attributes,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

impl SafeCookieConfig {
    /// Use a specific algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Use a specific binding.
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.binding = binding;
        self
    }

    /// Use a specific token length limit.
    pub fn with_max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = max;
        self
    }
}

//! Envelope codec: `nonce || ciphertext` to and from a cookie-safe string.
//!
//! # Token format
//!
//! ```text
//! base64url-no-pad(nonce || ciphertext || tag)
//! ```
//!
//! The URL-safe alphabet (`A-Z a-z 0-9 - _`) contains nothing forbidden in a
//! cookie value. The codec does not split the bytes back apart; that needs
//! the AEAD's nonce size and is the binding protocol's job.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::{CoreError, Result};

/// Encodes without padding, decodes with or without it.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Turns sealed bytes into a transport string and back.
pub trait EnvelopeCodec: Send + Sync {
    /// Concatenate `nonce || ciphertext` and encode it.
    fn encode(&self, nonce: &[u8], ciphertext: &[u8]) -> String;

    /// Decode a token back to `nonce || ciphertext`.
    ///
    /// Fails with [`CoreError::MalformedEncoding`] if `token` is not valid
    /// under the codec's alphabet.
    fn decode(&self, token: &str) -> Result<Vec<u8>>;
}

/// URL-safe base64 without padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Url;

impl EnvelopeCodec for Base64Url {
    fn encode(&self, nonce: &[u8], ciphertext: &[u8]) -> String {
        let mut raw = Vec::with_capacity(nonce.len() + ciphertext.len());
        raw.extend_from_slice(nonce);
        raw.extend_from_slice(ciphertext);
        URL_SAFE_LENIENT.encode(raw)
    }

    fn decode(&self, token: &str) -> Result<Vec<u8>> {
        URL_SAFE_LENIENT
            .decode(token)
            .map_err(|_| CoreError::MalformedEncoding)
    }
}

/// Length of the token [`Base64Url`] produces for `raw_len` input bytes.
pub const fn encoded_len(raw_len: usize) -> usize {
    (raw_len * 4 + 2) / 3
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_encode_concatenates() {
        let token = Base64Url.encode(b"ab", b"c");
        assert_eq!(token, "YWJj");
        assert_eq!(Base64Url.decode(&token).unwrap(), b"abc");
    }

    #[test]
    fn test_no_padding_and_url_safe_alphabet() {
        let token = Base64Url.encode(&[0xfb, 0xff], &[0xfe]);
        assert_eq!(token, "-__-");

        let token = Base64Url.encode(&[0xff], &[]);
        assert_eq!(token, "_w");
        assert!(!token.contains('='));
    }

    #[test]
    fn test_decode_accepts_padding() {
        assert_eq!(Base64Url.decode("_w==").unwrap(), vec![0xff]);
        assert_eq!(Base64Url.decode("_w").unwrap(), vec![0xff]);
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        for bad in ["YWJj**@3", "YW Jj", "YWJj;", "+/+/", "YWJj\n"] {
            assert_eq!(
                Base64Url.decode(bad),
                Err(CoreError::MalformedEncoding),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_impossible_length() {
        assert_eq!(Base64Url.decode("A"), Err(CoreError::MalformedEncoding));
    }

    #[test]
    fn test_encoded_len() {
        for n in 0..64 {
            let raw = vec![0u8; n];
            assert_eq!(Base64Url.encode(&raw, &[]).len(), encoded_len(n));
        }
    }

    proptest! {
        #[test]
        fn test_encode_decode_identity(nonce in proptest::collection::vec(any::<u8>(), 12), body in proptest::collection::vec(any::<u8>(), 0..256)) {
            let token = Base64Url.encode(&nonce, &body);
            prop_assert!(token.bytes().all(|c| c.is_ascii_alphanumeric() || c == b'-' || c == b'_'));
            let raw = Base64Url.decode(&token).unwrap();
            prop_assert_eq!(&raw[..12], &nonce[..]);
            prop_assert_eq!(&raw[12..], &body[..]);
        }

        #[test]
        fn test_decode_never_panics(token in "\\PC{0,64}") {
            let _ = Base64Url.decode(&token);
        }
    }
}

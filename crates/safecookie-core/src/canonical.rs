//! Canonical CBOR encoding of cookie attributes.
//!
//! The associated data for a full-attribute binding is a deterministic CBOR
//! map (RFC 8949 Core Deterministic Encoding):
//! - Integer keys 0-8 in fixed order, each a single byte
//! - Integers use the smallest valid encoding
//! - Definite lengths only, so every field is self-delimiting
//! - Absent optional attributes encode as `null`, never as a missing key
//!
//! The cookie's value is never part of the encoding.
//!
//! **This encoding is FROZEN.** Changing it invalidates every token already
//! sealed under a full-attribute binding.

use ciborium::value::Value;

use crate::cookie::Cookie;
use crate::error::{CoreError, Result};

/// Attribute map keys.
mod keys {
    pub const NAME: u64 = 0;
    pub const DOMAIN: u64 = 1;
    pub const PATH: u64 = 2;
    pub const EXPIRES: u64 = 3;
    pub const MAX_AGE: u64 = 4;
    pub const SECURE: u64 = 5;
    pub const HTTP_ONLY: u64 = 6;
    pub const SAME_SITE: u64 = 7;
    pub const PARTITIONED: u64 = 8;
}

/// Encode every attribute of `cookie` except its value to canonical bytes.
///
/// ciborium writes the map entries in the order given and every integer in
/// its shortest form, which with keys 0-8 inserted in ascending order is the
/// deterministic encoding. Writing into a `Vec` does not fail in practice;
/// any serializer error is still reported as [`CoreError::Canonicalization`].
pub fn canonical_attributes(cookie: &Cookie) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(32 + cookie.name.len());
    ciborium::into_writer(&attributes_to_cbor_value(cookie), &mut buf)
        .map_err(|e| CoreError::Canonicalization(e.to_string()))?;
    Ok(buf)
}

fn text_or_null(s: Option<&str>) -> Value {
    s.map_or(Value::Null, |s| Value::Text(s.to_string()))
}

fn int_or_null(n: Option<i64>) -> Value {
    n.map_or(Value::Null, |n| Value::Integer(n.into()))
}

/// Convert the attributes to a CBOR map with integer keys.
fn attributes_to_cbor_value(cookie: &Cookie) -> Value {
    let key = |k: u64| Value::Integer(k.into());

    Value::Map(vec![
        (key(keys::NAME), Value::Text(cookie.name.clone())),
        (key(keys::DOMAIN), text_or_null(cookie.domain.as_deref())),
        (key(keys::PATH), text_or_null(cookie.path.as_deref())),
        (key(keys::EXPIRES), int_or_null(cookie.expires)),
        (key(keys::MAX_AGE), int_or_null(cookie.max_age)),
        (key(keys::SECURE), Value::Bool(cookie.secure)),
        (key(keys::HTTP_ONLY), Value::Bool(cookie.http_only)),
        (
            key(keys::SAME_SITE),
            text_or_null(cookie.same_site.map(|s| s.as_str())),
        ),
        (key(keys::PARTITIONED), Value::Bool(cookie.partitioned)),
    ])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::cookie::SameSite;

    fn aad(cookie: &Cookie) -> Vec<u8> {
        canonical_attributes(cookie).unwrap()
    }

    fn full_cookie() -> Cookie {
        Cookie::new("wingle", "ignored")
            .domain("example.com")
            .path("/")
            .expires(1_700_000_000)
            .max_age(3600)
            .secure(true)
            .http_only(true)
            .same_site(SameSite::Strict)
    }

    #[test]
    fn test_name_only_cookie_bytes() {
        let bytes = aad(&Cookie::named("wingle"));
        assert_eq!(
            hex::encode(bytes),
            "a9006677696e676c6501f602f603f604f605f406f407f608f4"
        );
    }

    #[test]
    fn test_value_is_excluded() {
        let a = Cookie::new("wingle", "one").domain("example.com");
        let b = Cookie::new("wingle", "two").domain("example.com");
        assert_eq!(aad(&a), aad(&b));
    }

    #[test]
    fn test_deterministic() {
        let cookie = full_cookie();
        assert_eq!(aad(&cookie), aad(&cookie));
    }

    #[test]
    fn test_every_attribute_changes_bytes() {
        let base = full_cookie();
        let base_bytes = aad(&base);

        let variants = [
            Cookie { name: "wongle".into(), ..base.clone() },
            Cookie { domain: Some("example.org".into()), ..base.clone() },
            Cookie { domain: None, ..base.clone() },
            Cookie { path: Some("/admin".into()), ..base.clone() },
            Cookie { expires: Some(1_700_000_001), ..base.clone() },
            Cookie { expires: None, ..base.clone() },
            Cookie { max_age: Some(-1), ..base.clone() },
            Cookie { secure: false, ..base.clone() },
            Cookie { http_only: false, ..base.clone() },
            Cookie { same_site: Some(SameSite::Lax), ..base.clone() },
            Cookie { same_site: None, ..base.clone() },
            Cookie { partitioned: true, ..base.clone() },
        ];

        for variant in variants {
            assert_ne!(aad(&variant), base_bytes, "{variant:?}");
        }
    }

    #[test]
    fn test_empty_string_differs_from_absent() {
        let absent = Cookie::named("n");
        let empty = Cookie::named("n").domain("");
        assert_ne!(aad(&absent), aad(&empty));
    }

    #[test]
    fn test_delimiter_characters_do_not_collide() {
        // Shifting text between adjacent fields must not produce the same bytes.
        let a = Cookie::named("a").domain("b;c").path("d");
        let b = Cookie::named("a").domain("b").path("c;d");
        assert_ne!(aad(&a), aad(&b));
    }

    #[test]
    fn test_output_is_valid_cbor() {
        let bytes = aad(&full_cookie());
        let value: Value = ciborium::from_reader(bytes.as_slice()).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 9);
        assert_eq!(map[0].1, Value::Text("wingle".into()));
        assert_eq!(map[3].1, Value::Integer(1_700_000_000.into()));
    }

    #[test]
    fn test_integers_use_shortest_form() {
        let small = Cookie::named("n").expires(-1).max_age(-25);
        assert_eq!(
            hex::encode(aad(&small)),
            "a900616e01f602f6032004381805f406f407f608f4"
        );

        let wide = Cookie::named("n").expires(1_700_000_000).max_age(65535);
        assert_eq!(
            hex::encode(aad(&wide)),
            "a900616e01f602f6031a6553f1000419ffff05f406f407f608f4"
        );

        let extreme = Cookie::named("n").expires(i64::MIN).max_age(i64::MAX);
        assert_eq!(
            hex::encode(aad(&extreme)),
            "a900616e01f602f6033b7fffffffffffffff041b7fffffffffffffff05f406f407f608f4"
        );
    }

    #[test]
    fn test_long_name_uses_two_byte_length() {
        let name = "x".repeat(300);
        let bytes = aad(&Cookie::named(name.as_str()));
        assert_eq!(&bytes[..5], &[0xa9, 0x00, 0x79, 0x01, 0x2c]);
        assert_eq!(&bytes[5..305], name.as_bytes());
    }

    proptest! {
        #[test]
        fn test_timestamps_decode_to_themselves(expires: i64, max_age: i64) {
            let cookie = Cookie::named("n").expires(expires).max_age(max_age);
            let bytes = aad(&cookie);
            let value: Value = ciborium::from_reader(bytes.as_slice()).unwrap();
            let map = value.as_map().unwrap();
            prop_assert_eq!(&map[3].1, &Value::Integer(expires.into()));
            prop_assert_eq!(&map[4].1, &Value::Integer(max_age.into()));
        }

        #[test]
        fn test_name_text_is_length_prefixed(a in "[a-z;=]{0,8}", b in "[a-z;=]{0,8}") {
            let split = Cookie::named(a.clone()).domain(b.clone());
            let joined = Cookie::named(format!("{a}{b}")).domain("");
            prop_assume!(!b.is_empty());
            prop_assert_ne!(aad(&split), aad(&joined));
        }
    }
}

//! # safecookie testkit
//!
//! Testing utilities for safecookie.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: fixed key, nonce and cookie inputs with the exact
//!   associated data and token they must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: deterministic nonce sources and the reference setup
//!
//! ## Golden Vectors
//!
//! ```rust
//! use safecookie_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, token) in verify_all_vectors() {
//!     assert!(matches, "{name}: {token}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use safecookie_testkit::generators::SealParams;
//!
//! proptest! {
//!     #[test]
//!     fn sealed_tokens_open(params: SealParams) {
//!         let binder = params.binder().unwrap();
//!         let token = binder.seal(&params.payload, &params.context()).unwrap();
//!         prop_assert_eq!(binder.open(&token, &params.context()).unwrap(), params.payload);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use safecookie_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let cookie = fixture.sealed(b"this is a secret");
//! assert_eq!(fixture.safe_cookie.open(&cookie).unwrap(), b"this is a secret");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    fixed_binder, wingle, FixedNonceSource, SeededNonceSource, TestFixture, YELLOW_SUBMARINE,
};
pub use generators::SealParams;
pub use vectors::{all_vectors, run_vector, verify_all_vectors, GoldenVector, VectorResult};

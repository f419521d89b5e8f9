//! `libhash` implements the FIPS 180-4 Secure Hash Standard in pure Rust.
//!
//! The crate implements SHA-1 and the complete SHA-2 family (SHA-224,
//! SHA-256, SHA-384, SHA-512, SHA-512/224, SHA-512/256).  Each function is
//! available three ways:
//!
//! * a one-shot helper, e.g. [`sha256`]:
//!
//!   ```
//!   let digest = libhash::sha256(b"abc");
//!   assert_eq!(
//!       digest.to_string(),
//!       "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//!   );
//!   ```
//!
//! * a streaming hasher, e.g. [`Sha256`], for input that arrives in
//!   pieces:
//!
//!   ```
//!   let mut hasher = libhash::Sha256::new();
//!   hasher.update(b"ab");
//!   hasher.update(b"c");
//!   assert_eq!(hasher.finalize(), libhash::sha256(b"abc"));
//!   ```
//!
//! * run-time selection through [`Algorithm`] when the function is chosen
//!   from configuration or user input.
//!
//! Message lengths up to 2^64 - 1 bits (512-bit block functions) and
//! 2^128 - 1 bits (1024-bit block functions) are supported, matching the
//! standard.  Hashing is infallible; the only fallible operations are
//! digest hex decoding and algorithm-name parsing.

pub mod algorithm;
mod block;
pub mod digest;
pub mod hasher;
pub mod sha1;
pub mod sha2;

pub use algorithm::{Algorithm, DynHasher, ParseAlgorithmError};
pub use digest::{
    Digest, DigestError, HexOutput, Sha1Digest, Sha224Digest, Sha256Digest, Sha384Digest,
    Sha512Digest,
};
pub use hasher::{digest_of, HashFunction};
pub use sha1::{sha1, Sha1};
pub use sha2::{
    sha224, sha256, sha384, sha512, sha512_224, sha512_256, Sha224, Sha256, Sha384, Sha512,
    Sha512_224, Sha512_256,
};

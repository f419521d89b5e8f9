//! The SHA-2 family (FIPS 180-4 §6.2–§6.7).
//!
//! Two compression functions cover the whole family:
//!
//! * [`sha256`]: 32-bit lanes, 512-bit blocks, 64 rounds.  Serves SHA-224
//!   and SHA-256, which differ only in initial hash value and output
//!   truncation.
//! * [`sha512`]: 64-bit lanes, 1024-bit blocks, 80 rounds.  Serves
//!   SHA-384, SHA-512 and the truncated SHA-512/224 and SHA-512/256
//!   variants (§5.3.6 fixes their distinct initial hash values).
//!
//! Round constants live in [`consts`]: the fractional parts of the cube
//! roots of the first 64 (resp. 80) primes.

pub(crate) mod consts;
pub mod sha256;
pub mod sha512;

pub use sha256::{sha224, sha256, Sha224, Sha256};
pub use sha512::{sha384, sha512, sha512_224, sha512_256, Sha384, Sha512, Sha512_224, Sha512_256};

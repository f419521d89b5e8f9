//! Generic seam over the concrete hash functions.
//!
//! [`HashFunction`] is the compile-time interface: callers that know their
//! algorithm statically go through it (or through the per-algorithm
//! one-shot helpers).  Run-time algorithm selection lives in
//! [`crate::algorithm`].

use crate::digest::Digest;
use crate::sha1::Sha1;
use crate::sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// Streaming hash function with a fixed output size.
pub trait HashFunction: Clone + Default {
    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes.
    const BLOCK_SIZE: usize;
    /// Digest type produced at finalisation.
    type Output;

    /// Creates a fresh hasher.
    fn new() -> Self;

    /// Absorbs additional message bytes.
    fn update(&mut self, input: &[u8]);

    /// Finalises the hasher, consuming it.
    fn finalize(self) -> Self::Output;

    /// Absorbs `input` and returns the hasher, for call chaining.
    fn chain(mut self, input: &[u8]) -> Self {
        self.update(input);
        self
    }
}

/// Computes the digest of `input` with hash function `H` in one shot.
pub fn digest_of<H: HashFunction>(input: &[u8]) -> H::Output {
    H::new().chain(input).finalize()
}

macro_rules! impl_hash_function {
    ($hasher:ty, $output:literal, $block:literal) => {
        impl HashFunction for $hasher {
            const OUTPUT_SIZE: usize = $output;
            const BLOCK_SIZE: usize = $block;
            type Output = Digest<$output>;

            fn new() -> Self {
                <$hasher>::new()
            }

            fn update(&mut self, input: &[u8]) {
                <$hasher>::update(self, input);
            }

            fn finalize(self) -> Self::Output {
                <$hasher>::finalize(self)
            }
        }
    };
}

impl_hash_function!(Sha1, 20, 64);
impl_hash_function!(Sha224, 28, 64);
impl_hash_function!(Sha256, 32, 64);
impl_hash_function!(Sha384, 48, 128);
impl_hash_function!(Sha512, 64, 128);
impl_hash_function!(Sha512_224, 28, 128);
impl_hash_function!(Sha512_256, 32, 128);

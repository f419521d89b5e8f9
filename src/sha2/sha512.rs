//! SHA-384, SHA-512 and the truncated SHA-512/224 and SHA-512/256 variants:
//! the 64-bit lane half of the SHA-2 family.
//!
//! All four functions share the 1024-bit block compression function; they
//! differ only in initial hash value and in how much of the final state is
//! emitted.  The message length field is 128 bits wide, so inputs up to
//! 2^128 - 1 bits are representable.

use crate::block::BlockBuffer;
use crate::digest::{Digest, Sha224Digest, Sha256Digest, Sha384Digest, Sha512Digest};
use crate::sha2::consts::{K64, SHA384_IV, SHA512_224_IV, SHA512_256_IV, SHA512_IV};

fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

fn compress(state: &mut [u64; 8], block: &[u8; 128]) {
    let mut w = [0u64; 80];
    for (t, chunk) in block.chunks_exact(8).enumerate() {
        w[t] = u64::from_be_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
    }
    for t in 16..80 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for t in 0..80 {
        let ch = (e & f) ^ (!e & g);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch)
            .wrapping_add(K64[t])
            .wrapping_add(w[t]);
        let temp2 = big_sigma0(a).wrapping_add(maj);
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Shared engine for the 1024-bit block functions.
#[derive(Debug, Clone)]
struct Engine512 {
    state: [u64; 8],
    buffer: BlockBuffer<128>,
}

impl Engine512 {
    const fn new(iv: [u64; 8]) -> Self {
        Self {
            state: iv,
            buffer: BlockBuffer::new(),
        }
    }

    fn update(&mut self, input: &[u8]) {
        let Self { state, buffer } = self;
        buffer.absorb(input, |block| compress(state, block));
    }

    /// Pads, runs the final compression(s) and serialises the state
    /// big-endian, truncated to `N` bytes.  Truncation to a non-word
    /// boundary (SHA-512/224) is a plain byte cut per §6.6/§6.7.
    fn finalize<const N: usize>(mut self) -> Digest<N> {
        let Self { state, buffer } = &mut self;
        buffer.pad(16, |block| compress(state, block));

        let mut full = [0u8; 64];
        for (chunk, word) in full.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&full[..N]);
        Digest::from_bytes(bytes)
    }
}

macro_rules! define_sha512_variant {
    ($(#[$doc:meta])* $name:ident, $iv:expr, $output:ty, $bits:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name(Engine512);

        impl $name {
            /// Creates a hasher initialised with this variant's IV.
            pub const fn new() -> Self {
                Self(Engine512::new($iv))
            }

            /// Absorbs additional message bytes.
            pub fn update(&mut self, input: &[u8]) {
                self.0.update(input);
            }

            #[doc = concat!("Finalises the hasher, consuming it, and returns the ", $bits, "-bit digest.")]
            pub fn finalize(self) -> $output {
                self.0.finalize()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_sha512_variant! {
    /// Streaming SHA-384 hasher.
    Sha384, SHA384_IV, Sha384Digest, "384"
}

define_sha512_variant! {
    /// Streaming SHA-512 hasher.
    Sha512, SHA512_IV, Sha512Digest, "512"
}

define_sha512_variant! {
    /// Streaming SHA-512/224 hasher.
    Sha512_224, SHA512_224_IV, Sha224Digest, "224"
}

define_sha512_variant! {
    /// Streaming SHA-512/256 hasher.
    Sha512_256, SHA512_256_IV, Sha256Digest, "256"
}

/// Computes the SHA-384 digest of `input` in one shot.
pub fn sha384(input: &[u8]) -> Sha384Digest {
    let mut hasher = Sha384::new();
    hasher.update(input);
    hasher.finalize()
}

/// Computes the SHA-512 digest of `input` in one shot.
pub fn sha512(input: &[u8]) -> Sha512Digest {
    let mut hasher = Sha512::new();
    hasher.update(input);
    hasher.finalize()
}

/// Computes the SHA-512/224 digest of `input` in one shot.
pub fn sha512_224(input: &[u8]) -> Sha224Digest {
    let mut hasher = Sha512_224::new();
    hasher.update(input);
    hasher.finalize()
}

/// Computes the SHA-512/256 digest of `input` in one shot.
pub fn sha512_256(input: &[u8]) -> Sha256Digest {
    let mut hasher = Sha512_256::new();
    hasher.update(input);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc_vectors() {
        assert_eq!(
            sha384(b"abc").to_hex().to_string(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            sha512(b"abc").to_hex().to_string(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
        assert_eq!(
            sha512_224(b"abc").to_hex().to_string(),
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
        );
        assert_eq!(
            sha512_256(b"abc").to_hex().to_string(),
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    #[test]
    fn empty_vectors() {
        assert_eq!(
            sha512(b"").to_hex().to_string(),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
        assert_eq!(
            sha512_256(b"").to_hex().to_string(),
            "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"
        );
    }
}

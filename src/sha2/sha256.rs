//! SHA-224 and SHA-256: the 32-bit lane half of the SHA-2 family.

use crate::block::BlockBuffer;
use crate::digest::{Digest, Sha224Digest, Sha256Digest};
use crate::sha2::consts::{K32, SHA224_IV, SHA256_IV};

fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

fn compress(state: &mut [u32; 8], block: &[u8; 64]) {
    let mut w = [0u32; 64];
    for (t, chunk) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for t in 0..64 {
        let ch = (e & f) ^ (!e & g);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch)
            .wrapping_add(K32[t])
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

/// Shared engine for the 512-bit block functions.
#[derive(Debug, Clone)]
struct Engine256 {
    state: [u32; 8],
    buffer: BlockBuffer<64>,
}

impl Engine256 {
    const fn new(iv: [u32; 8]) -> Self {
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
    /// big-endian, truncated to `N` bytes.
    fn finalize<const N: usize>(mut self) -> Digest<N> {
        let Self { state, buffer } = &mut self;
        buffer.pad(8, |block| compress(state, block));

        let mut full = [0u8; 32];
        for (chunk, word) in full.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&full[..N]);
        Digest::from_bytes(bytes)
    }
}

/// Streaming SHA-224 hasher.
#[derive(Debug, Clone)]
pub struct Sha224(Engine256);

impl Sha224 {
    /// Creates a hasher initialised with the SHA-224 IV.
    pub const fn new() -> Self {
        Self(Engine256::new(SHA224_IV))
    }

    /// Absorbs additional message bytes.
    pub fn update(&mut self, input: &[u8]) {
        self.0.update(input);
    }

    /// Finalises the hasher, consuming it, and returns the 224-bit digest.
    pub fn finalize(self) -> Sha224Digest {
        self.0.finalize()
    }
}

impl Default for Sha224 {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming SHA-256 hasher.
#[derive(Debug, Clone)]
pub struct Sha256(Engine256);

impl Sha256 {
    /// Creates a hasher initialised with the SHA-256 IV.
    pub const fn new() -> Self {
        Self(Engine256::new(SHA256_IV))
    }

    /// Absorbs additional message bytes.
    pub fn update(&mut self, input: &[u8]) {
        self.0.update(input);
    }

    /// Finalises the hasher, consuming it, and returns the 256-bit digest.
    pub fn finalize(self) -> Sha256Digest {
        self.0.finalize()
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-224 digest of `input` in one shot.
pub fn sha224(input: &[u8]) -> Sha224Digest {
    let mut hasher = Sha224::new();
    hasher.update(input);
    hasher.finalize()
}

/// Computes the SHA-256 digest of `input` in one shot.
pub fn sha256(input: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc_vectors() {
        assert_eq!(
            sha224(b"abc").to_hex().to_string(),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            sha256(b"abc").to_hex().to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_vectors() {
        assert_eq!(
            sha224(b"").to_hex().to_string(),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
        assert_eq!(
            sha256(b"").to_hex().to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}

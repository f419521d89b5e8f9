//! SHA-1 (FIPS 180-4 §6.1).
//!
//! SHA-1 is retained for interoperability with legacy formats; it is no
//! longer collision resistant and must not be used where collision
//! resistance matters.

use crate::block::BlockBuffer;
use crate::digest::{Digest, Sha1Digest};

/// Round constants, one per group of twenty steps (§4.2.1).
const K: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];

/// Initial hash value (§5.3.1).
const IV: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

fn compress(state: &mut [u32; 5], block: &[u8; 64]) {
    let mut w = [0u32; 80];
    for (t, chunk) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;
    for (t, &wt) in w.iter().enumerate() {
        // Ch, Parity, Maj, Parity across the four twenty-step groups (§4.1.1).
        let f = match t / 20 {
            0 => (b & c) | (!b & d),
            2 => (b & c) ^ (b & d) ^ (c & d),
            _ => b ^ c ^ d,
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Streaming SHA-1 hasher.
#[derive(Debug, Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer<64>,
}

impl Sha1 {
    /// Creates a hasher initialised with the SHA-1 IV.
    pub const fn new() -> Self {
        Self {
            state: IV,
            buffer: BlockBuffer::new(),
        }
    }

    /// Absorbs additional message bytes.
    pub fn update(&mut self, input: &[u8]) {
        let Self { state, buffer } = self;
        buffer.absorb(input, |block| compress(state, block));
    }

    /// Finalises the hasher, consuming it, and returns the 160-bit digest.
    pub fn finalize(mut self) -> Sha1Digest {
        let Self { state, buffer } = &mut self;
        buffer.pad(8, |block| compress(state, block));

        let mut bytes = [0u8; 20];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from_bytes(bytes)
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-1 digest of `input` in one shot.
pub fn sha1(input: &[u8]) -> Sha1Digest {
    let mut hasher = Sha1::new();
    hasher.update(input);
    hasher.finalize()
}

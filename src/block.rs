//! Merkle-Damgård block buffering and length padding.
//!
//! FIPS 180-4 processes messages in fixed-size blocks: 512 bits for the
//! 32-bit lane functions (SHA-1, SHA-224, SHA-256) and 1024 bits for the
//! 64-bit lane functions (SHA-384 and the SHA-512 family).  The final block
//! carries the padding rule from §5.1: a single `1` bit, the smallest run
//! of `0` bits that leaves room for the length field, and the message bit
//! length as a big-endian integer occupying the last 64 (resp. 128) bits.
//!
//! [`BlockBuffer`] absorbs input incrementally and applies the padding rule
//! at finalisation, so callers never materialise the padded message.  The
//! running length is tracked in bytes with a `u128`, wide enough for the
//! 2^128 - 1 bit ceiling of the 1024-bit block functions.

/// Streaming buffer holding at most one partial block.
#[derive(Debug, Clone)]
pub(crate) struct BlockBuffer<const B: usize> {
    block: [u8; B],
    filled: usize,
    len_bytes: u128,
}

impl<const B: usize> BlockBuffer<B> {
    pub(crate) const fn new() -> Self {
        Self {
            block: [0u8; B],
            filled: 0,
            len_bytes: 0,
        }
    }

    /// Absorbs `input`, invoking `compress` for every completed block.
    ///
    /// After this call the buffer holds strictly fewer than `B` bytes.
    pub(crate) fn absorb(&mut self, mut input: &[u8], mut compress: impl FnMut(&[u8; B])) {
        self.len_bytes = self.len_bytes.wrapping_add(input.len() as u128);

        if self.filled > 0 {
            let take = (B - self.filled).min(input.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];
            if self.filled == B {
                compress(&self.block);
                self.filled = 0;
            }
        }

        while input.len() >= B {
            self.block[..].copy_from_slice(&input[..B]);
            compress(&self.block);
            input = &input[B..];
        }

        if !input.is_empty() {
            self.block[..input.len()].copy_from_slice(input);
            self.filled = input.len();
        }
    }

    /// Applies the terminal padding rule and compresses the final block(s).
    ///
    /// `length_bytes` selects the width of the trailing length field: 8 for
    /// 512-bit blocks, 16 for 1024-bit blocks.
    pub(crate) fn pad(&mut self, length_bytes: usize, mut compress: impl FnMut(&[u8; B])) {
        let bit_len = self.len_bytes.wrapping_mul(8);

        self.block[self.filled] = 0x80;
        self.filled += 1;

        if self.filled > B - length_bytes {
            self.block[self.filled..].fill(0);
            compress(&self.block);
            self.filled = 0;
        }

        self.block[self.filled..B - length_bytes].fill(0);
        let encoded = bit_len.to_be_bytes();
        self.block[B - length_bytes..].copy_from_slice(&encoded[encoded.len() - length_bytes..]);
        compress(&self.block);
    }
}

/// Number of zero bits `k` solving `l + 1 + k ≡ B - L (mod B)` where `B` is
/// the block size and `L` the length-field width, all in bits (§5.1).
#[cfg(test)]
pub(crate) fn padding_bits(msg_bits: u128, block_bits: u128, length_bits: u128) -> u128 {
    let reserve = block_bits - length_bits;
    (reserve + block_bits - (msg_bits + 1) % block_bits) % block_bits
}

/// Total padded length in bits for a message of `msg_bits` bits.
#[cfg(test)]
pub(crate) fn padded_bits(msg_bits: u128, block_bits: u128, length_bits: u128) -> u128 {
    msg_bits + 1 + padding_bits(msg_bits, block_bits, length_bits) + length_bits
}

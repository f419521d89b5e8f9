//! Digest value types shared by every hash function in the crate.
//!
//! A [`Digest`] is an immutable fixed-size byte array produced by a
//! finalised hasher.  The type deliberately exposes only explicit
//! conversions: raw bytes in and out, plus lowercase hexadecimal via
//! [`Digest::to_hex`] and [`Digest::from_hex`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error surfaced while decoding a digest from its hexadecimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigestError {
    /// The input string length disagrees with the digest size.
    InvalidLength {
        /// Number of hex characters expected for this digest size.
        expected: usize,
        /// Number of characters actually supplied.
        actual: usize,
    },
    /// The input contained a character outside `[0-9a-fA-F]`.
    InvalidByte {
        /// Offset of the offending character.
        index: usize,
    },
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::InvalidLength { expected, actual } => {
                write!(f, "expected {expected} hex characters, got {actual}")
            }
            DigestError::InvalidByte { index } => {
                write!(f, "invalid hex character at offset {index}")
            }
        }
    }
}

impl std::error::Error for DigestError {}

/// Fixed-size digest emitted by a finalised hash function.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest<const N: usize> {
    bytes: [u8; N],
}

/// 160-bit SHA-1 digest.
pub type Sha1Digest = Digest<20>;
/// 224-bit digest (SHA-224 and SHA-512/224).
pub type Sha224Digest = Digest<28>;
/// 256-bit digest (SHA-256 and SHA-512/256).
pub type Sha256Digest = Digest<32>;
/// 384-bit SHA-384 digest.
pub type Sha384Digest = Digest<48>;
/// 512-bit SHA-512 digest.
pub type Sha512Digest = Digest<64>;

impl<const N: usize> Digest<N> {
    /// Constructs a digest from raw bytes.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Consumes the digest and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; N] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub const fn to_hex(&self) -> HexOutput<N> {
        HexOutput(self.bytes)
    }

    /// Decodes a digest from hexadecimal text.
    ///
    /// Both lowercase and uppercase characters are accepted; the canonical
    /// output form is always lowercase.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let input = hex.as_bytes();
        if input.len() != N * 2 {
            return Err(DigestError::InvalidLength {
                expected: N * 2,
                actual: input.len(),
            });
        }

        let mut bytes = [0u8; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = decode_nibble(input[i * 2]).ok_or(DigestError::InvalidByte { index: i * 2 })?;
            let lo = decode_nibble(input[i * 2 + 1])
                .ok_or(DigestError::InvalidByte { index: i * 2 + 1 })?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self { bytes })
    }
}

fn decode_nibble(character: u8) -> Option<u8> {
    match character {
        b'0'..=b'9' => Some(character - b'0'),
        b'a'..=b'f' => Some(character - b'a' + 10),
        b'A'..=b'F' => Some(character - b'A' + 10),
        _ => None,
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.into_bytes()
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x{})", self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_hex(), f)
    }
}

/// Hexadecimal representation of a digest.
#[derive(Clone, Copy)]
pub struct HexOutput<const N: usize>([u8; N]);

impl<const N: usize> fmt::Display for HexOutput<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for HexOutput<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

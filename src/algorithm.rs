//! Run-time algorithm selection.
//!
//! [`Algorithm`] names the seven hash functions and offers dynamic
//! dispatch for callers (such as the `shasum` binary) that pick the
//! function from user input rather than at compile time.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hasher::HashFunction;
use crate::sha1::Sha1;
use crate::sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// Error surfaced when an algorithm name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseAlgorithmError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hash algorithm `{}`", self.name)?;
        write!(f, " (expected one of:")?;
        for algorithm in Algorithm::ALL {
            write!(f, " {algorithm}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Identifier for one of the supported FIPS 180-4 hash functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// SHA-1, 160-bit digest.
    Sha1,
    /// SHA-224, 224-bit digest.
    Sha224,
    /// SHA-256, 256-bit digest.
    Sha256,
    /// SHA-384, 384-bit digest.
    Sha384,
    /// SHA-512, 512-bit digest.
    Sha512,
    /// SHA-512/224, 224-bit digest.
    Sha512_224,
    /// SHA-512/256, 256-bit digest.
    Sha512_256,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha512_224 => "sha512/224",
            Algorithm::Sha512_256 => "sha512/256",
        }
    }

    /// Digest size in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 | Algorithm::Sha512_224 => 28,
            Algorithm::Sha256 | Algorithm::Sha512_256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Internal block size in bytes.
    pub const fn block_len(self) -> usize {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => 64,
            _ => 128,
        }
    }

    /// Returns a boxed streaming hasher for this algorithm.
    pub fn hasher(self) -> Box<dyn DynHasher> {
        match self {
            Algorithm::Sha1 => Box::new(Sha1::new()),
            Algorithm::Sha224 => Box::new(Sha224::new()),
            Algorithm::Sha256 => Box::new(Sha256::new()),
            Algorithm::Sha384 => Box::new(Sha384::new()),
            Algorithm::Sha512 => Box::new(Sha512::new()),
            Algorithm::Sha512_224 => Box::new(Sha512_224::new()),
            Algorithm::Sha512_256 => Box::new(Sha512_256::new()),
        }
    }

    /// Computes the digest of `input` in one shot.
    pub fn digest(self, input: &[u8]) -> Vec<u8> {
        let mut hasher = self.hasher();
        hasher.update(input);
        hasher.finalize_bytes()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses common spellings: case-insensitive, `-` separators ignored,
    /// `_` accepted in place of `/` for the truncated variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical: String = s
            .trim()
            .to_ascii_lowercase()
            .replace('-', "")
            .replace('_', "/");
        match canonical.as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "sha224" => Ok(Algorithm::Sha224),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            // Dash-separated spellings collapse to the slash-free form.
            "sha512/224" | "sha512224" => Ok(Algorithm::Sha512_224),
            "sha512/256" | "sha512256" => Ok(Algorithm::Sha512_256),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

/// Object-safe streaming interface used where the algorithm is chosen at
/// run time.  Statically-typed callers should prefer [`HashFunction`].
pub trait DynHasher {
    /// Absorbs additional message bytes.
    fn update(&mut self, input: &[u8]);

    /// Finalises the hasher and returns the digest bytes.
    fn finalize_bytes(self: Box<Self>) -> Vec<u8>;
}

impl<H> DynHasher for H
where
    H: HashFunction,
    H::Output: AsRef<[u8]>,
{
    fn update(&mut self, input: &[u8]) {
        HashFunction::update(self, input);
    }

    fn finalize_bytes(self: Box<Self>) -> Vec<u8> {
        HashFunction::finalize(*self).as_ref().to_vec()
    }
}

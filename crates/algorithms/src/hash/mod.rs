//! Hash function implementations
//!
//! SHA-1 and both Streebog widths share the streaming [`HashFunction`]
//! interface. [`hash_hex`] is the one-call text entry point.

use alloc::string::String;

use crate::error::{Error, Result};

pub mod sha1;
pub mod streebog;

pub use sha1::Sha1;
pub use streebog::{Streebog256, Streebog512};

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;
    /// Compression block size in bytes
    const BLOCK_SIZE: usize;
    /// Human readable identifier
    const ALGORITHM_ID: &'static str;
}

/// Streaming hash interface
pub trait HashFunction: Clone {
    /// Marker type carrying the static parameters
    type Algorithm: HashAlgorithm;
    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Fresh state
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Pads, processes the final blocks and returns the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Output size in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as HashAlgorithm>::ALGORITHM_ID
    }

    /// Hashes `data` in one call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}

/// Selects the function used by [`hash_hex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    /// SHA-1, 160-bit output
    Sha1,
    /// GOST R 34.11-2012, 256-bit output
    Streebog256,
    /// GOST R 34.11-2012, 512-bit output
    Streebog512,
}

impl HashVariant {
    /// Maps a Streebog output width in bits onto its variant
    pub fn streebog(bits: u16) -> Result<Self> {
        match bits {
            256 => Ok(HashVariant::Streebog256),
            512 => Ok(HashVariant::Streebog512),
            _ => Err(Error::param("variant", "Streebog width must be 256 or 512")),
        }
    }

    /// Output size in bytes
    pub fn output_size(self) -> usize {
        match self {
            HashVariant::Sha1 => Sha1::output_size(),
            HashVariant::Streebog256 => Streebog256::output_size(),
            HashVariant::Streebog512 => Streebog512::output_size(),
        }
    }
}

fn hex_digest<H: HashFunction>(data: &[u8]) -> Result<String> {
    Ok(hex::encode(H::digest(data)?))
}

/// Hashes the UTF-8 bytes of `message` and returns the lower-case hex digest
pub fn hash_hex(message: &str, variant: HashVariant) -> Result<String> {
    let data = message.as_bytes();
    match variant {
        HashVariant::Sha1 => hex_digest::<Sha1>(data),
        HashVariant::Streebog256 => hex_digest::<Streebog256>(data),
        HashVariant::Streebog512 => hex_digest::<Streebog512>(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_dispatch() {
        assert_eq!(
            hash_hex("abc", HashVariant::Sha1).unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hash_hex("", HashVariant::Streebog256).unwrap(),
            "3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb"
        );
        assert_eq!(hash_hex("", HashVariant::Streebog512).unwrap().len(), 128);
    }

    #[test]
    fn test_variant_from_width() {
        assert_eq!(HashVariant::streebog(256).unwrap(), HashVariant::Streebog256);
        assert_eq!(HashVariant::streebog(512).unwrap(), HashVariant::Streebog512);
        assert!(HashVariant::streebog(384).is_err());
        assert_eq!(HashVariant::Sha1.output_size(), 20);
    }
}

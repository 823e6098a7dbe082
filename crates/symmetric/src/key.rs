//! 256-bit keys shared by both symmetric ciphers

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_algorithms::block::BlockKey;
use cryptolab_params::utils::symmetric::{SYMMETRIC_KEY_HEX_LEN, SYMMETRIC_KEY_SIZE};

use crate::error::{validate, Error, Result};

/// A 32-byte secret key, wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey(BlockKey);

impl SymmetricKey {
    /// Wraps raw key bytes
    pub fn new(bytes: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        SymmetricKey(BlockKey::new(bytes))
    }

    /// Raw key from a slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::key_format(
            bytes.len() == SYMMETRIC_KEY_SIZE,
            "SymmetricKey::from_slice",
            "key must be 32 bytes",
        )?;
        Ok(SymmetricKey(BlockKey::from_slice(bytes)?))
    }

    /// Fresh random key
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        SymmetricKey(BlockKey::random(rng))
    }

    /// Decodes exactly 64 hex digits
    pub fn from_hex(text: &str) -> Result<Self> {
        validate::key_format(
            is_key_hex(text),
            "SymmetricKey::from_hex",
            "expected 64 hexadecimal characters",
        )?;
        let mut bytes = hex::decode(text).map_err(|e| Error::InvalidKeyFormat {
            context: "SymmetricKey::from_hex",
            message: alloc::format!("{}", e),
        })?;
        let key = Self::from_slice(&bytes);
        bytes.zeroize();
        key
    }

    /// UTF-8 bytes of a passphrase, truncated or zero-padded to 32 bytes
    ///
    /// This is not a key derivation function; short passphrases give weak keys.
    pub fn from_text(text: &str) -> Result<Self> {
        validate::key_format(!text.is_empty(), "SymmetricKey::from_text", "key must not be empty")?;
        let mut bytes = [0u8; SYMMETRIC_KEY_SIZE];
        let src = text.as_bytes();
        let n = src.len().min(SYMMETRIC_KEY_SIZE);
        bytes[..n].copy_from_slice(&src[..n]);
        let key = Self::new(bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Hex when the input is exactly 64 hex digits, passphrase otherwise
    pub fn prepare(input: &str) -> Result<Self> {
        if is_key_hex(input) {
            Self::from_hex(input)
        } else {
            Self::from_text(input)
        }
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.0
    }

    /// Lower-case hex of the key; the result is as sensitive as the key
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    pub(crate) fn block_key(&self) -> &BlockKey {
        &self.0
    }
}

fn is_key_hex(text: &str) -> bool {
    text.len() == SYMMETRIC_KEY_HEX_LEN && text.bytes().all(|b| b.is_ascii_hexdigit())
}

impl FromStr for SymmetricKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::prepare(s)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

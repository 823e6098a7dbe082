//! STB 34.101.31 over PKCS-padded blocks
//!
//! Each 16-byte block is encrypted independently under the same key, so
//! equal plaintext blocks give equal ciphertext blocks. The text form is
//! the hex of all ciphertext blocks.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::{CryptoRng, RngCore};

use cryptolab_algorithms::block::padding::{pkcs_pad, pkcs_unpad};
use cryptolab_algorithms::block::{BlockCipher, Ecb, Stb};
use cryptolab_api::SymmetricCipher;
use cryptolab_params::utils::symmetric::STB_BLOCK_SIZE;

use crate::error::{decode_hex, into_text, validate, Error, Result, ResultExt};
use crate::key::SymmetricKey;

const CONTEXT: &str = "STB 34.101.31 ciphertext";

/// One or more STB ciphertext blocks
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct StbCiphertext(Vec<u8>);

impl StbCiphertext {
    /// Wraps raw ciphertext, which must be a non-empty whole number of blocks
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        validate::ciphertext(!bytes.is_empty(), CONTEXT, "ciphertext holds no blocks")?;
        validate::ciphertext(
            bytes.len() % STB_BLOCK_SIZE == 0,
            CONTEXT,
            "length must be a multiple of 16 bytes",
        )?;
        Ok(StbCiphertext(bytes))
    }

    /// Raw ciphertext bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of 16-byte blocks
    pub fn blocks(&self) -> usize {
        self.0.len() / STB_BLOCK_SIZE
    }
}

impl fmt::Display for StbCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl FromStr for StbCiphertext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(decode_hex(CONTEXT, s.trim())?)
    }
}

impl From<StbCiphertext> for String {
    fn from(ct: StbCiphertext) -> Self {
        ct.to_string()
    }
}

impl TryFrom<String> for StbCiphertext {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// STB 34.101.31 with PKCS padding
pub struct StbCipher;

impl StbCipher {
    fn engine(key: &SymmetricKey) -> Ecb<Stb> {
        Ecb::new(Stb::new(key.block_key()))
    }

    /// Deterministic encryption of raw bytes
    pub fn seal(key: &SymmetricKey, plaintext: &[u8]) -> Result<StbCiphertext> {
        let padded = pkcs_pad(plaintext, STB_BLOCK_SIZE).with_context("STB 34.101.31 encrypt")?;
        let body = Self::engine(key)
            .encrypt(&padded)
            .with_context("STB 34.101.31 encrypt")?;
        Ok(StbCiphertext(body))
    }

    /// Decrypts and strips the padding; inconsistent padding is `MalformedCiphertext`
    pub fn open(key: &SymmetricKey, ciphertext: &StbCiphertext) -> Result<Vec<u8>> {
        let padded = Self::engine(key)
            .decrypt(&ciphertext.0)
            .with_context(CONTEXT)?;
        pkcs_unpad(&padded, STB_BLOCK_SIZE).with_context(CONTEXT)
    }

    /// Encrypts the UTF-8 bytes of `text` and returns hex
    pub fn encrypt_text(key: &SymmetricKey, text: &str) -> Result<String> {
        Self::encrypt_bytes(key, text.as_bytes())
    }

    /// Inverse of [`StbCipher::encrypt_text`]; fails with `Decoding` on non-UTF-8 output
    pub fn decrypt_text(key: &SymmetricKey, ciphertext: &str) -> Result<String> {
        into_text("STB 34.101.31 decrypt_text", Self::decrypt_bytes(key, ciphertext)?)
    }

    /// Encrypts arbitrary bytes and returns hex
    pub fn encrypt_bytes(key: &SymmetricKey, data: &[u8]) -> Result<String> {
        Ok(Self::seal(key, data)?.to_string())
    }

    /// Parses hex and recovers the bytes
    pub fn decrypt_bytes(key: &SymmetricKey, ciphertext: &str) -> Result<Vec<u8>> {
        Self::open(key, &ciphertext.parse()?)
    }
}

impl SymmetricCipher for StbCipher {
    type Key = SymmetricKey;
    type Ciphertext = StbCiphertext;

    fn name() -> &'static str {
        Stb::name()
    }

    fn encrypt<R: CryptoRng + RngCore>(
        key: &SymmetricKey,
        plaintext: &[u8],
        _rng: &mut R,
    ) -> Result<StbCiphertext> {
        Self::seal(key, plaintext)
    }

    fn decrypt(key: &SymmetricKey, ciphertext: &StbCiphertext) -> Result<Vec<u8>> {
        Self::open(key, ciphertext)
    }
}

#[cfg(test)]
mod tests;

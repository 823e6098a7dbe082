//! GOST 28147-89 in gamma mode
//!
//! A fresh 8-byte synchro-message is drawn for every encryption and sent in
//! the clear ahead of the body: `"<16 hex>:<body hex>"`. There is no
//! integrity protection, so tampering with the body flips plaintext bits.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::{CryptoRng, RngCore};

use cryptolab_algorithms::block::{BlockCipher, Gamma, Gost28147};
use cryptolab_algorithms::types::Nonce;
use cryptolab_api::SymmetricCipher;
use cryptolab_params::utils::symmetric::GOST28147_NONCE_SIZE;

use crate::error::{decode_hex, into_text, validate, Error, Result, ResultExt};
use crate::key::SymmetricKey;

/// Synchro-message (IV) for gamma mode
pub type GostNonce = Nonce<GOST28147_NONCE_SIZE>;

/// Synchro-message plus gamma-encrypted body
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct GostCiphertext {
    nonce: GostNonce,
    body: Vec<u8>,
}

impl GostCiphertext {
    /// Pairs a synchro-message with its ciphertext body
    pub fn new(nonce: GostNonce, body: Vec<u8>) -> Self {
        GostCiphertext { nonce, body }
    }

    /// The synchro-message
    pub fn nonce(&self) -> &GostNonce {
        &self.nonce
    }

    /// The encrypted bytes, same length as the plaintext
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl fmt::Display for GostCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", hex::encode(self.nonce.as_ref()), hex::encode(&self.body))
    }
}

impl FromStr for GostCiphertext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        const CONTEXT: &str = "GOST 28147-89 ciphertext";

        let (nonce_hex, body_hex) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::MalformedCiphertext {
                context: CONTEXT,
                message: "missing ':' between synchro-message and body".into(),
            })?;

        validate::ciphertext(
            nonce_hex.len() == 2 * GOST28147_NONCE_SIZE,
            CONTEXT,
            "synchro-message must be 16 hex characters",
        )?;
        let nonce = GostNonce::from_slice(&decode_hex(CONTEXT, nonce_hex)?).with_context(CONTEXT)?;
        let body = decode_hex(CONTEXT, body_hex)?;

        Ok(GostCiphertext { nonce, body })
    }
}

impl From<GostCiphertext> for String {
    fn from(ct: GostCiphertext) -> Self {
        ct.to_string()
    }
}

impl TryFrom<String> for GostCiphertext {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// GOST 28147-89 gamma-mode cipher
pub struct GostCipher;

impl GostCipher {
    fn keystream(key: &SymmetricKey, nonce: &GostNonce, data: &[u8]) -> Result<Vec<u8>> {
        let mut gamma = Gamma::new(Gost28147::new(key.block_key()), nonce.as_ref())
            .with_context("GOST 28147-89 gamma")?;
        gamma.process(data).with_context("GOST 28147-89 gamma")
    }

    /// Encrypts under a caller-chosen synchro-message
    ///
    /// Reusing a synchro-message with the same key reveals the XOR of the plaintexts.
    pub fn encrypt_with_nonce(
        key: &SymmetricKey,
        nonce: &GostNonce,
        plaintext: &[u8],
    ) -> Result<GostCiphertext> {
        let body = Self::keystream(key, nonce, plaintext)?;
        Ok(GostCiphertext::new(nonce.clone(), body))
    }

    /// Encrypts the UTF-8 bytes of `text` and returns `"nonce:body"` hex
    pub fn encrypt_text<R: CryptoRng + RngCore>(
        key: &SymmetricKey,
        text: &str,
        rng: &mut R,
    ) -> Result<String> {
        Self::encrypt_bytes(key, text.as_bytes(), rng)
    }

    /// Inverse of [`GostCipher::encrypt_text`]; fails with `Decoding` on non-UTF-8 output
    pub fn decrypt_text(key: &SymmetricKey, ciphertext: &str) -> Result<String> {
        into_text("GOST 28147-89 decrypt_text", Self::decrypt_bytes(key, ciphertext)?)
    }

    /// Encrypts arbitrary bytes and returns `"nonce:body"` hex
    pub fn encrypt_bytes<R: CryptoRng + RngCore>(
        key: &SymmetricKey,
        data: &[u8],
        rng: &mut R,
    ) -> Result<String> {
        Ok(<Self as SymmetricCipher>::encrypt(key, data, rng)?.to_string())
    }

    /// Parses `"nonce:body"` hex and recovers the bytes
    pub fn decrypt_bytes(key: &SymmetricKey, ciphertext: &str) -> Result<Vec<u8>> {
        let parsed: GostCiphertext = ciphertext.parse()?;
        <Self as SymmetricCipher>::decrypt(key, &parsed)
    }
}

impl SymmetricCipher for GostCipher {
    type Key = SymmetricKey;
    type Ciphertext = GostCiphertext;

    fn name() -> &'static str {
        Gost28147::name()
    }

    fn encrypt<R: CryptoRng + RngCore>(
        key: &SymmetricKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<GostCiphertext> {
        let nonce = GostNonce::random(rng);
        Self::encrypt_with_nonce(key, &nonce, plaintext)
    }

    fn decrypt(key: &SymmetricKey, ciphertext: &GostCiphertext) -> Result<Vec<u8>> {
        Self::keystream(key, &ciphertext.nonce, &ciphertext.body)
    }
}

#[cfg(test)]
mod tests;

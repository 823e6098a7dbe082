//! McEliece over the (7,4) Hamming code
//!
//! The public generator `G1 = S·G·P` hides the structured code behind a
//! random invertible scrambler `S` and a random permutation `P`. Each 4-bit
//! block is encoded with `G1` and one random bit is flipped; the holder of
//! `P` and `S` undoes the permutation, corrects the flip with the Hamming
//! syndrome and unscrambles.
//!
//! Text framing: a 4-byte big-endian count of plaintext bits, then the
//! 7-bit ciphertext blocks packed MSB-first and zero-filled to a byte.

use alloc::string::String;
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use rand::{CryptoRng, Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_algorithms::code::{BinaryMatrix, HammingCode};
use cryptolab_api::Pke;
use cryptolab_params::pqc::mceliece::{
    MCELIECE_K, MCELIECE_LENGTH_HEADER_SIZE, MCELIECE_N, MCELIECE_T,
    NONSINGULAR_MATRIX_MAX_ATTEMPTS,
};

use crate::error::{Error, Result};

/// Public generator and code parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct McEliecePublicKey {
    g1: BinaryMatrix,
}

/// Scrambler, permutation and the secret code
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct McElieceSecretKey {
    s: BinaryMatrix,
    p: BinaryMatrix,
    #[zeroize(skip)]
    code: HammingCode,
}

/// Public key in transport form; matrices are rows of bits joined by `;`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializedPublicKey {
    /// k x n public generator
    #[cfg_attr(feature = "serde", serde(rename = "G1"))]
    pub g1: String,
    /// Correctable errors per block
    pub t: usize,
    /// Code length
    pub n: usize,
    /// Message bits per block
    pub k: usize,
}

/// Secret key in transport form
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializedSecretKey {
    /// k x k scrambler
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    pub s: String,
    /// k x n Hamming generator
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    pub g: String,
    /// n x n permutation
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub p: String,
    /// (n-k) x n parity check
    #[cfg_attr(feature = "serde", serde(rename = "H"))]
    pub h: String,
}

/// Both halves of a freshly generated key in transport form
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McElieceKeyReport {
    /// Public half
    #[cfg_attr(feature = "serde", serde(rename = "publicKey"))]
    pub public_key: SerializedPublicKey,
    /// Secret half
    #[cfg_attr(feature = "serde", serde(rename = "privateKey"))]
    pub private_key: SerializedSecretKey,
}

fn parse_matrix(text: &str, rows: usize, cols: usize, reason: &'static str) -> Result<BinaryMatrix> {
    BinaryMatrix::parse(text, rows, cols).map_err(|_| Error::InvalidKeyFormat(reason))
}

impl McEliecePublicKey {
    /// The k x n generator `G1`
    pub fn generator(&self) -> &BinaryMatrix {
        &self.g1
    }

    /// Transport form
    pub fn serialize(&self) -> SerializedPublicKey {
        SerializedPublicKey {
            g1: self.g1.serialize(),
            t: MCELIECE_T,
            n: MCELIECE_N,
            k: MCELIECE_K,
        }
    }

    /// Parses the transport form; parameters other than (7,4,1) are rejected
    pub fn deserialize(key: &SerializedPublicKey) -> Result<Self> {
        if (key.n, key.k, key.t) != (MCELIECE_N, MCELIECE_K, MCELIECE_T) {
            return Err(Error::InvalidKeyFormat("only the (7,4,1) code is supported"));
        }
        Ok(McEliecePublicKey {
            g1: parse_matrix(&key.g1, MCELIECE_K, MCELIECE_N, "G1 must be a 4x7 bit matrix")?,
        })
    }
}

impl McElieceSecretKey {
    /// Assembles a key, checking that `s` is invertible and `p` is a permutation
    pub fn new(s: BinaryMatrix, p: BinaryMatrix) -> Result<Self> {
        if (s.rows(), s.cols()) != (MCELIECE_K, MCELIECE_K) {
            return Err(Error::InvalidKeyFormat("S must be 4x4"));
        }
        if (p.rows(), p.cols()) != (MCELIECE_N, MCELIECE_N) || !p.is_permutation() {
            return Err(Error::InvalidKeyFormat("P must be a 7x7 permutation matrix"));
        }
        if s.determinant()? == 0 {
            return Err(Error::Primitive(cryptolab_algorithms::Error::SingularMatrix {
                context: "McEliece scrambler",
            }));
        }
        Ok(McElieceSecretKey {
            s,
            p,
            code: HammingCode::new(),
        })
    }

    /// Scrambler S
    pub fn scrambler(&self) -> &BinaryMatrix {
        &self.s
    }

    /// Permutation P
    pub fn permutation(&self) -> &BinaryMatrix {
        &self.p
    }

    /// Re-derives `G1 = S·G·P`
    pub fn public_key(&self) -> Result<McEliecePublicKey> {
        let g1 = self.s.multiply(self.code.generator())?.multiply(&self.p)?;
        Ok(McEliecePublicKey { g1 })
    }

    /// Transport form
    pub fn serialize(&self) -> SerializedSecretKey {
        SerializedSecretKey {
            s: self.s.serialize(),
            g: self.code.generator().serialize(),
            p: self.p.serialize(),
            h: self.code.parity_check().serialize(),
        }
    }

    /// Parses the transport form
    ///
    /// `G` and `H` must be the fixed Hamming matrices; only `S` and `P` are
    /// secret.
    pub fn deserialize(key: &SerializedSecretKey) -> Result<Self> {
        let code = HammingCode::new();
        let g = parse_matrix(&key.g, MCELIECE_K, MCELIECE_N, "G must be a 4x7 bit matrix")?;
        let h = parse_matrix(
            &key.h,
            MCELIECE_N - MCELIECE_K,
            MCELIECE_N,
            "H must be a 3x7 bit matrix",
        )?;
        if &g != code.generator() || &h != code.parity_check() {
            return Err(Error::InvalidKeyFormat("G and H must describe the (7,4) Hamming code"));
        }
        let s = parse_matrix(&key.s, MCELIECE_K, MCELIECE_K, "S must be a 4x4 bit matrix")?;
        let p = parse_matrix(&key.p, MCELIECE_N, MCELIECE_N, "P must be a 7x7 bit matrix")?;
        Self::new(s, p)
    }
}

impl core::fmt::Debug for McElieceSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("McElieceSecretKey([REDACTED])")
    }
}

impl core::fmt::Debug for SerializedSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SerializedSecretKey([REDACTED])")
    }
}

/// Random scrambler and permutation over the fixed code
pub fn keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(McEliecePublicKey, McElieceSecretKey)> {
    let s = BinaryMatrix::random_nonsingular(MCELIECE_K, NONSINGULAR_MATRIX_MAX_ATTEMPTS, rng)?;
    let p = BinaryMatrix::random_permutation(MCELIECE_N, rng);
    let sk = McElieceSecretKey::new(s, p)?;
    Ok((sk.public_key()?, sk))
}

/// Fresh key pair in transport form
pub fn generate_keys<R: CryptoRng + RngCore>(rng: &mut R) -> Result<McElieceKeyReport> {
    let (pk, sk) = keypair(rng)?;
    Ok(McElieceKeyReport {
        public_key: pk.serialize(),
        private_key: sk.serialize(),
    })
}

/// `m·G1` with one random bit flipped
pub fn encrypt_block<R: CryptoRng + RngCore>(
    pk: &McEliecePublicKey,
    block: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    cryptolab_algorithms::validate::length("McEliece message block", block.len(), MCELIECE_K)?;
    let mut word = pk.g1.mul_vector(block)?;
    word[rng.gen_range(0..MCELIECE_N)] ^= 1;
    Ok(word)
}

/// Inverse of [`encrypt_block`]
pub fn decrypt_block(sk: &McElieceSecretKey, word: &[u8]) -> Result<Vec<u8>> {
    cryptolab_algorithms::validate::length("McEliece ciphertext block", word.len(), MCELIECE_N)?;
    // P is orthogonal, so its transpose undoes it
    let unpermuted = sk.p.transpose().mul_vector(word)?;
    let scrambled = sk.code.decode(&unpermuted)?;
    Ok(sk.s.inverse()?.mul_vector(&scrambled)?)
}

fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            let byte = chunk.iter().fold(0u8, |acc, &b| (acc << 1) | (b & 1));
            byte << (8 - chunk.len())
        })
        .collect()
}

/// Encrypts arbitrary bytes into the framed binary form
pub fn encrypt_bytes<R: CryptoRng + RngCore>(
    pk: &McEliecePublicKey,
    data: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    let bits = bytes_to_bits(data);
    let bit_len = u32::try_from(bits.len())
        .map_err(|_| Error::MessageTooLarge("bit count must fit the 32-bit header"))?;

    let mut encrypted = Vec::with_capacity(bits.len().div_ceil(MCELIECE_K) * MCELIECE_N);
    for chunk in bits.chunks(MCELIECE_K) {
        let mut block = [0u8; MCELIECE_K];
        block[..chunk.len()].copy_from_slice(chunk);
        encrypted.extend(encrypt_block(pk, &block, rng)?);
    }

    let mut out = Vec::with_capacity(MCELIECE_LENGTH_HEADER_SIZE + encrypted.len().div_ceil(8));
    let mut header = [0u8; MCELIECE_LENGTH_HEADER_SIZE];
    BigEndian::write_u32(&mut header, bit_len);
    out.extend_from_slice(&header);
    out.extend(bits_to_bytes(&encrypted));
    Ok(out)
}

/// Recovers the bytes from the framed binary form
///
/// A trailing partial 7-bit block is packing slack and is ignored.
pub fn decrypt_bytes(sk: &McElieceSecretKey, framed: &[u8]) -> Result<Vec<u8>> {
    if framed.len() < MCELIECE_LENGTH_HEADER_SIZE {
        return Err(Error::InvalidCiphertextFormat("missing the 4-byte length header"));
    }
    let (header, body) = framed.split_at(MCELIECE_LENGTH_HEADER_SIZE);
    let bit_len = BigEndian::read_u32(header) as usize;

    let mut decrypted = Vec::with_capacity(body.len() * 8);
    for word in bytes_to_bits(body).chunks_exact(MCELIECE_N) {
        decrypted.extend(decrypt_block(sk, word)?);
    }
    if decrypted.len() < bit_len {
        return Err(Error::InvalidCiphertextFormat(
            "ciphertext is shorter than its header declares",
        ));
    }
    decrypted.truncate(bit_len);
    Ok(bits_to_bytes(&decrypted))
}

/// Encrypts UTF-8 text and returns the framed form as hex
pub fn encrypt_text<R: CryptoRng + RngCore>(
    pk: &McEliecePublicKey,
    text: &str,
    rng: &mut R,
) -> Result<String> {
    Ok(hex::encode(encrypt_bytes(pk, text.as_bytes(), rng)?))
}

/// Inverse of [`encrypt_text`]; non-UTF-8 output is a `Decoding` error
pub fn decrypt_text(sk: &McElieceSecretKey, ciphertext: &str) -> Result<String> {
    let framed = hex::decode(ciphertext.trim())
        .map_err(|_| Error::InvalidCiphertextFormat("McEliece ciphertext must be hex"))?;
    let bytes = decrypt_bytes(sk, &framed)?;
    Ok(String::from_utf8(bytes).map_err(cryptolab_api::Error::from)?)
}

/// McEliece over the framed byte encoding
pub struct McEliece;

impl Pke for McEliece {
    type PublicKey = McEliecePublicKey;
    type SecretKey = McElieceSecretKey;
    type Ciphertext = Vec<u8>;
    type Plaintext = Vec<u8>;

    fn name() -> &'static str {
        "McEliece-Hamming(7,4)"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> cryptolab_api::Result<(Self::PublicKey, Self::SecretKey)> {
        Ok(keypair(rng)?)
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> cryptolab_api::Result<Self::Ciphertext> {
        Ok(encrypt_bytes(pk_recipient, plaintext, rng)?)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> cryptolab_api::Result<Self::Plaintext> {
        Ok(decrypt_bytes(sk_recipient, ciphertext)?)
    }
}

//! EC-ElGamal over secp256k1
//!
//! A message m is mapped to the point whose x-coordinate is `(m << 8) | i`
//! for the first offset i that lands on the curve. secp256k1 has
//! `p ≡ 3 (mod 4)`, so the matching y is a closed-form square root.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_algorithms::ec::secp256k1;
use cryptolab_api::Pke;
use cryptolab_common::{sqrt_mod, CurveParams, Point};
use cryptolab_params::traditional::elgamal::{ELGAMAL_ENCODING_OFFSETS, ELGAMAL_OFFSET_BITS};

use crate::error::{Error, Result};

/// Public point Q = d·G
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    point: Point,
}

impl ElGamalPublicKey {
    /// Wraps a point after checking it is a non-identity curve point
    pub fn new(point: Point) -> Result<Self> {
        let curve = secp256k1::curve()?;
        curve.validate_point(&point, "EC-ElGamal public key")?;
        if point.is_identity() {
            return Err(Error::InvalidKeyFormat("public key is the point at infinity"));
        }
        Ok(ElGamalPublicKey { point })
    }

    /// Parses the `(x, y)` transport form
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(secp256k1::curve()?.parse_point(text)?)
    }

    /// The public point
    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl fmt::Display for ElGamalPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.point, f)
    }
}

/// Private scalar d in [1, n-1], held as big-endian bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ElGamalSecretKey {
    d: Vec<u8>,
}

impl ElGamalSecretKey {
    /// Accepts a scalar in [1, n-1]
    pub fn new(d: &BigUint) -> Result<Self> {
        let curve = secp256k1::curve()?;
        if d.is_zero() || d >= &curve.order {
            return Err(Error::InvalidKeyFormat("private key must lie in [1, n-1]"));
        }
        Ok(ElGamalSecretKey {
            d: d.to_bytes_be(),
        })
    }

    /// Parses the decimal transport form
    pub fn from_decimal(text: &str) -> Result<Self> {
        let digits = text.trim();
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidKeyFormat("private key must be a decimal integer"));
        }
        let d = digits
            .parse::<BigUint>()
            .map_err(|_| Error::InvalidKeyFormat("private key must be a decimal integer"))?;
        Self::new(&d)
    }

    /// The scalar
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.d)
    }

    /// Q = d·G
    pub fn public_key(&self) -> Result<ElGamalPublicKey> {
        let point = secp256k1::curve()?.multiply_base(&self.scalar())?;
        Ok(ElGamalPublicKey { point })
    }
}

impl fmt::Debug for ElGamalSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ElGamalSecretKey([REDACTED])")
    }
}

/// The pair (C1, C2) = (k·G, M + k·Q)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElGamalCiphertext {
    c1: Point,
    c2: Point,
}

impl ElGamalCiphertext {
    /// Builds a ciphertext after checking both points are on the curve
    pub fn new(c1: Point, c2: Point) -> Result<Self> {
        let curve = secp256k1::curve()?;
        curve.validate_point(&c1, "EC-ElGamal C1")?;
        curve.validate_point(&c2, "EC-ElGamal C2")?;
        Ok(ElGamalCiphertext { c1, c2 })
    }

    /// Ephemeral point k·G
    pub fn c1(&self) -> &Point {
        &self.c1
    }

    /// Masked message point
    pub fn c2(&self) -> &Point {
        &self.c2
    }

    /// Transport form
    pub fn to_text(&self) -> ElGamalCiphertextText {
        ElGamalCiphertextText {
            c1: self.c1.to_string(),
            c2: self.c2.to_string(),
        }
    }

    /// Parses the transport form, rejecting off-curve points
    pub fn from_text(text: &ElGamalCiphertextText) -> Result<Self> {
        let curve = secp256k1::curve()?;
        Self::new(curve.parse_point(&text.c1)?, curve.parse_point(&text.c2)?)
    }
}

/// Ciphertext points in `(x, y)` decimal form
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElGamalCiphertextText {
    /// k·G
    #[cfg_attr(feature = "serde", serde(rename = "C1"))]
    pub c1: String,
    /// M + k·Q
    #[cfg_attr(feature = "serde", serde(rename = "C2"))]
    pub c2: String,
}

/// Key pair in transport form
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElGamalKeyReport {
    /// d in decimal
    #[cfg_attr(feature = "serde", serde(rename = "privateKey"))]
    pub private_key: String,
    /// Q as `(x, y)`
    #[cfg_attr(feature = "serde", serde(rename = "publicKey"))]
    pub public_key: String,
}

/// Maps message bytes onto the curve
///
/// Fails with `MessageTooLarge` when `m << 8` does not fit below p.
pub fn encode_message(curve: &CurveParams, message: &[u8]) -> Result<Point> {
    let shifted = BigUint::from_bytes_be(message) << ELGAMAL_OFFSET_BITS;
    if shifted >= curve.p {
        return Err(Error::MessageTooLarge("message does not fit below the field modulus"));
    }
    for offset in 0..ELGAMAL_ENCODING_OFFSETS {
        let x = &shifted | BigUint::from(offset);
        if x >= curve.p {
            break;
        }
        if let Some(y) = sqrt_mod(&curve.rhs(&x), &curve.p)? {
            return Ok(Point::new(x, y));
        }
    }
    Err(Error::NoValidEncoding("no offset yields a curve point"))
}

/// Drops the offset byte and returns the message bytes
pub fn decode_point(point: &Point) -> Result<Vec<u8>> {
    let x = point
        .x()
        .ok_or(Error::DecryptionFailed("message point is the point at infinity"))?;
    let m = x >> ELGAMAL_OFFSET_BITS;
    if m.is_zero() {
        return Ok(Vec::new());
    }
    Ok(m.to_bytes_be())
}

/// Fresh (Q, d)
pub fn keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(ElGamalPublicKey, ElGamalSecretKey)> {
    let curve = secp256k1::curve()?;
    let (d, q) = curve.generate_keypair(rng)?;
    Ok((ElGamalPublicKey { point: q }, ElGamalSecretKey::new(&d)?))
}

/// Encrypts message bytes to `pk`
pub fn encrypt<R: CryptoRng + RngCore>(
    pk: &ElGamalPublicKey,
    message: &[u8],
    rng: &mut R,
) -> Result<ElGamalCiphertext> {
    let curve = secp256k1::curve()?;
    curve.validate_point(&pk.point, "EC-ElGamal public key")?;
    let m = encode_message(&curve, message)?;

    let k = curve.random_scalar(rng)?;
    let c1 = curve.multiply_base(&k)?;
    let c2 = curve.add(&m, &curve.multiply(&k, &pk.point)?)?;
    Ok(ElGamalCiphertext { c1, c2 })
}

/// M = C2 - d·C1, decoded back to bytes
pub fn decrypt(sk: &ElGamalSecretKey, ct: &ElGamalCiphertext) -> Result<Vec<u8>> {
    let curve = secp256k1::curve()?;
    curve.validate_point(&ct.c1, "EC-ElGamal C1")?;
    curve.validate_point(&ct.c2, "EC-ElGamal C2")?;

    let shared = curve.multiply(&sk.scalar(), &ct.c1)?;
    let m = curve.add(&ct.c2, &curve.negate(&shared))?;
    decode_point(&m)
}

/// Fresh key pair as decimal scalar and `(x, y)` point
pub fn generate_keys<R: CryptoRng + RngCore>(rng: &mut R) -> Result<ElGamalKeyReport> {
    let (pk, sk) = keypair(rng)?;
    Ok(ElGamalKeyReport {
        private_key: sk.scalar().to_string(),
        public_key: pk.to_string(),
    })
}

/// Encrypts UTF-8 text under a public key in `(x, y)` form
pub fn encrypt_text<R: CryptoRng + RngCore>(
    public_key: &str,
    message: &str,
    rng: &mut R,
) -> Result<ElGamalCiphertextText> {
    let pk = ElGamalPublicKey::parse(public_key)?;
    Ok(encrypt(&pk, message.as_bytes(), rng)?.to_text())
}

/// Decrypts with a decimal private key; non-UTF-8 output is a `Decoding` error
pub fn decrypt_text(private_key: &str, ciphertext: &ElGamalCiphertextText) -> Result<String> {
    let sk = ElGamalSecretKey::from_decimal(private_key)?;
    let ct = ElGamalCiphertext::from_text(ciphertext)?;
    let bytes = decrypt(&sk, &ct)?;
    Ok(String::from_utf8(bytes).map_err(cryptolab_api::Error::from)?)
}

/// EC-ElGamal over secp256k1
///
/// Messages are integers, so leading zero bytes are not preserved and at
/// most 31 bytes fit.
pub struct ElGamal;

impl Pke for ElGamal {
    type PublicKey = ElGamalPublicKey;
    type SecretKey = ElGamalSecretKey;
    type Ciphertext = ElGamalCiphertext;
    type Plaintext = Vec<u8>;

    fn name() -> &'static str {
        "EC-ElGamal-secp256k1"
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
        Ok(encrypt(pk_recipient, plaintext, rng)?)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> cryptolab_api::Result<Self::Plaintext> {
        Ok(decrypt(sk_recipient, ciphertext)?)
    }
}

#[cfg(test)]
mod tests;

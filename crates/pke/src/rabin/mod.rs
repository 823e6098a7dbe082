//! Rabin cryptosystem
//!
//! Encryption squares the message modulo `n = p·q`. Decryption takes square
//! roots modulo each prime, which is closed-form because `p ≡ q ≡ 3 (mod 4)`,
//! and combines them with the CRT into four roots of `c` modulo `n`. The
//! scheme cannot tell which root is the plaintext, so all four come back.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_api::Pke;
use cryptolab_common::{extended_gcd, generate_large_prime, modulo, sqrt_mod};
use cryptolab_params::traditional::rabin::{
    RABIN_CANDIDATES, RABIN_DEFAULT_PRIME_BITS, RABIN_DISTINCT_PRIME_ATTEMPTS,
    RABIN_MIN_PRIME_BITS,
};

use crate::error::{Error, Result};

/// Public modulus n = p·q
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RabinPublicKey {
    n: BigUint,
}

impl RabinPublicKey {
    /// Wraps a modulus; it must be odd and larger than 1
    pub fn new(n: BigUint) -> Result<Self> {
        if n <= BigUint::one() || !n.bit(0) {
            return Err(Error::InvalidKeyFormat("Rabin modulus must be an odd integer above 1"));
        }
        Ok(RabinPublicKey { n })
    }

    /// Parses the decimal transport form
    pub fn from_decimal(n: &str) -> Result<Self> {
        Self::new(parse_decimal(n, "Rabin modulus is not a decimal integer")?)
    }

    /// The modulus
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }
}

/// The two secret primes, held as big-endian bytes so they can be wiped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RabinSecretKey {
    p: Vec<u8>,
    q: Vec<u8>,
}

impl RabinSecretKey {
    /// Accepts distinct primes congruent to 3 mod 4
    ///
    /// Primality itself is not re-checked here.
    pub fn new(p: &BigUint, q: &BigUint) -> Result<Self> {
        let three = BigUint::from(3u32);
        if p % 4u32 != three || q % 4u32 != three {
            return Err(Error::InvalidKeyFormat("Rabin primes must be congruent to 3 mod 4"));
        }
        if p == q {
            return Err(Error::InvalidKeyFormat("Rabin primes must be distinct"));
        }
        Ok(RabinSecretKey {
            p: p.to_bytes_be(),
            q: q.to_bytes_be(),
        })
    }

    /// Parses both primes from decimal text
    pub fn from_decimal(p: &str, q: &str) -> Result<Self> {
        Self::new(
            &parse_decimal(p, "Rabin prime p is not a decimal integer")?,
            &parse_decimal(q, "Rabin prime q is not a decimal integer")?,
        )
    }

    /// First prime
    pub fn p(&self) -> BigUint {
        BigUint::from_bytes_be(&self.p)
    }

    /// Second prime
    pub fn q(&self) -> BigUint {
        BigUint::from_bytes_be(&self.q)
    }

    /// The matching public key
    pub fn public_key(&self) -> RabinPublicKey {
        RabinPublicKey {
            n: self.p() * self.q(),
        }
    }
}

impl core::fmt::Debug for RabinSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RabinSecretKey([REDACTED])")
    }
}

/// One of the four square roots produced by decryption
///
/// `is_valid` is a heuristic: it says the root decodes to printable Latin
/// or Cyrillic text, which the real plaintext usually does. It proves
/// nothing about which root was encrypted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RabinCandidate {
    /// The root in decimal
    pub value: String,
    /// The root's big-endian bytes read as lossy UTF-8
    pub text: String,
    /// Whether `text` looks like human text
    pub is_valid: bool,
    /// 1-based position among the four roots
    pub label: usize,
}

impl RabinCandidate {
    /// Builds the record for `root` at 1-based position `label`
    pub fn from_root(root: &BigUint, label: usize) -> Self {
        let text = bytes_to_text(root);
        RabinCandidate {
            value: root.to_string(),
            is_valid: looks_like_text(&text),
            text,
            label,
        }
    }
}

/// Key report in the decimal transport form
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RabinKeyReport {
    /// Secret prime p
    pub p: String,
    /// Secret prime q
    pub q: String,
    /// Public modulus
    pub n: String,
}

fn parse_decimal(text: &str, reason: &'static str) -> Result<BigUint> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidKeyFormat(reason));
    }
    digits
        .parse::<BigUint>()
        .map_err(|_| Error::InvalidKeyFormat(reason))
}

fn bytes_to_text(root: &BigUint) -> String {
    if root.is_zero() {
        return String::new();
    }
    String::from_utf8_lossy(&root.to_bytes_be()).into_owned()
}

fn looks_like_text(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(c,
            ' '..='~' | '\n' | '\r' | '\u{0410}'..='\u{044F}' | '\u{0401}' | '\u{0451}')
    })
}

/// Generates two distinct `bits`-bit primes congruent to 3 mod 4
pub fn keypair_with_bits<R: CryptoRng + RngCore>(
    bits: usize,
    rng: &mut R,
) -> Result<(RabinPublicKey, RabinSecretKey)> {
    if bits < RABIN_MIN_PRIME_BITS {
        return Err(Error::Api(cryptolab_api::Error::InvalidParameter {
            context: "Rabin key generation",
            message: format!("primes need at least {} bits", RABIN_MIN_PRIME_BITS),
        }));
    }

    let p = generate_large_prime(bits, true, rng)?;
    let mut q = generate_large_prime(bits, true, rng)?;
    let mut redraws = 0;
    while q == p {
        if redraws == RABIN_DISTINCT_PRIME_ATTEMPTS {
            return Err(Error::Api(cryptolab_api::Error::PrimalityExhausted {
                context: "Rabin key generation",
                attempts: RABIN_DISTINCT_PRIME_ATTEMPTS,
            }));
        }
        q = generate_large_prime(bits, true, rng)?;
        redraws += 1;
    }

    let sk = RabinSecretKey::new(&p, &q)?;
    Ok((sk.public_key(), sk))
}

/// c = m² mod n; fails with `MessageTooLarge` unless m < n
pub fn encrypt_integer(pk: &RabinPublicKey, m: &BigUint) -> Result<BigUint> {
    if m >= &pk.n {
        return Err(Error::MessageTooLarge(
            "message integer must be below the modulus; generate larger keys",
        ));
    }
    Ok((m * m) % &pk.n)
}

/// The four square roots of `c` modulo n, in the order r, n-r, s, n-s
pub fn square_roots(sk: &RabinSecretKey, c: &BigUint) -> Result<[BigUint; RABIN_CANDIDATES]> {
    let (p, q) = (sk.p(), sk.q());
    let n = &p * &q;
    if c >= &n {
        return Err(Error::InvalidCiphertextFormat("ciphertext is not reduced modulo n"));
    }

    let mp = sqrt_mod(c, &p)?
        .ok_or(Error::InvalidCiphertextFormat("ciphertext is not a square modulo p"))?;
    let mq = sqrt_mod(c, &q)?
        .ok_or(Error::InvalidCiphertextFormat("ciphertext is not a square modulo q"))?;

    let signed = |v: &BigUint| BigInt::from_biguint(Sign::Plus, v.clone());
    let (_, yp, yq) = extended_gcd(&signed(&p), &signed(&q));

    // yp·p ≡ 1 (mod q) and yq·q ≡ 1 (mod p)
    let a = &yp * signed(&p) * signed(&mq);
    let b = &yq * signed(&q) * signed(&mp);
    let r = modulo(&(&a + &b), &n)?;
    let s = modulo(&(&a - &b), &n)?;
    let minus_r = modulo(&(signed(&n) - signed(&r)), &n)?;
    let minus_s = modulo(&(signed(&n) - signed(&s)), &n)?;

    Ok([r, minus_r, s, minus_s])
}

/// Decrypts into the four labelled candidate records
pub fn decrypt_candidates(
    sk: &RabinSecretKey,
    c: &BigUint,
) -> Result<[RabinCandidate; RABIN_CANDIDATES]> {
    let [r1, r2, r3, r4] = square_roots(sk, c)?;
    Ok([
        RabinCandidate::from_root(&r1, 1),
        RabinCandidate::from_root(&r2, 2),
        RabinCandidate::from_root(&r3, 3),
        RabinCandidate::from_root(&r4, 4),
    ])
}

/// Fresh key pair with primes of `bits` bits, reported as decimal strings
pub fn generate_keys<R: CryptoRng + RngCore>(bits: usize, rng: &mut R) -> Result<RabinKeyReport> {
    let (pk, sk) = keypair_with_bits(bits, rng)?;
    Ok(RabinKeyReport {
        p: sk.p().to_string(),
        q: sk.q().to_string(),
        n: pk.n.to_string(),
    })
}

/// Encrypts the UTF-8 bytes of `plaintext` under the decimal modulus `n`
pub fn encrypt_text(plaintext: &str, n: &str) -> Result<String> {
    let pk = RabinPublicKey::from_decimal(n)?;
    let m = BigUint::from_bytes_be(plaintext.as_bytes());
    Ok(encrypt_integer(&pk, &m)?.to_string())
}

/// Decrypts a decimal ciphertext with the decimal primes `p` and `q`
pub fn decrypt_text(ciphertext: &str, p: &str, q: &str) -> Result<[RabinCandidate; RABIN_CANDIDATES]> {
    let sk = RabinSecretKey::from_decimal(p, q)?;
    let digits = ciphertext.trim();
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidCiphertextFormat("Rabin ciphertext must be a decimal integer"));
    }
    let c = digits
        .parse::<BigUint>()
        .map_err(|_| Error::InvalidCiphertextFormat("Rabin ciphertext must be a decimal integer"))?;
    decrypt_candidates(&sk, &c)
}

/// Rabin over the big-endian integer encoding of the plaintext bytes
///
/// Leading zero bytes of a plaintext do not survive the integer encoding.
pub struct Rabin;

impl Pke for Rabin {
    type PublicKey = RabinPublicKey;
    type SecretKey = RabinSecretKey;
    type Ciphertext = BigUint;
    type Plaintext = [RabinCandidate; RABIN_CANDIDATES];

    fn name() -> &'static str {
        "Rabin"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> cryptolab_api::Result<(Self::PublicKey, Self::SecretKey)> {
        Ok(keypair_with_bits(RABIN_DEFAULT_PRIME_BITS, rng)?)
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        _rng: &mut R,
    ) -> cryptolab_api::Result<Self::Ciphertext> {
        Ok(encrypt_integer(pk_recipient, &BigUint::from_bytes_be(plaintext))?)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> cryptolab_api::Result<Self::Plaintext> {
        Ok(decrypt_candidates(sk_recipient, ciphertext)?)
    }
}

//! GOST R 34.10-2012 signatures over the 512-bit TC26 curve (parameter set A)
//!
//! Signing, for message hash e (Streebog-512, read big-endian, reduced mod q,
//! replaced by 1 when zero) and secret d:
//!
//! 1. draw k in [1, q-1] and compute R = k·G
//! 2. r = R.x mod q, s = (k·e + r·d) mod q; redraw k if either is 0
//!
//! Verification recomputes R = z1·G + z2·Q with v = e⁻¹, z1 = s·v and
//! z2 = -r·v (all mod q), and accepts when R.x mod q = r.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_algorithms::ec::gost512a;
use cryptolab_algorithms::hash::{HashFunction, Streebog512};
use cryptolab_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use cryptolab_common::math_common::to_fixed_be_bytes;
use cryptolab_common::{mod_inverse, CurveParams, Point};
use cryptolab_params::traditional::ecgost::{GOST512A_SCALAR_SIZE, SIGN_MAX_ATTEMPTS};

use crate::error::Error;

const ALGORITHM: &str = "GOST R 34.10-2012";

/// GOST R 34.10-2012 with Streebog-512
pub struct Gost3410;

/// Public point Q = d·G
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gost3410PublicKey {
    point: Point,
}

/// Secret scalar d, held as 64 big-endian bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gost3410SecretKey {
    bytes: Vec<u8>,
}

/// Signature pair (r, s), both in [1, q-1]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gost3410Signature {
    r: BigUint,
    s: BigUint,
}

/// Public key coordinates as upper-case hex
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKeyHex {
    /// x-coordinate
    pub x: String,
    /// y-coordinate
    pub y: String,
}

/// Key pair as produced by [`generate_key_pair`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyPairHex {
    /// Secret scalar
    #[cfg_attr(feature = "serde", serde(rename = "privateKey"))]
    pub private_key: String,
    /// Public point
    #[cfg_attr(feature = "serde", serde(rename = "publicKey"))]
    pub public_key: PublicKeyHex,
}

/// Signature pair as upper-case hex
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureHex {
    /// r component
    pub r: String,
    /// s component
    pub s: String,
}

fn upper_hex(n: &BigUint) -> String {
    format!("{:X}", n)
}

fn parse_hex(text: &str) -> Option<BigUint> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    BigUint::from_str_radix(digits, 16).ok()
}

impl Gost3410PublicKey {
    /// Wraps a point after checking it lies on the curve and is not the identity
    pub fn new(point: Point) -> ApiResult<Self> {
        let curve = gost512a::curve()?;
        curve.validate_point(&point, "GOST R 34.10 public key")?;
        if point.is_identity() {
            return Err(Error::InvalidKey("public key is the point at infinity".to_string()).into());
        }
        Ok(Gost3410PublicKey { point })
    }

    /// Parses hex coordinates
    pub fn from_hex(key: &PublicKeyHex) -> ApiResult<Self> {
        match (parse_hex(&key.x), parse_hex(&key.y)) {
            (Some(x), Some(y)) => Self::new(Point::new(x, y)),
            _ => Err(Error::InvalidKey("coordinates must be hexadecimal".to_string()).into()),
        }
    }

    /// Upper-case hex coordinates
    pub fn to_hex(&self) -> PublicKeyHex {
        match &self.point {
            Point::Affine { x, y } => PublicKeyHex {
                x: upper_hex(x),
                y: upper_hex(y),
            },
            // rejected by every constructor
            Point::Infinity => PublicKeyHex {
                x: String::new(),
                y: String::new(),
            },
        }
    }

    /// The public point
    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl Gost3410SecretKey {
    /// Accepts d in [1, q-1]
    pub fn new(d: &BigUint) -> ApiResult<Self> {
        let curve = gost512a::curve()?;
        if d.is_zero() || d >= &curve.order {
            return Err(Error::InvalidKey("private key must lie in [1, q-1]".to_string()).into());
        }
        Ok(Gost3410SecretKey {
            bytes: to_fixed_be_bytes(d, GOST512A_SCALAR_SIZE),
        })
    }

    /// Parses hex in either case
    pub fn from_hex(text: &str) -> ApiResult<Self> {
        let d = parse_hex(text)
            .ok_or_else(|| Error::InvalidKey("private key must be hexadecimal".to_string()))?;
        Self::new(&d)
    }

    /// Upper-case hex without leading zeros
    pub fn to_hex(&self) -> String {
        upper_hex(&self.scalar())
    }

    fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Q = d·G
    pub fn public_key(&self) -> ApiResult<Gost3410PublicKey> {
        let point = gost512a::curve()?.multiply_base(&self.scalar())?;
        Ok(Gost3410PublicKey { point })
    }
}

impl core::fmt::Debug for Gost3410SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Gost3410SecretKey([REDACTED])")
    }
}

impl Gost3410Signature {
    /// Builds a signature, rejecting components outside [1, q-1]
    pub fn new(r: BigUint, s: BigUint) -> ApiResult<Self> {
        let curve = gost512a::curve()?;
        check_range(&curve, &r, &s)?;
        Ok(Gost3410Signature { r, s })
    }

    /// Parses hex components
    pub fn from_hex(sig: &SignatureHex) -> ApiResult<Self> {
        match (parse_hex(&sig.r), parse_hex(&sig.s)) {
            (Some(r), Some(s)) => Self::new(r, s),
            _ => Err(Error::Encoding("r and s must be hexadecimal".to_string()).into()),
        }
    }

    /// Upper-case hex components
    pub fn to_hex(&self) -> SignatureHex {
        SignatureHex {
            r: upper_hex(&self.r),
            s: upper_hex(&self.s),
        }
    }

    /// r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// s component
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

fn check_range(curve: &CurveParams, r: &BigUint, s: &BigUint) -> ApiResult<()> {
    let in_range = |v: &BigUint| !v.is_zero() && v < &curve.order;
    cryptolab_api::error::validate::signature(
        in_range(r) && in_range(s),
        ALGORITHM,
        "r and s must lie in [1, q-1]",
    )
}

/// e = H(M) mod q, with 0 replaced by 1
pub fn message_representative(curve: &CurveParams, message: &[u8]) -> ApiResult<BigUint> {
    let digest = Streebog512::digest(message)?;
    let e = BigUint::from_bytes_be(digest.as_ref()) % &curve.order;
    if e.is_zero() {
        Ok(BigUint::from(1u8))
    } else {
        Ok(e)
    }
}

impl SignatureTrait for Gost3410 {
    type PublicKey = Gost3410PublicKey;
    type SecretKey = Gost3410SecretKey;
    type SignatureData = Gost3410Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let curve = gost512a::curve()?;
        let (d, q) = curve.generate_keypair(rng)?;
        Ok((Gost3410PublicKey { point: q }, Gost3410SecretKey::new(&d)?))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        let curve = gost512a::curve()?;
        let q = &curve.order;
        let e = message_representative(&curve, message)?;
        let d = secret_key.scalar();

        for _ in 0..SIGN_MAX_ATTEMPTS {
            let k = curve.random_scalar(rng)?;
            let point = curve.multiply_base(&k)?;
            let x = match point.x() {
                Some(x) => x,
                None => continue,
            };

            let r = x % q;
            if r.is_zero() {
                continue;
            }
            let s = (&k * &e + &r * &d) % q;
            if s.is_zero() {
                continue;
            }
            return Ok(Gost3410Signature { r, s });
        }

        Err(Error::SignatureGeneration {
            algorithm: ALGORITHM,
            details: format!("no usable nonce in {} draws", SIGN_MAX_ATTEMPTS),
        }
        .into())
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let curve = gost512a::curve()?;
        let q = &curve.order;
        check_range(&curve, &signature.r, &signature.s)?;
        curve.validate_point(&public_key.point, "GOST R 34.10 public key")?;

        let e = message_representative(&curve, message)?;
        let v = mod_inverse(&BigInt::from_biguint(Sign::Plus, e), q)?;
        let z1 = (&signature.s * &v) % q;
        let z2 = ((q - &signature.r) * &v) % q;

        let c = curve.add(
            &curve.multiply_base(&z1)?,
            &curve.multiply(&z2, &public_key.point)?,
        )?;
        let x = c.x().ok_or_else(|| -> ApiError {
            Error::Verification {
                algorithm: ALGORITHM,
                details: "recomputed point is the identity".to_string(),
            }
            .into()
        })?;

        let lhs = to_fixed_be_bytes(&(x % q), GOST512A_SCALAR_SIZE);
        let rhs = to_fixed_be_bytes(&signature.r, GOST512A_SCALAR_SIZE);
        if bool::from(lhs.as_slice().ct_eq(rhs.as_slice())) {
            Ok(())
        } else {
            Err(Error::Verification {
                algorithm: ALGORITHM,
                details: "R.x mod q does not match r".to_string(),
            }
            .into())
        }
    }
}

/// Fresh key pair in upper-case hex
pub fn generate_key_pair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<KeyPairHex> {
    let (pk, sk) = Gost3410::keypair(rng)?;
    Ok(KeyPairHex {
        private_key: sk.to_hex(),
        public_key: pk.to_hex(),
    })
}

/// Signs the UTF-8 bytes of `message` with a hex private key
pub fn sign_text<R: CryptoRng + RngCore>(
    message: &str,
    private_key: &str,
    rng: &mut R,
) -> ApiResult<SignatureHex> {
    let sk = Gost3410SecretKey::from_hex(private_key)?;
    Ok(Gost3410::sign(message.as_bytes(), &sk, rng)?.to_hex())
}

/// True iff the signature is valid; malformed keys or signatures give `false`
pub fn verify_text(message: &str, signature: &SignatureHex, public_key: &PublicKeyHex) -> bool {
    let checked = Gost3410PublicKey::from_hex(public_key).and_then(|pk| {
        let sig = Gost3410Signature::from_hex(signature)?;
        Gost3410::verify(message.as_bytes(), &sig, &pk)
    });
    checked.is_ok()
}

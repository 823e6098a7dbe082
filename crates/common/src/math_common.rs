//! Common mathematical operations for cryptographic algorithms
//!
//! Arbitrary-precision modular arithmetic over `num-bigint` integers.
//! Everything that needs randomness takes the caller's RNG and every search
//! loop is bounded by a budget from `cryptolab-params`.

use alloc::format;
use alloc::string::ToString;
use alloc::vec;

use cryptolab_api::{Error, Result};
use cryptolab_params::traditional::rabin::{MILLER_RABIN_ROUNDS, PRIME_SEARCH_MAX_ATTEMPTS};
use cryptolab_params::utils::random::RANDOM_RANGE_MAX_ATTEMPTS;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Primes used to discard candidates before running Miller-Rabin
const SMALL_PRIMES: [u32; 53] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241,
];

fn zero_modulus(context: &'static str) -> Error {
    Error::InvalidParameter {
        context,
        message: "modulus must be positive".to_string(),
    }
}

/// Reduce `a` into `[0, m)`, also for negative `a`
pub fn modulo(a: &BigInt, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(zero_modulus("modulo"));
    }
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    // mod_floor takes the sign of the divisor, so the result is never negative
    let r = a.mod_floor(&m);
    Ok(r.magnitude().clone())
}

/// Modular exponentiation by square-and-multiply
///
/// A negative exponent raises the modular inverse of the base instead.
/// Returns 0 when `m == 1`.
pub fn mod_pow(base: &BigInt, exp: &BigInt, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(zero_modulus("mod_pow"));
    }
    if m.is_one() {
        return Ok(BigUint::zero());
    }

    let base = if exp.is_negative() {
        mod_inverse(base, m)?
    } else {
        modulo(base, m)?
    };
    Ok(pow_unsigned(&base, exp.magnitude(), m))
}

/// Square-and-multiply on already reduced operands
fn pow_unsigned(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    let mut square = base % m;

    for i in 0..exp.bits() {
        if exp.bit(i) {
            result = (&result * &square) % m;
        }
        square = (&square * &square) % m;
    }

    result % m
}

/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = core::mem::replace(&mut t, next_t);
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Modular inverse of `a` modulo `m`
///
/// Fails with `Error::NoInverse` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigInt, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(zero_modulus("mod_inverse"));
    }
    let reduced = BigInt::from_biguint(Sign::Plus, modulo(a, m)?);
    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());

    let (g, x, _) = extended_gcd(&reduced, &modulus);
    if !g.is_one() {
        return Err(Error::NoInverse {
            context: "mod_inverse",
            message: format!("gcd({}, {}) = {}", a, m, g),
        });
    }
    modulo(&x, m)
}

/// Square root modulo a prime `p ≡ 3 (mod 4)`
///
/// Returns `Ok(None)` when `a` is a quadratic non-residue.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> Result<Option<BigUint>> {
    if p % 4u32 != BigUint::from(3u32) {
        return Err(Error::InvalidParameter {
            context: "sqrt_mod",
            message: "closed-form square roots need p ≡ 3 (mod 4)".to_string(),
        });
    }
    let a = a % p;
    let exp = (p + 1u32) >> 2;
    let r = pow_unsigned(&a, &exp, p);

    if (&r * &r) % p == a {
        Ok(Some(r))
    } else {
        Ok(None)
    }
}

/// Uniform integer in `[0, bound)` by rejection sampling
///
/// Draws just enough random bytes to cover `bound`, masks the excess high
/// bits and retries when the draw lands outside the range.
pub fn random_below<R: CryptoRng + RngCore>(bound: &BigUint, rng: &mut R) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(Error::InvalidParameter {
            context: "random_below",
            message: "empty range".to_string(),
        });
    }
    let bits = bound.bits();
    let byte_len = bits.div_ceil(8) as usize;
    let excess = (byte_len as u64) * 8 - bits;
    let mut buf = vec![0u8; byte_len];

    for _ in 0..RANDOM_RANGE_MAX_ATTEMPTS {
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::RandomGeneration {
                context: "random_below",
                message: e.to_string(),
            })?;
        buf[0] &= 0xff >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            buf.zeroize();
            return Ok(candidate);
        }
    }
    buf.zeroize();

    Err(Error::RandomGeneration {
        context: "random_below",
        message: format!("no sample below bound in {} draws", RANDOM_RANGE_MAX_ATTEMPTS),
    })
}

/// Uniform integer in the inclusive range `[min, max]`
pub fn random_range<R: CryptoRng + RngCore>(
    min: &BigUint,
    max: &BigUint,
    rng: &mut R,
) -> Result<BigUint> {
    if min > max {
        return Err(Error::InvalidParameter {
            context: "random_range",
            message: format!("min {} exceeds max {}", min, max),
        });
    }
    let span = max - min + 1u32;
    Ok(min + random_below(&span, rng)?)
}

/// Miller-Rabin probabilistic primality test
///
/// Witnesses are drawn uniformly from `[2, n-2]`. Small candidates are
/// settled by trial division.
pub fn is_probable_prime<R: CryptoRng + RngCore>(
    n: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    let two = BigUint::from(2u32);
    if n < &two {
        return Ok(false);
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if n == &p {
            return Ok(true);
        }
        if (n % &p).is_zero() {
            return Ok(false);
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let witness_max = n - 2u32;

    'witness: for _ in 0..rounds {
        let a = random_range(&two, &witness_max, rng)?;
        let mut x = pow_unsigned(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }

    Ok(true)
}

/// Random prime of exactly `bits` bits, congruent to 3 mod 4 when asked
///
/// Uses the default candidate budget; see [`generate_large_prime_with_budget`].
pub fn generate_large_prime<R: CryptoRng + RngCore>(
    bits: usize,
    three_mod_four: bool,
    rng: &mut R,
) -> Result<BigUint> {
    generate_large_prime_with_budget(bits, three_mod_four, PRIME_SEARCH_MAX_ATTEMPTS, rng)
}

/// Prime search that gives up after `max_attempts` candidates
pub fn generate_large_prime_with_budget<R: CryptoRng + RngCore>(
    bits: usize,
    three_mod_four: bool,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BigUint> {
    if bits < 2 {
        return Err(Error::InvalidParameter {
            context: "generate_large_prime",
            message: format!("cannot build a {}-bit prime", bits),
        });
    }
    let bits = bits as u64;
    let span = BigUint::one() << (bits - 1);

    for _ in 0..max_attempts {
        // top bit fixes the length, low bits fix the residue class
        let mut candidate = random_below(&span, rng)? | &span;
        candidate.set_bit(0, true);
        if three_mod_four {
            candidate.set_bit(1, true);
        }

        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng)? {
            return Ok(candidate);
        }
    }

    Err(Error::PrimalityExhausted {
        context: "generate_large_prime",
        attempts: max_attempts,
    })
}

/// Big-endian encoding left-padded with zeros to `len` bytes
///
/// Values wider than `len` keep their full encoding.
pub fn to_fixed_be_bytes(n: &BigUint, len: usize) -> alloc::vec::Vec<u8> {
    let raw = n.to_bytes_be();
    if raw.len() >= len {
        return raw;
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn ubig(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_modulo_is_non_negative() {
        assert_eq!(modulo(&big(-7), &ubig(5)).unwrap(), ubig(3));
        assert_eq!(modulo(&big(12), &ubig(5)).unwrap(), ubig(2));
        assert_eq!(modulo(&big(-10), &ubig(5)).unwrap(), ubig(0));
        assert!(modulo(&big(3), &ubig(0)).is_err());
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(&big(4), &big(13), &ubig(497)).unwrap(), ubig(445));
        assert_eq!(mod_pow(&big(2), &big(0), &ubig(7)).unwrap(), ubig(1));
        assert_eq!(mod_pow(&big(123), &big(45), &ubig(1)).unwrap(), ubig(0));
        // 3^-1 mod 7 = 5, so 3^-2 = 25 mod 7 = 4
        assert_eq!(mod_pow(&big(3), &big(-2), &ubig(7)).unwrap(), ubig(4));
    }

    #[test]
    fn test_mod_pow_negative_exponent_without_inverse() {
        assert!(matches!(
            mod_pow(&big(2), &big(-1), &ubig(8)),
            Err(Error::NoInverse { .. })
        ));
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(&big(3), &ubig(11)).unwrap(), ubig(4));
        assert_eq!(mod_inverse(&big(-3), &ubig(11)).unwrap(), ubig(7));
        assert_eq!(mod_inverse(&big(17), &ubig(3120)).unwrap(), ubig(2753));
    }

    #[test]
    fn test_mod_inverse_fails_without_coprimality() {
        assert!(matches!(
            mod_inverse(&big(4), &ubig(8)),
            Err(Error::NoInverse { .. })
        ));
        assert!(matches!(
            mod_inverse(&big(0), &ubig(13)),
            Err(Error::NoInverse { .. })
        ));
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let (a, b) = (big(240), big(46));
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(g, big(2));
        assert_eq!(&a * &x + &b * &y, g);
    }

    #[test]
    fn test_sqrt_mod() {
        let p = ubig(23);
        // 23 ≡ 3 mod 4; 2 is a residue (5^2 = 25 ≡ 2)
        let r = sqrt_mod(&ubig(2), &p).unwrap().unwrap();
        assert_eq!((&r * &r) % &p, ubig(2));
        // 5 is a non-residue mod 23
        assert_eq!(sqrt_mod(&ubig(5), &p).unwrap(), None);
        assert!(sqrt_mod(&ubig(2), &ubig(13)).is_err());
    }

    #[test]
    fn test_random_range_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let (min, max) = (ubig(10), ubig(13));
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = random_range(&min, &max, &mut rng).unwrap();
            assert!(v >= min && v <= max);
            let idx: usize = (v - &min).to_u64_digits().first().copied().unwrap_or(0) as usize;
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!(random_range(&max, &min, &mut rng).is_err());
    }

    #[test]
    fn test_random_below_large_bound() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let bound = (BigUint::one() << 130u32) + 5u32;
        for _ in 0..50 {
            assert!(random_below(&bound, &mut rng).unwrap() < bound);
        }
    }

    #[test]
    fn test_is_probable_prime() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for p in [2u64, 3, 5, 241, 257, 7919, 1_000_000_007] {
            assert!(is_probable_prime(&ubig(p), 10, &mut rng).unwrap(), "{}", p);
        }
        // 561 and 41041 are Carmichael numbers
        for c in [0u64, 1, 4, 561, 41041, 1_000_000_007 * 3] {
            assert!(!is_probable_prime(&ubig(c), 10, &mut rng).unwrap(), "{}", c);
        }
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(is_probable_prime(&m127, 10, &mut rng).unwrap());
    }

    #[test]
    fn test_generate_large_prime_shape() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let p = generate_large_prime(96, true, &mut rng).unwrap();
        assert_eq!(p.bits(), 96);
        assert_eq!(&p % 4u32, ubig(3));
        assert!(is_probable_prime(&p, 20, &mut rng).unwrap());
    }

    #[test]
    fn test_generate_large_prime_budget_exhaustion() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert!(matches!(
            generate_large_prime_with_budget(64, true, 0, &mut rng),
            Err(Error::PrimalityExhausted { attempts: 0, .. })
        ));
        assert!(generate_large_prime(1, false, &mut rng).is_err());
    }

    #[test]
    fn test_to_fixed_be_bytes() {
        assert_eq!(to_fixed_be_bytes(&ubig(0x0102), 4), vec![0, 0, 1, 2]);
        assert_eq!(to_fixed_be_bytes(&ubig(0x010203), 2), vec![1, 2, 3]);
    }
}

//! Common elliptic curve operations
//!
//! Group law for short Weierstrass curves `y^2 = x^3 + ax + b (mod p)` over
//! arbitrary-precision integers. Points are exposed in affine form; scalar
//! multiplication runs in Jacobian coordinates and converts back once.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use cryptolab_api::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, One, Signed, Zero};
use rand::{CryptoRng, RngCore};

use crate::math_common::{mod_inverse, random_range};

/// Point on an elliptic curve
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The point at infinity (group identity)
    Infinity,
    /// An affine point
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Create a new affine point (x, y)
    ///
    /// No curve check happens here; see [`CurveParams::validate_point`].
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// The identity element
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Check if this is the point at infinity
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

/// Renders `(x, y)` in decimal, or `(null, null)` for the identity
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "(null, null)"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Jacobian coordinates: x = X/Z^2, y = Y/Z^3, identity when Z = 0
#[derive(Clone)]
struct Jacobian {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Jacobian {
    fn infinity() -> Self {
        Jacobian {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

/// Elliptic curve parameters in short Weierstrass form: y^2 = x^3 + ax + b
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name
    pub name: &'static str,

    /// The prime field modulus
    pub p: BigUint,

    /// The 'a' coefficient
    pub a: BigUint,

    /// The 'b' coefficient
    pub b: BigUint,

    /// The order of the base point
    pub order: BigUint,

    /// Generator point
    pub generator: Point,
}

fn parse_hex(name: &'static str, value: &str) -> Result<BigUint> {
    BigUint::from_str_radix(value, 16).map_err(|_| Error::InvalidParameter {
        context: "curve parameters",
        message: format!("{} is not hexadecimal", name),
    })
}

impl CurveParams {
    /// Build a curve from hex-encoded domain parameters
    ///
    /// Fails unless the generator lies on the curve.
    pub fn from_hex(
        name: &'static str,
        p: &str,
        a: &str,
        b: &str,
        order: &str,
        gx: &str,
        gy: &str,
    ) -> Result<Self> {
        let curve = CurveParams {
            name,
            p: parse_hex("p", p)?,
            a: parse_hex("a", a)?,
            b: parse_hex("b", b)?,
            order: parse_hex("order", order)?,
            generator: Point::new(parse_hex("gx", gx)?, parse_hex("gy", gy)?),
        };
        curve.validate_point(&curve.generator, "curve parameters")?;
        Ok(curve)
    }

    fn fadd(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    fn fsub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // operands are already reduced
        ((a + &self.p) - b) % &self.p
    }

    fn fmul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    fn finv(&self, a: &BigUint) -> Result<BigUint> {
        mod_inverse(&BigInt::from_biguint(Sign::Plus, a.clone()), &self.p)
    }

    /// Check y^2 ≡ x^3 + ax + b (mod p); the identity always passes
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                let lhs = self.fmul(y, y);
                let x3 = self.fmul(&self.fmul(x, x), x);
                let rhs = self.fadd(&self.fadd(&x3, &self.fmul(&self.a, x)), &self.b);
                lhs == rhs
            }
        }
    }

    /// Fail with `Error::PointNotOnCurve` unless `point` is on the curve
    pub fn validate_point(&self, point: &Point, context: &'static str) -> Result<()> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(Error::PointNotOnCurve {
                context,
                message: format!("{} is not on {}", point, self.name),
            })
        }
    }

    /// Right-hand side x^3 + ax + b for a candidate x-coordinate
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let x = x % &self.p;
        let x3 = self.fmul(&self.fmul(&x, &x), &x);
        self.fadd(&self.fadd(&x3, &self.fmul(&self.a, &x)), &self.b)
    }

    /// Additive inverse: (x, -y)
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x.clone(), self.fsub(&BigUint::zero(), y)),
        }
    }

    /// Affine point addition
    pub fn add(&self, p1: &Point, p2: &Point) -> Result<Point> {
        let (x1, y1, x2, y2) = match (p1, p2) {
            (Point::Infinity, _) => return Ok(p2.clone()),
            (_, Point::Infinity) => return Ok(p1.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            return if y1 == y2 {
                self.double(p1)
            } else {
                Ok(Point::Infinity)
            };
        }

        let lambda = self.fmul(&self.fsub(y2, y1), &self.finv(&self.fsub(x2, x1))?);
        let x3 = self.fsub(&self.fsub(&self.fmul(&lambda, &lambda), x1), x2);
        let y3 = self.fsub(&self.fmul(&lambda, &self.fsub(x1, &x3)), y1);
        Ok(Point::new(x3, y3))
    }

    /// Affine point doubling; a point with y = 0 doubles to the identity
    pub fn double(&self, point: &Point) -> Result<Point> {
        let (x, y) = match point {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        let three_x2 = self.fmul(&BigUint::from(3u32), &self.fmul(x, x));
        let numerator = self.fadd(&three_x2, &self.a);
        let denominator = self.fadd(y, y);
        let lambda = self.fmul(&numerator, &self.finv(&denominator)?);

        let x3 = self.fsub(&self.fmul(&lambda, &lambda), &self.fadd(x, x));
        let y3 = self.fsub(&self.fmul(&lambda, &self.fsub(x, &x3)), y);
        Ok(Point::new(x3, y3))
    }

    fn to_jacobian(&self, point: &Point) -> Jacobian {
        match point {
            Point::Infinity => Jacobian::infinity(),
            Point::Affine { x, y } => Jacobian {
                x: x % &self.p,
                y: y % &self.p,
                z: BigUint::one(),
            },
        }
    }

    fn to_affine(&self, point: &Jacobian) -> Result<Point> {
        if point.is_infinity() {
            return Ok(Point::Infinity);
        }
        let z_inv = self.finv(&point.z)?;
        let z_inv2 = self.fmul(&z_inv, &z_inv);
        let z_inv3 = self.fmul(&z_inv2, &z_inv);
        Ok(Point::new(
            self.fmul(&point.x, &z_inv2),
            self.fmul(&point.y, &z_inv3),
        ))
    }

    fn jacobian_double(&self, pt: &Jacobian) -> Jacobian {
        if pt.is_infinity() || pt.y.is_zero() {
            return Jacobian::infinity();
        }
        let y2 = self.fmul(&pt.y, &pt.y);
        let s = self.fmul(&BigUint::from(4u32), &self.fmul(&pt.x, &y2));
        let z2 = self.fmul(&pt.z, &pt.z);
        let z4 = self.fmul(&z2, &z2);
        let m = self.fadd(
            &self.fmul(&BigUint::from(3u32), &self.fmul(&pt.x, &pt.x)),
            &self.fmul(&self.a, &z4),
        );

        let x3 = self.fsub(&self.fmul(&m, &m), &self.fadd(&s, &s));
        let y4_8 = self.fmul(&BigUint::from(8u32), &self.fmul(&y2, &y2));
        let y3 = self.fsub(&self.fmul(&m, &self.fsub(&s, &x3)), &y4_8);
        let z3 = self.fmul(&self.fadd(&pt.y, &pt.y), &pt.z);
        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn jacobian_add(&self, p1: &Jacobian, p2: &Jacobian) -> Jacobian {
        if p1.is_infinity() {
            return p2.clone();
        }
        if p2.is_infinity() {
            return p1.clone();
        }

        let z1z1 = self.fmul(&p1.z, &p1.z);
        let z2z2 = self.fmul(&p2.z, &p2.z);
        let u1 = self.fmul(&p1.x, &z2z2);
        let u2 = self.fmul(&p2.x, &z1z1);
        let s1 = self.fmul(&p1.y, &self.fmul(&z2z2, &p2.z));
        let s2 = self.fmul(&p2.y, &self.fmul(&z1z1, &p1.z));

        if u1 == u2 {
            return if s1 == s2 {
                self.jacobian_double(p1)
            } else {
                Jacobian::infinity()
            };
        }

        let h = self.fsub(&u2, &u1);
        let r = self.fsub(&s2, &s1);
        let h2 = self.fmul(&h, &h);
        let h3 = self.fmul(&h2, &h);
        let u1h2 = self.fmul(&u1, &h2);

        let x3 = self.fsub(&self.fsub(&self.fmul(&r, &r), &h3), &self.fadd(&u1h2, &u1h2));
        let y3 = self.fsub(&self.fmul(&r, &self.fsub(&u1h2, &x3)), &self.fmul(&s1, &h3));
        let z3 = self.fmul(&h, &self.fmul(&p1.z, &p2.z));
        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Scalar multiplication k·P by least-significant-bit-first double-and-add
    pub fn multiply(&self, k: &BigUint, point: &Point) -> Result<Point> {
        let mut result = Jacobian::infinity();
        let mut addend = self.to_jacobian(point);

        for i in 0..k.bits() {
            if k.bit(i) {
                result = self.jacobian_add(&result, &addend);
            }
            addend = self.jacobian_double(&addend);
        }

        self.to_affine(&result)
    }

    /// Scalar multiplication accepting a signed scalar
    ///
    /// A negative scalar multiplies by |k| and negates the result.
    pub fn multiply_signed(&self, k: &BigInt, point: &Point) -> Result<Point> {
        let product = self.multiply(k.magnitude(), point)?;
        if k.is_negative() {
            Ok(self.negate(&product))
        } else {
            Ok(product)
        }
    }

    /// k·G
    pub fn multiply_base(&self, k: &BigUint) -> Result<Point> {
        self.multiply(k, &self.generator)
    }

    /// Uniform scalar in [1, order - 1]
    pub fn random_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<BigUint> {
        random_range(&BigUint::one(), &(&self.order - 1u32), rng)
    }

    /// Fresh key pair (d, Q = d·G)
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(BigUint, Point)> {
        let d = self.random_scalar(rng)?;
        let q = self.multiply_base(&d)?;
        Ok((d, q))
    }

    /// Parse the `(x, y)` decimal form and check the point is on the curve
    ///
    /// `(null, null)` parses to the identity.
    pub fn parse_point(&self, text: &str) -> Result<Point> {
        let point = parse_point_text(text)?;
        self.validate_point(&point, "point parsing")?;
        Ok(point)
    }
}

fn parse_point_text(text: &str) -> Result<Point> {
    let malformed = |reason: &str| Error::InvalidParameter {
        context: "point parsing",
        message: format!("{}: {:?}", reason, text),
    };

    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| malformed("expected \"(x, y)\""))?;
    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| malformed("missing ',' between coordinates"))?;
    let (x, y) = (x.trim(), y.trim());

    if x == "null" && y == "null" {
        return Ok(Point::Infinity);
    }

    let coordinate = |s: &str| -> Result<BigUint> {
        let digits = s.strip_suffix('n').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return Err(malformed("coordinates must be decimal"));
        }
        BigUint::from_str_radix(digits, 10).map_err(|e| Error::InvalidParameter {
            context: "point parsing",
            message: e.to_string(),
        })
    };

    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

/// Decimal rendering of a point, as used in transport strings
pub fn format_point(point: &Point) -> String {
    point.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// y^2 = x^3 + 2x + 2 over F_17, a textbook curve of order 19
    fn toy_curve() -> CurveParams {
        CurveParams::from_hex("toy-17", "11", "2", "2", "13", "5", "1").unwrap()
    }

    fn pt(x: u32, y: u32) -> Point {
        Point::new(BigUint::from(x), BigUint::from(y))
    }

    #[test]
    fn test_toy_curve_group_law() {
        let curve = toy_curve();
        let g = curve.generator.clone();
        assert_eq!(curve.double(&g).unwrap(), pt(6, 3));
        assert_eq!(curve.add(&g, &pt(6, 3)).unwrap(), pt(10, 6));
        // 19·G is the identity
        assert!(curve
            .multiply(&BigUint::from(19u32), &g)
            .unwrap()
            .is_identity());
        assert_eq!(curve.multiply(&BigUint::from(18u32), &g).unwrap(), curve.negate(&g));
    }

    #[test]
    fn test_add_identity_and_inverse() {
        let curve = toy_curve();
        let g = curve.generator.clone();
        assert_eq!(curve.add(&Point::Infinity, &g).unwrap(), g);
        assert_eq!(curve.add(&g, &Point::Infinity).unwrap(), g);
        assert!(curve.add(&g, &curve.negate(&g)).unwrap().is_identity());
    }

    #[test]
    fn test_multiply_matches_repeated_addition() {
        let curve = toy_curve();
        let g = curve.generator.clone();
        let mut acc = Point::Infinity;
        for k in 0u32..25 {
            assert_eq!(curve.multiply(&BigUint::from(k), &g).unwrap(), acc, "k = {}", k);
            acc = curve.add(&acc, &g).unwrap();
        }
    }

    #[test]
    fn test_multiply_signed_normalizes_negative_scalars() {
        let curve = toy_curve();
        let g = curve.generator.clone();
        let minus_three = curve.multiply_signed(&BigInt::from(-3), &g).unwrap();
        let three = curve.multiply(&BigUint::from(3u32), &g).unwrap();
        assert_eq!(minus_three, curve.negate(&three));
    }

    #[test]
    fn test_is_on_curve() {
        let curve = toy_curve();
        assert!(curve.is_on_curve(&pt(5, 1)));
        assert!(curve.is_on_curve(&Point::Infinity));
        assert!(!curve.is_on_curve(&pt(5, 2)));
        assert!(!curve.is_on_curve(&pt(22, 1)));
        assert!(matches!(
            curve.validate_point(&pt(1, 1), "test"),
            Err(Error::PointNotOnCurve { .. })
        ));
    }

    #[test]
    fn test_point_text_roundtrip() {
        let curve = toy_curve();
        let g = curve.generator.clone();
        assert_eq!(g.to_string(), "(5, 1)");
        assert_eq!(curve.parse_point("(5, 1)").unwrap(), g);
        assert_eq!(curve.parse_point(" (5n, 1n) ").unwrap(), g);
        assert_eq!(curve.parse_point("(null, null)").unwrap(), Point::Infinity);
        assert_eq!(format_point(&Point::Infinity), "(null, null)");
    }

    #[test]
    fn test_parse_point_rejects_bad_input() {
        let curve = toy_curve();
        assert!(matches!(
            curve.parse_point("(5, 2)"),
            Err(Error::PointNotOnCurve { .. })
        ));
        for bad in ["5, 1", "(5 1)", "(-5, 1)", "(0x5, 1)", "(, 1)"] {
            assert!(matches!(
                curve.parse_point(bad),
                Err(Error::InvalidParameter { .. })
            ), "{}", bad);
        }
    }

    #[test]
    fn test_generate_keypair() {
        let curve = toy_curve();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..20 {
            let (d, q) = curve.generate_keypair(&mut rng).unwrap();
            assert!(d >= BigUint::one() && d < curve.order);
            assert!(curve.is_on_curve(&q));
            assert!(!q.is_identity());
        }
    }

    #[test]
    fn test_from_hex_rejects_off_curve_generator() {
        assert!(matches!(
            CurveParams::from_hex("bad", "11", "2", "2", "13", "5", "2"),
            Err(Error::PointNotOnCurve { .. })
        ));
    }
}

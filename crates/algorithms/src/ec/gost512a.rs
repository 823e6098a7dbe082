//! TC26 512-bit curve, parameter set A (GOST R 34.10-2012)

use cryptolab_api::Result;
use cryptolab_common::CurveParams;
use cryptolab_params::traditional::ecgost::{
    GOST512A_A, GOST512A_B, GOST512A_GX, GOST512A_GY, GOST512A_P, GOST512A_Q,
};

/// Curve name used in diagnostics
pub const NAME: &str = "id-tc26-gost-3410-12-512-paramSetA";

/// Builds the curve, checking that the base point satisfies the equation
pub fn curve() -> Result<CurveParams> {
    CurveParams::from_hex(
        NAME,
        GOST512A_P,
        GOST512A_A,
        GOST512A_B,
        GOST512A_Q,
        GOST512A_GX,
        GOST512A_GY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;

    #[test]
    fn test_generator_on_curve() {
        let c = curve().unwrap();
        assert!(c.is_on_curve(&c.generator));
        assert_eq!(c.p.bits(), 512);
        assert_eq!(&c.a + BigUint::from(3u8), c.p);
    }

    #[test]
    fn test_order_annihilates_generator() {
        let c = curve().unwrap();
        let q = c.multiply_base(&c.order).unwrap();
        assert!(q.is_identity());

        let minus_one = &c.order - BigUint::one();
        let neg = c.multiply_base(&minus_one).unwrap();
        assert_eq!(neg, c.negate(&c.generator));
    }
}

//! secp256k1 (SEC 2), used by EC-ElGamal

use cryptolab_api::Result;
use cryptolab_common::CurveParams;
use cryptolab_params::traditional::elgamal::{
    SECP256K1_A, SECP256K1_B, SECP256K1_GX, SECP256K1_GY, SECP256K1_N, SECP256K1_P,
};

/// Curve name used in diagnostics
pub const NAME: &str = "secp256k1";

/// Builds the curve, checking that the base point satisfies the equation
pub fn curve() -> Result<CurveParams> {
    CurveParams::from_hex(
        NAME,
        SECP256K1_P,
        SECP256K1_A,
        SECP256K1_B,
        SECP256K1_N,
        SECP256K1_GX,
        SECP256K1_GY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_double_generator() {
        let c = curve().unwrap();
        let two_g = c.double(&c.generator).unwrap();
        let expected = c
            .parse_point(
                "(89565891926547004231252920425935692360644145829622209833684329913297188986597, \
                 12158399299693830322967808612713398636155367887041628176798871954788371653930)",
            )
            .unwrap();
        assert_eq!(two_g, expected);
        assert_eq!(c.multiply_base(&BigUint::from(2u8)).unwrap(), expected);
    }

    #[test]
    fn test_order_annihilates_generator() {
        let c = curve().unwrap();
        assert!(c.multiply_base(&c.order).unwrap().is_identity());
    }
}

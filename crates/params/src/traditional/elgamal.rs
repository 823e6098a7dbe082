//! Domain parameters for EC-ElGamal over secp256k1

/// Field modulus p = 2^256 - 2^32 - 977
pub const SECP256K1_P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";

/// Curve coefficient a
pub const SECP256K1_A: &str = "0";

/// Curve coefficient b
pub const SECP256K1_B: &str = "7";

/// Group order n
pub const SECP256K1_N: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// Base point x-coordinate
pub const SECP256K1_GX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

/// Base point y-coordinate
pub const SECP256K1_GY: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Low-order byte values tried when mapping a message onto the curve
pub const ELGAMAL_ENCODING_OFFSETS: u32 = 256;

/// Bits reserved below the message for the encoding offset
pub const ELGAMAL_OFFSET_BITS: usize = 8;

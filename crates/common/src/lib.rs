//! Common implementations and shared functionality for cryptolab
//!
//! This crate provides the arbitrary-precision modular toolkit and the
//! short-Weierstrass group engine used by the public-key schemes.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ec_common;
pub mod math_common;

pub use ec_common::{CurveParams, Point};
pub use math_common::{
    extended_gcd, generate_large_prime, is_probable_prime, mod_inverse, mod_pow, modulo,
    random_below, random_range, sqrt_mod,
};

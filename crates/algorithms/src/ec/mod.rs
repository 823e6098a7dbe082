//! Named elliptic curves
//!
//! The group law lives in `cryptolab_common::ec_common`; this module only
//! binds domain parameters to it.

pub mod gost512a;
pub mod secp256k1;

pub use cryptolab_common::{CurveParams, Point};

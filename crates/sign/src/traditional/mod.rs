//! Elliptic-curve signature schemes

pub mod gost3410;

pub use gost3410::{Gost3410, Gost3410PublicKey, Gost3410SecretKey, Gost3410Signature};

//! Digital Signature Schemes
//!
//! GOST R 34.10-2012 over the 512-bit TC26 curve with Streebog-512 as the
//! message hash. The typed interface implements
//! [`cryptolab_api::Signature`]; the text interface exchanges keys and
//! signatures as upper-case hex.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traditional;

pub use error::{Error, Result};
pub use traditional::gost3410::{
    Gost3410, Gost3410PublicKey, Gost3410SecretKey, Gost3410Signature,
};

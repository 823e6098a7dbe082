//! # cryptolab
//!
//! A teaching library of classical and post-classical cryptography written
//! from the ground up: GOST 28147-89 and STB 34.101.31 block ciphers,
//! Streebog and SHA-1 hashes, and the Rabin, McEliece, EC-ElGamal and
//! GOST R 34.10-2012 public-key schemes.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! cryptolab = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `algorithms`: block ciphers, hashes, curves and the Hamming code
//! - `symmetric`: GOST/STB text encryption
//! - `sign`: GOST R 34.10-2012 signatures
//! - `pke`: Rabin, McEliece and EC-ElGamal
//! - `serde`: serialization of the transport types
//! - `full` (default): everything above
//!
//! ## Crate Structure
//!
//! - [`cryptolab-api`]: error taxonomy and scheme traits
//! - [`cryptolab-common`]: big-integer arithmetic and the curve engine
//! - [`cryptolab-params`]: constants and curve parameters
//! - [`cryptolab-algorithms`]: primitives
//! - [`cryptolab-symmetric`]: symmetric encryption
//! - [`cryptolab-sign`]: digital signatures
//! - [`cryptolab-pke`]: public-key encryption

#![cfg_attr(not(feature = "std"), no_std)]

pub use cryptolab_api as api;
pub use cryptolab_common as common;
pub use cryptolab_params as params;

#[cfg(feature = "algorithms")]
pub use cryptolab_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use cryptolab_symmetric as symmetric;

#[cfg(feature = "sign")]
pub use cryptolab_sign as sign;

#[cfg(feature = "pke")]
pub use cryptolab_pke as pke;

/// Common imports for cryptolab users
pub mod prelude {
    pub use crate::api::{Error, Result, ResultExt};

    pub use crate::api::{Pke, Signature, SymmetricCipher};

    pub use crate::common::{CurveParams, Point};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{hash_hex, HashFunction, HashVariant};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{GostCipher, StbCipher, SymmetricKey};

    #[cfg(feature = "sign")]
    pub use crate::sign::Gost3410;

    #[cfg(feature = "pke")]
    pub use crate::pke::{ElGamal, McEliece, Rabin};
}

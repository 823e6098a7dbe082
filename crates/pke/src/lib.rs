//! Public key encryption schemes for cryptolab
//!
//! * [`rabin`]: modular squaring with four-way CRT root recovery
//! * [`mceliece`]: the (7,4) Hamming-code McEliece system
//! * [`elgamal`]: EC-ElGamal over secp256k1
//!
//! Each scheme has a typed layer implementing [`cryptolab_api::Pke`] and a
//! string layer that speaks the decimal, hex and `(x, y)` transport forms.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod elgamal;
pub mod error;
pub mod mceliece;
pub mod rabin;

// Re-export key items
pub use elgamal::{ElGamal, ElGamalCiphertext, ElGamalPublicKey, ElGamalSecretKey};
pub use error::{Error, Result};
pub use mceliece::{McEliece, McEliecePublicKey, McElieceSecretKey};
pub use rabin::{Rabin, RabinCandidate, RabinPublicKey, RabinSecretKey};

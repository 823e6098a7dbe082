//! Cryptographic primitives for cryptolab
//!
//! Block ciphers (GOST 28147-89, STB 34.101.31) and their modes, the
//! Streebog and SHA-1 hash functions, the named curves used by the
//! public-key schemes, and GF(2) linear algebra for code-based encryption.
//!
//! None of these primitives are constant-time. They reproduce the
//! reference behaviour bit for bit and are meant for study.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

pub mod types;
pub use types::{Digest, Nonce};

// Block cipher implementations
pub mod block;
pub use block::{BlockCipher, BlockKey, Ecb, Gamma, Gost28147, Stb};

// Hash function implementations
pub mod hash;
pub use hash::{hash_hex, HashFunction, HashVariant, Sha1, Streebog256, Streebog512};

// Elliptic Curve primitives
pub mod ec;

// Code-based primitives
pub mod code;
pub use code::{BinaryMatrix, HammingCode};

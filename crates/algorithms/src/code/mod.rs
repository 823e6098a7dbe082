//! Code-based primitives
//!
//! Dense matrices over GF(2) and the (7,4) Hamming code whose
//! single-error correction drives the McEliece decryptor.

pub mod hamming;
pub mod matrix;

pub use hamming::HammingCode;
pub use matrix::BinaryMatrix;

//! Traits implemented by the scheme crates

pub mod pke;
pub mod signature;
pub mod symmetric;

pub use pke::Pke;
pub use signature::Signature;
pub use symmetric::SymmetricCipher;

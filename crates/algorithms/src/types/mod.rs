//! Fixed-size byte containers used by the primitives

pub mod digest;
pub mod nonce;

pub use digest::Digest;
pub use nonce::Nonce;

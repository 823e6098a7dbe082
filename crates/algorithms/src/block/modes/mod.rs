//! Modes of operation for the block ciphers

pub mod ecb;
pub mod gamma;

pub use ecb::Ecb;
pub use gamma::Gamma;

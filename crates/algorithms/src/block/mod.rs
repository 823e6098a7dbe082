//! Block cipher implementations
//!
//! Two 256-bit-key ciphers: the GOST 28147-89 Feistel network with 64-bit
//! blocks and the STB 34.101.31 word-oriented cipher with 128-bit blocks,
//! plus the modes and padding that drive them over whole messages.

use cryptolab_api::SecretBytes;
use cryptolab_params::utils::symmetric::SYMMETRIC_KEY_SIZE;

use crate::error::Result;

pub mod gost28147;
pub mod modes;
pub mod padding;
pub mod stb;

pub use gost28147::Gost28147;
pub use modes::{Ecb, Gamma};
pub use stb::Stb;

/// 256-bit secret key accepted by both block ciphers
pub type BlockKey = SecretBytes<SYMMETRIC_KEY_SIZE>;

/// Trait for block ciphers
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Builds the round-key schedule from a 256-bit key
    fn new(key: &BlockKey) -> Self;

    /// Returns the name of this cipher
    fn name() -> &'static str;

    /// Encrypts one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

//! Electronic codebook mode
//!
//! Every block is processed independently with the same key. Used by the
//! STB text cipher on PKCS-padded input.

use alloc::vec::Vec;

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// Block-by-block application of a cipher over aligned buffers
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Wraps a keyed block cipher
    pub fn new(cipher: B) -> Self {
        Ecb { cipher }
    }

    /// Encrypts a buffer whose length is a multiple of the block size
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB plaintext", plaintext.len(), B::BLOCK_SIZE)?;
        let mut out = plaintext.to_vec();
        for block in out.chunks_exact_mut(B::BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(out)
    }

    /// Decrypts a buffer whose length is a multiple of the block size
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB ciphertext", ciphertext.len(), B::BLOCK_SIZE)?;
        let mut out = ciphertext.to_vec();
        for block in out.chunks_exact_mut(B::BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(out)
    }
}

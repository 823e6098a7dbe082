//! Gamma (counter) mode for GOST 28147-89
//!
//! The 8-byte synchro-message seeds a counter block. Each keystream block
//! is the encryption of the current counter, after which the counter is
//! incremented as a little-endian integer with byte-wise carry. Encryption
//! and decryption are the same XOR.

use alloc::vec::Vec;
use zeroize::{Zeroize, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// Keystream generator over a 64-bit block cipher
pub struct Gamma<B: BlockCipher> {
    cipher: B,
    counter: Vec<u8>,
    keystream: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<B: BlockCipher> Gamma<B> {
    /// Starts a keystream from a synchro-message of exactly one block
    pub fn new(cipher: B, sync: &[u8]) -> Result<Self> {
        validate::length("gamma synchro-message", sync.len(), B::BLOCK_SIZE)?;
        Ok(Gamma {
            cipher,
            counter: sync.to_vec(),
            keystream: Zeroizing::new(alloc::vec![0u8; B::BLOCK_SIZE]),
            keystream_pos: B::BLOCK_SIZE,
        })
    }

    fn increment_counter(&mut self) {
        for byte in self.counter.iter_mut() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    fn refill(&mut self) -> Result<()> {
        self.keystream.copy_from_slice(&self.counter);
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.increment_counter();
        self.keystream_pos = 0;
        Ok(())
    }

    /// XORs the keystream into `data`, continuing where the last call stopped
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos == self.keystream.len() {
                self.refill()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }
        Ok(())
    }

    /// Returns `data` XORed with the keystream
    pub fn process(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = data.to_vec();
        self.apply_keystream(&mut out)?;
        Ok(out)
    }
}

impl<B: BlockCipher> Drop for Gamma<B> {
    fn drop(&mut self) {
        self.counter.zeroize();
    }
}

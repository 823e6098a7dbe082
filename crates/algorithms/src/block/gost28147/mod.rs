//! GOST 28147-89 block cipher
//!
//! A 32-round Feistel network over 64-bit blocks. Each half is read as a
//! little-endian word, the round function adds the round key, runs each
//! nibble through its own 4-bit S-box and rotates left by 11.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_params::utils::symmetric::{
    GOST28147_BLOCK_SIZE, GOST28147_ROTATION, GOST28147_ROUNDS,
};

use super::{BlockCipher, BlockKey};
use crate::error::{validate, Result};

/// S-boxes of the GOST R 34.11-94 test parameter set; row i serves nibble i
const SBOX: [[u8; 16]; 8] = [
    [4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
    [14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
    [5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
    [7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
    [6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
    [4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
    [13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
    [1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
];

/// GOST 28147-89 with its expanded 32-entry key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gost28147 {
    round_keys: [u32; GOST28147_ROUNDS],
}

impl Gost28147 {
    /// Eight big-endian subkeys used three times forward, then once reversed
    fn expand_key(key: &[u8]) -> [u32; GOST28147_ROUNDS] {
        let mut subkeys = [0u32; 8];
        BigEndian::read_u32_into(key, &mut subkeys);

        let mut round_keys = [0u32; GOST28147_ROUNDS];
        for (i, rk) in round_keys.iter_mut().enumerate() {
            *rk = if i < 24 { subkeys[i % 8] } else { subkeys[31 - i] };
        }
        subkeys.zeroize();
        round_keys
    }

    #[inline]
    fn round_function(x: u32, k: u32) -> u32 {
        let t = x.wrapping_add(k);
        let mut out = 0u32;
        for (i, sbox) in SBOX.iter().enumerate() {
            let nibble = (t >> (4 * i)) & 0xf;
            out |= (sbox[nibble as usize] as u32) << (4 * i);
        }
        out.rotate_left(GOST28147_ROTATION)
    }

    fn crypt<'a>(block: &mut [u8], keys: impl Iterator<Item = &'a u32>) {
        let mut left = LittleEndian::read_u32(&block[0..4]);
        let mut right = LittleEndian::read_u32(&block[4..8]);

        for &k in keys {
            let next = left ^ Self::round_function(right, k);
            left = right;
            right = next;
        }

        // the last round leaves the halves swapped
        LittleEndian::write_u32(&mut block[0..4], right);
        LittleEndian::write_u32(&mut block[4..8], left);
    }
}

impl BlockCipher for Gost28147 {
    const BLOCK_SIZE: usize = GOST28147_BLOCK_SIZE;

    fn new(key: &BlockKey) -> Self {
        Gost28147 {
            round_keys: Self::expand_key(key.as_ref()),
        }
    }

    fn name() -> &'static str {
        "GOST 28147-89"
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("GOST 28147-89 block", block.len(), GOST28147_BLOCK_SIZE)?;
        Self::crypt(block, self.round_keys.iter());
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("GOST 28147-89 block", block.len(), GOST28147_BLOCK_SIZE)?;
        Self::crypt(block, self.round_keys.iter().rev());
        Ok(())
    }
}

//! STB 34.101.31 block cipher
//!
//! 128-bit blocks handled as four big-endian words. Each of the eight
//! rounds keys every operation with a single subkey taken straight from
//! the 256-bit key, mixes the words through `g_r` (byte substitution then
//! rotation) and finishes with a fixed word permutation.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use cryptolab_params::utils::symmetric::{STB_BLOCK_SIZE, STB_ROUNDS};

use super::{BlockCipher, BlockKey};
use crate::error::{validate, Result};

/// Substitution table H
const H: [u8; 256] = [
    0xB1, 0x94, 0xBA, 0xC8, 0x0A, 0x08, 0xF5, 0x3B, 0x36, 0x6D, 0x00, 0x8E, 0x58, 0x4A, 0x5D, 0xE4,
    0x85, 0x04, 0xFA, 0x9D, 0x1B, 0xB6, 0xC7, 0xAC, 0x25, 0x2E, 0x72, 0xC2, 0x02, 0xFD, 0xCE, 0x0D,
    0x5B, 0xE3, 0xD6, 0x12, 0x17, 0xB9, 0x61, 0x81, 0xFE, 0x67, 0x86, 0xAD, 0x71, 0x6B, 0x89, 0x0B,
    0x5C, 0xB0, 0xC0, 0xFF, 0x33, 0xC3, 0x56, 0xB8, 0x35, 0xC4, 0x05, 0xAE, 0xD8, 0xE0, 0x7F, 0x99,
    0xE1, 0x2B, 0xDC, 0x1A, 0xE2, 0x82, 0x57, 0xEC, 0x70, 0x3F, 0xCC, 0xF0, 0x95, 0xEE, 0x8D, 0xF1,
    0xC1, 0xAB, 0x76, 0x38, 0x9F, 0xE6, 0x78, 0xCA, 0xF7, 0xC6, 0xF8, 0x60, 0xD5, 0xBB, 0x9C, 0x4F,
    0xF3, 0x3C, 0x65, 0x7B, 0x63, 0x7C, 0x30, 0x6A, 0xDD, 0x4E, 0xA7, 0x79, 0x9E, 0xB2, 0x3D, 0x31,
    0x3E, 0x98, 0xB5, 0x6E, 0x27, 0xD3, 0xBC, 0xCF, 0x59, 0x1E, 0x18, 0x1F, 0x4C, 0x5A, 0xB7, 0x93,
    0xE9, 0xDE, 0xE7, 0x2C, 0x8F, 0x0C, 0x0F, 0xA6, 0x2D, 0xDB, 0x49, 0xF4, 0x6F, 0x73, 0x96, 0x47,
    0x06, 0x07, 0x53, 0x16, 0xED, 0x24, 0x7A, 0x37, 0x39, 0xCB, 0xA3, 0x83, 0x03, 0xA9, 0x8B, 0xF6,
    0x92, 0xBD, 0x9B, 0x1C, 0xE5, 0xD1, 0x41, 0x01, 0x54, 0x45, 0xFB, 0xC9, 0x5E, 0x4D, 0x0E, 0xF2,
    0x68, 0x20, 0x80, 0xAA, 0x22, 0x7D, 0x64, 0x2F, 0x26, 0x87, 0xF9, 0x34, 0x90, 0x40, 0x55, 0x11,
    0xBE, 0x32, 0x97, 0x13, 0x43, 0xFC, 0x9A, 0x48, 0xA0, 0x2A, 0x88, 0x5F, 0x19, 0x4B, 0x09, 0xA1,
    0x7E, 0xCD, 0xA4, 0xD0, 0x15, 0x44, 0xAF, 0x8C, 0xA5, 0x84, 0x50, 0xBF, 0x66, 0xD2, 0xE8, 0x8A,
    0xA2, 0xD7, 0x46, 0x52, 0x42, 0xA8, 0xDF, 0xB3, 0x69, 0x74, 0xC5, 0x51, 0xEB, 0x23, 0x29, 0x21,
    0xD4, 0xEF, 0xD9, 0xB4, 0x3A, 0x62, 0x28, 0x75, 0x91, 0x14, 0x10, 0xEA, 0x77, 0x6C, 0xDA, 0x1D,
];

/// Byte-wise substitution through H followed by a left rotation
#[inline]
fn g_r(u: u32, r: u32) -> u32 {
    let mut bytes = u.to_be_bytes();
    for b in bytes.iter_mut() {
        *b = H[*b as usize];
    }
    u32::from_be_bytes(bytes).rotate_left(r)
}

/// STB 34.101.31 keyed with eight 32-bit subkeys
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Stb {
    subkeys: [u32; STB_ROUNDS],
}

impl BlockCipher for Stb {
    const BLOCK_SIZE: usize = STB_BLOCK_SIZE;

    fn new(key: &BlockKey) -> Self {
        let mut subkeys = [0u32; STB_ROUNDS];
        BigEndian::read_u32_into(key.as_ref(), &mut subkeys);
        Stb { subkeys }
    }

    fn name() -> &'static str {
        "STB 34.101.31"
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("STB block", block.len(), STB_BLOCK_SIZE)?;

        let mut a = BigEndian::read_u32(&block[0..4]);
        let mut b = BigEndian::read_u32(&block[4..8]);
        let mut c = BigEndian::read_u32(&block[8..12]);
        let mut d = BigEndian::read_u32(&block[12..16]);

        for (i, &k) in self.subkeys.iter().enumerate() {
            b ^= g_r(a.wrapping_add(k), 5);
            c ^= g_r(d.wrapping_add(k), 21);
            a = a.wrapping_sub(g_r(b.wrapping_add(k), 13));
            let t = g_r(b.wrapping_add(c).wrapping_add(k), 21) ^ (i as u32 + 1);
            b = b.wrapping_add(t);
            c = c.wrapping_sub(t);
            d = d.wrapping_add(g_r(c.wrapping_add(k), 13));
            b ^= g_r(a.wrapping_add(k), 21);
            c ^= g_r(d.wrapping_add(k), 5);

            core::mem::swap(&mut a, &mut b);
            core::mem::swap(&mut c, &mut d);
            core::mem::swap(&mut b, &mut c);
        }

        BigEndian::write_u32(&mut block[0..4], b);
        BigEndian::write_u32(&mut block[4..8], d);
        BigEndian::write_u32(&mut block[8..12], a);
        BigEndian::write_u32(&mut block[12..16], c);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("STB block", block.len(), STB_BLOCK_SIZE)?;

        let mut b = BigEndian::read_u32(&block[0..4]);
        let mut d = BigEndian::read_u32(&block[4..8]);
        let mut a = BigEndian::read_u32(&block[8..12]);
        let mut c = BigEndian::read_u32(&block[12..16]);

        for (i, &k) in self.subkeys.iter().enumerate().rev() {
            core::mem::swap(&mut b, &mut c);
            core::mem::swap(&mut c, &mut d);
            core::mem::swap(&mut a, &mut b);

            c ^= g_r(d.wrapping_add(k), 5);
            b ^= g_r(a.wrapping_add(k), 21);
            d = d.wrapping_sub(g_r(c.wrapping_add(k), 13));
            let t = g_r(b.wrapping_add(c).wrapping_add(k), 21) ^ (i as u32 + 1);
            c = c.wrapping_add(t);
            b = b.wrapping_sub(t);
            a = a.wrapping_add(g_r(b.wrapping_add(k), 13));
            c ^= g_r(d.wrapping_add(k), 21);
            b ^= g_r(a.wrapping_add(k), 5);
        }

        BigEndian::write_u32(&mut block[0..4], a);
        BigEndian::write_u32(&mut block[4..8], b);
        BigEndian::write_u32(&mut block[8..12], c);
        BigEndian::write_u32(&mut block[12..16], d);
        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! SHA-1 (FIPS 180-4)
//!
//! Not collision resistant; provided for legacy digests.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use cryptolab_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Marker type for SHA-1
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hashing state
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; SHA1_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Sha1 {
    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut w = [0u32; 80];
        BigEndian::read_u32_into(block, &mut w[..16]);
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;
        for (t, &wt) in w.iter().enumerate() {
            let (f, k) = match t {
                0..=19 => ((b & c) | (!b & d), 0x5a827999),
                20..=39 => (b ^ c ^ d, 0x6ed9eba1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(wt);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
        w.zeroize();
    }

    fn update_internal(&mut self, mut data: &[u8]) {
        self.total_bytes = self.total_bytes.wrapping_add(data.len() as u64);

        if self.buffer_idx > 0 {
            let take = (SHA1_BLOCK_SIZE - self.buffer_idx).min(data.len());
            self.buffer[self.buffer_idx..self.buffer_idx + take].copy_from_slice(&data[..take]);
            self.buffer_idx += take;
            data = &data[take..];
            if self.buffer_idx < SHA1_BLOCK_SIZE {
                return;
            }
            Self::compress(&mut self.state, &self.buffer);
            self.buffer_idx = 0;
        }

        let mut blocks = data.chunks_exact(SHA1_BLOCK_SIZE);
        for block in &mut blocks {
            Self::compress(&mut self.state, block);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_idx = rest.len();
    }

    fn finalize_internal(&mut self) -> [u8; SHA1_OUTPUT_SIZE] {
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.buffer[self.buffer_idx] = 0x80;
        self.buffer[self.buffer_idx + 1..].fill(0);
        if self.buffer_idx >= SHA1_BLOCK_SIZE - 8 {
            Self::compress(&mut self.state, &self.buffer);
            self.buffer.fill(0);
        }
        BigEndian::write_u64(&mut self.buffer[SHA1_BLOCK_SIZE - 8..], bit_len);
        Self::compress(&mut self.state, &self.buffer);

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        out
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha1 {
            state: H0,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let out = self.finalize_internal();
        *self = <Self as HashFunction>::new();
        Ok(Digest::new(out))
    }
}

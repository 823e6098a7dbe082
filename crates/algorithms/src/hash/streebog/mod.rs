//! Streebog (GOST R 34.11-2012)
//!
//! 512-bit state updated by the compression function
//! `g(N, h, m) = E(LPS(h ^ N), m) ^ h ^ m`, where E runs twelve rounds of
//! LPS keyed by a schedule derived from the iteration constants. The
//! counters N and Σ are 512-bit little-endian integers. Both widths share
//! one core and differ only in the initial vector and truncation.

use zeroize::Zeroize;

use cryptolab_params::utils::hash::{
    STREEBOG256_OUTPUT_SIZE, STREEBOG512_OUTPUT_SIZE, STREEBOG_BLOCK_SIZE, STREEBOG_ROUNDS,
};

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

mod constants;
use constants::{A, C, PI, TAU};

type Block = [u8; STREEBOG_BLOCK_SIZE];

fn xor(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; STREEBOG_BLOCK_SIZE];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = x ^ y;
    }
    out
}

/// S (substitution), P (transposition) and L (linear map) in one pass
fn lps(v: &Block) -> Block {
    let mut permuted = [0u8; STREEBOG_BLOCK_SIZE];
    for (i, p) in permuted.iter_mut().enumerate() {
        *p = PI[v[TAU[i]] as usize];
    }

    let mut out = [0u8; STREEBOG_BLOCK_SIZE];
    for (src, dst) in permuted.chunks_exact(8).zip(out.chunks_exact_mut(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(src);
        let w = u64::from_le_bytes(word);

        let mut acc = 0u64;
        for (j, row) in A.iter().enumerate() {
            if (w >> (63 - j)) & 1 == 1 {
                acc ^= row;
            }
        }
        dst.copy_from_slice(&acc.to_le_bytes());
    }
    out
}

fn compress(n: &Block, h: &Block, m: &Block) -> Block {
    let mut key = lps(&xor(h, n));
    let mut state = *m;
    for c in C.iter().take(STREEBOG_ROUNDS) {
        state = lps(&xor(&key, &state));
        key = lps(&xor(&key, c));
    }
    let mut out = xor(&xor(&key, &state), h);
    for (o, b) in out.iter_mut().zip(m.iter()) {
        *o ^= b;
    }
    key.zeroize();
    state.zeroize();
    out
}

/// Adds `b` into `a` modulo 2^512, both little-endian
fn add_512(a: &mut Block, b: &Block) {
    let mut carry = 0u16;
    for (x, y) in a.iter_mut().zip(b.iter()) {
        let sum = *x as u16 + *y as u16 + carry;
        *x = sum as u8;
        carry = sum >> 8;
    }
}

fn add_bits(a: &mut Block, bits: u64) {
    let mut addend = [0u8; STREEBOG_BLOCK_SIZE];
    addend[..8].copy_from_slice(&bits.to_le_bytes());
    add_512(a, &addend);
}

#[derive(Clone, Zeroize)]
struct StreebogCore {
    h: Block,
    n: Block,
    sigma: Block,
    buffer: Block,
    buffer_idx: usize,
}

impl StreebogCore {
    fn new(iv: u8) -> Self {
        StreebogCore {
            h: [iv; STREEBOG_BLOCK_SIZE],
            n: [0u8; STREEBOG_BLOCK_SIZE],
            sigma: [0u8; STREEBOG_BLOCK_SIZE],
            buffer: [0u8; STREEBOG_BLOCK_SIZE],
            buffer_idx: 0,
        }
    }

    fn process_block(&mut self, block: &Block) {
        self.h = compress(&self.n, &self.h, block);
        add_bits(&mut self.n, (STREEBOG_BLOCK_SIZE * 8) as u64);
        add_512(&mut self.sigma, block);
    }

    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.buffer[self.buffer_idx] = byte;
            self.buffer_idx += 1;
            if self.buffer_idx == STREEBOG_BLOCK_SIZE {
                let block = self.buffer;
                self.process_block(&block);
                self.buffer_idx = 0;
            }
        }
    }

    fn finalize(&mut self) -> Block {
        let rem = self.buffer_idx;
        let mut last = [0u8; STREEBOG_BLOCK_SIZE];
        last[..rem].copy_from_slice(&self.buffer[..rem]);
        last[rem] = 0x01;

        self.h = compress(&self.n, &self.h, &last);
        add_bits(&mut self.n, (rem * 8) as u64);
        add_512(&mut self.sigma, &last);

        let zero = [0u8; STREEBOG_BLOCK_SIZE];
        self.h = compress(&zero, &self.h, &self.n);
        self.h = compress(&zero, &self.h, &self.sigma);
        self.h
    }
}

/// Marker type for Streebog-512
pub enum Streebog512Algorithm {}

impl HashAlgorithm for Streebog512Algorithm {
    const OUTPUT_SIZE: usize = STREEBOG512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = STREEBOG_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "Streebog-512";
}

/// Marker type for Streebog-256
pub enum Streebog256Algorithm {}

impl HashAlgorithm for Streebog256Algorithm {
    const OUTPUT_SIZE: usize = STREEBOG256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = STREEBOG_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "Streebog-256";
}

/// GOST R 34.11-2012 with a 512-bit digest
#[derive(Clone, Zeroize)]
pub struct Streebog512 {
    core: StreebogCore,
}

/// GOST R 34.11-2012 with a 256-bit digest
#[derive(Clone, Zeroize)]
pub struct Streebog256 {
    core: StreebogCore,
}

impl HashFunction for Streebog512 {
    type Algorithm = Streebog512Algorithm;
    type Output = Digest<STREEBOG512_OUTPUT_SIZE>;

    fn new() -> Self {
        Streebog512 {
            core: StreebogCore::new(0x00),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.core.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let h = self.core.finalize();
        self.core = StreebogCore::new(0x00);
        Ok(Digest::new(h))
    }
}

impl HashFunction for Streebog256 {
    type Algorithm = Streebog256Algorithm;
    type Output = Digest<STREEBOG256_OUTPUT_SIZE>;

    fn new() -> Self {
        Streebog256 {
            core: StreebogCore::new(0x01),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.core.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let h = self.core.finalize();
        self.core = StreebogCore::new(0x01);
        Digest::from_slice(&h[STREEBOG512_OUTPUT_SIZE - STREEBOG256_OUTPUT_SIZE..])
    }
}

#[cfg(test)]
mod tests;

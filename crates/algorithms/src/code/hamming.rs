//! The (7,4) Hamming code
//!
//! Systematic generator `G = [I | A]` and parity check `H = [A^T | I]`.
//! Every non-zero syndrome equals exactly one column of H, which locates
//! the single flipped bit.

use alloc::vec::Vec;

use cryptolab_params::pqc::mceliece::{
    HAMMING_GENERATOR, HAMMING_PARITY_CHECK, MCELIECE_K, MCELIECE_N, MCELIECE_T,
};

use super::BinaryMatrix;
use crate::error::{validate, Result};

/// Single-error-correcting Hamming code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HammingCode {
    generator: BinaryMatrix,
    parity_check: BinaryMatrix,
}

impl Default for HammingCode {
    fn default() -> Self {
        Self::new()
    }
}

impl HammingCode {
    /// The fixed (7,4) code
    pub fn new() -> Self {
        HammingCode {
            generator: BinaryMatrix::from_array(&HAMMING_GENERATOR),
            parity_check: BinaryMatrix::from_array(&HAMMING_PARITY_CHECK),
        }
    }

    /// Code length n
    pub fn n(&self) -> usize {
        MCELIECE_N
    }

    /// Message length k
    pub fn k(&self) -> usize {
        MCELIECE_K
    }

    /// Correctable errors t
    pub fn t(&self) -> usize {
        MCELIECE_T
    }

    /// k x n generator matrix
    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }

    /// (n-k) x n parity-check matrix
    pub fn parity_check(&self) -> &BinaryMatrix {
        &self.parity_check
    }

    /// Encodes k message bits into an n-bit codeword
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.generator.mul_vector(message)
    }

    /// `H * word^T`
    pub fn syndrome(&self, word: &[u8]) -> Result<Vec<u8>> {
        self.parity_check.mul_column(word)
    }

    /// Column of H equal to the syndrome, if any
    pub fn error_position(&self, syndrome: &[u8]) -> Option<usize> {
        if syndrome.len() != self.parity_check.rows() {
            return None;
        }
        (0..self.parity_check.cols()).find(|&col| {
            syndrome
                .iter()
                .enumerate()
                .all(|(row, &s)| self.parity_check.get(row, col) == s)
        })
    }

    /// Flips the bit named by a non-zero syndrome
    ///
    /// A syndrome that matches no column leaves the word untouched.
    pub fn correct(&self, word: &[u8]) -> Result<Vec<u8>> {
        validate::length("Hamming codeword", word.len(), MCELIECE_N)?;
        let syndrome = self.syndrome(word)?;
        let mut corrected = word.to_vec();
        if syndrome.iter().any(|&s| s == 1) {
            if let Some(pos) = self.error_position(&syndrome) {
                corrected[pos] ^= 1;
            }
        }
        Ok(corrected)
    }

    /// Corrects a codeword and returns its first k bits
    pub fn decode(&self, word: &[u8]) -> Result<Vec<u8>> {
        let mut corrected = self.correct(word)?;
        corrected.truncate(MCELIECE_K);
        Ok(corrected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_messages() -> impl Iterator<Item = Vec<u8>> {
        (0u8..16).map(|v| (0..4).map(|i| (v >> (3 - i)) & 1).collect())
    }

    #[test]
    fn test_generator_orthogonal_to_parity_check() {
        let code = HammingCode::new();
        let product = code
            .generator()
            .multiply(&code.parity_check().transpose())
            .unwrap();
        assert_eq!(product, BinaryMatrix::zeros(4, 3));
    }

    #[test]
    fn test_codewords_have_zero_syndrome() {
        let code = HammingCode::new();
        for msg in all_messages() {
            let cw = code.encode(&msg).unwrap();
            assert_eq!(&cw[..4], &msg[..]);
            assert_eq!(code.syndrome(&cw).unwrap(), [0, 0, 0]);
            assert_eq!(code.decode(&cw).unwrap(), msg);
        }
    }

    #[test]
    fn test_corrects_every_single_bit_error() {
        let code = HammingCode::new();
        for msg in all_messages() {
            let cw = code.encode(&msg).unwrap();
            for pos in 0..7 {
                let mut noisy = cw.clone();
                noisy[pos] ^= 1;
                let syndrome = code.syndrome(&noisy).unwrap();
                assert_eq!(code.error_position(&syndrome), Some(pos));
                assert_eq!(code.correct(&noisy).unwrap(), cw);
                assert_eq!(code.decode(&noisy).unwrap(), msg);
            }
        }
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        let code = HammingCode::new();
        assert!(code.encode(&[1, 0, 1]).is_err());
        assert!(code.decode(&[0; 6]).is_err());
        assert_eq!(code.error_position(&[1, 0]), None);
        assert_eq!((code.n(), code.k(), code.t()), (7, 4, 1));
    }
}

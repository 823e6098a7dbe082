//! Dense binary matrices
//!
//! Entries are stored one bit per byte, row-major. Sizes in this crate are
//! tiny (at most 7x7) so clarity wins over bit packing.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// Matrix over GF(2)
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl BinaryMatrix {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BinaryMatrix {
            rows,
            cols,
            data: vec![0u8; rows * cols],
        }
    }

    /// n x n identity
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1);
        }
        m
    }

    /// Builds a matrix from a fixed-size table, keeping only the low bit of each entry
    pub fn from_array<const R: usize, const C: usize>(table: &[[u8; C]; R]) -> Self {
        let data = table.iter().flatten().map(|b| b & 1).collect();
        BinaryMatrix {
            rows: R,
            cols: C,
            data,
        }
    }

    /// Builds a matrix from rows of 0/1 values
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        validate::parameter(!rows.is_empty(), "rows", "matrix needs at least one row")?;
        let cols = rows[0].len();
        validate::parameter(cols > 0, "rows", "matrix needs at least one column")?;

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            validate::length("matrix row", row.len(), cols)?;
            validate::parameter(row.iter().all(|&b| b <= 1), "rows", "entries must be 0 or 1")?;
            data.extend_from_slice(row);
        }
        Ok(BinaryMatrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (r, c)
    ///
    /// # Panics
    /// If the index is out of bounds.
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.data[r * self.cols + c]
    }

    /// Sets the entry at (r, c) to the low bit of `bit`
    pub fn set(&mut self, r: usize, c: usize, bit: u8) {
        self.data[r * self.cols + c] = bit & 1;
    }

    /// Row `r` as a slice
    pub fn row(&self, r: usize) -> &[u8] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Matrix product `self * other`
    pub fn multiply(&self, other: &BinaryMatrix) -> Result<BinaryMatrix> {
        validate::length("matrix product inner dimension", other.rows, self.cols)?;
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0u8;
                for k in 0..self.cols {
                    sum ^= self.get(i, k) & other.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(out)
    }

    /// Row vector times matrix, `v * self`
    pub fn mul_vector(&self, v: &[u8]) -> Result<Vec<u8>> {
        validate::length("vector-matrix product", v.len(), self.rows)?;
        let mut out = vec![0u8; self.cols];
        for (i, &bit) in v.iter().enumerate() {
            if bit & 1 == 1 {
                for (o, &m) in out.iter_mut().zip(self.row(i)) {
                    *o ^= m;
                }
            }
        }
        Ok(out)
    }

    /// Matrix times column vector, `self * v^T`
    pub fn mul_column(&self, v: &[u8]) -> Result<Vec<u8>> {
        validate::length("matrix-vector product", v.len(), self.cols)?;
        Ok((0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v)
                    .fold(0u8, |acc, (&m, &b)| acc ^ (m & b & 1))
            })
            .collect())
    }

    /// Transpose
    pub fn transpose(&self) -> BinaryMatrix {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }

    fn minor(&self, col: usize) -> BinaryMatrix {
        let n = self.rows - 1;
        let mut out = Self::zeros(n, n);
        for i in 1..self.rows {
            let mut dst = 0;
            for j in (0..self.cols).filter(|&j| j != col) {
                out.set(i - 1, dst, self.get(i, j));
                dst += 1;
            }
        }
        out
    }

    /// Determinant over GF(2) by cofactor expansion along the first row
    pub fn determinant(&self) -> Result<u8> {
        validate::parameter(self.rows == self.cols, "matrix", "determinant needs a square matrix")?;
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> u8 {
        match self.rows {
            0 => 1,
            1 => self.data[0],
            2 => (self.get(0, 0) & self.get(1, 1)) ^ (self.get(0, 1) & self.get(1, 0)),
            _ => (0..self.cols)
                .filter(|&c| self.get(0, c) == 1)
                .fold(0u8, |det, c| det ^ self.minor(c).det_unchecked()),
        }
    }

    /// Inverse by Gauss-Jordan elimination on `[self | I]`
    pub fn inverse(&self) -> Result<BinaryMatrix> {
        validate::parameter(self.rows == self.cols, "matrix", "inverse needs a square matrix")?;
        let n = self.rows;
        let width = 2 * n;

        let mut aug = Self::zeros(n, width);
        for i in 0..n {
            for j in 0..n {
                aug.set(i, j, self.get(i, j));
            }
            aug.set(i, n + i, 1);
        }

        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| aug.get(r, col) == 1)
                .ok_or(Error::SingularMatrix {
                    context: "BinaryMatrix::inverse",
                })?;
            if pivot != col {
                for j in 0..width {
                    aug.data.swap(pivot * width + j, col * width + j);
                }
            }
            for row in 0..n {
                if row == col || aug.get(row, col) == 0 {
                    continue;
                }
                for j in col..width {
                    let bit = aug.get(col, j);
                    aug.data[row * width + j] ^= bit;
                }
            }
        }

        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inv.set(i, j, aug.get(i, n + j));
            }
        }
        aug.zeroize();
        Ok(inv)
    }

    /// True when every row and every column holds exactly one 1
    pub fn is_permutation(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        let rows_ok = (0..self.rows).all(|i| self.row(i).iter().filter(|&&b| b == 1).count() == 1);
        let cols_ok =
            (0..self.cols).all(|j| (0..self.rows).filter(|&i| self.get(i, j) == 1).count() == 1);
        rows_ok && cols_ok
    }

    /// Uniformly random matrix
    pub fn random<R: CryptoRng + RngCore>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| (rng.next_u32() & 1) as u8).collect();
        BinaryMatrix { rows, cols, data }
    }

    /// Random invertible n x n matrix, giving up after `max_attempts` singular draws
    pub fn random_nonsingular<R: CryptoRng + RngCore>(
        n: usize,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self> {
        for _ in 0..max_attempts {
            let candidate = Self::random(n, n, rng);
            if candidate.det_unchecked() == 1 {
                return Ok(candidate);
            }
        }
        Err(Error::SingularMatrix {
            context: "BinaryMatrix::random_nonsingular",
        })
    }

    /// Random n x n permutation matrix via Fisher-Yates; row i has its 1 in column perm[i]
    pub fn random_permutation<R: CryptoRng + RngCore>(n: usize, rng: &mut R) -> Self {
        let mut perm: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = rng.gen_range(0..=i);
            perm.swap(i, j);
        }
        let mut m = Self::zeros(n, n);
        for (i, &p) in perm.iter().enumerate() {
            m.set(i, p, 1);
        }
        m
    }

    /// Transport form: each row as a bit string, rows joined by `;`
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for i in 0..self.rows {
            if i > 0 {
                out.push(';');
            }
            out.extend(self.row(i).iter().map(|&b| if b == 1 { '1' } else { '0' }));
        }
        out
    }

    /// Parses the transport form, requiring exactly `rows` x `cols` bits
    pub fn parse(text: &str, rows: usize, cols: usize) -> Result<Self> {
        let parts: Vec<&str> = text.trim().split(';').collect();
        validate::length("serialized matrix rows", parts.len(), rows)?;

        let mut m = Self::zeros(rows, cols);
        for (i, part) in parts.iter().enumerate() {
            validate::length("serialized matrix row", part.len(), cols)?;
            for (j, ch) in part.bytes().enumerate() {
                match ch {
                    b'0' => {}
                    b'1' => m.set(i, j, 1),
                    _ => return Err(Error::param("matrix", "rows may only contain '0' and '1'")),
                }
            }
        }
        Ok(m)
    }
}

impl fmt::Debug for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryMatrix<{}x{}>({})", self.rows, self.cols, self.serialize())
    }
}

impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

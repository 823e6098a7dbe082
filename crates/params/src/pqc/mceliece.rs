//! Constants for the (7,4) Hamming-code McEliece cryptosystem

/// Code length
pub const MCELIECE_N: usize = 7;

/// Code dimension (message bits per block)
pub const MCELIECE_K: usize = 4;

/// Error correction capability
pub const MCELIECE_T: usize = 1;

/// Systematic generator matrix G = [I_4 | A] of the Hamming code
pub const HAMMING_GENERATOR: [[u8; MCELIECE_N]; MCELIECE_K] = [
    [1, 0, 0, 0, 1, 1, 1],
    [0, 1, 0, 0, 1, 1, 0],
    [0, 0, 1, 0, 1, 0, 1],
    [0, 0, 0, 1, 0, 1, 1],
];

/// Parity-check matrix H = [A^T | I_3] matching `HAMMING_GENERATOR`
pub const HAMMING_PARITY_CHECK: [[u8; MCELIECE_N]; MCELIECE_N - MCELIECE_K] = [
    [1, 1, 1, 0, 1, 0, 0],
    [1, 1, 0, 1, 0, 1, 0],
    [1, 0, 1, 1, 0, 0, 1],
];

/// Size of the big-endian bit-length header on encrypted text
pub const MCELIECE_LENGTH_HEADER_SIZE: usize = 4;

/// Random matrices drawn before a non-singular scrambler is given up on.
///
/// About 30% of random 4x4 binary matrices are invertible.
pub const NONSINGULAR_MATRIX_MAX_ATTEMPTS: usize = 256;

//! Constants for symmetric encryption algorithms

/// Key size shared by GOST 28147-89 and STB 34.101.31, in bytes
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// Length of a key given as hex text
pub const SYMMETRIC_KEY_HEX_LEN: usize = SYMMETRIC_KEY_SIZE * 2;

/// GOST 28147-89 block size in bytes
pub const GOST28147_BLOCK_SIZE: usize = 8;

/// GOST 28147-89 synchro-message (nonce) size in bytes
pub const GOST28147_NONCE_SIZE: usize = 8;

/// Number of Feistel rounds in GOST 28147-89
pub const GOST28147_ROUNDS: usize = 32;

/// Rotation applied after the S-box layer of the GOST round function
pub const GOST28147_ROTATION: u32 = 11;

/// STB 34.101.31 block size in bytes
pub const STB_BLOCK_SIZE: usize = 16;

/// Number of rounds in STB 34.101.31
pub const STB_ROUNDS: usize = 8;

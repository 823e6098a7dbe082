//! Constants for hash functions

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Output size of Streebog-256 in bytes
pub const STREEBOG256_OUTPUT_SIZE: usize = 32;

/// Output size of Streebog-512 in bytes
pub const STREEBOG512_OUTPUT_SIZE: usize = 64;

/// Internal block (and state) size of Streebog in bytes
pub const STREEBOG_BLOCK_SIZE: usize = 64;

/// Number of keyed rounds in the Streebog compression function
pub const STREEBOG_ROUNDS: usize = 12;

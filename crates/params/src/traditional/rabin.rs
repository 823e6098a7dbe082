//! Constants for the Rabin cryptosystem

/// Default bit length of each Rabin prime
pub const RABIN_DEFAULT_PRIME_BITS: usize = 512;

/// Smallest prime size accepted by key generation
pub const RABIN_MIN_PRIME_BITS: usize = 16;

/// Miller-Rabin witness rounds used for every primality decision
pub const MILLER_RABIN_ROUNDS: usize = 10;

/// Candidates examined by a single prime search before it fails.
///
/// Primes near 2^512 have density about 1/355, and only odd candidates
/// congruent to 3 mod 4 are drawn, so the expected search is under 100 draws.
pub const PRIME_SEARCH_MAX_ATTEMPTS: usize = 20_000;

/// Attempts to draw a second prime distinct from the first
pub const RABIN_DISTINCT_PRIME_ATTEMPTS: usize = 16;

/// Number of square roots produced by Rabin decryption
pub const RABIN_CANDIDATES: usize = 4;

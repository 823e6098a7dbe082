//! Symmetric cipher trait
//!
//! Both symmetric ciphers in the library take a 32-byte key and produce a
//! self-describing ciphertext: whatever is needed to decrypt, such as the
//! synchro-message of a stream mode, travels inside it.

use alloc::vec::Vec;

use crate::Result;
use rand::{CryptoRng, RngCore};

/// Common trait for symmetric encryption schemes
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Ciphertext representation
    type Ciphertext: Clone;

    /// Returns the name of this cipher
    fn name() -> &'static str;

    /// Encrypt raw bytes
    ///
    /// Deterministic schemes ignore `rng`.
    fn encrypt<R: CryptoRng + RngCore>(
        key: &Self::Key,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypt back to raw bytes
    fn decrypt(key: &Self::Key, ciphertext: &Self::Ciphertext) -> Result<Vec<u8>>;
}

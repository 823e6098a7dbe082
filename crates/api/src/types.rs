//! Core types with security guarantees for cryptolab

use core::fmt;
use core::ops::Deref;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// Equality is constant-time and `Debug` never prints the contents.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use rand::rngs::OsRng;

    #[test]
    fn test_from_slice_checks_length() {
        assert!(SecretBytes::<4>::from_slice(&[1, 2, 3, 4]).is_ok());
        assert!(matches!(
            SecretBytes::<4>::from_slice(&[1, 2, 3]),
            Err(Error::InvalidLength { expected: 4, actual: 3, .. })
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretBytes::<8>::random(&mut OsRng);
        assert_eq!(format!("{:?}", secret), "SecretBytes<8>[REDACTED]");
    }

    #[test]
    fn test_equality() {
        let a = SecretBytes::new([7u8; 16]);
        let b = SecretBytes::new([7u8; 16]);
        let c = SecretBytes::new([8u8; 16]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

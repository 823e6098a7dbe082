//! Validation helpers that raise taxonomy errors on failed preconditions

use super::types::{Error, Result};
use alloc::string::ToString;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the shape or encoding of key material
#[inline(always)]
pub fn key_format(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKeyFormat {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate the framing of a ciphertext
#[inline(always)]
pub fn ciphertext(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::MalformedCiphertext {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate a signature component
#[inline(always)]
pub fn signature(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidSignature {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

//! PKCS-style block padding
//!
//! Padding always adds between 1 and `block_size` bytes, each holding the
//! padding length, so an already aligned message gains a whole block.

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};

/// Appends PKCS padding for the given block size
pub fn pkcs_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "must be between 1 and 255",
    )?;

    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    Ok(out)
}

/// Strips PKCS padding, rejecting any inconsistent trailer
pub fn pkcs_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::min_length("padded data", data.len(), 1)?;
    validate::block_aligned("padded data", data.len(), block_size)?;

    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return Err(Error::Padding {
            context: "pkcs_unpad",
            details: "padding length out of range",
        });
    }

    let (body, trailer) = data.split_at(data.len() - pad_len);
    if trailer.iter().any(|&b| b as usize != pad_len) {
        return Err(Error::Padding {
            context: "pkcs_unpad",
            details: "padding bytes disagree with padding length",
        });
    }

    Ok(body.to_vec())
}

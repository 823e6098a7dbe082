//! Error handling for the symmetric layer
//!
//! Uses the API error taxonomy directly. Primitive errors convert through
//! `From` and pick up the caller's context with `ResultExt::with_context`.

use alloc::string::String;
use alloc::vec::Vec;

pub use cryptolab_api::error::{validate, Error, Result, ResultExt};

/// Decodes a hex field of a ciphertext, reporting failures as malformed ciphertext
pub(crate) fn decode_hex(context: &'static str, text: &str) -> Result<Vec<u8>> {
    validate::ciphertext(text.len() % 2 == 0, context, "hex field has odd length")?;
    hex::decode(text).map_err(|e| Error::MalformedCiphertext {
        context,
        message: alloc::format!("{}", e),
    })
}

/// Interprets recovered plaintext as UTF-8
pub(crate) fn into_text(context: &'static str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::from(e).with_context(context))
}

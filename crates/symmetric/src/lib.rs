//! Symmetric encryption for cryptolab
//!
//! Caller-facing wrappers around the GOST 28147-89 and STB 34.101.31 block
//! ciphers. Keys are prepared from hex or free text, and ciphertexts travel
//! as text: `"<nonce hex>:<body hex>"` for GOST gamma mode and plain hex
//! of the padded blocks for STB.
//!
//! ```
//! use cryptolab_symmetric::{GostCipher, StbCipher, SymmetricKey};
//! use rand::rngs::OsRng;
//!
//! # fn main() -> cryptolab_symmetric::Result<()> {
//! let key = SymmetricKey::prepare("correct horse battery staple")?;
//!
//! let sealed = GostCipher::encrypt_text(&key, "Привет", &mut OsRng)?;
//! assert_eq!(GostCipher::decrypt_text(&key, &sealed)?, "Привет");
//!
//! let sealed = StbCipher::encrypt_text(&key, "hello")?;
//! assert_eq!(StbCipher::decrypt_text(&key, &sealed)?, "hello");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod gost;
pub mod key;
pub mod stb;

pub use error::{Error, Result};
pub use gost::{GostCiphertext, GostCipher, GostNonce};
pub use key::SymmetricKey;
pub use stb::{StbCiphertext, StbCipher};

pub use cryptolab_api::SymmetricCipher;

//! Public API traits and types for cryptolab
//!
//! This crate provides the public API surface shared by every scheme crate:
//! the error taxonomy, validation helpers, secret containers, and the traits
//! that symmetric ciphers, public-key encryption schemes and signature
//! schemes implement.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::SecretBytes;

pub use traits::{Pke, Signature, SymmetricCipher};
pub use traits::{pke, signature, symmetric};

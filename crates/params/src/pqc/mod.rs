//! Constants for code-based schemes

pub mod mceliece;

//! Constant values for cryptolab
//!
//! Sizes, curve parameters, code matrices and the retry budgets that bound
//! every randomized search in the library.

#![no_std]

pub mod pqc;
pub mod traditional;
pub mod utils;

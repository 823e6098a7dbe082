//! Constants for number-theoretic and elliptic-curve schemes

pub mod ecgost;
pub mod elgamal;
pub mod rabin;

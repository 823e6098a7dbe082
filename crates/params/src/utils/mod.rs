//! Constants shared by the primitive layer

pub mod hash;
pub mod random;
pub mod symmetric;

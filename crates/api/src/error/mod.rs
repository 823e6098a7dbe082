//! Error handling for the cryptolab ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

pub use traits::ResultExt;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(e: core::str::Utf8Error) -> Self {
        use alloc::string::ToString;
        Self::Decoding {
            context: "UTF-8 reconstruction",
            message: e.to_string(),
        }
    }
}

impl From<alloc::string::FromUtf8Error> for Error {
    fn from(e: alloc::string::FromUtf8Error) -> Self {
        e.utf8_error().into()
    }
}

//! Error handling for PKE operations.

use alloc::string::ToString;
use core::fmt;

use cryptolab_algorithms::error::Error as PrimitiveError;
use cryptolab_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside a primitive (matrix, code, cipher)
    Primitive(PrimitiveError),
    /// Failure raised by the shared arithmetic or an API helper
    Api(CoreError),
    /// Plaintext integer does not fit below the modulus or field size
    MessageTooLarge(&'static str),
    /// No curve point could be built from the message
    NoValidEncoding(&'static str),
    /// Key text or key matrices have the wrong shape or range
    InvalidKeyFormat(&'static str),
    /// Ciphertext framing is wrong
    InvalidCiphertextFormat(&'static str),
    /// Decryption produced no usable plaintext
    DecryptionFailed(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::MessageTooLarge(reason) => write!(f, "PKE message too large: {}", reason),
            Error::NoValidEncoding(reason) => write!(f, "PKE message encoding failed: {}", reason),
            Error::InvalidKeyFormat(reason) => write!(f, "Invalid PKE key: {}", reason),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid PKE ciphertext format: {}", reason)
            }
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::MessageTooLarge(reason) => CoreError::MessageTooLarge {
                context: "PKE encryption",
                message: reason.to_string(),
            },
            Error::NoValidEncoding(reason) => CoreError::Other {
                context: "PKE message encoding",
                message: reason.to_string(),
            },
            Error::InvalidKeyFormat(reason) => CoreError::InvalidKeyFormat {
                context: "PKE key",
                message: reason.to_string(),
            },
            Error::InvalidCiphertextFormat(reason) => CoreError::MalformedCiphertext {
                context: "PKE ciphertext",
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::Other {
                context: "PKE decryption",
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_mapping() {
        let api: CoreError = Error::MessageTooLarge("m >= n").into();
        assert!(matches!(api, CoreError::MessageTooLarge { .. }));

        let api: CoreError = Error::InvalidCiphertextFormat("bad hex").into();
        assert!(matches!(api, CoreError::MalformedCiphertext { .. }));

        let api: CoreError = Error::InvalidKeyFormat("shape").into();
        assert!(matches!(api, CoreError::InvalidKeyFormat { .. }));

        let inner = CoreError::NoInverse {
            context: "mod_inverse",
            message: "gcd = 2".to_string(),
        };
        let api: CoreError = Error::Api(inner.clone()).into();
        assert_eq!(api, inner);
    }

    #[test]
    fn test_primitive_singular_matrix_maps_through() {
        let err = Error::from(PrimitiveError::SingularMatrix { context: "inverse" });
        assert!(matches!(
            CoreError::from(err),
            CoreError::SingularMatrix { .. }
        ));
    }
}

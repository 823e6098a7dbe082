//! Error types for the signature crate

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key text is malformed or the scalar is out of range
    InvalidKey(String),

    /// Signature text is malformed
    Encoding(String),

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Verification failed
    Verification {
        algorithm: &'static str,
        details: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
            Error::Verification { algorithm, details } => {
                write!(f, "{} verification failed: {}", algorithm, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Convert to api::Error
impl From<Error> for cryptolab_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey(msg) => cryptolab_api::Error::InvalidKeyFormat {
                context: "sign",
                message: msg,
            },
            Error::Encoding(msg) => cryptolab_api::Error::InvalidSignature {
                context: "signature encoding",
                message: msg,
            },
            // nonce draws ran out
            Error::SignatureGeneration { algorithm, details } => {
                cryptolab_api::Error::RandomGeneration {
                    context: algorithm,
                    message: format!("Signature generation failed: {}", details),
                }
            }
            Error::Verification { algorithm, details } => cryptolab_api::Error::InvalidSignature {
                context: algorithm,
                message: details,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_api_mapping() {
        let api: cryptolab_api::Error = Error::InvalidKey("odd".to_string()).into();
        assert!(matches!(api, cryptolab_api::Error::InvalidKeyFormat { .. }));

        let api: cryptolab_api::Error = Error::Verification {
            algorithm: "GOST R 34.10-2012",
            details: "r mismatch".to_string(),
        }
        .into();
        assert!(matches!(
            api,
            cryptolab_api::Error::InvalidSignature { context: "GOST R 34.10-2012", .. }
        ));

        let api: cryptolab_api::Error = Error::SignatureGeneration {
            algorithm: "GOST R 34.10-2012",
            details: "64 nonces".to_string(),
        }
        .into();
        assert!(matches!(api, cryptolab_api::Error::RandomGeneration { .. }));
    }
}

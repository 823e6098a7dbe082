//! Error type definitions for cryptographic operations

use alloc::string::String;

/// Primary error type for cryptographic operations
///
/// Every variant names the operation that failed in `context`. Variants that
/// describe malformed input also carry a human-readable `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key has the wrong length or encoding
    InvalidKeyFormat {
        context: &'static str,
        message: String,
    },

    /// Plaintext integer is not below the modulus or curve bound
    MessageTooLarge {
        context: &'static str,
        message: String,
    },

    /// Bad hex, wrong block alignment, missing delimiter or bad padding
    MalformedCiphertext {
        context: &'static str,
        message: String,
    },

    /// Coordinates do not satisfy the curve equation
    PointNotOnCurve {
        context: &'static str,
        message: String,
    },

    /// Matrix has no inverse over GF(2)
    SingularMatrix {
        context: &'static str,
        message: String,
    },

    /// gcd(a, m) != 1 in a modular inversion
    NoInverse {
        context: &'static str,
        message: String,
    },

    /// Prime search exceeded its retry bound
    PrimalityExhausted {
        context: &'static str,
        attempts: usize,
    },

    /// Reconstructed bytes are not valid UTF-8
    Decoding {
        context: &'static str,
        message: String,
    },

    /// Signature failed verification or is out of range
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A bounded random search ran out of attempts
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyFormat { message, .. } => Self::InvalidKeyFormat { context, message },
            Self::MessageTooLarge { message, .. } => Self::MessageTooLarge { context, message },
            Self::MalformedCiphertext { message, .. } => {
                Self::MalformedCiphertext { context, message }
            }
            Self::PointNotOnCurve { message, .. } => Self::PointNotOnCurve { context, message },
            Self::SingularMatrix { message, .. } => Self::SingularMatrix { context, message },
            Self::NoInverse { message, .. } => Self::NoInverse { context, message },
            Self::PrimalityExhausted { attempts, .. } => {
                Self::PrimalityExhausted { context, attempts }
            }
            Self::Decoding { message, .. } => Self::Decoding { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// Variants without a message field are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKeyFormat { context, .. } => Self::InvalidKeyFormat { context, message },
            Self::MessageTooLarge { context, .. } => Self::MessageTooLarge { context, message },
            Self::MalformedCiphertext { context, .. } => {
                Self::MalformedCiphertext { context, message }
            }
            Self::PointNotOnCurve { context, .. } => Self::PointNotOnCurve { context, message },
            Self::SingularMatrix { context, .. } => Self::SingularMatrix { context, message },
            Self::NoInverse { context, .. } => Self::NoInverse { context, message },
            Self::Decoding { context, .. } => Self::Decoding { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGeneration { context, .. } => Self::RandomGeneration { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
            other @ (Self::PrimalityExhausted { .. } | Self::InvalidLength { .. }) => other,
        }
    }

    /// The operation the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKeyFormat { context, .. }
            | Self::MessageTooLarge { context, .. }
            | Self::MalformedCiphertext { context, .. }
            | Self::PointNotOnCurve { context, .. }
            | Self::SingularMatrix { context, .. }
            | Self::NoInverse { context, .. }
            | Self::PrimalityExhausted { context, .. }
            | Self::Decoding { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomGeneration { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKeyFormat { context, message } => {
                write!(f, "Invalid key format: {}: {}", context, message)
            }
            Self::MessageTooLarge { context, message } => {
                write!(f, "Message too large: {}: {}", context, message)
            }
            Self::MalformedCiphertext { context, message } => {
                write!(f, "Malformed ciphertext: {}: {}", context, message)
            }
            Self::PointNotOnCurve { context, message } => {
                write!(f, "Point not on curve: {}: {}", context, message)
            }
            Self::SingularMatrix { context, message } => {
                write!(f, "Singular matrix: {}: {}", context, message)
            }
            Self::NoInverse { context, message } => {
                write!(f, "No modular inverse: {}: {}", context, message)
            }
            Self::PrimalityExhausted { context, attempts } => {
                write!(
                    f,
                    "{}: no prime found after {} candidates",
                    context, attempts
                )
            }
            Self::Decoding { context, message } => {
                write!(f, "Decoding error: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::RandomGeneration { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}

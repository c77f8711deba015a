//! Error types for font-container decoding.
//!
//! The span builder and the layout pipeline are pure data transformations
//! and raise no errors of their own; everything in this module comes from
//! structural validation of binary font containers.

use std::fmt;

/// Result type alias for emojitext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for font-container decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer does not start with a recognized container signature.
    BadSignature,
    /// The length field in the container header disagrees with the actual
    /// buffer size.
    LengthMismatch,
    /// The buffer ended before a required structure could be read.
    Truncated {
        /// Bytes required to read the structure.
        need: usize,
        /// Bytes actually available.
        len: usize,
    },
    /// The table directory is structurally inconsistent.
    Directory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadSignature => write!(f, "invalid WOFF2 signature"),
            Self::LengthMismatch => write!(f, "length in header must match file size"),
            Self::Truncated { need, len } => {
                write!(f, "unexpected end of file: need {need} bytes, have {len}")
            }
            Self::Directory(msg) => write!(f, "invalid table directory: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::LengthMismatch.to_string(),
            "length in header must match file size"
        );

        let err = Error::Truncated { need: 48, len: 12 };
        assert!(err.to_string().contains("need 48 bytes, have 12"));

        let err = Error::Directory("tag index 40 out of range".to_string());
        assert!(err.to_string().contains("invalid table directory"));
    }
}

//! Error types for the PolyVig library.

use std::fmt;

/// Errors produced by the PolyVig library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyVigError {
    /// Key is empty or contains a character that is not an uppercase letter.
    InvalidKey,
    /// Ciphertext is not a clean stream of digit pairs in the range 1-5.
    MalformedCiphertext,
}

impl fmt::Display for PolyVigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyVigError::InvalidKey => {
                write!(f, "Key must be non-empty and contain only uppercase letters")
            }
            PolyVigError::MalformedCiphertext => {
                write!(
                    f,
                    "Ciphertext must be an even-length stream of digits between 1 and 5"
                )
            }
        }
    }
}

impl std::error::Error for PolyVigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = PolyVigError::InvalidKey;
        assert_eq!(
            format!("{}", err),
            "Key must be non-empty and contain only uppercase letters"
        );
    }

    #[test]
    fn test_display_malformed_ciphertext() {
        let err = PolyVigError::MalformedCiphertext;
        assert_eq!(
            format!("{}", err),
            "Ciphertext must be an even-length stream of digits between 1 and 5"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(PolyVigError::InvalidKey, PolyVigError::InvalidKey);
        assert_ne!(PolyVigError::InvalidKey, PolyVigError::MalformedCiphertext);
    }

    #[test]
    fn test_error_clone() {
        let err = PolyVigError::MalformedCiphertext;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

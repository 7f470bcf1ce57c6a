//! Hybrid composer: key validation and stage sequencing.
//!
//! Encryption runs the Vigenère stage first and the Polybius stage second;
//! decryption applies the inverses in reverse order. The key is validated
//! before either stage runs, so an invalid key never produces partial
//! output.

use crate::error::PolyVigError;
use crate::polybius;
use crate::vigenere;

/// Checks whether a key is usable by the cipher.
///
/// A valid key is non-empty and consists only of uppercase ASCII letters.
///
/// # Parameters
/// - `key`: The candidate key.
///
/// # Returns
/// `true` if the key may be passed to [`encrypt`] and [`decrypt`].
///
/// # Examples
///
/// ```
/// assert!(polyvig::validate_key("KEY"));
/// assert!(!polyvig::validate_key("Key"));
/// assert!(!polyvig::validate_key(""));
/// assert!(!polyvig::validate_key("K Y"));
/// ```
pub fn validate_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_uppercase())
}

/// Encrypts plaintext under the hybrid cipher.
///
/// Applies the Vigenère shift with the repeating key, then encodes the
/// result into Polybius digit pairs. Letters in the plaintext become two
/// digits each; non-letters survive both stages verbatim (which makes the
/// ciphertext undecodable, see [`decrypt`]).
///
/// # Parameters
/// - `plaintext`: The text to encrypt.
/// - `key`: The shared key, uppercase letters only.
///
/// # Returns
/// The hybrid ciphertext.
///
/// # Errors
/// Returns [`PolyVigError::InvalidKey`] if the key is empty or contains a
/// character that is not an uppercase letter. No transformation is applied
/// in that case.
///
/// # Examples
///
/// ```
/// let ciphertext = polyvig::encrypt("HELLO", "KEY").unwrap();
/// assert_eq!(ciphertext, "4224245143");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, PolyVigError> {
    if !validate_key(key) {
        return Err(PolyVigError::InvalidKey);
    }
    let shifted = vigenere::shift_encode(plaintext, key);
    Ok(polybius::digraph_encode(&shifted))
}

/// Decrypts hybrid ciphertext produced by [`encrypt`] with the same key.
///
/// Decodes the Polybius digit pairs, then reverses the Vigenère shift.
/// The decoded text is uppercase: the digraph stage upcases on encode, so
/// plaintext case is not recoverable. A plaintext J comes back as I (the
/// two letters share one square cell).
///
/// # Parameters
/// - `ciphertext`: The digit-pair ciphertext.
/// - `key`: The shared key, uppercase letters only.
///
/// # Returns
/// The recovered plaintext.
///
/// # Errors
/// - [`PolyVigError::InvalidKey`] if the key fails validation; checked
///   before any decoding work.
/// - [`PolyVigError::MalformedCiphertext`] if the ciphertext is not an
///   even-length stream of digits in `1..=5`. Ciphertext from plaintext
///   containing non-letters falls in this category.
///
/// # Examples
///
/// ```
/// let ciphertext = polyvig::encrypt("SECRET", "KEY").unwrap();
/// assert_eq!(polyvig::decrypt(&ciphertext, "KEY").unwrap(), "SECRET");
/// ```
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, PolyVigError> {
    if !validate_key(key) {
        return Err(PolyVigError::InvalidKey);
    }
    let decoded = polybius::digraph_decode(ciphertext)?;
    Ok(vigenere::shift_decode(&decoded, key))
}

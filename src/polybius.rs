//! Digraph (Polybius) substitution stage.
//!
//! The forward direction maps each letter to its two-digit (row, col) cell
//! in the [`square`](crate::square) and emits non-letters verbatim. The
//! inverse direction consumes the text strictly as digit pairs and resolves
//! each pair back to a letter.
//!
//! The two directions are deliberately asymmetric: a non-letter surviving
//! the forward pass occupies one character where the inverse expects two
//! digits, so such ciphertext fails decoding with
//! [`MalformedCiphertext`](PolyVigError::MalformedCiphertext) rather than
//! being misread.

use crate::error::PolyVigError;
use crate::square::SQUARE;

/// Encodes text into the digit-pair form.
///
/// Each character is upcased first. ASCII letters are replaced by their
/// row digit followed by their column digit (each a single digit `1`-`5`);
/// J shares I's cell, which makes the encoding lossy for J. Non-letters
/// are appended verbatim with no digit encoding.
///
/// # Parameters
/// - `text`: The text to encode.
///
/// # Returns
/// The digit-pair ciphertext, two digits per input letter.
///
/// # Panics
/// Panics if an ASCII letter fails square lookup. The aliased 25-cell grid
/// covers all 26 letters, so this indicates internal state corruption, not
/// bad input.
pub fn digraph_encode(text: &str) -> String {
    let mut output = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            match SQUARE.locate(upper) {
                Some((row, col)) => {
                    output.push((b'0' + row as u8) as char);
                    output.push((b'0' + col as u8) as char);
                }
                None => unreachable!("letter {:?} missing from the square", upper),
            }
        } else {
            output.push(c);
        }
    }
    output
}

/// Decodes a digit-pair ciphertext back into letters.
///
/// Consumes the input strictly two characters at a time. Each character
/// must be an ASCII digit in `1..=5`; the pair is the 1-based (row, col)
/// cell of one letter.
///
/// # Parameters
/// - `text`: The digit-pair ciphertext.
///
/// # Returns
/// The decoded uppercase letters, one per input pair.
///
/// # Errors
/// Returns [`PolyVigError::MalformedCiphertext`] if the input has odd
/// length or contains any character outside `'1'..='5'`. This covers
/// ciphertext produced from plaintext containing non-letters, which the
/// forward direction emits verbatim (see the module docs).
pub fn digraph_decode(text: &str) -> Result<String, PolyVigError> {
    let mut output = String::with_capacity(text.len() / 2);
    let mut chars = text.chars();
    while let Some(first) = chars.next() {
        let second = chars.next().ok_or(PolyVigError::MalformedCiphertext)?;
        let row = coordinate(first)?;
        let col = coordinate(second)?;
        output.push(SQUARE.resolve(row, col));
    }
    Ok(output)
}

/// Parses one ciphertext character as a 1-based square coordinate.
fn coordinate(c: char) -> Result<usize, PolyVigError> {
    match c.to_digit(10) {
        Some(d @ 1..=5) => Ok(d as usize),
        _ => Err(PolyVigError::MalformedCiphertext),
    }
}

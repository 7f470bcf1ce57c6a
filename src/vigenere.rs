//! Polyalphabetic (Vigenère) substitution stage.
//!
//! Shifts each letter of the input by the letter value of the corresponding
//! key position, with the key repeating as a stream. The key stream cursor
//! advances only when a letter is consumed; non-letters are copied through
//! verbatim and leave the cursor in place, so interleaved punctuation does
//! not desynchronize the key stream. Letter case is preserved.
//!
//! Both operations require a key that already passed
//! [`validate_key`](crate::validate_key): non-empty, all uppercase letters.

/// Shift direction for [`apply_shift`].
#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

/// Encodes text by shifting each letter forward by the repeating key.
///
/// Each ASCII letter becomes `(value + shift) mod 26` where `shift` is the
/// letter value of the current key position. The case of every input
/// character is preserved. Non-letters pass through unchanged and do not
/// consume a key position.
///
/// # Parameters
/// - `text`: The text to encode.
/// - `key`: A validated key (non-empty, uppercase letters only).
///
/// # Returns
/// The shifted text, same length and character classes as the input.
pub fn shift_encode(text: &str, key: &str) -> String {
    apply_shift(text, key, Direction::Forward)
}

/// Decodes text by shifting each letter backward by the repeating key.
///
/// Exact inverse of [`shift_encode`] under the same key: each ASCII letter
/// becomes `(value - shift + 26) mod 26`.
///
/// # Parameters
/// - `text`: The text to decode.
/// - `key`: A validated key (non-empty, uppercase letters only).
///
/// # Returns
/// The unshifted text.
pub fn shift_decode(text: &str, key: &str) -> String {
    apply_shift(text, key, Direction::Inverse)
}

/// Shared key-stream walk for encoding and decoding.
///
/// The cursor starts at 0 on every invocation and wraps modulo the key
/// length, advancing only on alphabetic input.
fn apply_shift(text: &str, key: &str, direction: Direction) -> String {
    debug_assert!(
        !key.is_empty() && key.bytes().all(|b| b.is_ascii_uppercase()),
        "key must be validated before the shift stage runs"
    );
    let key = key.as_bytes();
    let mut cursor = 0usize;
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let shift = (key[cursor] - b'A') as u32;
            let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
            let value = c as u8 - base;
            let shifted = match direction {
                Direction::Forward => (value as u32 + shift) % 26,
                Direction::Inverse => (value as u32 + 26 - shift) % 26,
            };
            output.push((base + shifted as u8) as char);
            cursor = (cursor + 1) % key.len();
        } else {
            output.push(c);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello_with_key() {
        assert_eq!(shift_encode("HELLO", "KEY"), "RIJVS");
    }

    #[test]
    fn test_decode_inverts_encode() {
        assert_eq!(shift_decode("RIJVS", "KEY"), "HELLO");
    }

    #[test]
    fn test_identity_under_key_a() {
        // 'A' is a zero shift at every position.
        assert_eq!(shift_encode("SOMETEXT", "A"), "SOMETEXT");
        assert_eq!(shift_decode("SOMETEXT", "A"), "SOMETEXT");
    }

    #[test]
    fn test_case_is_preserved() {
        let upper = shift_encode("AB", "BB");
        let lower = shift_encode("ab", "BB");
        assert_eq!(upper, "BC");
        assert_eq!(lower, "bc");
        assert_eq!(lower, upper.to_ascii_lowercase());
    }

    #[test]
    fn test_mixed_case_roundtrip() {
        let text = "Attack At Dawn!";
        let encoded = shift_encode(text, "LEMON");
        assert_eq!(shift_decode(&encoded, "LEMON"), text);
    }

    #[test]
    fn test_non_letters_do_not_consume_key() {
        // The space must not advance the cursor: T after the space still
        // takes the third key letter.
        assert_eq!(shift_encode("HI THERE", "KEY"), "RM RRIPO");
    }

    #[test]
    fn test_non_letters_pass_through() {
        let encoded = shift_encode("1920-08-27?", "KEY");
        assert_eq!(encoded, "1920-08-27?");
    }

    #[test]
    fn test_key_wraps_around() {
        // Key "B" shifts every letter by one.
        assert_eq!(shift_encode("AAAAAA", "B"), "BBBBBB");
        // Key "AB" alternates shifts of 0 and 1.
        assert_eq!(shift_encode("AAAA", "AB"), "ABAB");
    }

    #[test]
    fn test_wraparound_past_z() {
        assert_eq!(shift_encode("Z", "B"), "A");
        assert_eq!(shift_decode("A", "B"), "Z");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(shift_encode("", "KEY"), "");
        assert_eq!(shift_decode("", "KEY"), "");
    }
}

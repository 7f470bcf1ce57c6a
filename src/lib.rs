//! PolyVig hybrid classical cipher.
//!
//! PolyVig composes two classical substitution ciphers into one reversible
//! transformation under a shared uppercase-letter key: a polyalphabetic
//! Vigenère stage followed by a digraph Polybius-square stage. The output
//! is a stream of digit pairs, two digits per plaintext letter.
//!
//! The character-level behavior is defined exactly, corner cases included:
//! I and J share one square cell (so a plaintext J decrypts as I), and
//! non-letter characters pass
//! through both stages verbatim, which breaks the digit-pair framing the
//! decoder relies on. It is a classical cipher with no resistance to
//! frequency analysis and must not be used to protect real data.
//!
//! # Architecture
//!
//! ```text
//! encrypt:  plaintext  → vigenere::shift_encode → polybius::digraph_encode → ciphertext
//! decrypt:  ciphertext → polybius::digraph_decode → vigenere::shift_decode → plaintext
//!                              ↓ both stages resolve letters through
//!                        square::SQUARE (5×5 grid, I/J merged, build-once)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a shared key:
//!
//! ```
//! let ciphertext = polyvig::encrypt("SECRET", "KEY").unwrap();
//! assert_eq!(ciphertext, "132411122442");
//!
//! let plaintext = polyvig::decrypt(&ciphertext, "KEY").unwrap();
//! assert_eq!(plaintext, "SECRET");
//! ```
//!
//! An invalid key is rejected before any transformation:
//!
//! ```
//! use polyvig::error::PolyVigError;
//!
//! assert_eq!(polyvig::encrypt("HELLO", "lowercase"), Err(PolyVigError::InvalidKey));
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod polybius;
pub mod square;
pub mod vigenere;

mod hybrid;

pub use hybrid::{decrypt, encrypt, validate_key};

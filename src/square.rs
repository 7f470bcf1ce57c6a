//! The 5x5 Polybius square used by the digraph stage.
//!
//! Holds the 25-letter alphabet (standard Latin alphabet with J merged into
//! I) in a fixed row-major grid and supports lookup in both directions:
//! letter to 1-based (row, col) coordinates and coordinates back to letter.
//!
//! The square is a compile-time constant. It is built once, never mutated,
//! and may be shared freely across threads.

/// The square's alphabet in row-major order. J is omitted; I stands for both.
const ALPHABET: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Side length of the square.
const SIDE: usize = 5;

/// Process-wide square instance. All stages resolve through this constant.
pub static SQUARE: Square = Square::build();

/// A 5x5 grid of uppercase letters supporting bidirectional lookup.
pub struct Square {
    grid: [[u8; SIDE]; SIDE],
}

impl Square {
    /// Builds the fixed square from [`ALPHABET`], filling rows left to right.
    const fn build() -> Self {
        let mut grid = [[0u8; SIDE]; SIDE];
        let mut i = 0;
        while i < ALPHABET.len() {
            grid[i / SIDE][i % SIDE] = ALPHABET[i];
            i += 1;
        }
        Square { grid }
    }

    /// Finds the 1-based (row, col) coordinates of a letter.
    ///
    /// The character is upcased before lookup, and `J` is aliased to `I`,
    /// so every ASCII letter resolves to a cell. Non-letters return `None`.
    ///
    /// # Parameters
    /// - `c`: The character to locate.
    ///
    /// # Returns
    /// `Some((row, col))` with both coordinates in `1..=5`, or `None` if
    /// `c` is not an ASCII letter.
    pub fn locate(&self, c: char) -> Option<(usize, usize)> {
        let mut upper = c.to_ascii_uppercase();
        if upper == 'J' {
            upper = 'I';
        }
        if !upper.is_ascii_uppercase() {
            return None;
        }
        for (row, letters) in self.grid.iter().enumerate() {
            for (col, &letter) in letters.iter().enumerate() {
                if letter == upper as u8 {
                    return Some((row + 1, col + 1));
                }
            }
        }
        None
    }

    /// Returns the letter at the given 1-based (row, col) coordinates.
    ///
    /// # Parameters
    /// - `row`: 1-based row index, must be in `1..=5`.
    /// - `col`: 1-based column index, must be in `1..=5`.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `1..=5`. Callers must
    /// range-check untrusted coordinates before resolving.
    pub fn resolve(&self, row: usize, col: usize) -> char {
        assert!(
            (1..=SIDE).contains(&row) && (1..=SIDE).contains(&col),
            "square coordinates ({}, {}) outside 1..=5",
            row,
            col
        );
        self.grid[row - 1][col - 1] as char
    }
}

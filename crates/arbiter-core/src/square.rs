//! Board coordinates.

use std::fmt;

/// A coordinate on the board.
///
/// `row` 0 is White's back rank and `col` 0 is the queenside edge. The
/// derived ordering sorts by row, then by column, which is the
/// tie-breaking rule used to orient straight-line paths: of two squares,
/// the "low" one is the one nearer White's back rank, or nearer the
/// queenside when the rows are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Creates a square from row and column indices.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Returns the algebraic name of this square (e.g. "e4").
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Returns the squares strictly between `a` and `b`.
///
/// Defined only for horizontal, vertical, and 45°/135° diagonal lines;
/// any other pair (a knight jump, say, or equal squares) yields an empty
/// list. Both endpoints are excluded.
pub fn between(a: Square, b: Square) -> Vec<Square> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let dr = i16::from(high.row) - i16::from(low.row);
    let dc = i16::from(high.col) - i16::from(low.col);

    if dr == 0 && dc > 0 {
        // Horizontal.
        (low.col + 1..high.col)
            .map(|col| Square::new(low.row, col))
            .collect()
    } else if dc == 0 && dr > 0 {
        // Vertical.
        (low.row + 1..high.row)
            .map(|row| Square::new(row, low.col))
            .collect()
    } else if dr > 0 && dr == dc {
        // 45° diagonal: row and column both climb from the low square.
        (1..dr)
            .map(|i| Square::new(low.row + i as u8, low.col + i as u8))
            .collect()
    } else if dr > 0 && dr == -dc {
        // 135° diagonal: row climbs while the column falls.
        (1..dr)
            .map(|i| Square::new(low.row + i as u8, low.col - i as u8))
            .collect()
    } else {
        Vec::new()
    }
}

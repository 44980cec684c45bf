//! Player identity.

/// One of the two players in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Returns the opposing side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps an absolute row index to this side's relative row index.
    ///
    /// Row 0 is White's back rank. From White's perspective rows are
    /// unchanged; from Black's they are mirrored, so that "forward" means
    /// increasing relative row for either side. The transform is its own
    /// inverse, so it also maps relative rows back to absolute ones.
    #[inline]
    pub const fn perspective(self, row: u8, board_size: u8) -> u8 {
        match self {
            Side::White => row,
            Side::Black => board_size - 1 - row,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

//! Move representation and pure move geometry.

use crate::{Piece, PieceKind, Square};
use std::fmt;

/// The two castling wings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    Kingside,
    Queenside,
}

impl fmt::Display for Wing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wing::Kingside => write!(f, "kingside"),
            Wing::Queenside => write!(f, "queenside"),
        }
    }
}

/// A proposed move.
///
/// A `Move` is a proposal, not a certificate: legality is a predicate
/// derived against a position, never an invariant of construction. Two
/// moves are equal when piece, endpoints, and promotion all match, which
/// is how drivers are expected to match candidates against the generated
/// legal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Populated only for pawn moves reaching the far rank, after the
    /// surrounding driver has settled which promotion is wanted.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move with no promotion.
    #[inline]
    pub const fn new(piece: Piece, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            promotion: None,
        }
    }

    /// Returns the same move with the given promotion kind.
    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Move {
            promotion: Some(kind),
            ..self
        }
    }

    /// Signed row displacement, destination minus origin.
    #[inline]
    pub fn row_delta(&self) -> i16 {
        i16::from(self.to.row) - i16::from(self.from.row)
    }

    /// Signed column displacement, destination minus origin.
    #[inline]
    pub fn col_delta(&self) -> i16 {
        i16::from(self.to.col) - i16::from(self.from.col)
    }

    /// True if the move stays on one row.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.from.row == self.to.row
    }

    /// True if the move stays on one column.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.from.col == self.to.col
    }

    /// True for diagonals where row and column move together
    /// (e.g. e4-h7, d5-b3).
    #[inline]
    pub fn is_diagonal_45(&self) -> bool {
        self.row_delta() == self.col_delta()
    }

    /// True for diagonals where row and column move oppositely
    /// (e.g. e4-b7, d5-f3).
    #[inline]
    pub fn is_diagonal_135(&self) -> bool {
        self.row_delta() == -self.col_delta()
    }

    /// True if this is a castle: a king displaced exactly two columns.
    #[inline]
    pub fn is_castle(&self) -> bool {
        self.piece.kind == PieceKind::King && self.col_delta().abs() == 2
    }

    /// Which wing a castle heads for, or `None` for non-castles.
    pub fn wing(&self) -> Option<Wing> {
        if !self.is_castle() {
            return None;
        }
        if self.to.col < self.from.col {
            Some(Wing::Queenside)
        } else {
            Some(Wing::Kingside)
        }
    }

    /// True if this move lands a pawn on the far rank from its side's
    /// perspective, making it eligible for promotion.
    pub fn can_be_promoted(&self, board_size: u8) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.to.row == self.piece.side.perspective(board_size - 1, board_size)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

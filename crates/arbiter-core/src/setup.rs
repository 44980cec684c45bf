//! Board configuration: dimension and back-rank layout.

use crate::{PieceKind, Wing};
use thiserror::Error;

/// Errors raised when constructing an invalid [`BoardSetup`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("board size {0} is too small for a playable board")]
    BoardTooSmall(u8),

    #[error("back rank has {got} pieces, expected {expected}")]
    BackRankLength { got: usize, expected: usize },

    #[error("back rank must contain exactly one king, found {0}")]
    KingCount(usize),

    #[error("back rank must contain at least one rook")]
    NoRook,
}

/// The board dimension and back-rank piece order.
///
/// These were implicit global constants in many engines; here they are
/// explicit configuration passed into position construction, so variant
/// board sizes can be exercised without global state. The rook and king
/// columns derived from the back rank drive castling geometry and the
/// castle-rights relinquishment rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSetup {
    size: u8,
    back_rank: Vec<PieceKind>,
}

impl BoardSetup {
    /// The standard 8x8 setup with the usual back rank.
    pub fn standard() -> Self {
        BoardSetup {
            size: 8,
            back_rank: vec![
                PieceKind::Rook,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Queen,
                PieceKind::King,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Rook,
            ],
        }
    }

    /// Creates a setup from a dimension and back-rank order.
    ///
    /// The back rank must span the full board width and contain exactly
    /// one king and at least one rook.
    pub fn new(size: u8, back_rank: Vec<PieceKind>) -> Result<Self, SetupError> {
        if size < 4 {
            return Err(SetupError::BoardTooSmall(size));
        }
        if back_rank.len() != size as usize {
            return Err(SetupError::BackRankLength {
                got: back_rank.len(),
                expected: size as usize,
            });
        }
        let kings = back_rank
            .iter()
            .filter(|&&kind| kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(SetupError::KingCount(kings));
        }
        if !back_rank.contains(&PieceKind::Rook) {
            return Err(SetupError::NoRook);
        }
        Ok(BoardSetup { size, back_rank })
    }

    /// The board dimension.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The back-rank piece order, queenside first.
    #[inline]
    pub fn back_rank(&self) -> &[PieceKind] {
        &self.back_rank
    }

    /// The column the king starts on.
    pub fn king_col(&self) -> u8 {
        // Valid by construction: `new` and `standard` guarantee one king.
        self.back_rank
            .iter()
            .position(|&kind| kind == PieceKind::King)
            .unwrap_or(0) as u8
    }

    /// The starting column of the rook on the given wing: the first rook
    /// for queenside, the last for kingside.
    pub fn rook_col(&self, wing: Wing) -> u8 {
        let found = match wing {
            Wing::Queenside => self
                .back_rank
                .iter()
                .position(|&kind| kind == PieceKind::Rook),
            Wing::Kingside => self
                .back_rank
                .iter()
                .rposition(|&kind| kind == PieceKind::Rook),
        };
        found.unwrap_or(0) as u8
    }
}

impl Default for BoardSetup {
    fn default() -> Self {
        Self::standard()
    }
}

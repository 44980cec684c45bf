//! Mailbox board representation.

use arbiter_core::{BoardSetup, Piece, PieceKind, Side, Square};

/// A total mapping from every square of an N x N board to an optional
/// piece. Never resized after construction; value equality compares the
/// full occupancy, which is what repetition detection relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    pub fn empty(size: u8) -> Self {
        Board {
            size,
            squares: vec![None; usize::from(size) * usize::from(size)],
        }
    }

    /// Creates the starting board for the given setup: each side's back
    /// rank on its own row 0 and a row of pawns in front of it.
    pub fn starting(setup: &BoardSetup, players: [Side; 2]) -> Self {
        let size = setup.size();
        let mut board = Board::empty(size);
        for side in players {
            let back = side.perspective(0, size);
            let pawn_row = side.perspective(1, size);
            for (col, &kind) in setup.back_rank().iter().enumerate() {
                board.set(Square::new(back, col as u8), Some(Piece::new(kind, side)));
                board.set(
                    Square::new(pawn_row, col as u8),
                    Some(Piece::new(PieceKind::Pawn, side)),
                );
            }
        }
        board
    }

    /// The board dimension.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// True if the square lies on this board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.row < self.size && sq.col < self.size
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        usize::from(sq.row) * usize::from(self.size) + usize::from(sq.col)
    }

    /// Returns the piece on the given square, if any. Off-board squares
    /// read as empty.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if !self.contains(sq) {
            return None;
        }
        self.squares[self.index(sq)]
    }

    /// Sets or clears the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if self.contains(sq) {
            let idx = self.index(sq);
            self.squares[idx] = piece;
        }
    }

    /// Iterates over every square of the board in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Square::new(row, col)))
    }

    /// Iterates over the squares holding the given side's pieces.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares().filter_map(move |sq| {
            self.get(sq)
                .filter(|piece| piece.side == side)
                .map(|piece| (sq, piece))
        })
    }

    /// Returns the square of the given side's king, if present.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Counts the pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }
}

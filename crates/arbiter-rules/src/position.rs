//! Position state machine.

use crate::legality;
use crate::{Board, CastleRights};
use arbiter_core::{between, BoardSetup, Move, PieceKind, Side, Square, Wing};
use thiserror::Error;

/// Errors raised when constructing a position from mismatched parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("board is {got}x{got} but the setup expects {expected}x{expected}")]
    BoardSizeMismatch { got: u8, expected: u8 },
}

/// One history entry: the facts that must all recur for a position to
/// count as a repetition.
///
/// The recorded en-passant target is the *effective* one - present only
/// if some pawn could actually capture on it - so that two otherwise
/// identical states compare equal regardless of an inert double-push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub side_to_move: Side,
    pub castle_rights: CastleRights,
    pub en_passant: Option<Square>,
}

/// An immutable snapshot of a game.
///
/// A position is created once at game start and thereafter only through
/// [`Position::apply`], each transition producing a brand-new value.
/// The history is append-only: every constructed position appends
/// exactly one [`Snapshot`], including the hypothetical variants used
/// internally for check testing (those start a fresh history and are
/// never exposed as playable states).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    setup: BoardSetup,
    board: Board,
    players: [Side; 2],
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    move_num: u32,
    halfmove_clock: u32,
    history: Vec<Snapshot>,
}

impl Position {
    /// The standard starting position: full board, full rights, White
    /// to move.
    pub fn standard() -> Self {
        let setup = BoardSetup::standard();
        let players = [Side::White, Side::Black];
        let board = Board::starting(&setup, players);
        Self::build(
            setup,
            board,
            CastleRights::FULL,
            None,
            players,
            0,
            0,
            Vec::new(),
        )
    }

    /// Creates a position from a custom board.
    ///
    /// `players` gives the turn order; the first entry moves first. The
    /// en-passant target, if given, is kept only when a pawn can
    /// actually capture on it. The caller is responsible for placing
    /// exactly one king per side; check detection on a kingless board is
    /// not meaningful.
    pub fn with_board(
        setup: BoardSetup,
        board: Board,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
        players: [Side; 2],
    ) -> Result<Self, PositionError> {
        if board.size() != setup.size() {
            return Err(PositionError::BoardSizeMismatch {
                got: board.size(),
                expected: setup.size(),
            });
        }
        Ok(Self::build(
            setup,
            board,
            castle_rights,
            en_passant,
            players,
            0,
            0,
            Vec::new(),
        ))
    }

    /// The one constructor every position passes through. Normalizes the
    /// en-passant target and appends this position's snapshot to the
    /// history it was handed.
    #[allow(clippy::too_many_arguments)]
    fn build(
        setup: BoardSetup,
        board: Board,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
        players: [Side; 2],
        move_num: u32,
        halfmove_clock: u32,
        prev_history: Vec<Snapshot>,
    ) -> Self {
        let mut pos = Position {
            setup,
            board,
            players,
            castle_rights,
            en_passant,
            move_num,
            halfmove_clock,
            history: prev_history,
        };
        // An en-passant target only persists if it is immediately
        // capturable; an inert one would spoil repetition equality.
        if let Some(target) = pos.en_passant {
            if !pos.ep_capture_possible(target) {
                pos.en_passant = None;
            }
        }
        pos.history.push(Snapshot {
            board: pos.board.clone(),
            side_to_move: pos.side_to_move(),
            castle_rights: pos.castle_rights,
            en_passant: pos.en_passant,
        });
        pos
    }

    /// The board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board configuration this game was constructed with.
    #[inline]
    pub fn setup(&self) -> &BoardSetup {
        &self.setup
    }

    /// The side to move, determined by turn parity.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.players[(self.move_num % 2) as usize]
    }

    /// The side not to move.
    #[inline]
    pub fn other_side(&self) -> Side {
        self.players[((self.move_num + 1) % 2) as usize]
    }

    /// Castling availability for both sides.
    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// The live en-passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Moves applied since the game started.
    #[inline]
    pub fn move_num(&self) -> u32 {
        self.move_num
    }

    /// Half-moves since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Whole moves since the last pawn move or capture, as counted for
    /// the fifty-move rule.
    #[inline]
    pub fn moves_since_progress(&self) -> u32 {
        self.halfmove_clock / 2
    }

    /// The append-only snapshot history, oldest first. The last entry is
    /// always this position itself.
    #[inline]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// How many times the current state has occurred, including now.
    pub fn repetition_count(&self) -> usize {
        match self.history.last() {
            Some(current) => self.history.iter().filter(|s| *s == current).count(),
            None => 0,
        }
    }

    /// The starting square of the given side's rook on the given wing.
    pub(crate) fn castling_rook_square(&self, side: Side, wing: Wing) -> Square {
        let back = side.perspective(0, self.setup.size());
        Square::new(back, self.setup.rook_col(wing))
    }

    /// Enumerates every fully legal move for the side to move: movement
    /// legality per piece kind, plus the constraint that the mover's own
    /// king is not left in check. Pawn moves reaching the far rank fan
    /// out into one move per promotion option.
    ///
    /// Ordering is unspecified; consumers match by equality.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let side = self.side_to_move();
        for (from, piece) in self.board.pieces_of(side) {
            for to in self.board.squares() {
                let mv = Move::new(piece, from, to);
                if !legality::is_movement_legal(&mv, self) {
                    continue;
                }
                // Promotion choice can't affect whether the mover's own
                // king ends up in check, so test the bare move once.
                if self.apply_hypothetical(&mv).king_in_check() {
                    continue;
                }
                if mv.can_be_promoted(self.setup.size()) {
                    for kind in PieceKind::PROMOTIONS {
                        moves.push(mv.with_promotion(kind));
                    }
                } else {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// True if the side to move's king is attacked by any opposing
    /// piece. Returns false on a board without that king; keeping one
    /// king per side on the board is the caller's contract.
    pub fn king_in_check(&self) -> bool {
        let side = self.side_to_move();
        let Some(king_sq) = self.board.king_square(side) else {
            return false;
        };
        self.board
            .pieces_of(self.other_side())
            .any(|(from, piece)| legality::is_attacking(&Move::new(piece, from, king_sq), self))
    }

    /// Applies a move, producing the next position.
    ///
    /// Assumes the move is legal (taken from [`legal_moves`] or vetted
    /// with [`try_apply`]); applying an arbitrary move still terminates
    /// with a value, but the result is only meaningful for legal input.
    ///
    /// [`legal_moves`]: Position::legal_moves
    /// [`try_apply`]: Position::try_apply
    pub fn apply(&self, mv: &Move) -> Position {
        let is_pawn_move = mv.piece.kind == PieceKind::Pawn;
        let is_capture = legality::is_capture(mv, &self.board);

        let mut clock = self.halfmove_clock + 1;
        if is_pawn_move || is_capture {
            clock = 0;
        }

        let mut rights = self.castle_rights;
        for wing in self.relinquished_wings(mv) {
            rights.remove(mv.piece.side, wing);
        }

        let en_passant = if is_pawn_move && mv.row_delta().abs() == 2 {
            between(mv.from, mv.to).first().copied()
        } else {
            None
        };

        Self::build(
            self.setup.clone(),
            self.next_board(mv),
            rights,
            en_passant,
            self.players,
            self.move_num + 1,
            clock,
            self.history.clone(),
        )
    }

    /// Applies the move only if it matches one of the legal moves.
    pub fn try_apply(&self, mv: &Move) -> Option<Position> {
        if self.legal_moves().contains(mv) {
            Some(self.apply(mv))
        } else {
            None
        }
    }

    /// Applies only the board effects of a move, leaving rights, turn,
    /// counters, and draw bookkeeping untouched. Used for testing
    /// whether a move would leave the mover's own king in check; never
    /// exposed as a playable state.
    pub(crate) fn apply_hypothetical(&self, mv: &Move) -> Position {
        Self::build(
            self.setup.clone(),
            self.next_board(mv),
            self.castle_rights,
            None,
            self.players,
            self.move_num,
            self.halfmove_clock,
            Vec::new(),
        )
    }

    /// Computes the board after a move. For a castle the rook is
    /// relocated first; the en-passant test must then run before the
    /// mover vacates its own square, since an en-passant capture is
    /// recognized by its empty destination.
    fn next_board(&self, mv: &Move) -> Board {
        let mut board = match self.castle_rook_move(mv) {
            Some(rook_mv) => self.next_board(&rook_mv),
            None => self.board.clone(),
        };
        if legality::is_en_passant(mv, &board) {
            board.set(legality::en_passant_victim(mv), None);
        }
        board.set(mv.to, Some(mv.piece.promote(mv.promotion)));
        board.set(mv.from, None);
        board
    }

    /// For a castle, the accompanying rook relocation: from the rook's
    /// starting square to the square beside the king's destination on
    /// the side of travel. `None` for non-castles, or when no piece
    /// stands on the rook square.
    fn castle_rook_move(&self, mv: &Move) -> Option<Move> {
        let wing = mv.wing()?;
        let from = self.castling_rook_square(mv.piece.side, wing);
        let rook = self.board.get(from)?;
        // The rook ends adjacent to the king's destination, on the side
        // the king came from.
        let to_col = match wing {
            Wing::Kingside => mv.to.col - 1,
            Wing::Queenside => mv.to.col + 1,
        };
        Some(Move::new(rook, from, Square::new(from.row, to_col)))
    }

    /// The wings this move forfeits: both for a king move, the matching
    /// wing for a rook moving off its original column. Computed from the
    /// moving piece and its start square alone; removing an
    /// already-absent right is a no-op.
    fn relinquished_wings(&self, mv: &Move) -> Vec<Wing> {
        match mv.piece.kind {
            PieceKind::King => vec![Wing::Kingside, Wing::Queenside],
            PieceKind::Rook if mv.from.col == self.setup.rook_col(Wing::Queenside) => {
                vec![Wing::Queenside]
            }
            PieceKind::Rook if mv.from.col == self.setup.rook_col(Wing::Kingside) => {
                vec![Wing::Kingside]
            }
            _ => Vec::new(),
        }
    }

    /// True if some legal pawn move lands on `target`, i.e. the target
    /// is a live en-passant capture square.
    fn ep_capture_possible(&self, target: Square) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| mv.piece.kind == PieceKind::Pawn && mv.to == target)
    }
}

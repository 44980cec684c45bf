//! Move legality evaluation.
//!
//! Pure predicates over (move, position). Everything here ignores the
//! "does not leave your own king in check" constraint - that filter
//! belongs to [`Position::legal_moves`](crate::Position::legal_moves),
//! which tests each candidate against a hypothetical application.
//!
//! Check detection and full legality are two distinct operations:
//! [`is_movement_legal`] evaluates the complete castle branch (rights,
//! check, path-through-check), while the crate-internal attack test used
//! by check detection never enters it - a castle can never deliver a
//! capture, and skipping the branch there is what keeps check testing
//! and generation from recursing into each other.

use crate::{Board, Position};
use arbiter_core::{between, Move, PieceKind, Square};

/// Returns true if the move is a structurally valid movement for its
/// piece kind on the given position.
///
/// Universal rejections first (off-board endpoint, same-side destination,
/// null move, blocked straight-line path), then the per-kind movement
/// rule. Assumes the moving piece sits on the start square; the
/// promotion field is ignored. Castle preconditions are evaluated for
/// the position's side to move.
pub fn is_movement_legal(mv: &Move, pos: &Position) -> bool {
    if !passes_universal_checks(mv, pos.board()) {
        return false;
    }
    match mv.piece.kind {
        PieceKind::Pawn => pawn_rule(mv, pos),
        PieceKind::Knight => knight_rule(mv),
        PieceKind::Bishop => bishop_rule(mv),
        PieceKind::Rook => rook_rule(mv),
        PieceKind::Queen => queen_rule(mv),
        PieceKind::King => {
            if mv.is_castle() {
                castle_rule(mv, pos)
            } else {
                king_step_rule(mv)
            }
        }
    }
}

/// Returns true if the move would deliver a capture on its destination:
/// the raw attack test behind check detection.
///
/// Identical to [`is_movement_legal`] except that the king is held to
/// the one-step rule only.
pub(crate) fn is_attacking(mv: &Move, pos: &Position) -> bool {
    if !passes_universal_checks(mv, pos.board()) {
        return false;
    }
    match mv.piece.kind {
        PieceKind::Pawn => pawn_rule(mv, pos),
        PieceKind::Knight => knight_rule(mv),
        PieceKind::Bishop => bishop_rule(mv),
        PieceKind::Rook => rook_rule(mv),
        PieceKind::Queen => queen_rule(mv),
        PieceKind::King => king_step_rule(mv),
    }
}

fn passes_universal_checks(mv: &Move, board: &Board) -> bool {
    if !board.contains(mv.from) || !board.contains(mv.to) {
        return false;
    }
    if let Some(occupant) = board.get(mv.to) {
        if occupant.side == mv.piece.side {
            return false;
        }
    }
    if mv.from == mv.to {
        return false;
    }
    !path_is_blocked(mv, board)
}

/// True if any piece sits on a square strictly between the move's
/// endpoints. Only operative for straight-line moves; knight-shaped and
/// other irregular moves have an empty intervening set.
pub fn path_is_blocked(mv: &Move, board: &Board) -> bool {
    between(mv.from, mv.to)
        .into_iter()
        .any(|sq| board.get(sq).is_some())
}

fn knight_rule(mv: &Move) -> bool {
    let dr = mv.row_delta().abs();
    let dc = mv.col_delta().abs();
    dr.min(dc) == 1 && dr.max(dc) == 2
}

fn bishop_rule(mv: &Move) -> bool {
    mv.is_diagonal_45() || mv.is_diagonal_135()
}

fn rook_rule(mv: &Move) -> bool {
    mv.is_horizontal() || mv.is_vertical()
}

fn queen_rule(mv: &Move) -> bool {
    bishop_rule(mv) || rook_rule(mv)
}

fn king_step_rule(mv: &Move) -> bool {
    queen_rule(mv) && mv.row_delta().abs() < 2 && mv.col_delta().abs() < 2
}

fn castle_rule(mv: &Move, pos: &Position) -> bool {
    let Some(wing) = mv.wing() else {
        return false;
    };
    if mv.from.row != mv.to.row {
        return false;
    }
    if !pos.castle_rights().allows(mv.piece.side, wing) {
        return false;
    }
    // No need to check that the king is on its starting square: if it
    // has moved, the rights above are already gone.
    if pos.king_in_check() || passes_through_check(mv, pos) {
        return false;
    }
    // The full span from king to rook must be clear. This also rejects
    // castling onto an occupied destination, since the destination lies
    // strictly between the king and the rook.
    let rook_sq = pos.castling_rook_square(mv.piece.side, wing);
    let to_rook = Move::new(mv.piece, mv.from, rook_sq);
    !path_is_blocked(&to_rook, pos.board())
}

/// True if stopping on any square between the move's endpoints would
/// leave the mover's king capturable on the opponent's next move.
fn passes_through_check(mv: &Move, pos: &Position) -> bool {
    between(mv.from, mv.to).into_iter().any(|sq| {
        pos.apply_hypothetical(&Move::new(mv.piece, mv.from, sq))
            .king_in_check()
    })
}

fn pawn_rule(mv: &Move, pos: &Position) -> bool {
    let board = pos.board();
    let target = board.get(mv.to);
    let targets_enemy = target.map_or(false, |piece| piece.side != mv.piece.side);
    // A pawn can only reach the live en-passant target diagonally: the
    // opposing pawn that created it still blocks the forward path.
    if targets_enemy || Some(mv.to) == pos.en_passant() {
        return pawn_capture_rule(mv, board.size());
    }

    let size = board.size();
    let side = mv.piece.side;
    let old_row = i16::from(side.perspective(mv.from.row, size));
    let new_row = i16::from(side.perspective(mv.to.row, size));
    let single_step = new_row == old_row + 1;
    let double_step = old_row == 1 && new_row == old_row + 2;
    mv.is_vertical() && (single_step || double_step)
}

fn pawn_capture_rule(mv: &Move, size: u8) -> bool {
    let side = mv.piece.side;
    let old_row = i16::from(side.perspective(mv.from.row, size));
    let new_row = i16::from(side.perspective(mv.to.row, size));
    new_row == old_row + 1 && mv.col_delta().abs() == 1
}

/// True if the move is an en-passant capture: a pawn changing column
/// onto an empty destination.
///
/// Must be evaluated against the board *before* the pawn vacates its own
/// square - after the pawn has moved, an ordinary diagonal capture would
/// look the same.
pub fn is_en_passant(mv: &Move, board: &Board) -> bool {
    mv.piece.kind == PieceKind::Pawn && mv.from.col != mv.to.col && board.get(mv.to).is_none()
}

/// True if the move captures: an occupied destination, or an en-passant
/// capture.
pub fn is_capture(mv: &Move, board: &Board) -> bool {
    board.get(mv.to).is_some() || is_en_passant(mv, board)
}

/// The square an en-passant capture removes the opposing pawn from: on
/// the mover's starting row, in the destination column.
pub fn en_passant_victim(mv: &Move) -> Square {
    Square::new(mv.from.row, mv.to.col)
}

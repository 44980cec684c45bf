//! Castling and en-passant behavior, end to end through the public API.

use arbiter_core::{BoardSetup, Move, Piece, PieceKind, Side, Square, Wing};
use arbiter_rules::{Board, CastleRights, Position};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn piece(kind: PieceKind, side: Side) -> Piece {
    Piece::new(kind, side)
}

/// Kings and all four rooks on their home squares, nothing else.
fn castling_board() -> Board {
    let mut board = Board::empty(8);
    board.set(sq(0, 4), Some(piece(PieceKind::King, Side::White)));
    board.set(sq(0, 0), Some(piece(PieceKind::Rook, Side::White)));
    board.set(sq(0, 7), Some(piece(PieceKind::Rook, Side::White)));
    board.set(sq(7, 4), Some(piece(PieceKind::King, Side::Black)));
    board.set(sq(7, 0), Some(piece(PieceKind::Rook, Side::Black)));
    board.set(sq(7, 7), Some(piece(PieceKind::Rook, Side::Black)));
    board
}

fn castling_position(board: Board, rights: CastleRights, to_move: Side) -> Position {
    let players = [to_move, to_move.opposite()];
    Position::with_board(BoardSetup::standard(), board, rights, None, players)
        .expect("board matches setup size")
}

fn has_move(pos: &Position, from: Square, to: Square) -> bool {
    pos.legal_moves()
        .iter()
        .any(|mv| mv.from == from && mv.to == to)
}

#[test]
fn both_castles_available_on_an_open_board() {
    let pos = castling_position(castling_board(), CastleRights::FULL, Side::White);
    assert!(has_move(&pos, sq(0, 4), sq(0, 6)));
    assert!(has_move(&pos, sq(0, 4), sq(0, 2)));
}

#[test]
fn black_castles_from_its_own_back_rank() {
    let pos = castling_position(castling_board(), CastleRights::FULL, Side::Black);
    assert!(has_move(&pos, sq(7, 4), sq(7, 6)));
    assert!(has_move(&pos, sq(7, 4), sq(7, 2)));
}

#[test]
fn castling_requires_the_right() {
    let mut rights = CastleRights::FULL;
    rights.remove(Side::White, Wing::Kingside);
    let pos = castling_position(castling_board(), rights, Side::White);
    assert!(!has_move(&pos, sq(0, 4), sq(0, 6)));
    assert!(has_move(&pos, sq(0, 4), sq(0, 2)));
}

#[test]
fn castling_blocked_by_a_piece_between_king_and_destination() {
    let mut board = castling_board();
    board.set(sq(0, 5), Some(piece(PieceKind::Bishop, Side::White)));
    let pos = castling_position(board, CastleRights::FULL, Side::White);
    assert!(!has_move(&pos, sq(0, 4), sq(0, 6)));
    assert!(has_move(&pos, sq(0, 4), sq(0, 2)));
}

#[test]
fn queenside_castling_blocked_by_a_piece_on_the_rook_path() {
    // b1 is outside the king's two-square walk but on the rook's path.
    let mut board = castling_board();
    board.set(sq(0, 1), Some(piece(PieceKind::Knight, Side::White)));
    let pos = castling_position(board, CastleRights::FULL, Side::White);
    assert!(!has_move(&pos, sq(0, 4), sq(0, 2)));
    assert!(has_move(&pos, sq(0, 4), sq(0, 6)));
}

#[test]
fn no_castling_while_in_check() {
    let mut board = castling_board();
    board.set(sq(4, 4), Some(piece(PieceKind::Rook, Side::Black)));
    let pos = castling_position(board, CastleRights::FULL, Side::White);
    assert!(pos.king_in_check());
    assert!(!has_move(&pos, sq(0, 4), sq(0, 6)));
    assert!(!has_move(&pos, sq(0, 4), sq(0, 2)));
}

#[test]
fn no_castling_through_an_attacked_square() {
    // Black rook on the f-file covers f1, the square the king crosses
    // kingside. Queenside is unaffected.
    let mut board = castling_board();
    board.set(sq(4, 5), Some(piece(PieceKind::Rook, Side::Black)));
    let pos = castling_position(board, CastleRights::FULL, Side::White);
    assert!(!pos.king_in_check());
    assert!(!has_move(&pos, sq(0, 4), sq(0, 6)));
    assert!(has_move(&pos, sq(0, 4), sq(0, 2)));
}

#[test]
fn castling_into_check_is_rejected_like_any_move() {
    // Black rook covers g1, the kingside destination itself.
    let mut board = castling_board();
    board.set(sq(4, 6), Some(piece(PieceKind::Rook, Side::Black)));
    let pos = castling_position(board, CastleRights::FULL, Side::White);
    assert!(!has_move(&pos, sq(0, 4), sq(0, 6)));
}

#[test]
fn kingside_castle_relocates_the_rook() {
    let pos = castling_position(castling_board(), CastleRights::FULL, Side::White);
    let castle = Move::new(piece(PieceKind::King, Side::White), sq(0, 4), sq(0, 6));
    let after = pos.try_apply(&castle).expect("castle should be legal");

    assert_eq!(
        after.board().get(sq(0, 6)),
        Some(piece(PieceKind::King, Side::White))
    );
    assert_eq!(
        after.board().get(sq(0, 5)),
        Some(piece(PieceKind::Rook, Side::White))
    );
    assert_eq!(after.board().get(sq(0, 7)), None);
    assert_eq!(after.board().get(sq(0, 4)), None);

    let rights = after.castle_rights();
    assert!(!rights.allows(Side::White, Wing::Kingside));
    assert!(!rights.allows(Side::White, Wing::Queenside));
    assert!(rights.allows(Side::Black, Wing::Kingside));
}

#[test]
fn queenside_castle_relocates_the_rook() {
    let pos = castling_position(castling_board(), CastleRights::FULL, Side::Black);
    let castle = Move::new(piece(PieceKind::King, Side::Black), sq(7, 4), sq(7, 2));
    let after = pos.try_apply(&castle).expect("castle should be legal");

    assert_eq!(
        after.board().get(sq(7, 2)),
        Some(piece(PieceKind::King, Side::Black))
    );
    assert_eq!(
        after.board().get(sq(7, 3)),
        Some(piece(PieceKind::Rook, Side::Black))
    );
    assert_eq!(after.board().get(sq(7, 0)), None);
    assert!(!after.castle_rights().allows(Side::Black, Wing::Queenside));
    assert!(after.castle_rights().allows(Side::White, Wing::Queenside));
}

#[test]
fn moving_a_rook_then_returning_does_not_restore_the_right() {
    let pos = castling_position(castling_board(), CastleRights::FULL, Side::White);
    let rook = piece(PieceKind::Rook, Side::White);

    let mut game = pos.try_apply(&Move::new(rook, sq(0, 7), sq(3, 7))).unwrap();
    let black_rook = piece(PieceKind::Rook, Side::Black);
    game = game
        .try_apply(&Move::new(black_rook, sq(7, 7), sq(5, 7)))
        .unwrap();
    game = game.try_apply(&Move::new(rook, sq(3, 7), sq(0, 7))).unwrap();

    assert!(!game.castle_rights().allows(Side::White, Wing::Kingside));
    assert!(game.castle_rights().allows(Side::White, Wing::Queenside));
    assert!(!game.castle_rights().allows(Side::Black, Wing::Kingside));
}

#[test]
fn en_passant_window_opens_and_closes() {
    // White pawn on e5-equivalent column d/e: place a white pawn on
    // (4, 4) and a black pawn on (6, 3); kings far away.
    let mut board = Board::empty(8);
    board.set(sq(0, 0), Some(piece(PieceKind::King, Side::White)));
    board.set(sq(7, 7), Some(piece(PieceKind::King, Side::Black)));
    board.set(sq(4, 4), Some(piece(PieceKind::Pawn, Side::White)));
    board.set(sq(6, 3), Some(piece(PieceKind::Pawn, Side::Black)));
    let pos = Position::with_board(
        BoardSetup::standard(),
        board,
        CastleRights::NONE,
        None,
        [Side::Black, Side::White],
    )
    .unwrap();

    // Black plays the double step past the white pawn.
    let double = Move::new(piece(PieceKind::Pawn, Side::Black), sq(6, 3), sq(4, 3));
    let after = pos.try_apply(&double).expect("double step should be legal");
    assert_eq!(after.en_passant(), Some(sq(5, 3)));
    assert!(has_move(&after, sq(4, 4), sq(5, 3)));

    // If White plays something else the window closes.
    let king_step = Move::new(piece(PieceKind::King, Side::White), sq(0, 0), sq(0, 1));
    let later = after.try_apply(&king_step).expect("king step is legal");
    assert_eq!(later.en_passant(), None);
    let black_reply = Move::new(piece(PieceKind::King, Side::Black), sq(7, 7), sq(7, 6));
    let back_to_white = later.try_apply(&black_reply).unwrap();
    assert!(!has_move(&back_to_white, sq(4, 4), sq(5, 3)));
}

#[test]
fn en_passant_capture_removes_the_victim() {
    let mut board = Board::empty(8);
    board.set(sq(0, 0), Some(piece(PieceKind::King, Side::White)));
    board.set(sq(7, 7), Some(piece(PieceKind::King, Side::Black)));
    board.set(sq(4, 4), Some(piece(PieceKind::Pawn, Side::White)));
    board.set(sq(6, 3), Some(piece(PieceKind::Pawn, Side::Black)));
    let pos = Position::with_board(
        BoardSetup::standard(),
        board,
        CastleRights::NONE,
        None,
        [Side::Black, Side::White],
    )
    .unwrap();

    let double = Move::new(piece(PieceKind::Pawn, Side::Black), sq(6, 3), sq(4, 3));
    let after = pos.try_apply(&double).unwrap();

    let capture = Move::new(piece(PieceKind::Pawn, Side::White), sq(4, 4), sq(5, 3));
    let taken = after.try_apply(&capture).expect("en passant should be legal");
    assert_eq!(
        taken.board().get(sq(5, 3)),
        Some(piece(PieceKind::Pawn, Side::White))
    );
    assert_eq!(taken.board().get(sq(4, 3)), None);
    assert_eq!(taken.board().get(sq(4, 4)), None);
    assert_eq!(taken.halfmove_clock(), 0);
}

#[test]
fn single_step_does_not_open_an_en_passant_window() {
    let mut board = Board::empty(8);
    board.set(sq(0, 0), Some(piece(PieceKind::King, Side::White)));
    board.set(sq(7, 7), Some(piece(PieceKind::King, Side::Black)));
    board.set(sq(5, 4), Some(piece(PieceKind::Pawn, Side::White)));
    board.set(sq(6, 3), Some(piece(PieceKind::Pawn, Side::Black)));
    let pos = Position::with_board(
        BoardSetup::standard(),
        board,
        CastleRights::NONE,
        None,
        [Side::Black, Side::White],
    )
    .unwrap();

    let single = Move::new(piece(PieceKind::Pawn, Side::Black), sq(6, 3), sq(5, 3));
    let after = pos.try_apply(&single).expect("single step is legal");
    assert_eq!(after.en_passant(), None);
}

//! Terminal and claimable game outcomes.
//!
//! The rules engine itself never ends a game; these functions compute
//! the signals a game driver acts on. [`adjudicate`] reports outcomes
//! that end the game on the spot (checkmate, stalemate, and the
//! mandatory draw rules), while [`claimable_draw`] reports draws the
//! side to move may claim but is free to ignore.

use crate::Position;
use arbiter_core::Side;

/// Fivefold repetition ends the game without a claim.
const AUTOMATIC_REPETITIONS: usize = 5;

/// Threefold repetition makes a draw claimable.
const CLAIMABLE_REPETITIONS: usize = 3;

/// Seventy-five full moves without progress end the game.
const AUTOMATIC_CLOCK: u32 = 150;

/// Fifty full moves without progress make a draw claimable.
const CLAIMABLE_CLOCK: u32 = 100;

/// Why a game is (or may be declared) drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// No legal moves and not in check.
    Stalemate,
    /// Fifty full moves without a pawn move or capture; claimable.
    FiftyMoveRule,
    /// Seventy-five full moves without a pawn move or capture; automatic.
    SeventyFiveMoveRule,
    /// The same state occurred three times; claimable.
    ThreefoldRepetition,
    /// The same state occurred five times; automatic.
    FivefoldRepetition,
}

/// A finished game's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw(DrawReason),
}

/// Returns the outcome if the game is over in this position, checked in
/// order: fivefold repetition, the seventy-five move rule, then
/// checkmate or stalemate when the side to move has no legal moves.
pub fn adjudicate(pos: &Position) -> Option<Outcome> {
    if pos.repetition_count() >= AUTOMATIC_REPETITIONS {
        return Some(Outcome::Draw(DrawReason::FivefoldRepetition));
    }
    if pos.halfmove_clock() >= AUTOMATIC_CLOCK {
        return Some(Outcome::Draw(DrawReason::SeventyFiveMoveRule));
    }
    if pos.legal_moves().is_empty() {
        if pos.king_in_check() {
            return Some(Outcome::Win(pos.other_side()));
        }
        return Some(Outcome::Draw(DrawReason::Stalemate));
    }
    None
}

/// Returns a draw the side to move may claim, or `None` if the game is
/// already over or no claim is available.
pub fn claimable_draw(pos: &Position) -> Option<DrawReason> {
    if adjudicate(pos).is_some() {
        return None;
    }
    if pos.repetition_count() >= CLAIMABLE_REPETITIONS {
        return Some(DrawReason::ThreefoldRepetition);
    }
    if pos.halfmove_clock() >= CLAIMABLE_CLOCK {
        return Some(DrawReason::FiftyMoveRule);
    }
    None
}

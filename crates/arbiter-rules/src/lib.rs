//! Chess rules engine: a legality oracle and state transducer.
//!
//! This crate provides:
//! - [`Board`] - a total mapping from every square to an optional piece
//! - [`CastleRights`] - per-side castling availability, removal-only
//! - [`legality`] - the stateless move legality evaluator
//! - [`Position`] - the immutable game state machine: legal-move
//!   enumeration, check detection, and the `apply` transition with
//!   repetition history and half-move clock bookkeeping
//! - [`outcome`] - draw and terminal signals computed for the driver
//!
//! # Architecture
//!
//! The evaluator is a pure function of (move, position); the position
//! state machine calls it during move generation and move application.
//! Every transition produces a brand-new [`Position`] value - nothing is
//! mutated in place, and illegal moves are ordinary `false` results or
//! absence from the legal-move list, never errors.
//!
//! # Example
//!
//! ```
//! use arbiter_rules::Position;
//!
//! let start = Position::standard();
//! let moves = start.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let next = start.apply(&moves[0]);
//! assert_eq!(next.side_to_move(), start.other_side());
//! ```

mod board;
pub mod legality;
pub mod outcome;
mod position;
mod rights;

pub use board::Board;
pub use outcome::{DrawReason, Outcome};
pub use position::{Position, PositionError, Snapshot};
pub use rights::CastleRights;

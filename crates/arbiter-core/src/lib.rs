//! Core types for a chess rules engine.
//!
//! This crate provides the fundamental value types consumed by the rules
//! crate and by surrounding drivers:
//! - [`Side`] for player identity and the row perspective transform
//! - [`Piece`] and [`PieceKind`] for piece representation
//! - [`Square`] for board coordinates, plus [`between`] for the squares
//!   a straight-line move crosses
//! - [`Move`] for move proposals (legality is a derived predicate, not an
//!   invariant of construction)
//! - [`BoardSetup`] for the board dimension and back-rank configuration

mod mov;
mod piece;
mod setup;
mod side;
mod square;

pub use mov::{Move, Wing};
pub use piece::{Piece, PieceKind};
pub use setup::{BoardSetup, SetupError};
pub use side::Side;
pub use square::{between, Square};

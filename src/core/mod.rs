//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game::{drop_interval_for_level, level_for_lines, GameSession};
pub use piece::{Piece, Shape, ShapeCells};
pub use rng::{PieceGen, SimpleRng};

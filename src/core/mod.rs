//! Core domain types for the VOCAB board
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod cell;
pub mod grid;
pub mod input;
mod row;

pub use cell::{Cell, LetterStatus};
pub use row::Row;

/// Number of letters in a guess
pub const WORD_LENGTH: usize = 5;

/// Number of attempts shown on the board
pub const MAX_ATTEMPTS: usize = 5;

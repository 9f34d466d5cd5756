//! Wire types for the remote game authority
//!
//! JSON request/response shapes for the four API operations. Only the
//! fields the client depends on are modeled; unknown fields in the
//! responses are ignored.

use crate::core::{Cell, LetterStatus};
use serde::{Deserialize, Serialize};

/// Game status as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if the game has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Response of the start, fetch-state and new-game operations
#[derive(Debug, Clone, Deserialize)]
pub struct StateResponse {
    pub attempts_remaining: u32,
    pub status: GameStatus,
    #[serde(default)]
    pub secret_word: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}

/// Request body of the guess operation
#[derive(Debug, Clone, Serialize)]
pub struct GuessRequest<'a> {
    pub guess: &'a str,
}

/// One per-letter feedback item in a guess response
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackItem {
    pub letter: String,
    pub status: LetterStatus,
}

impl FeedbackItem {
    /// Convert into a board cell
    ///
    /// Takes the first character of `letter`, upper-cased; an empty
    /// letter yields a letterless cell.
    #[must_use]
    pub fn to_cell(&self) -> Cell {
        let letter = self
            .letter
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next());
        Cell::new(letter, self.status)
    }
}

/// Response of the guess operation
#[derive(Debug, Clone, Deserialize)]
pub struct GuessResponse {
    pub feedback: Vec<FeedbackItem>,
    pub attempts_remaining: u32,
    pub status: GameStatus,
    #[serde(default)]
    pub secret_word: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}

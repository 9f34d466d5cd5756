//! Board cell representation
//!
//! A cell pairs one guessed letter with the feedback the remote
//! authority returned for it. Blank cells never come from the server;
//! they are synthesized locally to pad the visual grid.

use serde::Deserialize;

/// Per-letter feedback classification
///
/// The three non-blank variants use the wire names of the game API;
/// `Blank` exists only on the client, for unplayed grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    #[serde(rename = "present_wrong_position")]
    WrongPosition,
    /// Letter not in the secret word
    Absent,
    /// Unplayed padding cell (local only)
    #[serde(skip)]
    Blank,
}

/// One cell of the game board
///
/// Immutable once built from a server response. `letter` is `None`
/// for blank padding cells and for feedback items the server sent
/// with an empty letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

impl Cell {
    /// Padding cell for unplayed grid rows
    pub const BLANK: Self = Self {
        letter: None,
        status: LetterStatus::Blank,
    };

    /// Empty-letter cell with `Absent` status, used to pad short
    /// feedback rows up to the word length
    pub const EMPTY: Self = Self {
        letter: None,
        status: LetterStatus::Absent,
    };

    #[must_use]
    pub const fn new(letter: Option<char>, status: LetterStatus) -> Self {
        Self { letter, status }
    }

    /// Check if this is a blank padding cell
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self.status, LetterStatus::Blank)
    }
}

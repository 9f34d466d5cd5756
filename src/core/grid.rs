//! Visual grid projection
//!
//! Derives the fixed-size render-ready board from the attempt history.
//! Padding is purely a function of how many rows were actually played,
//! never of the server's remaining-attempts counter; the two are
//! allowed to diverge.

use super::row::Row;
use super::MAX_ATTEMPTS;

/// Project the attempt history onto a full board
///
/// Returns exactly [`MAX_ATTEMPTS`] rows: the recorded attempts first,
/// then all-blank rows. Pure and idempotent — the same history always
/// yields structurally equal output.
#[must_use]
pub fn project(history: &[Row]) -> Vec<Row> {
    let mut rows: Vec<Row> = history.iter().take(MAX_ATTEMPTS).copied().collect();
    rows.resize(MAX_ATTEMPTS, Row::BLANK);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::{Cell, LetterStatus};
    use crate::core::WORD_LENGTH;

    fn played_row(letter: char) -> Row {
        Row::from_cells(std::iter::repeat_n(
            Cell::new(Some(letter), LetterStatus::Absent),
            WORD_LENGTH,
        ))
    }

    #[test]
    fn empty_history_projects_to_all_blank_board() {
        let board = project(&[]);

        assert_eq!(board.len(), MAX_ATTEMPTS);
        for row in &board {
            assert_eq!(*row, Row::BLANK);
            assert_eq!(row.cells().len(), WORD_LENGTH);
        }
    }

    #[test]
    fn two_attempts_project_to_two_real_rows_plus_blanks() {
        let history = vec![played_row('A'), played_row('B')];
        let board = project(&history);

        assert_eq!(board.len(), MAX_ATTEMPTS);
        assert_eq!(board[0], history[0]);
        assert_eq!(board[1], history[1]);
        for row in &board[2..] {
            assert_eq!(*row, Row::BLANK);
            for cell in row.cells() {
                assert_eq!(cell.letter, None);
                assert_eq!(cell.status, LetterStatus::Blank);
            }
        }
    }

    #[test]
    fn full_history_projects_without_padding() {
        let history: Vec<Row> = "ABCDE".chars().map(played_row).collect();
        let board = project(&history);

        assert_eq!(board.len(), MAX_ATTEMPTS);
        assert_eq!(board, history);
    }

    #[test]
    fn board_size_holds_for_every_history_length() {
        let full: Vec<Row> = "ABCDE".chars().map(played_row).collect();
        for n in 0..=MAX_ATTEMPTS {
            let board = project(&full[..n]);
            assert_eq!(board.len(), MAX_ATTEMPTS);
            assert!(board.iter().all(|r| r.cells().len() == WORD_LENGTH));
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let history = vec![played_row('X')];
        assert_eq!(project(&history), project(&history));
    }
}

//! Attempt row representation
//!
//! A row holds the evaluated feedback for one submitted guess: exactly
//! [`WORD_LENGTH`] cells, produced atomically from one server response
//! and never mutated afterwards.

use super::cell::{Cell, LetterStatus};
use super::WORD_LENGTH;

/// One evaluated attempt on the board
///
/// Always exactly [`WORD_LENGTH`] cells. Excess feedback items are
/// ignored and shortfall is padded with empty-letter `Absent` cells,
/// so a row can be built from any server response without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    /// All-blank row used to pad the visual grid
    pub const BLANK: Self = Self {
        cells: [Cell::BLANK; WORD_LENGTH],
    };

    /// Build a row from per-letter cells, truncating or padding to
    /// [`WORD_LENGTH`]
    #[must_use]
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut row = [Cell::EMPTY; WORD_LENGTH];
        for (slot, cell) in row.iter_mut().zip(cells) {
            *slot = cell;
        }
        Self { cells: row }
    }

    /// Get the cells of this row
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Check if every cell is an exact match
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.status == LetterStatus::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(letter: char, status: LetterStatus) -> Cell {
        Cell::new(Some(letter), status)
    }

    #[test]
    fn row_from_exact_cells() {
        let cells = [
            cell('C', LetterStatus::Correct),
            cell('A', LetterStatus::WrongPosition),
            cell('S', LetterStatus::Absent),
            cell('A', LetterStatus::Correct),
            cell('L', LetterStatus::Absent),
        ];
        let row = Row::from_cells(cells);

        assert_eq!(row.cells()[0], cell('C', LetterStatus::Correct));
        assert_eq!(row.cells()[4], cell('L', LetterStatus::Absent));
    }

    #[test]
    fn row_truncates_excess_cells() {
        let cells = vec![cell('A', LetterStatus::Correct); 8];
        let row = Row::from_cells(cells);

        assert_eq!(row.cells().len(), WORD_LENGTH);
        assert!(row.is_all_correct());
    }

    #[test]
    fn row_pads_shortfall_with_empty_absent_cells() {
        let cells = vec![
            cell('A', LetterStatus::Correct),
            cell('B', LetterStatus::WrongPosition),
        ];
        let row = Row::from_cells(cells);

        assert_eq!(row.cells()[1], cell('B', LetterStatus::WrongPosition));
        for filler in &row.cells()[2..] {
            assert_eq!(*filler, Cell::EMPTY);
        }
    }

    #[test]
    fn blank_row_is_all_blank_cells() {
        assert!(Row::BLANK.cells().iter().all(|cell| cell.is_blank()));
        assert!(!Row::BLANK.is_all_correct());
    }

    #[test]
    fn is_all_correct_requires_every_cell() {
        let mut cells = vec![cell('A', LetterStatus::Correct); WORD_LENGTH];
        cells[3] = cell('A', LetterStatus::WrongPosition);
        assert!(!Row::from_cells(cells).is_all_correct());
    }
}

//! Presentation projections
//!
//! Pure functions deriving display strings from the session. Nothing
//! here is cached; callers recompute on every frame, which keeps the
//! rendering idempotent with respect to the session state.

use crate::core::{Cell, LetterStatus, Row};
use crate::session::{Session, Status};
use colored::Colorize;

/// Format one cell as a colored block for plain-terminal output
#[must_use]
pub fn cell_to_ansi(cell: Cell) -> String {
    let letter = cell.letter.unwrap_or(' ');
    let text = format!(" {letter} ");
    match cell.status {
        LetterStatus::Correct => text.black().on_green().to_string(),
        LetterStatus::WrongPosition => text.black().on_yellow().to_string(),
        LetterStatus::Absent => text.white().on_bright_black().to_string(),
        LetterStatus::Blank => " · ".bright_black().to_string(),
    }
}

/// Format one row as a colored line
#[must_use]
pub fn row_to_ansi(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|&cell| cell_to_ansi(cell))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder text for the input field
#[must_use]
pub fn placeholder(session: &Session) -> &'static str {
    match session.status() {
        Status::Uninitialized => "Digite 5 letras",
        Status::Won => "Você venceu!",
        Status::Lost => "Tente novamente (Nova partida)",
        Status::InProgress => "Digite 5 letras e pressione Enter",
    }
}

/// One-line status message under the board
#[must_use]
pub fn status_message(session: &Session) -> String {
    match session.status() {
        Status::Uninitialized => String::new(),
        Status::Won => "🎉 Você acertou!".to_string(),
        Status::Lost => "💀 Fim de jogo. Tente outra vez.".to_string(),
        Status::InProgress => {
            format!("Tentativas restantes: {}", session.attempts_remaining())
        }
    }
}

/// Revealed secret word line, when the server disclosed it
#[must_use]
pub fn secret_reveal(session: &Session) -> Option<String> {
    if session.status().is_terminal() {
        session
            .secret_word()
            .map(|word| format!("A palavra era: {word}"))
    } else {
        None
    }
}

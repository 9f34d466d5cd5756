//! Shareable result encoding
//!
//! Converts the attempt history into the copy-pasteable text block
//! players paste into chats: a header, one emoji line per attempt and
//! the score when the server reported one. Only the symbolic feedback
//! is exported — never the letters, never the secret word.

use crate::core::{LetterStatus, Row};
use std::fmt::Write;

/// Fixed first line of every shared result
pub const HEADER: &str = "Joguei vocab!";

/// Glyph for one feedback status
///
/// Blank and empty cells collapse into the dark glyph; the share text
/// distinguishes only hits and near-hits.
#[must_use]
pub const fn glyph(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '\u{1F7E9}',       // 🟩
        LetterStatus::WrongPosition => '\u{1F7E8}', // 🟨
        LetterStatus::Absent | LetterStatus::Blank => '\u{2B1B}', // ⬛
    }
}

/// Encode a finished (or in-progress) history as share text
///
/// Deterministic: the same history and score always produce
/// byte-identical output.
#[must_use]
pub fn encode(history: &[Row], score: Option<i64>) -> String {
    let mut out = String::from(HEADER);

    for row in history {
        out.push('\n');
        for cell in row.cells() {
            out.push(glyph(cell.status));
        }
    }

    if let Some(score) = score {
        let _ = write!(out, "\nPontuação: {score}");
    }

    out
}

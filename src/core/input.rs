//! Guess input normalization and validation
//!
//! Two-stage design: a permissive [`filter`] that cleans whatever the
//! player types (never fails), and a strict [`check_ready`] gate that
//! decides whether the cleaned input may be submitted. An invalid
//! guess can therefore never reach the wire.

use super::WORD_LENGTH;
use std::fmt;

/// Error type for guesses that fail the submission gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength(usize),
    InvalidCharacters,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(_) | Self::InvalidCharacters => {
                write!(f, "Digite exatamente {WORD_LENGTH} letras (A\u{2013}Z).")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Check if a character is a Latin letter, accented or not
///
/// Matches the Latin-1 letter ranges, skipping the × and ÷ signs that
/// sit between them.
#[inline]
#[must_use]
pub const fn is_latin_letter(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{FF}')
}

/// Check if a character is an uppercase Latin letter
#[inline]
#[must_use]
const fn is_uppercase_latin(c: char) -> bool {
    matches!(c, 'A'..='Z' | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{DE}')
}

/// Permissive live-typing filter
///
/// Drops everything that is not a Latin letter, upper-cases what
/// remains and truncates to [`WORD_LENGTH`] characters. Digits,
/// punctuation and control characters are silently discarded; this
/// function never fails.
///
/// # Examples
/// ```
/// use vocab_client::core::input::filter;
///
/// assert_eq!(filter("ação1"), "AÇÃO");
/// assert_eq!(filter("  ca-sal! "), "CASAL");
/// assert_eq!(filter("abcdefgh"), "ABCDE");
/// ```
#[must_use]
pub fn filter(raw: &str) -> String {
    raw.chars()
        .filter(|c| is_latin_letter(*c))
        .flat_map(char::to_uppercase)
        .take(WORD_LENGTH)
        .collect()
}

/// Strict submission gate
///
/// A guess qualifies only if it is exactly [`WORD_LENGTH`] uppercase
/// Latin letters. Anything else blocks submission with a user-facing
/// error; the request for an unqualified guess is never issued.
pub fn check_ready(input: &str) -> Result<(), GuessError> {
    let len = input.chars().count();
    if len != WORD_LENGTH {
        return Err(GuessError::WrongLength(len));
    }
    if !input.chars().all(is_uppercase_latin) {
        return Err(GuessError::InvalidCharacters);
    }
    Ok(())
}

//! Game session state machine
//!
//! Tracks the attempt history, the in-progress guess and the
//! authoritative counters the server reports. Transitions that talk to
//! the network are split into `begin_*` / `complete_*` / [`Session::fail_request`]
//! pairs: the begin step validates and enters the awaiting-response
//! phase, the complete step merges one server response atomically, and
//! the fail step only clears the phase. The session is therefore never
//! left half-updated, and a second submission cannot race an in-flight
//! one.

use crate::api::{ApiError, FeedbackItem, GameStatus, GuessResponse, StateResponse};
use crate::core::input::{self, GuessError};
use crate::core::{MAX_ATTEMPTS, Row};
use std::fmt;
use tracing::info;

/// Lifecycle status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No server state received yet
    Uninitialized,
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Check if the game has ended; terminal sessions accept no
    /// further guesses until a new game starts
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl From<GameStatus> for Status {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Self::InProgress,
            GameStatus::Won => Self::Won,
            GameStatus::Lost => Self::Lost,
        }
    }
}

/// Request sub-state of a session
///
/// `AwaitingResponse` is entered by every `begin_*` transition and
/// left by the matching `complete_*` or by [`Session::fail_request`].
/// While awaiting, new submissions are rejected; typing stays allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

/// Error type for session transitions
#[derive(Debug)]
pub enum SessionError {
    /// The game is not in progress (never started, or already over)
    NotPlaying,
    /// A request is already in flight
    Busy,
    /// Server reports zero attempts remaining
    NoAttemptsLeft,
    /// The current input fails the submission gate (local, no network)
    Validation(GuessError),
    /// The remote call failed; the session was not mutated
    Transport(ApiError),
    /// The server answered with zero attempts remaining while still
    /// in progress; the response was discarded
    InconsistentResponse,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlaying => write!(f, "O jogo não está em andamento."),
            Self::Busy => write!(f, "Aguardando resposta do servidor."),
            Self::NoAttemptsLeft => write!(f, "Sem tentativas restantes."),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "{err}"),
            Self::InconsistentResponse => {
                write!(f, "Resposta inconsistente do servidor.")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// Client-side state of one game session
///
/// Created empty, replaced wholesale by start / new-game responses,
/// appended to by guess responses, and discarded at the end of the
/// process. History is append-only; rows are never mutated after
/// insertion.
#[derive(Debug)]
pub struct Session {
    status: Status,
    attempts_remaining: u32,
    history: Vec<Row>,
    current_input: String,
    secret_word: Option<String>,
    score: Option<i64>,
    phase: Phase,
}

impl Session {
    /// Create an uninitialized session
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: Status::Uninitialized,
            attempts_remaining: 0,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            current_input: String::new(),
            secret_word: None,
            score: None,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Attempts remaining, as last reported by the server
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Evaluated attempts, in chronological order
    #[must_use]
    pub fn history(&self) -> &[Row] {
        &self.history
    }

    /// The normalized in-progress guess
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The secret word, revealed by the server only at game end
    #[must_use]
    pub fn secret_word(&self) -> Option<&str> {
        self.secret_word.as_deref()
    }

    /// Final score, present only at game end
    #[must_use]
    pub const fn score(&self) -> Option<i64> {
        self.score
    }

    /// Check if a request is in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse)
    }

    /// Replace the in-progress guess with a normalized copy of `raw`
    ///
    /// Ignored once the game is over or before it starts. Allowed
    /// while a request is in flight, so the player is never locked out
    /// of editing.
    pub fn set_input(&mut self, raw: &str) {
        if self.status == Status::InProgress {
            self.current_input = input::filter(raw);
        }
    }

    /// Append one typed character to the in-progress guess
    pub fn push_char(&mut self, c: char) {
        if self.status == Status::InProgress {
            let mut raw = self.current_input.clone();
            raw.push(c);
            self.current_input = input::filter(&raw);
        }
    }

    /// Delete the last character of the in-progress guess
    pub fn pop_char(&mut self) {
        if self.status == Status::InProgress {
            self.current_input.pop();
        }
    }

    /// Enter the awaiting phase for a start / state / new-game request
    ///
    /// Allowed from any status, including terminal ones.
    pub fn begin_request(&mut self) -> Result<(), SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        self.phase = Phase::AwaitingResponse;
        Ok(())
    }

    /// Validate the current input and enter the awaiting phase for a
    /// guess request
    ///
    /// Returns the guess to put on the wire. Fails locally — with no
    /// network call and no state change — when the game is not in
    /// progress, a request is already in flight, no attempts remain,
    /// or the input does not qualify for submission.
    pub fn begin_submit(&mut self) -> Result<String, SessionError> {
        if self.status != Status::InProgress {
            return Err(SessionError::NotPlaying);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        if self.attempts_remaining == 0 {
            return Err(SessionError::NoAttemptsLeft);
        }
        input::check_ready(&self.current_input).map_err(SessionError::Validation)?;

        self.phase = Phase::AwaitingResponse;
        Ok(self.current_input.clone())
    }

    /// Replace the whole session with a start / new-game response
    pub fn complete_reset(&mut self, state: &StateResponse) {
        self.status = state.status.into();
        self.attempts_remaining = state.attempts_remaining;
        self.history.clear();
        self.current_input.clear();
        self.secret_word = state.secret_word.clone();
        self.score = state.score;
        self.phase = Phase::Idle;
        info!(status = ?self.status, attempts = self.attempts_remaining, "session reset");
    }

    /// Merge a fetch-state response without touching the history or
    /// the in-progress guess
    pub fn complete_refresh(&mut self, state: &StateResponse) {
        self.status = state.status.into();
        self.attempts_remaining = state.attempts_remaining;
        if state.secret_word.is_some() {
            self.secret_word = state.secret_word.clone();
        }
        if state.score.is_some() {
            self.score = state.score;
        }
        self.phase = Phase::Idle;
    }

    /// Merge a guess response: append one row, adopt the server's
    /// counters, clear the input
    ///
    /// All-or-nothing: a response claiming zero attempts remaining
    /// while still in progress is discarded as inconsistent and the
    /// session only leaves the awaiting phase.
    pub fn complete_submit(&mut self, response: &GuessResponse) -> Result<(), SessionError> {
        if response.status == GameStatus::InProgress && response.attempts_remaining == 0 {
            self.phase = Phase::Idle;
            return Err(SessionError::InconsistentResponse);
        }

        if self.history.len() < MAX_ATTEMPTS {
            let row = Row::from_cells(response.feedback.iter().map(FeedbackItem::to_cell));
            self.history.push(row);
        }
        self.status = response.status.into();
        self.attempts_remaining = response.attempts_remaining;
        if response.secret_word.is_some() {
            self.secret_word = response.secret_word.clone();
        }
        if response.score.is_some() {
            self.score = response.score;
        }
        self.current_input.clear();
        self.phase = Phase::Idle;
        info!(
            status = ?self.status,
            attempts = self.attempts_remaining,
            rows = self.history.len(),
            "guess merged"
        );
        Ok(())
    }

    /// Leave the awaiting phase after a failed request; nothing else
    /// is mutated, so the action stays retryable
    pub fn fail_request(&mut self) {
        self.phase = Phase::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, WORD_LENGTH};

    fn started() -> Session {
        let mut session = Session::new();
        session.begin_request().unwrap();
        session.complete_reset(&StateResponse {
            attempts_remaining: 5,
            status: GameStatus::InProgress,
            secret_word: None,
            score: None,
        });
        session
    }

    fn feedback(statuses: &[LetterStatus]) -> Vec<FeedbackItem> {
        statuses
            .iter()
            .map(|&status| FeedbackItem {
                letter: "a".to_string(),
                status,
            })
            .collect()
    }

    fn in_progress_guess(attempts_remaining: u32) -> GuessResponse {
        GuessResponse {
            feedback: feedback(&[LetterStatus::Absent; WORD_LENGTH]),
            attempts_remaining,
            status: GameStatus::InProgress,
            secret_word: None,
            score: None,
        }
    }

    #[test]
    fn new_session_is_uninitialized_and_idle() {
        let session = Session::new();
        assert_eq!(session.status(), Status::Uninitialized);
        assert_eq!(session.attempts_remaining(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_input(), "");
        assert!(!session.is_busy());
    }

    #[test]
    fn typing_before_start_is_ignored() {
        let mut session = Session::new();
        session.set_input("mundo");
        session.push_char('a');
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn reset_replaces_session_wholesale() {
        let mut session = started();
        session.set_input("mundo");
        let guess = session.begin_submit().unwrap();
        session
            .complete_submit(&in_progress_guess(4))
            .unwrap();
        assert_eq!(guess, "MUNDO");
        assert_eq!(session.history().len(), 1);

        session.begin_request().unwrap();
        session.complete_reset(&StateResponse {
            attempts_remaining: 5,
            status: GameStatus::InProgress,
            secret_word: None,
            score: None,
        });

        assert!(session.history().is_empty());
        assert_eq!(session.current_input(), "");
        assert_eq!(session.attempts_remaining(), 5);
        assert!(!session.is_busy());
    }

    #[test]
    fn set_input_normalizes() {
        let mut session = started();
        session.set_input("ação1");
        assert_eq!(session.current_input(), "AÇÃO");
    }

    #[test]
    fn push_char_filters_and_truncates() {
        let mut session = started();
        for c in "mu7nd o!x".chars() {
            session.push_char(c);
        }
        assert_eq!(session.current_input(), "MUNDO");
    }

    #[test]
    fn pop_char_edits_input() {
        let mut session = started();
        session.set_input("mundo");
        session.pop_char();
        assert_eq!(session.current_input(), "MUND");
    }

    #[test]
    fn submit_requires_full_word() {
        let mut session = started();
        session.set_input("ação");

        match session.begin_submit() {
            Err(SessionError::Validation(GuessError::WrongLength(4))) => {}
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(!session.is_busy());
    }

    #[test]
    fn submit_requires_in_progress() {
        let mut session = Session::new();
        session.current_input = "MUNDO".to_string();
        assert!(matches!(
            session.begin_submit(),
            Err(SessionError::NotPlaying)
        ));
    }

    #[test]
    fn submit_rejected_while_busy() {
        let mut session = started();
        session.set_input("mundo");
        let _guess = session.begin_submit().unwrap();
        assert!(session.is_busy());

        // Second submission for the same attempt slot must not pass,
        // no matter how valid the input is.
        assert!(matches!(session.begin_submit(), Err(SessionError::Busy)));
    }

    #[test]
    fn typing_allowed_while_busy() {
        let mut session = started();
        session.set_input("mundo");
        let _guess = session.begin_submit().unwrap();

        session.set_input("tempo");
        assert_eq!(session.current_input(), "TEMPO");
    }

    #[test]
    fn submit_rejected_without_attempts() {
        let mut session = started();
        session.begin_request().unwrap();
        session.complete_refresh(&StateResponse {
            attempts_remaining: 0,
            status: GameStatus::InProgress,
            secret_word: None,
            score: None,
        });
        session.set_input("mundo");

        assert!(matches!(
            session.begin_submit(),
            Err(SessionError::NoAttemptsLeft)
        ));
    }

    #[test]
    fn successful_submit_appends_exactly_one_row_and_clears_input() {
        let mut session = started();
        session.set_input("mundo");
        let before = session.history().len();

        let _guess = session.begin_submit().unwrap();
        session
            .complete_submit(&in_progress_guess(4))
            .unwrap();

        assert_eq!(session.history().len(), before + 1);
        assert_eq!(session.current_input(), "");
        assert_eq!(session.attempts_remaining(), 4);
        assert!(!session.is_busy());
    }

    #[test]
    fn winning_response_merges_secret_and_score() {
        let mut session = started();
        session.set_input("casal");
        let _guess = session.begin_submit().unwrap();

        session
            .complete_submit(&GuessResponse {
                feedback: feedback(&[LetterStatus::Correct; WORD_LENGTH]),
                attempts_remaining: 4,
                status: GameStatus::Won,
                secret_word: Some("CASAL".to_string()),
                score: Some(80),
            })
            .unwrap();

        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.secret_word(), Some("CASAL"));
        assert_eq!(session.score(), Some(80));
    }

    #[test]
    fn terminal_session_ignores_further_input_and_submits() {
        let mut session = started();
        session.set_input("casal");
        let _guess = session.begin_submit().unwrap();
        session
            .complete_submit(&GuessResponse {
                feedback: feedback(&[LetterStatus::Correct; WORD_LENGTH]),
                attempts_remaining: 4,
                status: GameStatus::Won,
                secret_word: None,
                score: None,
            })
            .unwrap();

        session.set_input("mundo");
        assert_eq!(session.current_input(), "");
        assert!(matches!(
            session.begin_submit(),
            Err(SessionError::NotPlaying)
        ));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn transport_failure_leaves_session_unchanged_and_retryable() {
        let mut session = started();
        session.set_input("mundo");
        let _guess = session.begin_submit().unwrap();

        session.fail_request();

        assert_eq!(session.history().len(), 0);
        assert_eq!(session.current_input(), "MUNDO");
        assert_eq!(session.attempts_remaining(), 5);
        assert!(!session.is_busy());

        // Retrying the same action must pass validation again.
        assert!(session.begin_submit().is_ok());
    }

    #[test]
    fn inconsistent_response_is_discarded() {
        let mut session = started();
        session.set_input("mundo");
        let _guess = session.begin_submit().unwrap();

        let result = session.complete_submit(&in_progress_guess(0));

        assert!(matches!(result, Err(SessionError::InconsistentResponse)));
        assert_eq!(session.history().len(), 0);
        assert_eq!(session.current_input(), "MUNDO");
        assert!(!session.is_busy());
    }

    #[test]
    fn history_never_exceeds_max_attempts() {
        let mut session = started();
        for remaining in (0..5).rev() {
            session.set_input("mundo");
            let _guess = session.begin_submit().unwrap();
            let response = GuessResponse {
                feedback: feedback(&[LetterStatus::Absent; WORD_LENGTH]),
                attempts_remaining: remaining,
                status: if remaining == 0 {
                    GameStatus::Lost
                } else {
                    GameStatus::InProgress
                },
                secret_word: None,
                score: None,
            };
            session.complete_submit(&response).unwrap();
        }

        assert_eq!(session.history().len(), MAX_ATTEMPTS);
        assert_eq!(session.status(), Status::Lost);
    }

    #[test]
    fn refresh_keeps_history_and_input() {
        let mut session = started();
        session.set_input("mundo");
        let _guess = session.begin_submit().unwrap();
        session
            .complete_submit(&in_progress_guess(4))
            .unwrap();
        session.set_input("tempo");

        session.begin_request().unwrap();
        session.complete_refresh(&StateResponse {
            attempts_remaining: 3,
            status: GameStatus::InProgress,
            secret_word: None,
            score: None,
        });

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_input(), "TEMPO");
        assert_eq!(session.attempts_remaining(), 3);
    }

    #[test]
    fn new_game_allowed_from_terminal_state() {
        let mut session = started();
        session.set_input("casal");
        let _guess = session.begin_submit().unwrap();
        session
            .complete_submit(&GuessResponse {
                feedback: feedback(&[LetterStatus::Correct; WORD_LENGTH]),
                attempts_remaining: 4,
                status: GameStatus::Won,
                secret_word: None,
                score: None,
            })
            .unwrap();

        session.begin_request().unwrap();
        session.complete_reset(&StateResponse {
            attempts_remaining: 5,
            status: GameStatus::InProgress,
            secret_word: None,
            score: None,
        });

        assert_eq!(session.status(), Status::InProgress);
        assert!(session.history().is_empty());
    }
}

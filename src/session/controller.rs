//! Session/network glue
//!
//! Drives the [`Session`] state machine against a [`GameAuthority`].
//! Each action runs to completion before the next event is processed;
//! the blocking network call sits between the session's begin and
//! complete steps, so every failure path lands back in an idle,
//! retryable state.

use super::state::{Session, SessionError};
use crate::api::GameAuthority;
use tracing::{info, warn};

/// Owns one game session and the client used to advance it
pub struct GameController<A: GameAuthority> {
    session: Session,
    authority: A,
}

impl<A: GameAuthority> GameController<A> {
    #[must_use]
    pub fn new(authority: A) -> Self {
        Self {
            session: Session::new(),
            authority,
        }
    }

    /// Read access to the session for rendering
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Forward typed input to the session (normalizing filter applies)
    pub fn set_input(&mut self, raw: &str) {
        self.session.set_input(raw);
    }

    pub fn push_char(&mut self, c: char) {
        self.session.push_char(c);
    }

    pub fn pop_char(&mut self) {
        self.session.pop_char();
    }

    /// Request the initial session state from the authority
    ///
    /// On success the whole session is replaced; on failure it is left
    /// untouched (still uninitialized if this was the first call).
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.session.begin_request()?;
        match self.authority.start() {
            Ok(state) => {
                info!("game started");
                self.session.complete_reset(&state);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "start failed");
                self.session.fail_request();
                Err(SessionError::Transport(err))
            }
        }
    }

    /// Fetch the current server-side state and merge the counters,
    /// keeping the local history and in-progress guess
    pub fn refresh(&mut self) -> Result<(), SessionError> {
        self.session.begin_request()?;
        match self.authority.fetch_state() {
            Ok(state) => {
                self.session.complete_refresh(&state);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "state fetch failed");
                self.session.fail_request();
                Err(SessionError::Transport(err))
            }
        }
    }

    /// Submit the current input as a guess
    ///
    /// The network call is issued only when the session accepts the
    /// submission: in progress, not busy, attempts remaining, and a
    /// fully valid guess. Local rejections never reach the wire.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        let guess = self.session.begin_submit()?;
        match self.authority.submit(&guess) {
            Ok(response) => self.session.complete_submit(&response),
            Err(err) => {
                warn!(error = %err, "guess failed");
                self.session.fail_request();
                Err(SessionError::Transport(err))
            }
        }
    }

    /// Request a fresh game, replacing the session wholesale
    ///
    /// Allowed from any state, including terminal ones.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        self.session.begin_request()?;
        match self.authority.new_game() {
            Ok(state) => {
                info!("new game started");
                self.session.complete_reset(&state);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "new game failed");
                self.session.fail_request();
                Err(SessionError::Transport(err))
            }
        }
    }
}

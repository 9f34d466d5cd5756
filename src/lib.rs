//! VOCAB client
//!
//! Terminal client for the VOCAB word-guessing game. The remote
//! service owns the secret word and all evaluation; this crate tracks
//! the session state machine, normalizes guesses, renders the board
//! and encodes the shareable result.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vocab_client::api::HttpAuthority;
//! use vocab_client::session::GameController;
//!
//! let authority = HttpAuthority::new("http://localhost:8000").unwrap();
//! let mut game = GameController::new(authority);
//! game.start().unwrap();
//! game.set_input("mundo");
//! game.submit().unwrap();
//! ```

// Core domain types
pub mod core;

// Remote game authority
pub mod api;

// Session state machine
pub mod session;

// Shareable result encoding
pub mod share;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Remote game authority interface
//!
//! Wire types and the HTTP client for the service that owns the
//! secret word, guess evaluation and scoring.

pub mod client;
pub mod types;

pub use client::{ApiError, GameAuthority, HttpAuthority};
pub use types::{FeedbackItem, GameStatus, GuessRequest, GuessResponse, StateResponse};

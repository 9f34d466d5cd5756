//! Terminal output formatting
//!
//! Pure presentation helpers shared by the plain CLI and the TUI.

pub mod formatters;

pub use formatters::{placeholder, row_to_ansi, secret_reveal, status_message};

//! Client-side game session
//!
//! The state machine that tracks attempt history and merges server
//! responses, plus the controller that drives it over the network.

mod controller;
mod state;

pub use controller::GameController;
pub use state::{Phase, Session, SessionError, Status};

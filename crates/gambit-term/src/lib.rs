//! Text front end for gambit: coordinate-move input, board printing and the
//! promotion prompt.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use config::{SessionConfig, SessionOption};
pub use error::TermError;
pub use session::Session;

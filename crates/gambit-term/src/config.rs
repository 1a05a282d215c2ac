//! Session options adjustable with `set`.

use crate::error::TermError;

/// A session option together with its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after each completed move.
    Board(bool),
    /// Complete promotions with a queen instead of prompting.
    AutoQueen(bool),
    /// List legal destinations when a move is rejected.
    Hints(bool),
}

impl SessionOption {
    /// Parse `set <name> <value>` arguments. Values are `on` or `off`.
    pub fn parse(name: &str, value: &str) -> Result<SessionOption, TermError> {
        let flag = match value {
            "on" | "true" => true,
            "off" | "false" => false,
            _ => {
                return Err(TermError::InvalidOptionValue {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        };
        match name {
            "board" => Ok(SessionOption::Board(flag)),
            "autoqueen" => Ok(SessionOption::AutoQueen(flag)),
            "hints" => Ok(SessionOption::Hints(flag)),
            _ => Err(TermError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

/// Configuration knobs for a text session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub show_board: bool,
    pub auto_queen: bool,
    pub hints: bool,
}

impl SessionConfig {
    /// Apply a parsed option.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Board(on) => self.show_board = on,
            SessionOption::AutoQueen(on) => self.auto_queen = on,
            SessionOption::Hints(on) => self.hints = on,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            auto_queen: false,
            hints: true,
        }
    }
}

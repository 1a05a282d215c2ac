//! Text session errors.

use gambit_core::MoveError;

/// Errors that can occur while reading or executing a session command.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// The command word is not one the session knows.
    #[error("unknown command: {word}")]
    UnknownCommand {
        /// The unrecognized first token.
        word: String,
    },

    /// A command was given without a required argument.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// Description of the missing argument.
        what: &'static str,
    },

    /// A square token is not two characters `a`-`h` then `1`-`8`.
    #[error("invalid square: {token}")]
    InvalidSquare {
        /// The token that failed to parse.
        token: String,
    },

    /// A coordinate move is not `<from><to>` with an optional promotion letter.
    #[error("invalid move: {token}")]
    InvalidMove {
        /// The token that failed to parse.
        token: String,
    },

    /// A promotion letter is not one of `q r b n`.
    #[error("invalid promotion piece: {token}")]
    InvalidPiece {
        /// The token that failed to parse.
        token: String,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// An option value is not `on` or `off`.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option being set.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The engine rejected a move or promotion choice.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

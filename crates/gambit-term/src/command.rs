//! Session command parsing.

use gambit_core::{Move, PieceKind, PromotionPiece, Square};

use crate::config::SessionOption;
use crate::error::TermError;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2e4` or `e7e8q` -- play a move for the side to move.
    Play(Move),
    /// `moves <sq>` -- list legal destinations of the piece on a square.
    Moves(Square),
    /// `promote <q|r|b|n>` -- finish a pending promotion.
    Promote(PieceKind),
    /// `board` -- print the board.
    Board,
    /// `status` -- print side to move and game status.
    Status,
    /// `new` -- start a new game.
    New,
    /// `set <option> <value>` -- change a session option.
    Set(SessionOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&word) = tokens.first() else {
        return Ok(Command::Empty);
    };

    match word {
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "new" => Ok(Command::New),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => {
            let token = arg(&tokens, 1, "moves", "square")?;
            Ok(Command::Moves(parse_square(token)?))
        }
        "promote" => {
            let token = arg(&tokens, 1, "promote", "piece")?;
            Ok(Command::Promote(parse_piece_kind(token)?))
        }
        "set" => {
            let name = arg(&tokens, 1, "set", "option name")?;
            let value = arg(&tokens, 2, "set", "option value")?;
            Ok(Command::Set(SessionOption::parse(name, value)?))
        }
        _ if looks_like_move(word) => Ok(Command::Play(parse_move(word)?)),
        _ => Err(TermError::UnknownCommand {
            word: word.to_string(),
        }),
    }
}

fn arg<'a>(
    tokens: &[&'a str],
    index: usize,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, TermError> {
    tokens
        .get(index)
        .copied()
        .ok_or(TermError::MissingArgument { command, what })
}

/// A file letter followed by a rank digit.
fn looks_like_move(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('a'..='h'), Some('1'..='8'))
    )
}

/// Parse a two-character algebraic square such as `e4`.
pub fn parse_square(token: &str) -> Result<Square, TermError> {
    Square::from_algebraic(token).ok_or_else(|| TermError::InvalidSquare {
        token: token.to_string(),
    })
}

/// Parse a piece letter. Any kind is accepted here; the engine decides
/// whether it is a valid promotion.
fn parse_piece_kind(token: &str) -> Result<PieceKind, TermError> {
    let mut chars = token.chars();
    match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
        (Some(kind), None) => Ok(kind),
        _ => Err(TermError::InvalidPiece {
            token: token.to_string(),
        }),
    }
}

/// Parse a coordinate move: `<from><to>` with an optional promotion letter.
pub fn parse_move(token: &str) -> Result<Move, TermError> {
    let invalid = || TermError::InvalidMove {
        token: token.to_string(),
    };
    if !token.is_ascii() || !(4..=5).contains(&token.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&token[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&token[2..4]).ok_or_else(invalid)?;

    match token.get(4..) {
        Some("") | None => Ok(Move::normal(from, to)),
        Some(letter) => {
            let piece = parse_piece_kind(letter)
                .ok()
                .and_then(PromotionPiece::from_piece_kind)
                .ok_or_else(|| TermError::InvalidPiece {
                    token: letter.to_string(),
                })?;
            Ok(Move::promotion(from, to, Some(piece)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn parse_plain_move() {
        assert_eq!(
            parse_command("e2e4").unwrap(),
            Command::Play(Move::normal(sq("e2"), sq("e4")))
        );
    }

    #[test]
    fn parse_move_with_promotion() {
        assert_eq!(
            parse_command("e7e8n").unwrap(),
            Command::Play(Move::promotion(sq("e7"), sq("e8"), Some(PromotionPiece::Knight)))
        );
    }

    #[test]
    fn parse_move_rejects_king_promotion() {
        assert!(matches!(
            parse_command("e7e8k"),
            Err(TermError::InvalidPiece { .. })
        ));
    }

    #[test]
    fn parse_move_rejects_off_board() {
        assert!(matches!(
            parse_command("e2e9"),
            Err(TermError::InvalidMove { .. })
        ));
        assert!(matches!(
            parse_command("e2e4e5"),
            Err(TermError::InvalidMove { .. })
        ));
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("status").unwrap(), Command::Status);
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_moves_query() {
        assert_eq!(parse_command("moves g1").unwrap(), Command::Moves(sq("g1")));
        assert!(matches!(
            parse_command("moves"),
            Err(TermError::MissingArgument { command: "moves", .. })
        ));
        assert!(matches!(
            parse_command("moves z9"),
            Err(TermError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_promote() {
        assert_eq!(
            parse_command("promote q").unwrap(),
            Command::Promote(PieceKind::Queen)
        );
        // Kings parse; the engine rejects them.
        assert_eq!(
            parse_command("promote K").unwrap(),
            Command::Promote(PieceKind::King)
        );
        assert!(matches!(
            parse_command("promote queen"),
            Err(TermError::InvalidPiece { .. })
        ));
    }

    #[test]
    fn parse_set() {
        assert_eq!(
            parse_command("set autoqueen on").unwrap(),
            Command::Set(SessionOption::AutoQueen(true))
        );
        assert!(matches!(
            parse_command("set hints"),
            Err(TermError::MissingArgument { command: "set", .. })
        ));
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            parse_command("castle"),
            Err(TermError::UnknownCommand { .. })
        ));
    }
}

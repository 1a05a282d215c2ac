//! Line-oriented game session over any reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Game, GameStatus, Move, MoveError, PieceKind, Square};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::TermError;

const HELP: &str = "\
commands:
  e2e4 | e7e8q        play a move (optional promotion letter)
  moves <square>      list legal destinations of a piece
  promote <q|r|b|n>   choose the piece for a pending promotion
  board               print the board
  status              print side to move and game status
  new                 start a new game
  set <option> on|off options: board, autoqueen, hints
  help                show this text
  quit                leave";

/// What the loop does after a command.
enum Flow {
    Continue,
    Quit,
}

/// A game played one command per line.
///
/// Output is written to `out`; tracing goes wherever the subscriber sends it.
pub struct Session<W: Write> {
    game: Game,
    config: SessionConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with a new game and default options.
    pub fn new(out: W) -> Self {
        Self::with_config(out, SessionConfig::default())
    }

    pub fn with_config(out: W, config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command errors are reported to the writer and the loop carries on;
    /// only I/O failures end the session early.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), TermError> {
        writeln!(self.out, "gambit -- type `help` for commands")?;
        if self.config.show_board {
            self.print_board()?;
        }
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                debug!(cmd = %trimmed, "received command");
            }

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd));
            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(TermError::Io { source }) => return Err(source.into()),
                Err(err) => self.report_error(err)?,
            }
            self.prompt()?;
        }

        info!("session ended");
        Ok(())
    }

    fn execute(&mut self, cmd: Command) -> Result<Flow, TermError> {
        match cmd {
            Command::Play(mv) => self.handle_play(mv)?,
            Command::Moves(square) => self.handle_moves(square)?,
            Command::Promote(kind) => self.handle_promote(kind)?,
            Command::Board => self.print_board()?,
            Command::Status => self.handle_status()?,
            Command::New => {
                self.game.reset();
                writeln!(self.out, "new game")?;
                if self.config.show_board {
                    self.print_board()?;
                }
            }
            Command::Set(option) => {
                self.config.apply(option);
                debug!(?option, "option changed");
                writeln!(self.out, "ok")?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_play(&mut self, mv: Move) -> Result<(), TermError> {
        let outcome = self.game.apply_move(mv)?;
        match outcome.promotion {
            Some(square) if self.config.auto_queen => {
                self.game.resolve_promotion(square, PieceKind::Queen)?;
                self.report_position()
            }
            Some(square) => {
                writeln!(
                    self.out,
                    "pawn on {square} promotes: choose with `promote <q|r|b|n>`"
                )?;
                Ok(())
            }
            None => self.report_position(),
        }
    }

    fn handle_moves(&mut self, square: Square) -> Result<(), TermError> {
        let mut targets = self.game.legal_destinations(square);
        if targets.is_empty() {
            writeln!(self.out, "{square}: no legal moves")?;
            return Ok(());
        }
        targets.sort_by_key(|sq| sq.to_string());
        write!(self.out, "{square}:")?;
        for target in targets {
            write!(self.out, " {target}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn handle_promote(&mut self, kind: PieceKind) -> Result<(), TermError> {
        let square = self
            .game
            .pending_promotion()
            .ok_or(MoveError::NoPromotionPending)?;
        self.game.resolve_promotion(square, kind)?;
        self.report_position()
    }

    fn handle_status(&mut self) -> Result<(), TermError> {
        let side = self.game.side_to_move();
        match self.game.pending_promotion() {
            Some(square) => writeln!(self.out, "{side} to move, promotion pending on {square}")?,
            None => writeln!(self.out, "{side} to move, {}", self.game.status())?,
        }
        Ok(())
    }

    /// Print the board (if enabled) and announce check or the end of the game.
    fn report_position(&mut self) -> Result<(), TermError> {
        if self.config.show_board {
            self.print_board()?;
        }
        let side = self.game.side_to_move();
        match self.game.status() {
            GameStatus::Ongoing => {}
            GameStatus::Check => writeln!(self.out, "{side} is in check")?,
            GameStatus::Checkmate => {
                let winner = side.flip();
                info!(%winner, "checkmate");
                writeln!(self.out, "checkmate, {winner} wins")?;
            }
            GameStatus::Stalemate => {
                info!("stalemate");
                writeln!(self.out, "stalemate, the game is drawn")?;
            }
        }
        Ok(())
    }

    fn report_error(&mut self, err: TermError) -> Result<(), TermError> {
        warn!(error = %err, "command failed");
        writeln!(self.out, "error: {err}")?;
        match err {
            TermError::Move(MoveError::IllegalMove { mv }) if self.config.hints => {
                self.handle_moves(mv.from())
            }
            _ => Ok(()),
        }
    }

    fn print_board(&mut self) -> Result<(), TermError> {
        writeln!(self.out, "{}", self.game.position().board().pretty())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), TermError> {
        if self.game.status().is_over() {
            write!(self.out, "game over> ")?;
        } else if self.game.pending_promotion().is_some() {
            write!(self.out, "promote> ")?;
        } else {
            write!(self.out, "{}> ", self.game.side_to_move())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

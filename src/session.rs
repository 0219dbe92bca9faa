//! Interactive game: White is typed in, Black is picked by
//! [`find_move`](crate::search::find_move).

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::{Board, Coord, Move, Piece, Side};
use crate::error::PuzzleError;
use crate::io::{read_board, save_board};
use crate::search::{find_move, outcome_after, Outcome};

const QUIT: &str = "QUIT";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    AwaitConfig,
    AwaitWhiteMove,
    AwaitBlackMove,
    Terminated,
}

pub struct GameSession<R, W> {
    input: R,
    out: W,
    rng: SmallRng,
    board: Option<Board>,
    state: State,
    base_dir: Option<PathBuf>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, out: W, rng: SmallRng) -> Self {
        Self { input, out, rng, board: None, state: State::AwaitConfig, base_dir: None }
    }

    /// Starts from `board` instead of asking for a configuration file.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self.state = State::AwaitWhiteMove;
        self
    }

    /// Resolves relative file names against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn state(&self) -> State { self.state }

    pub fn board(&self) -> Option<&Board> { self.board.as_ref() }

    pub fn into_output(self) -> W { self.out }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 { return Ok(None); }
        Ok(Some(line.trim().to_string()))
    }

    fn show(&mut self, heading: &str) -> Result<()> {
        if let Some(board) = &self.board {
            writeln!(self.out, "{heading}\n{board}")?;
        }
        Ok(())
    }

    fn cmd_config(&mut self, name: &str) -> Result<()> {
        if name.eq_ignore_ascii_case(QUIT) {
            writeln!(self.out, "Game terminated.")?;
            self.state = State::Terminated;
            return Ok(());
        }
        match read_board(self.resolve(name)) {
            Ok(board) => {
                self.board = Some(board);
                self.show("The initial configuration is:")?;
                writeln!(self.out, "Next move of White:")?;
                self.state = State::AwaitWhiteMove;
            }
            Err(e) => {
                info!("rejected configuration {name:?}: {e:#}");
                writeln!(self.out, "This is not a valid file. File name for initial configuration: ")?;
            }
        }
        Ok(())
    }

    fn cmd_save(&mut self) -> Result<()> {
        writeln!(self.out, "File name to store the configuration:")?;
        while let Some(name) = self.read_line()? {
            let Some(board) = &self.board else { break };
            match save_board(self.resolve(&name), board) {
                Ok(()) => {
                    writeln!(self.out, "The game configuration saved.")?;
                    break;
                }
                Err(e) => {
                    info!("could not save to {name:?}: {e:#}");
                    writeln!(self.out, "This is not a valid file. File name to store the configuration:")?;
                }
            }
        }
        self.state = State::Terminated;
        Ok(())
    }

    /// Parses and validates a White move.
    fn white_move(&self, text: &str) -> std::result::Result<(Piece, Coord), PuzzleError> {
        let board = self.board.as_ref().ok_or(PuzzleError::MissingKing(Side::White))?;
        let mv: Move = text.parse()?;
        let piece = board.piece_at(mv.from)?;
        if piece.side != Side::White || !piece.can_move_to(mv.to, board) {
            return Err(PuzzleError::IllegalMove(mv));
        }
        Ok((piece, mv.to))
    }

    fn cmd_white(&mut self, text: &str) -> Result<()> {
        if text.eq_ignore_ascii_case(QUIT) {
            return self.cmd_save();
        }
        match self.white_move(text) {
            Ok((piece, dest)) => {
                debug!("white plays {text}");
                self.play(piece, dest, "The configuration after White's move is:")
            }
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                debug!("rejected white move {text:?}: {e}");
                writeln!(self.out, "This is not a valid move. Next move of White:")?;
                Ok(())
            }
        }
    }

    fn cmd_black(&mut self) -> Result<()> {
        let Some(board) = &self.board else {
            return Err(PuzzleError::MissingKing(Side::Black).into());
        };
        let (piece, dest) = find_move(board, Side::Black, &mut self.rng)?;
        writeln!(self.out, "Next move of Black is {}.", Move::new(piece.pos, dest))?;
        self.play(piece, dest, "The configuration after Black's move is:")
    }

    /// Applies an already validated move, shows the board, then scores it.
    fn play(&mut self, piece: Piece, dest: Coord, heading: &str) -> Result<()> {
        let Some(before) = self.board.take() else { return Ok(()) };
        let after = piece.move_to(dest, &before);
        let state = outcome_after(piece.side, &before, dest, &after);
        self.board = Some(after);
        self.show(heading)?;
        self.after_move(piece.side.opponent(), state?)
    }

    /// Ends the game or hands the turn to `to_move`.
    fn after_move(&mut self, to_move: Side, state: Outcome) -> Result<()> {
        match state {
            Outcome::Checkmate { winner } => {
                writeln!(self.out, "Game over. {winner} wins.")?;
                self.state = State::Terminated;
            }
            Outcome::Stalemate => {
                writeln!(self.out, "Game over. Stalemate.")?;
                self.state = State::Terminated;
            }
            Outcome::Ongoing => match to_move {
                Side::White => {
                    writeln!(self.out, "Next move of White:")?;
                    self.state = State::AwaitWhiteMove;
                }
                Side::Black => self.state = State::AwaitBlackMove,
            },
        }
        Ok(())
    }

    /// Runs until the game ends, the player quits, or input runs out.
    /// `MissingKing` and `NoMove` abort the session with an error.
    pub fn run(&mut self) -> Result<()> {
        match self.state {
            State::AwaitConfig => writeln!(self.out, "File name for initial configuration: ")?,
            State::AwaitWhiteMove => {
                self.show("The initial configuration is:")?;
                writeln!(self.out, "Next move of White:")?;
            }
            _ => {}
        }
        while self.state != State::Terminated {
            match self.state {
                State::AwaitBlackMove => self.cmd_black()?,
                State::AwaitConfig | State::AwaitWhiteMove => {
                    let Some(line) = self.read_line()? else {
                        self.state = State::Terminated;
                        break;
                    };
                    if self.state == State::AwaitConfig {
                        self.cmd_config(&line)?;
                    } else {
                        self.cmd_white(&line)?;
                    }
                }
                State::Terminated => break,
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

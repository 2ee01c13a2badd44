use crate::io::Io;
use derive_more::Constructor;
use lib::chess::{Outcome, Position, Team};
use std::io::{self, ErrorKind, Read, Write};
use tracing::{debug, field::display, instrument, warn, Span};

/// A game of pawns-only chess between two named players.
#[derive(Debug, Clone, Eq, PartialEq, Constructor)]
pub struct Game {
    white: String,
    black: String,
    exit: String,
}

impl Game {
    /// The name of the player in charge of a [`Team`].
    pub fn player(&self, t: Team) -> &str {
        match t {
            Team::White => &self.white,
            Team::Black => &self.black,
        }
    }

    /// Play from the given starting [`Position`] until the game is over or interrupted.
    ///
    /// Returns `None` if the game was interrupted before reaching an [`Outcome`].
    #[instrument(level = "debug", skip(self, io), ret, err,
        fields(white = %self.white, black = %self.black, outcome))]
    pub fn play<W: Write, R: Read>(
        &self,
        io: &mut Io<W, R>,
        mut pos: Position,
    ) -> io::Result<Option<Outcome>> {
        io.send(&pos)?;

        let mut turn = Team::White;
        let outcome = loop {
            io.send(format_args!("{}'s turn:", self.player(turn)))?;

            let input = match io.recv() {
                Ok(input) => input,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    warn!("input closed before the game was over");
                    break None;
                }
                Err(e) => return Err(e),
            };

            if input == self.exit {
                break None;
            }

            match pos.perform(turn, &input) {
                Err(e) => {
                    debug!(team = %turn, %input, error = ?e, "move rejected");
                    io.send(e)?;
                    continue;
                }

                Ok(mc) => {
                    debug!(
                        team = %mc.team(),
                        m = %mc.0,
                        capture = mc.is_capture(),
                        en_passant = mc.is_en_passant(),
                        "move played"
                    );

                    io.send(&pos)?;
                }
            }

            if let Some(o) = pos.outcome(turn) {
                Span::current().record("outcome", display(o));

                match o.winner() {
                    Some(Team::White) => io.send("White Wins!")?,
                    Some(Team::Black) => io.send("Black Wins!")?,
                    None => io.send("Stalemate!")?,
                }

                break Some(o);
            }

            turn = !turn;
        };

        io.send("Bye!")?;
        Ok(outcome)
    }
}

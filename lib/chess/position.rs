use crate::chess::{Board, EnPassant, Move, MoveContext, Outcome, ParseMoveError, Square, Team};
use derive_more::{Constructor, Display, Error};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::ops::Range;
use tracing::{debug, instrument};

/// The reason why a move was rejected.
///
/// Every rejection is recoverable, the same [`Team`] may simply try another move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalMove {
    /// The input is not of the form `[a-h][1-8][a-h][1-8]`.
    #[display(fmt = "Invalid Input")]
    MalformedInput(ParseMoveError),

    /// The source square does not hold a pawn of the team to move.
    #[display(fmt = "No {team} pawn at {square}")]
    WrongTeamAtSource { team: Team, square: Square },

    /// The pawn would move sideways or backwards.
    #[display(fmt = "Invalid Input")]
    WrongDirection(#[error(not(source))] Move),

    /// The destination or the square skipped over is occupied.
    #[display(fmt = "Invalid Input")]
    BlockedPath(#[error(not(source))] Move),

    /// The pawn would move diagonally without capturing an opposing pawn.
    #[display(fmt = "Invalid Input")]
    IllegalCapture(#[error(not(source))] Move),

    /// The pawn would move diagonally to a square other than the one open to en passant.
    #[display(fmt = "Invalid Input")]
    IllegalEnPassant(#[error(not(source))] Move),

    /// The pawn would advance further than allowed from its rank.
    #[display(fmt = "Invalid Input")]
    IllegalAdvance(#[error(not(source))] Move),
}

/// The state of a game of pawns-only chess.
///
/// Holds the [`Board`] and the [`EnPassant`] window, mutated exclusively by legal moves.
#[derive(Debug, Display, Default, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "{board}")]
pub struct Position {
    board: Board,
    en_passant: EnPassant,
}

impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Position>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..64, any::<Selector>()).prop_map(|(plies, selector)| {
            let mut pos = Position::default();
            let mut turn = Team::White;

            for _ in 0..plies {
                match selector.try_select(pos.moves(turn)) {
                    None => break,
                    Some(m) => {
                        if pos.play(turn, *m).is_err() || pos.outcome(turn).is_some() {
                            break;
                        }
                    }
                }

                turn = !turn;
            }

            pos
        })
    }
}

impl Position {
    /// The pawns on the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`EnPassant`] window.
    pub fn en_passant(&self) -> &EnPassant {
        &self.en_passant
    }

    /// The [`Team`] of the pawn on the given [`Square`], if any.
    pub fn occupant_at(&self, sq: Square) -> Option<Team> {
        self.board.occupant_at(sq)
    }

    /// Checks whether a [`Team`] may play a [`Move`] in this position.
    pub fn validate(&self, t: Team, m: Move) -> Result<MoveContext, IllegalMove> {
        use IllegalMove::*;

        let (whence, whither) = (m.whence(), m.whither());
        if self.occupant_at(whence) != Some(t) {
            return Err(WrongTeamAtSource {
                team: t,
                square: whence,
            });
        }

        let advance = (whither.rank() - whence.rank()) * t.direction();
        if advance <= 0 {
            return Err(WrongDirection(m));
        }

        let lateral = (whither.file() - whence.file()).abs();
        if lateral == 1 && advance == 1 {
            return match self.occupant_at(whither) {
                Some(o) if o == !t => Ok(MoveContext(m, t, Some(whither))),
                Some(_) => Err(IllegalCapture(m)),
                None if self.en_passant.landing(t) == Some(whither) => {
                    Ok(MoveContext(m, t, Some(self.en_passant.square())))
                }
                None if self.en_passant.is_active() && self.en_passant.team() == !t => {
                    Err(IllegalEnPassant(m))
                }
                None => Err(IllegalCapture(m)),
            };
        }

        if lateral != 0 {
            return Err(WrongDirection(m));
        }

        if self.occupant_at(whither).is_some() {
            return Err(BlockedPath(m));
        }

        let reach = if whence.rank() == t.home_rank() { 2 } else { 1 };
        if advance > reach {
            return Err(IllegalAdvance(m));
        }

        if m.is_long() && self.occupant_at(m.midpoint()).is_some() {
            return Err(BlockedPath(m));
        }

        Ok(MoveContext(m, t, None))
    }

    /// Plays a [`Move`] for a [`Team`] if legal in this position.
    ///
    /// The position is left untouched if the move is rejected.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn play(&mut self, t: Team, m: Move) -> Result<MoveContext, IllegalMove> {
        let mc = self.validate(t, m)?;

        self.board.clear(m.whence());
        if let Some(sq) = mc.capture() {
            self.board.clear(sq);
        }

        self.board.place(m.whither(), t);

        if m.is_long() && m.whither().rank() == t.long_move_rank() {
            debug!(square = %m.whither(), team = %t, "en passant window opened");
            self.en_passant.activate(m.whither(), t);
        } else {
            self.en_passant.deactivate();
        }

        Ok(mc)
    }

    /// Parses and plays a move for a [`Team`] if legal in this position.
    ///
    /// The position is left untouched if the move is rejected.
    pub fn perform(&mut self, t: Team, input: &str) -> Result<MoveContext, IllegalMove> {
        let m = input.parse().map_err(IllegalMove::MalformedInput)?;
        self.play(t, m)
    }

    /// An iterator over the legal moves of a [`Team`] in this position.
    pub fn moves(&self, t: Team) -> impl Iterator<Item = MoveContext> + '_ {
        const STEPS: [(i8, i8); 4] = [(0, 1), (0, 2), (-1, 1), (1, 1)];

        self.board.by_team(t).into_iter().flat_map(move |whence| {
            STEPS.into_iter().filter_map(move |(df, dr)| {
                let whither = whence.offset(df, dr * t.direction())?;
                self.validate(t, Move(whence, whither)).ok()
            })
        })
    }

    /// The [`Outcome`] of the game right after a [`Team`] has moved, if over.
    pub fn outcome(&self, mover: Team) -> Option<Outcome> {
        Outcome::evaluate(&self.board, mover)
    }
}

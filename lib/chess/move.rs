use crate::chess::{Square, Team};
use derive_more::{DebugCustom, Deref, Display, Error};
use std::str::FromStr;

/// The context of a pawn move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct MoveContext(#[deref] pub Move, pub Team, pub Option<Square>);

impl MoveContext {
    /// The [`Team`] that moved.
    pub fn team(&self) -> Team {
        self.1
    }

    /// The [`Square`] of the pawn captured, if any.
    pub fn capture(&self) -> Option<Square> {
        self.2
    }

    /// Whether this is a capture move.
    pub fn is_capture(&self) -> bool {
        self.capture().is_some()
    }

    /// Whether this is an en passant capture move.
    pub fn is_en_passant(&self) -> bool {
        self.capture().is_some_and(|sq| self.whither() != sq)
    }
}

/// A pawn move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }

    /// Whether this move advances two ranks along a file.
    pub fn is_long(&self) -> bool {
        self.whence().file() == self.whither().file()
            && (self.whither().rank() - self.whence().rank()).abs() == 2
    }

    /// The [`Square`] skipped over by a long move.
    ///
    /// # Panics
    ///
    /// Panics if this is not a [long](`Self::is_long`) move.
    pub fn midpoint(&self) -> Square {
        assert!(self.is_long(), "`{self}` is not a long move");
        let step = (self.whither().rank() - self.whence().rank()).signum();
        Square::new(
            self.whence().file(),
            self.whence().rank().step(step).expect("midpoint is on the board"),
        )
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move, expected `[a-h][1-8][a-h][1-8]`")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError);
        }

        let whence = s[..2].parse().map_err(|_| ParseMoveError)?;
        let whither = s[2..].parse().map_err(|_| ParseMoveError)?;
        Ok(Move(whence, whither))
    }
}

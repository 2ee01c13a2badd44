use crate::chess::{Bitboard, File, ParseFileError, ParseRankError, Rank, Team};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A square on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() | r.get() << 3)
    }

    /// Constructs [`Square`] from grid coordinates, if on the board.
    ///
    /// Row `0` is the 8th rank and column `0` is the a-file.
    #[inline(always)]
    pub fn from_grid(row: usize, column: usize) -> Option<Self> {
        let f = File::checked(i8::try_from(column).ok()?)?;
        let r = Rank::checked(Rank::MAX - i8::try_from(row).ok()?)?;
        Some(Square::new(f, r))
    }

    /// This square's grid coordinates as `(row, column)`.
    ///
    /// Row `0` is the 8th rank and column `0` is the a-file.
    #[inline(always)]
    pub fn grid(&self) -> (usize, usize) {
        ((Rank::MAX - self.rank().get()) as _, self.file().get() as _)
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() & 0b111)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() >> 3)
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.get())
    }

    /// The square `df` files and `dr` ranks away, if on the board.
    #[inline(always)]
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Some(Square::new(self.file().step(df)?, self.rank().step(dr)?))
    }

    /// The square one step ahead from the point of view of a [`Team`], if on the board.
    #[inline(always)]
    pub fn ahead(self, team: Team) -> Option<Self> {
        self.offset(0, team.direction())
    }
}

unsafe impl Integer for Square {
    type Repr = i8;
    const MIN: Self::Repr = Square::A1 as _;
    const MAX: Self::Repr = Square::H8 as _;
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}

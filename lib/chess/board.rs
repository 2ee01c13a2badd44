use crate::chess::{Bitboard, File, Rank, Square, Team};
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

#[cfg(test)]
use proptest::prelude::*;

/// The pawns on the board.
///
/// Each [`Square`] is either empty or occupied by a pawn of some [`Team`].
/// This type does not check the legality of moves, see [`Position`][`crate::chess::Position`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board {
    #[cfg_attr(test, strategy(any::<(Bitboard, Bitboard)>().prop_map(|(w, b)| [w, b & !w])))]
    teams: [Bitboard; 2],
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Board {
            teams: [
                Team::White.home_rank().bitboard(),
                Team::Black.home_rank().bitboard(),
            ],
        }
    }
}

impl Board {
    /// A board with no pawns.
    #[inline(always)]
    pub fn empty() -> Self {
        Board {
            teams: [Bitboard::empty(); 2],
        }
    }

    /// [`Square`]s occupied by a [`Team`].
    #[inline(always)]
    pub fn by_team(&self, t: Team) -> Bitboard {
        self.teams[t as usize]
    }

    /// The [`Team`] of the pawn on the given [`Square`], if any.
    #[inline(always)]
    pub fn occupant_at(&self, sq: Square) -> Option<Team> {
        Team::ALL.into_iter().find(|&t| self.by_team(t).contains(sq))
    }

    /// Removes the pawn on the given [`Square`], if any.
    #[inline(always)]
    pub fn clear(&mut self, sq: Square) {
        for bb in &mut self.teams {
            *bb = bb.without(sq);
        }
    }

    /// Places a pawn of a [`Team`] on the given [`Square`], replacing whatever was there.
    #[inline(always)]
    pub fn place(&mut self, sq: Square, t: Team) {
        self.clear(sq);
        self.teams[t as usize] = self.teams[t as usize].with(sq);
    }

    /// The number of pawns of a [`Team`].
    #[inline(always)]
    pub fn count(&self, t: Team) -> usize {
        self.by_team(t).len()
    }

    /// Whether any pawn of a [`Team`] stands on its far rank.
    #[inline(always)]
    pub fn reached(&self, t: Team) -> bool {
        !(self.by_team(t) & t.far_rank().bitboard()).is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

        writeln!(f, "{SEPARATOR}")?;
        for rank in Rank::iter().rev() {
            write!(f, "{rank} |")?;
            for file in File::iter() {
                let glyph = match self.occupant_at(Square::new(file, rank)) {
                    Some(Team::White) => 'W',
                    Some(Team::Black) => 'B',
                    None => ' ',
                };

                write!(f, " {glyph} |")?;
            }

            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }

        let files: Vec<_> = File::iter().map(|file| file.to_string()).collect();
        write!(f, "    {}  ", files.join("   "))
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse board, expected 8 rows of `W`, `B` or digits separated by `/`")]
pub struct ParseBoardError;

/// Parses the pawn placement from the 8th rank down, e.g. `8/BBBBBBBB/8/8/8/8/WWWWWWWW/8`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError);
        }

        let mut board = Board::empty();
        for (row, segment) in rows.into_iter().enumerate() {
            let mut column = 0;
            for c in segment.chars() {
                let team = match c {
                    '1'..='8' => {
                        column += (c as u8 - b'0') as usize;
                        continue;
                    }
                    'W' => Team::White,
                    'B' => Team::Black,
                    _ => return Err(ParseBoardError),
                };

                let sq = Square::from_grid(row, column).ok_or(ParseBoardError)?;
                board.place(sq, team);
                column += 1;
            }

            if column != 8 {
                return Err(ParseBoardError);
            }
        }

        Ok(board)
    }
}

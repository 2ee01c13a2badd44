use crate::chess::Rank;
use derive_more::Display;
use std::ops::Not;

/// The side a pawn belongs to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Team {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Team {
    /// Both teams, white first.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// The [`Rank`] this team's pawns start the game on.
    #[inline(always)]
    pub fn home_rank(self) -> Rank {
        match self {
            Team::White => Rank::Second,
            Team::Black => Rank::Seventh,
        }
    }

    /// The [`Rank`] reached by a long move from the home rank.
    #[inline(always)]
    pub fn long_move_rank(self) -> Rank {
        match self {
            Team::White => Rank::Fourth,
            Team::Black => Rank::Fifth,
        }
    }

    /// The [`Rank`] this team must reach to win.
    #[inline(always)]
    pub fn far_rank(self) -> Rank {
        match self {
            Team::White => Rank::Eighth,
            Team::Black => Rank::First,
        }
    }

    /// The rank increment of a single step forward.
    ///
    /// White advances towards the 8th rank, black towards the 1st.
    #[inline(always)]
    pub fn direction(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }
}

impl Not for Team {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn team_implements_not_operator(t: Team) {
        assert_eq!(!!t, t);
        assert_ne!(!t, t);
    }

    #[proptest]
    fn long_move_rank_is_two_steps_ahead_of_home_rank(t: Team) {
        assert_eq!(t.long_move_rank() - t.home_rank(), 2 * t.direction());
    }

    #[proptest]
    fn far_rank_is_opponents_back_rank(t: Team) {
        assert_eq!(t.far_rank(), (!t).home_rank().step(-(!t).direction()).unwrap());
    }

    #[proptest]
    fn opponents_move_in_opposite_directions(t: Team) {
        assert_eq!(t.direction(), -(!t).direction());
    }

    #[test]
    fn team_is_displayed_in_lower_case() {
        assert_eq!(Team::White.to_string(), "white");
        assert_eq!(Team::Black.to_string(), "black");
    }
}

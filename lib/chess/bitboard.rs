use crate::chess::Square;
use crate::util::Integer;
use derive_more::{BitAnd, BitOr, Constructor, Not};

/// The set of [`Square`]s held by one side, one bit per square starting from a1.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor, BitAnd, BitOr, Not)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Bitboard(u64);

impl Bitboard {
    /// A set with no squares.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// How many pawns the set holds.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether a pawn stands on the given [`Square`].
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        !(*self & sq.bitboard()).is_empty()
    }

    /// This set with a pawn added on the given [`Square`].
    #[inline(always)]
    pub fn with(&self, sq: Square) -> Self {
        *self | sq.bitboard()
    }

    /// This set with the pawn on the given [`Square`] removed.
    #[inline(always)]
    pub fn without(&self, sq: Square) -> Self {
        *self & !sq.bitboard()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares(self.0)
    }
}

/// Walks the [`Square`]s of a [`Bitboard`] from a1 towards h8.
#[derive(Debug)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let sq = <Square as Integer>::new(self.0.trailing_zeros() as _);
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn empty_set_has_no_squares() {
        assert_eq!(Bitboard::empty().into_iter().next(), None);
        assert!(Bitboard::empty().is_empty());
    }

    #[proptest]
    fn len_counts_the_squares_walked(bb: Bitboard) {
        assert_eq!(bb.len(), bb.into_iter().count());
        assert_eq!(bb.is_empty(), bb.len() == 0);
    }

    #[proptest]
    fn walked_squares_are_contained(bb: Bitboard) {
        for sq in bb {
            assert!(bb.contains(sq));
        }
    }

    #[proptest]
    fn with_adds_only_the_given_square(bb: Bitboard, sq: Square, other: Square) {
        let added = bb.with(sq);
        assert!(added.contains(sq));
        if other != sq {
            assert_eq!(added.contains(other), bb.contains(other));
        }
    }

    #[proptest]
    fn without_removes_only_the_given_square(bb: Bitboard, sq: Square, other: Square) {
        let removed = bb.without(sq);
        assert!(!removed.contains(sq));
        if other != sq {
            assert_eq!(removed.contains(other), bb.contains(other));
        }
    }

    #[proptest]
    fn squares_are_walked_from_a1_to_h8(bb: Bitboard) {
        let v = Vec::from_iter(bb);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn home_rank_holds_eight_squares() {
        let v = Vec::from_iter(crate::chess::Rank::Second.bitboard());
        assert_eq!(v.first(), Some(&Square::A2));
        assert_eq!(v.last(), Some(&Square::H2));
        assert_eq!(v.len(), 8);
    }
}

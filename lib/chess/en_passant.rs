use crate::chess::{Square, Team};

/// The [en passant] window.
///
/// Open for exactly one ply after a pawn advances two ranks from its home rank,
/// during which an opposing pawn may capture it as if it had advanced a single rank.
///
/// [en passant]: https://www.chessprogramming.org/En_passant
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct EnPassant(Option<(Square, Team)>);

impl EnPassant {
    /// Opens the window on the [`Square`] a pawn of a [`Team`] just landed on.
    #[inline(always)]
    pub fn activate(&mut self, sq: Square, t: Team) {
        self.0 = Some((sq, t));
    }

    /// Closes the window.
    #[inline(always)]
    pub fn deactivate(&mut self) {
        self.0 = None;
    }

    /// Whether the window is open.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    /// The [`Square`] of the pawn that may be captured.
    ///
    /// # Panics
    ///
    /// Panics if the window is not [active](`Self::is_active`).
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.0.expect("en passant window is inactive").0
    }

    /// The [`Team`] of the pawn that may be captured.
    ///
    /// # Panics
    ///
    /// Panics if the window is not [active](`Self::is_active`).
    #[inline(always)]
    pub fn team(&self) -> Team {
        self.0.expect("en passant window is inactive").1
    }

    /// The [`Square`] a pawn of a [`Team`] lands on when capturing en passant, if any.
    #[inline(always)]
    pub fn landing(&self, capturer: Team) -> Option<Square> {
        match self.0 {
            Some((sq, t)) if t == !capturer => sq.ahead(capturer),
            _ => None,
        }
    }
}

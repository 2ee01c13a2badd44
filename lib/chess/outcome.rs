use crate::chess::{Board, Square, Team};
use derive_more::Display;

/// One of the possible outcomes of a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    #[display(fmt = "{_0} reached the far rank")]
    Breakthrough(Team),

    #[display(fmt = "{_0} captured every opposing pawn")]
    Annihilation(Team),

    #[display(fmt = "stalemate")]
    Stalemate,
}

impl Outcome {
    /// Evaluates the [`Board`] right after a [`Team`] has moved.
    ///
    /// Returns `None` if the game goes on.
    pub fn evaluate(board: &Board, mover: Team) -> Option<Self> {
        if board.reached(Team::White) {
            Some(Outcome::Breakthrough(Team::White))
        } else if board.reached(Team::Black) {
            Some(Outcome::Breakthrough(Team::Black))
        } else if board.count(Team::Black) == 0 {
            Some(Outcome::Annihilation(Team::White))
        } else if board.count(Team::White) == 0 {
            Some(Outcome::Annihilation(Team::Black))
        } else if !board
            .by_team(!mover)
            .into_iter()
            .any(|sq| is_movable(board, !mover, sq))
        {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }

    /// The winning side, or `None` on stalemate.
    pub fn winner(&self) -> Option<Team> {
        match *self {
            Outcome::Breakthrough(t) | Outcome::Annihilation(t) => Some(t),
            Outcome::Stalemate => None,
        }
    }
}

/// Whether the pawn of a [`Team`] on a [`Square`] seems to have a move.
///
/// Only a pawn facing an opposing pawn is ever considered stuck, and even then
/// it may still capture on either square diagonally ahead.
/// En passant captures are not taken into account.
fn is_movable(board: &Board, t: Team, sq: Square) -> bool {
    let Some(ahead) = sq.ahead(t) else {
        return false;
    };

    if board.occupant_at(ahead) != Some(!t) {
        return true;
    }

    [-1, 1]
        .into_iter()
        .filter_map(|df| ahead.offset(df, 0))
        .any(|diagonal| board.occupant_at(diagonal) == Some(!t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{EnPassant, Position};
    use test_strategy::proptest;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[proptest]
    fn stalemate_has_no_winner(t: Team) {
        assert_eq!(Outcome::Stalemate.winner(), None);
        assert_eq!(Outcome::Breakthrough(t).winner(), Some(t));
        assert_eq!(Outcome::Annihilation(t).winner(), Some(t));
    }

    #[proptest]
    fn game_goes_on_from_the_initial_board(t: Team) {
        assert_eq!(Outcome::evaluate(&Board::default(), t), None);
    }

    #[proptest]
    fn white_wins_by_reaching_the_eighth_rank(t: Team) {
        let b = board("4W3/BBBB1BBB/8/8/8/8/WWWW1WWW/8");
        assert_eq!(Outcome::evaluate(&b, t), Some(Outcome::Breakthrough(Team::White)));
    }

    #[proptest]
    fn black_wins_by_reaching_the_first_rank(t: Team) {
        let b = board("8/BBBB1BBB/8/8/8/8/WWWW1WWW/4B3");
        assert_eq!(Outcome::evaluate(&b, t), Some(Outcome::Breakthrough(Team::Black)));
    }

    #[test]
    fn white_breakthrough_is_checked_first() {
        let b = board("W7/8/8/8/8/8/8/7B");
        assert_eq!(
            Outcome::evaluate(&b, Team::Black),
            Some(Outcome::Breakthrough(Team::White))
        );
    }

    #[test]
    fn breakthrough_is_checked_before_annihilation() {
        let b = board("W7/8/8/8/8/8/8/8");
        assert_eq!(
            Outcome::evaluate(&b, Team::White),
            Some(Outcome::Breakthrough(Team::White))
        );
    }

    #[proptest]
    fn white_wins_by_capturing_every_black_pawn(t: Team) {
        let b = board("8/8/8/3W4/8/8/WWW2WWW/8");
        assert_eq!(Outcome::evaluate(&b, t), Some(Outcome::Annihilation(Team::White)));
    }

    #[proptest]
    fn black_wins_by_capturing_every_white_pawn(t: Team) {
        let b = board("8/BB4BB/8/8/2B5/8/8/8");
        assert_eq!(Outcome::evaluate(&b, t), Some(Outcome::Annihilation(Team::Black)));
    }

    #[test]
    fn stalemate_if_opponent_has_every_pawn_blocked() {
        let b = board("8/8/8/B1B5/W1W5/8/8/8");
        assert_eq!(Outcome::evaluate(&b, Team::White), Some(Outcome::Stalemate));
        assert_eq!(Outcome::evaluate(&b, Team::Black), Some(Outcome::Stalemate));
    }

    #[test]
    fn stalemate_only_considers_the_opponent_of_the_mover() {
        let b = board("8/8/8/B7/W7/8/7W/8");
        assert_eq!(Outcome::evaluate(&b, Team::White), Some(Outcome::Stalemate));
        assert_eq!(Outcome::evaluate(&b, Team::Black), None);
    }

    #[test]
    fn blocked_pawn_with_a_capture_is_movable() {
        let b = board("8/8/8/BB6/W7/8/8/8");
        assert_eq!(Outcome::evaluate(&b, Team::Black), None);
    }

    #[test]
    fn pawn_blocked_by_its_own_team_counts_as_movable() {
        let b = board("8/8/8/B7/W7/W7/8/8");
        assert_eq!(Outcome::evaluate(&b, Team::Black), None);
    }

    #[test]
    fn capture_behind_a_pawn_of_the_same_team_prevents_stalemate() {
        let b = board("8/8/1B6/1BW5/1W6/8/7W/8");
        assert_eq!(Outcome::evaluate(&b, Team::White), None);
    }

    #[test]
    fn en_passant_does_not_count_as_a_move() {
        let mut ep = EnPassant::default();
        ep.activate(Square::B5, Team::Black);
        let pos = Position::new(board("8/8/B7/WB6/8/8/8/8"), ep);
        assert!(pos.moves(Team::White).any(|m| m.is_en_passant()));
        assert_eq!(pos.outcome(Team::Black), Some(Outcome::Stalemate));
    }
}

use lib::chess::{Position, Team};
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(pos: &Position, turn: Team, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => pos.moves(turn).count(),
        d => pos
            .moves(turn)
            .par_bridge()
            .map(|m| {
                let mut next = pos.clone();
                next.play(turn, *m).expect("generated moves are legal");
                match next.outcome(turn) {
                    Some(_) => 1,
                    None => perft(&next, !turn, d - 1),
                }
            })
            .sum(),
    }
}

#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    let pos = Position::default();
    assert_eq!(perft(&pos, Team::White, 1), 16);
    assert_eq!(perft(&pos, Team::White, 2), 256);
    assert_eq!(perft(&pos, Team::White, 3), 3846);
    assert_eq!(perft(&pos, Team::White, 4), 57744);
}

#[proptest(cases = 1)]
fn perft_is_symmetric_between_teams() {
    let pos = Position::default();
    for depth in 1..=4 {
        assert_eq!(perft(&pos, Team::White, depth), perft(&pos, Team::Black, depth));
    }
}

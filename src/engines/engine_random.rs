//! Uniform random engine.
//!
//! Selects uniformly from legal moves and is primarily used as a baseline
//! opponent in match series and for harness diagnostics.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::board_types::Move;
use crate::search::deadline::DeadlineClock;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        _board: &Board,
        legal_moves: &[Move],
        _clock: &DeadlineClock,
    ) -> Option<Move> {
        let mut rng = rand::rng();
        legal_moves.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::search::deadline::DeadlineClock;
    use std::time::Duration;

    #[test]
    fn always_picks_a_legal_move() {
        let board = Board::new();
        let legal_moves = board.active_legal_moves();
        let clock = DeadlineClock::start(Duration::from_millis(100));
        let mut engine = RandomEngine::new();
        for _ in 0..50 {
            let mv = engine
                .choose_move(&board, &legal_moves, &clock)
                .expect("opening position has legal moves");
            assert!(legal_moves.contains(&mv));
        }
    }

    #[test]
    fn returns_none_when_there_is_nothing_to_pick() {
        let board = Board::new();
        let clock = DeadlineClock::start(Duration::from_millis(100));
        let mut engine = RandomEngine::new();
        assert_eq!(engine.choose_move(&board, &[], &clock), None);
    }
}

//! One-ply greedy engine.
//!
//! Scores each legal move by evaluating the position right after it and
//! plays the best one, first candidate winning ties. No lookahead, so it is
//! the strength baseline just above random.

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::board_types::Move;
use crate::search::deadline::DeadlineClock;
use crate::search::evaluation::{Heuristic, OpenMoveScore};

pub struct GreedyEngine {
    heuristic: Box<dyn Heuristic>,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            heuristic: Box::new(OpenMoveScore),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        _clock: &DeadlineClock,
    ) -> Option<Move> {
        let mover = board.active_player();
        let mut best: Option<(f64, Move)> = None;
        for &mv in legal_moves {
            let score = self.heuristic.score(&board.forecast(mv), mover);
            let better = match best {
                Some((best_score, _)) => score > best_score,
                None => true,
            };
            if better {
                best = Some((score, mv));
            }
        }
        best.map(|(_, mv)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::{Move, MovePattern};
    use crate::search::deadline::DeadlineClock;
    use std::time::Duration;

    #[test]
    fn keeps_its_own_mobility_high() {
        // King movement on 3x3: from the corner, stepping to the center
        // keeps the most follow-up squares open.
        let mut board =
            Board::with_dimensions(3, 3, MovePattern::King).expect("3x3 should be supported");
        board.apply_move(Move::new(0, 0));
        board.apply_move(Move::new(2, 2));
        let legal_moves = board.active_legal_moves();
        let clock = DeadlineClock::start(Duration::from_millis(100));
        let mut engine = GreedyEngine::new();
        let mv = engine
            .choose_move(&board, &legal_moves, &clock)
            .expect("corner has moves");
        assert_eq!(mv, Move::new(1, 1));
    }

    #[test]
    fn placement_prefers_the_first_maximum_mobility_cell() {
        let board = Board::new();
        let legal_moves = board.active_legal_moves();
        let clock = DeadlineClock::start(Duration::from_millis(100));
        let mut engine = GreedyEngine::new();
        let mv = engine
            .choose_move(&board, &legal_moves, &clock)
            .expect("placement phase has moves");
        // Knight mobility peaks at 8 on cells at least two away from every
        // edge; the first such cell in row-major order is (2, 2).
        assert_eq!(mv, Move::new(2, 2));
    }

    #[test]
    fn returns_none_without_legal_moves() {
        let board = Board::new();
        let clock = DeadlineClock::start(Duration::from_millis(100));
        let mut engine = GreedyEngine::new();
        assert_eq!(engine.choose_move(&board, &[], &clock), None);
    }
}

//! Adversarial search engine.
//!
//! Wraps the game-tree search behind the [`Engine`] trait: each turn it
//! carves a safety margin off the harness clock, runs iterative deepening
//! (or a single fixed-depth pass) with its configured method and heuristic,
//! and plays the best move found in time.

use std::time::Duration;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::board_types::Move;
use crate::search::deadline::{DeadlineClock, DEFAULT_TIMER_MARGIN_MS};
use crate::search::evaluation::{Heuristic, ImprovedScore};
use crate::search::iterative_deepening::{
    fixed_depth_search, iterative_deepening_search, SearchConfig,
};

pub struct SearchEngine {
    pub config: SearchConfig,
    pub heuristic: Box<dyn Heuristic>,
    pub timer_margin: Duration,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            heuristic: Box::new(ImprovedScore),
            timer_margin: Duration::from_millis(DEFAULT_TIMER_MARGIN_MS),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            heuristic,
            ..Self::new()
        }
    }

    /// Builds the default engine with the method given by name. Unknown
    /// names are configuration errors and reported before any game starts.
    pub fn from_method_name(method: &str) -> Result<Self, String> {
        let mut engine = Self::new();
        engine.config.method = method.parse()?;
        Ok(engine)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SearchEngine {
    fn name(&self) -> &str {
        "search"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        clock: &DeadlineClock,
    ) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }
        let clock = clock.guarded(self.timer_margin);
        let searching = board.active_player();
        let result = if self.config.iterative {
            iterative_deepening_search(
                board,
                self.heuristic.as_ref(),
                searching,
                self.config.method,
                &clock,
            )
        } else {
            fixed_depth_search(
                board,
                self.heuristic.as_ref(),
                searching,
                self.config.method,
                self.config.depth,
                &clock,
            )
        };
        log::debug!(
            "{} ({}) picked {:?}: score {} depth {} nodes {} in {}ms",
            self.name(),
            self.config.method,
            result.best_move,
            result.best_score,
            result.reached_depth,
            result.nodes,
            result.elapsed_ms
        );
        result.best_move
    }
}

#[cfg(test)]
mod tests {
    use super::SearchEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::{Move, MovePattern, Player};
    use crate::search::deadline::DeadlineClock;
    use crate::search::evaluation::{Heuristic, ImprovedScore};
    use crate::search::iterative_deepening::SearchMethod;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct CountingScore {
        calls: Arc<AtomicUsize>,
    }

    impl Heuristic for CountingScore {
        fn score(&self, board: &Board, player: Player) -> f64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            ImprovedScore.score(board, player)
        }
    }

    fn placed_board() -> Board {
        let mut board = Board::new();
        board.apply_move(Move::new(3, 2));
        board.apply_move(Move::new(3, 4));
        board
    }

    #[test]
    fn no_legal_moves_short_circuits_without_evaluating() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut engine = SearchEngine::with_heuristic(Box::new(CountingScore {
            calls: Arc::clone(&calls),
        }));
        let board = Board::new();
        let clock = DeadlineClock::start(Duration::from_millis(100));
        assert_eq!(engine.choose_move(&board, &[], &clock), None);
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn forced_position_yields_the_only_legal_move_under_every_config() {
        // King movement on 3x3 with the mover walled into a corner except
        // for one square.
        let mut board =
            Board::with_dimensions(3, 3, MovePattern::King).expect("3x3 should be supported");
        board.apply_move(Move::new(0, 0));
        board.apply_move(Move::new(2, 2));
        board.blocked |= 1 << board.square(0, 1);
        board.blocked |= 1 << board.square(1, 1);
        let legal_moves = board.active_legal_moves();
        assert_eq!(legal_moves, vec![Move::new(1, 0)]);

        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            for iterative in [true, false] {
                let mut engine = SearchEngine::new();
                engine.config.method = method;
                engine.config.iterative = iterative;
                let clock = DeadlineClock::start(Duration::from_secs(5));
                let mv = engine.choose_move(&board, &legal_moves, &clock);
                assert_eq!(mv, Some(Move::new(1, 0)), "{method} iterative={iterative}");
            }
        }
    }

    #[test]
    fn finds_the_immediately_winning_move() {
        // The mover can step to (1, 0) and leave the opponent at (0, 0)
        // with every neighbour visited.
        let mut board =
            Board::with_dimensions(3, 3, MovePattern::King).expect("3x3 should be supported");
        board.apply_move(Move::new(2, 1));
        board.apply_move(Move::new(0, 0));
        board.blocked |= 1 << board.square(0, 1);
        board.blocked |= 1 << board.square(1, 1);
        let legal_moves = board.active_legal_moves();
        let mut engine = SearchEngine::new();
        let clock = DeadlineClock::start(Duration::from_secs(5));
        let mv = engine.choose_move(&board, &legal_moves, &clock);
        assert_eq!(mv, Some(Move::new(1, 0)));
    }

    #[test]
    fn depth_one_pick_matches_exhaustive_recomputation_on_a_small_grid() {
        // King movement on 3x3 with only the mover placed, at the center:
        // all eight neighbours are open, and a depth-1 search must pick a
        // cell whose one-ply score equals the recomputed maximum.
        let mut board =
            Board::with_dimensions(3, 3, MovePattern::King).expect("3x3 should be supported");
        board.apply_move(Move::new(1, 1));
        board.side_to_move = Player::One;
        let legal_moves = board.active_legal_moves();
        assert_eq!(legal_moves.len(), 8);

        let mut engine = SearchEngine::new();
        engine.config.iterative = false;
        engine.config.depth = 1;
        let clock = DeadlineClock::start(Duration::from_secs(5));
        let picked = engine
            .choose_move(&board, &legal_moves, &clock)
            .expect("eight moves available");

        let best = legal_moves
            .iter()
            .map(|&mv| ImprovedScore.score(&board.forecast(mv), Player::One))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(
            ImprovedScore.score(&board.forecast(picked), Player::One),
            best
        );
    }

    #[test]
    fn answers_promptly_and_legally_on_a_tiny_budget() {
        let board = placed_board();
        let legal_moves = board.active_legal_moves();
        let mut engine = SearchEngine::new();
        let clock = DeadlineClock::start(Duration::ZERO);
        let started = Instant::now();
        let mv = engine
            .choose_move(&board, &legal_moves, &clock)
            .expect("fallback must still produce a move");
        assert!(started.elapsed() < Duration::from_millis(150));
        assert!(legal_moves.contains(&mv));
    }

    #[test]
    fn both_methods_agree_at_a_fixed_depth() {
        let board = placed_board();
        let legal_moves = board.active_legal_moves();
        let mut picks = Vec::new();
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let mut engine = SearchEngine::new();
            engine.config.method = method;
            engine.config.iterative = false;
            engine.config.depth = 3;
            let clock = DeadlineClock::start(Duration::from_secs(60));
            picks.push(engine.choose_move(&board, &legal_moves, &clock));
        }
        assert_eq!(picks[0], picks[1]);
        assert!(picks[0].is_some());
    }

    #[test]
    fn method_names_configure_or_reject() {
        let engine = SearchEngine::from_method_name("alphabeta").expect("known method");
        assert_eq!(engine.config.method, SearchMethod::AlphaBeta);
        assert!(SearchEngine::from_method_name("montecarlo").is_err());
    }
}

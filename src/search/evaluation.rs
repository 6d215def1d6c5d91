//! Heuristic evaluation of non-terminal positions.
//!
//! Every heuristic scores a board from one player's perspective and honors
//! the same boundary conditions: negative infinity when that player has
//! lost, positive infinity when it has won. Search calls the heuristic only
//! at horizon leaves; interior nodes score by propagation.

use crate::game_state::board::Board;
use crate::game_state::board_types::Player;

/// Scoring contract used at the search horizon.
///
/// Implementations must be pure functions of the board: the search forecasts
/// a fresh child per move, so no state may leak between calls.
pub trait Heuristic: Send + Sync {
    fn score(&self, board: &Board, player: Player) -> f64;
}

/// Flat baseline: zero for any position still in play.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScore;

impl Heuristic for NullScore {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if board.is_winner(player) {
            return f64::INFINITY;
        }
        0.0
    }
}

/// Own mobility: the number of moves open to `player`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveScore;

impl Heuristic for OpenMoveScore {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if board.is_winner(player) {
            return f64::INFINITY;
        }
        f64::from(board.mobility(player))
    }
}

/// Mobility difference: own moves minus opponent moves. The default
/// heuristic for the search agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedScore;

impl Heuristic for ImprovedScore {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if board.is_winner(player) {
            return f64::INFINITY;
        }
        f64::from(board.mobility(player)) - f64::from(board.mobility(player.opponent()))
    }
}

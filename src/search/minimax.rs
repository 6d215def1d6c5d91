//! Plain fixed-depth minimax for the blocking game.
//!
//! Every score lives on one axis, the searching player's perspective; the
//! `maximizing` flag tracks whose turn the current layer serves. Ties break
//! toward the first move in enumeration order, which keeps results
//! deterministic and lets alpha-beta reproduce them exactly.

use crate::game_state::board::Board;
use crate::game_state::board_types::{Move, Player};
use crate::search::deadline::{DeadlineClock, SearchStep};
use crate::search::evaluation::Heuristic;

/// Depth-limited minimax from the side to move on `board`.
///
/// `searching` is the player the score axis belongs to; the root call passes
/// the active player with `maximizing = true`. Returns the layer's best
/// `(score, move)`; the move is `None` only when the side to move is
/// blocked. The clock is checked before any work at every entry, so a
/// deadline unwinds the whole in-flight search through `?`.
pub fn minimax(
    board: &Board,
    heuristic: &dyn Heuristic,
    searching: Player,
    depth: u8,
    maximizing: bool,
    clock: &DeadlineClock,
    nodes: &mut u64,
) -> SearchStep<(f64, Option<Move>)> {
    clock.check()?;
    *nodes += 1;

    let moves = board.active_legal_moves();
    if moves.is_empty() {
        return Ok((blocked_score(maximizing), None));
    }

    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for mv in moves {
        let child_score = if depth <= 1 {
            // Horizon: one evaluator call per leaf, still on the searching
            // player's axis.
            heuristic.score(&board.forecast(mv), searching)
        } else {
            minimax(
                &board.forecast(mv),
                heuristic,
                searching,
                depth - 1,
                !maximizing,
                clock,
                nodes,
            )?
            .0
        };

        let better = if maximizing {
            child_score > best_score
        } else {
            child_score < best_score
        };
        if better || best_move.is_none() {
            best_score = child_score;
            best_move = Some(mv);
        }
    }

    Ok((best_score, best_move))
}

/// Value of a node whose mover is blocked: a loss when the searching player
/// is the mover (maximizing layer), a win when the opponent is.
#[inline]
pub(crate) fn blocked_score(maximizing: bool) -> f64 {
    if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

//! Alpha-beta pruned minimax.
//!
//! Same state machine and tie-break policy as `minimax`, plus the (alpha,
//! beta) window threaded by value down the recursion. With the fixed
//! enumeration order a root call with the full window returns the identical
//! `(score, move)` pair while expanding at most as many nodes.

use crate::game_state::board::Board;
use crate::game_state::board_types::{Move, Player};
use crate::search::deadline::{DeadlineClock, SearchStep};
use crate::search::evaluation::Heuristic;
use crate::search::minimax::blocked_score;

/// Depth-limited alpha-beta search from the side to move on `board`.
///
/// `alpha` is the best score the maximizer can already guarantee on the
/// path from the root, `beta` the minimizer's counterpart; root calls pass
/// the full `(-inf, +inf)` window. Bounds only tighten as siblings are
/// processed left to right; once `beta <= alpha` the remaining siblings
/// cannot change this node's choice and enumeration stops, returning the
/// running best as tracked so far.
pub fn alphabeta(
    board: &Board,
    heuristic: &dyn Heuristic,
    searching: Player,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
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
            heuristic.score(&board.forecast(mv), searching)
        } else {
            alphabeta(
                &board.forecast(mv),
                heuristic,
                searching,
                depth - 1,
                alpha,
                beta,
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

        if maximizing {
            if child_score > alpha {
                alpha = child_score;
            }
        } else if child_score < beta {
            beta = child_score;
        }
        if beta <= alpha {
            break;
        }
    }

    Ok((best_score, best_move))
}

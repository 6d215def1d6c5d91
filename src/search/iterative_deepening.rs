//! Depth-progressive search driver under a wall-clock budget.
//!
//! Runs the configured engine at depth 1, 2, 3, ... and keeps the result of
//! the last depth that completed before the deadline. The fallback when not
//! even depth 1 finishes is the first legal move in enumeration order, so a
//! caller always gets a legal answer on time.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::game_state::board::Board;
use crate::game_state::board_types::{Move, Player};
use crate::search::alphabeta::alphabeta;
use crate::search::deadline::{DeadlineClock, SearchInterrupt, SearchStep};
use crate::search::evaluation::Heuristic;
use crate::search::minimax::minimax;

/// Which engine the driver runs at each depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Minimax,
    AlphaBeta,
}

impl FromStr for SearchMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("minimax") {
            Ok(SearchMethod::Minimax)
        } else if s.eq_ignore_ascii_case("alphabeta") {
            Ok(SearchMethod::AlphaBeta)
        } else {
            Err(format!(
                "unknown search method '{s}' (expected 'minimax' or 'alphabeta')"
            ))
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Minimax => write!(f, "minimax"),
            SearchMethod::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

/// Agent-level search settings. `depth` only applies when `iterative` is
/// off; the driver always seeds at depth 1.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub method: SearchMethod,
    pub iterative: bool,
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            method: SearchMethod::Minimax,
            iterative: true,
            depth: 3,
        }
    }
}

/// Outcome of one driver run.
///
/// `best_move` is `None` only when the side to move had no legal moves, in
/// which case `best_score` stays at negative infinity (loss signal) and
/// `reached_depth` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Deepen until the clock trips or the outcome is proven.
///
/// Infinite scores only arise from true terminals, so a completed depth
/// returning one cannot be changed by deeper search and the loop stops —
/// that is also what terminates the driver near game end when the budget
/// outlasts the remaining tree.
pub fn iterative_deepening_search(
    board: &Board,
    heuristic: &dyn Heuristic,
    searching: Player,
    method: SearchMethod,
    clock: &DeadlineClock,
) -> SearchResult {
    let started = Instant::now();
    let mut result = seed_result(board);
    if result.best_move.is_none() {
        result.elapsed_ms = started.elapsed().as_millis() as u64;
        return result;
    }

    let mut depth: u8 = 1;
    loop {
        let mut nodes = 0u64;
        match run_at_depth(method, board, heuristic, searching, depth, clock, &mut nodes) {
            Err(SearchInterrupt::TimeExpired) => {
                result.nodes += nodes;
                break;
            }
            Ok((score, best_move)) => {
                result.nodes += nodes;
                result.best_score = score;
                result.best_move = best_move;
                result.reached_depth = depth;
                log::debug!(
                    "{method} depth {depth} done: score {score} nodes {} remaining {:?}",
                    result.nodes,
                    clock.remaining()
                );
                if score.is_infinite() {
                    break;
                }
            }
        }
        // A 7x7 game never outlives u8 depths; the guard just keeps the
        // loop total.
        depth = match depth.checked_add(1) {
            Some(next) => next,
            None => break,
        };
    }

    result.elapsed_ms = started.elapsed().as_millis() as u64;
    result
}

/// One pass at a fixed depth (iterative deepening off). A deadline during
/// the pass leaves the first-legal-move fallback in place.
pub fn fixed_depth_search(
    board: &Board,
    heuristic: &dyn Heuristic,
    searching: Player,
    method: SearchMethod,
    depth: u8,
    clock: &DeadlineClock,
) -> SearchResult {
    let started = Instant::now();
    let mut result = seed_result(board);
    if result.best_move.is_none() {
        result.elapsed_ms = started.elapsed().as_millis() as u64;
        return result;
    }

    let depth = depth.max(1);
    let mut nodes = 0u64;
    match run_at_depth(method, board, heuristic, searching, depth, clock, &mut nodes) {
        Ok((score, best_move)) => {
            result.best_score = score;
            result.best_move = best_move;
            result.reached_depth = depth;
        }
        Err(SearchInterrupt::TimeExpired) => {}
    }
    result.nodes = nodes;
    result.elapsed_ms = started.elapsed().as_millis() as u64;
    result
}

fn seed_result(board: &Board) -> SearchResult {
    SearchResult {
        best_move: board.active_legal_moves().into_iter().next(),
        best_score: f64::NEG_INFINITY,
        reached_depth: 0,
        nodes: 0,
        elapsed_ms: 0,
    }
}

fn run_at_depth(
    method: SearchMethod,
    board: &Board,
    heuristic: &dyn Heuristic,
    searching: Player,
    depth: u8,
    clock: &DeadlineClock,
    nodes: &mut u64,
) -> SearchStep<(f64, Option<Move>)> {
    match method {
        SearchMethod::Minimax => {
            minimax(board, heuristic, searching, depth, true, clock, nodes)
        }
        SearchMethod::AlphaBeta => alphabeta(
            board,
            heuristic,
            searching,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            clock,
            nodes,
        ),
    }
}

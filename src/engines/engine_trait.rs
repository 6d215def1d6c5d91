//! Engine abstraction layer used by the match harness.
//!
//! Defines the common move-selection interface so different player
//! strategies can be swapped at runtime behind a single trait object.

use crate::game_state::board::Board;
use crate::game_state::board_types::Move;
use crate::search::deadline::DeadlineClock;

/// A move-selecting player.
///
/// `choose_move` receives the legal moves for the side to move (the harness
/// computes them once per turn) and the clock holding the remaining budget
/// for this turn. Returning `None` or an illegal move forfeits the game.
pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        clock: &DeadlineClock,
    ) -> Option<Move>;
}

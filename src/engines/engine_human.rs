//! Interactive human player.
//!
//! Renders the position, lists the legal moves with numbers, and reads the
//! chosen number from stdin. The per-move clock is deliberately ignored so
//! a person can think; closed input falls back to the first legal move to
//! keep piped games legal.

use std::io::{self, BufRead, Write};

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::board_types::Move;
use crate::search::deadline::DeadlineClock;
use crate::utils::board_render::render_board;

pub struct HumanEngine;

impl HumanEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HumanEngine {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        _clock: &DeadlineClock,
    ) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }

        println!("\n{}", render_board(board));
        for (index, mv) in legal_moves.iter().enumerate() {
            println!("{:>3}: {mv}", index + 1);
        }

        let stdin = io::stdin();
        loop {
            print!("move for {} [1-{}]: ", board.active_player(), legal_moves.len());
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return legal_moves.first().copied(),
                Ok(_) => {}
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=legal_moves.len()).contains(&choice) => {
                    return Some(legal_moves[choice - 1]);
                }
                _ => println!("enter a number between 1 and {}", legal_moves.len()),
            }
        }
    }
}

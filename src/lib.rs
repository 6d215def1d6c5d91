//! Crate root module declarations for the knights-isolation engine project.
//!
//! This file exposes all top-level subsystems (game state, search, engines,
//! and utility helpers) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod game_state {
    pub mod board;
    pub mod board_types;
}

pub mod search {
    pub mod alphabeta;
    pub mod deadline;
    pub mod evaluation;
    pub mod iterative_deepening;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_human;
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_render;
    pub mod match_harness;
}

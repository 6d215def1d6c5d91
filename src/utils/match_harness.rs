//! Head-to-head engine match harness.
//!
//! Runs two [`Engine`] implementations against each other under a per-move
//! clock, with an optional seeded random opening prefix. The referee is
//! strict: exceeding the budget, answering with an illegal move, or not
//! answering at all forfeits the game on the spot.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::board_types::{Move, Player};
use crate::search::deadline::DeadlineClock;

/// Why the loser lost, from the loser's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser had no legal moves left.
    Blocked,
    /// The loser answered after the per-move budget ran out.
    Timeout,
    /// The loser answered with an illegal move, or not at all.
    IllegalMove,
}

/// Identity-level player label, independent of which seat a player drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Wall-clock budget per move.
    pub move_time: Duration,
    /// Random plies applied before the engines take over. Two plies cover
    /// both initial placements.
    pub opening_random_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_time: Duration::from_millis(150),
            opening_random_plies: 2,
        }
    }
}

/// Outcome of a single match, in seat terms.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub winner: Player,
    pub reason: WinReason,
    pub final_board: Board,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    /// Moves requested from each seat, forfeited attempts included.
    pub move_counts: [u32; 2],
    pub think_time_ns: [u128; 2],
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub outcomes: Vec<(PlayerId, WinReason)>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from an empty board.
///
/// `first` takes the first seat. The seed drives the random opening prefix
/// only; the engines themselves see the post-opening position.
pub fn play_match(
    mut first: Box<dyn Engine>,
    mut second: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> MatchResult {
    play_match_internal(&mut first, &mut second, Board::new(), seed, config, true)
}

/// Play a single match from a caller-provided position.
///
/// Bypasses the random opening; intended for curated scenarios such as
/// endgame conversion checks.
pub fn play_match_from_board(
    mut first: Box<dyn Engine>,
    mut second: Box<dyn Engine>,
    start: Board,
    seed: u64,
    config: MatchConfig,
) -> MatchResult {
    play_match_internal(&mut first, &mut second, start, seed, config, false)
}

fn play_match_internal(
    first: &mut Box<dyn Engine>,
    second: &mut Box<dyn Engine>,
    start: Board,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> MatchResult {
    first.new_game();
    second.new_game();

    let (mut board, opening_moves) = if apply_random_opening {
        apply_seeded_random_opening(&start, seed, config.opening_random_plies)
    } else {
        (start, Vec::new())
    };

    let mut played_moves = Vec::<Move>::new();
    let mut move_counts = [0u32; 2];
    let mut think_time_ns = [0u128; 2];

    // Every move visits a fresh cell, so the loop ends within the cell
    // count of the board.
    let (winner, reason) = loop {
        let mover = board.active_player();
        let legal_moves = board.legal_moves(mover);
        if legal_moves.is_empty() {
            break (mover.opponent(), WinReason::Blocked);
        }

        let clock = DeadlineClock::start(config.move_time);
        let started = Instant::now();
        let choice = match mover {
            Player::One => first.choose_move(&board, &legal_moves, &clock),
            Player::Two => second.choose_move(&board, &legal_moves, &clock),
        };
        let elapsed = started.elapsed();
        move_counts[mover.index()] = move_counts[mover.index()].saturating_add(1);
        think_time_ns[mover.index()] =
            think_time_ns[mover.index()].saturating_add(elapsed.as_nanos());

        if elapsed > config.move_time {
            break (mover.opponent(), WinReason::Timeout);
        }
        match choice {
            Some(mv) if legal_moves.contains(&mv) => {
                log::debug!("{mover} plays {mv}");
                played_moves.push(mv);
                board.apply_move(mv);
            }
            _ => break (mover.opponent(), WinReason::IllegalMove),
        }
    };

    MatchResult {
        winner,
        reason,
        final_board: board,
        opening_moves,
        played_moves,
        move_counts,
        think_time_ns,
    }
}

/// Play a series of matches and aggregate per-player win statistics.
///
/// Seat order is randomized each game (deterministic from `base_seed`) so
/// neither player keeps a first-move advantage across the series.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> MatchSeriesStats
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut seat_rng = StdRng::seed_from_u64(config.base_seed ^ 0x9E37_79B9_97F4_A7C5);

    for i in 0..config.games {
        let player1_moves_first = seat_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (first, second) = if player1_moves_first {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} first={} second={}",
                i + 1,
                config.games,
                seed,
                first,
                second
            );
        }

        let result = if player1_moves_first {
            play_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )
        } else {
            play_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )
        };

        let player1_seat = if player1_moves_first {
            Player::One
        } else {
            Player::Two
        };
        stats.player1_moves = stats
            .player1_moves
            .saturating_add(result.move_counts[player1_seat.index()]);
        stats.player2_moves = stats
            .player2_moves
            .saturating_add(result.move_counts[player1_seat.opponent().index()]);
        stats.player1_total_time_ns = stats
            .player1_total_time_ns
            .saturating_add(result.think_time_ns[player1_seat.index()]);
        stats.player2_total_time_ns = stats
            .player2_total_time_ns
            .saturating_add(result.think_time_ns[player1_seat.opponent().index()]);

        let winner_id = if result.winner == player1_seat {
            stats.player1_wins += 1;
            PlayerId::Player1
        } else {
            stats.player2_wins += 1;
            PlayerId::Player2
        };
        stats.outcomes.push((winner_id, result.reason));

        if config.verbose {
            println!(
                "[series] game {}/{} winner={:?} reason={:?} p1_wins={} p2_wins={}\n",
                i + 1,
                config.games,
                winner_id,
                result.reason,
                stats.player1_wins,
                stats.player2_wins
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    log::info!("series complete: {}", stats.report());
    stats
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(initial: &Board, seed: u64, plies: u8) -> (Board, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = initial.clone();
    let mut opening_moves = Vec::<Move>::new();

    for _ in 0..plies {
        let legal_moves = board.active_legal_moves();
        if legal_moves.is_empty() {
            break;
        }
        let mv = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves.push(mv);
        board.apply_move(mv);
    }

    (board, opening_moves)
}

//! Match-series driver for the knights-isolation engines.
//!
//! Run with:
//! `cargo run --release -- --games 10 --opponent greedy`
//! `cargo run --release -- --human`

use std::time::Duration;

use knights_isolation::engines::engine_greedy::GreedyEngine;
use knights_isolation::engines::engine_human::HumanEngine;
use knights_isolation::engines::engine_random::RandomEngine;
use knights_isolation::engines::engine_search::SearchEngine;
use knights_isolation::engines::engine_trait::Engine;
use knights_isolation::game_state::board::Board;
use knights_isolation::game_state::board_types::{Move, Player};
use knights_isolation::search::deadline::DeadlineClock;
use knights_isolation::search::iterative_deepening::SearchMethod;
use knights_isolation::utils::board_render::render_board;
use knights_isolation::utils::match_harness::{
    play_match_from_board, play_match_series, MatchConfig, MatchSeriesConfig,
};

const USAGE: &str = "\
knights-isolation match driver

USAGE:
    knights_isolation [OPTIONS]

OPTIONS:
    --games <N>        games in the series (default 10)
    --seed <N>         base seed for openings and seat order (default 0)
    --method <NAME>    search method: minimax | alphabeta (default minimax)
    --depth <N>        search depth when iterative deepening is off (default 3)
    --fixed-depth      disable iterative deepening
    --time-ms <N>      per-move budget in milliseconds (default 150)
    --opponent <NAME>  opponent engine: random | greedy | search (default greedy)
    --human            play one interactive game against the search engine
    --verbose, -v      per-game series output
    --help, -h         print this help
";

struct CliOptions {
    games: u16,
    seed: u64,
    method: SearchMethod,
    depth: u8,
    fixed_depth: bool,
    move_time_ms: u64,
    opponent: String,
    human: bool,
    verbose: bool,
}

impl CliOptions {
    fn parse() -> Result<Self, String> {
        let mut options = Self {
            games: 10,
            seed: 0,
            method: SearchMethod::Minimax,
            depth: 3,
            fixed_depth: false,
            move_time_ms: 150,
            opponent: "greedy".to_owned(),
            human: false,
            verbose: false,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--games" => options.games = parse_value(&arg, args.next())?,
                "--seed" => options.seed = parse_value(&arg, args.next())?,
                "--method" => options.method = parse_value(&arg, args.next())?,
                "--depth" => options.depth = parse_value(&arg, args.next())?,
                "--fixed-depth" => options.fixed_depth = true,
                "--time-ms" => options.move_time_ms = parse_value(&arg, args.next())?,
                "--opponent" => {
                    options.opponent = args.next().ok_or("--opponent needs a value")?;
                }
                "--human" => options.human = true,
                "--verbose" | "-v" => options.verbose = true,
                "--help" | "-h" => {
                    print!("{USAGE}");
                    std::process::exit(0);
                }
                other => return Err(format!("unknown argument '{other}' (try --help)")),
            }
        }
        Ok(options)
    }

    fn search_engine(&self) -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine.config.method = self.method;
        engine.config.iterative = !self.fixed_depth;
        engine.config.depth = self.depth;
        engine
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let raw = value.ok_or_else(|| format!("{flag} needs a value"))?;
    raw.parse()
        .map_err(|e| format!("bad value for {flag}: {e}"))
}

/// Caps the wrapped engine's thinking at its own budget even when the
/// harness clock is generous. Used in human games, where the person gets
/// effectively unlimited time but the machine should not.
struct BudgetCap {
    inner: SearchEngine,
    budget: Duration,
}

impl Engine for BudgetCap {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn choose_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        _clock: &DeadlineClock,
    ) -> Option<Move> {
        let clock = DeadlineClock::start(self.budget);
        self.inner.choose_move(board, legal_moves, &clock)
    }
}

fn play_human_game(options: &CliOptions) -> Result<(), String> {
    let engine = BudgetCap {
        inner: options.search_engine(),
        budget: Duration::from_millis(options.move_time_ms),
    };
    let config = MatchConfig {
        move_time: Duration::from_secs(3600),
        opening_random_plies: 0,
    };
    let result = play_match_from_board(
        Box::new(HumanEngine::new()),
        Box::new(engine),
        Board::new(),
        options.seed,
        config,
    );

    println!("\n{}", render_board(&result.final_board));
    match result.winner {
        Player::One => println!("you win ({:?})", result.reason),
        Player::Two => println!("the engine wins ({:?})", result.reason),
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();
    let options = CliOptions::parse()?;
    log::info!(
        "session started at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    if options.human {
        return play_human_game(&options);
    }

    let player1_factory = || Box::new(options.search_engine()) as Box<dyn Engine>;
    let player2_factory: Box<dyn Fn() -> Box<dyn Engine> + '_> = match options.opponent.as_str() {
        "random" => Box::new(|| Box::new(RandomEngine::new()) as Box<dyn Engine>),
        "greedy" => Box::new(|| Box::new(GreedyEngine::new()) as Box<dyn Engine>),
        "search" => Box::new(|| Box::new(options.search_engine()) as Box<dyn Engine>),
        other => {
            return Err(format!(
                "unknown opponent '{other}' (expected random, greedy, or search)"
            ))
        }
    };

    let stats = play_match_series(
        player1_factory,
        player2_factory,
        MatchSeriesConfig {
            games: options.games,
            base_seed: options.seed,
            per_game: MatchConfig {
                move_time: Duration::from_millis(options.move_time_ms),
                ..MatchConfig::default()
            },
            verbose: options.verbose,
        },
    );

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

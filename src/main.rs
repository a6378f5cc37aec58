//! Kamisado GUI and headless self-play
//!
//! ## Usage
//!
//! - `kamisado` - Play against the AI as the first side
//! - `kamisado play --human second --think-ms 2000` - Choose side and AI strength
//! - `kamisado selfplay --rounds 5` - Let the AI play itself and log the result

use std::error::Error;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use kamisado::board::Side;
use kamisado::engine::{DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT_MS};
use kamisado::ui::{GameConfig, GameMode, KamisadoApp};
use kamisado::{AIEngine, Board};

/// Kamisado with sumo pushes, against an alpha-beta AI
#[derive(Parser)]
#[command(name = "kamisado")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the board window
    Play(PlayArgs),
    /// Play the AI against itself without a window
    Selfplay(SelfplayArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum Human {
    First,
    Second,
    /// Watch the AI play both sides
    #[value(name = "none")]
    Nobody,
}

#[derive(Args)]
struct PlayArgs {
    /// Which side the human plays
    #[arg(long, value_enum, default_value = "first")]
    human: Human,
    /// AI thinking time per move in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    think_ms: u64,
    /// Points needed to win the match
    #[arg(long, default_value_t = kamisado::board::DEFAULT_WINNING_POINTS)]
    points: u32,
    /// Maximum search depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            human: Human::First,
            think_ms: DEFAULT_TIME_LIMIT_MS,
            points: kamisado::board::DEFAULT_WINNING_POINTS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Args)]
struct SelfplayArgs {
    /// Stop after this many rounds even if nobody reached the points target
    #[arg(long, default_value_t = 20)]
    rounds: u32,
    /// AI thinking time per move in milliseconds
    #[arg(long, default_value_t = 200)]
    think_ms: u64,
    /// Points needed to win the match
    #[arg(long, default_value_t = kamisado::board::DEFAULT_WINNING_POINTS)]
    points: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay(args)) => selfplay(&args),
        Some(Commands::Play(args)) => run_gui(args),
        None => run_gui(PlayArgs::default()),
    }
}

fn run_gui(args: PlayArgs) -> Result<(), Box<dyn Error>> {
    let mode = match args.human {
        Human::First => GameMode::PvE { human_side: Side::First },
        Human::Second => GameMode::PvE { human_side: Side::Second },
        Human::Nobody => GameMode::EvE,
    };
    let config = GameConfig {
        winning_points: args.points,
        think_ms: args.think_ms,
        max_depth: args.max_depth,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Kamisado"),
        ..Default::default()
    };

    eframe::run_native(
        "Kamisado",
        options,
        Box::new(move |cc| Ok(Box::new(KamisadoApp::new(cc, mode, config)))),
    )?;
    Ok(())
}

/// Upper bound on moves in one round
const MAX_ROUND_MOVES: u32 = 500;

fn selfplay(args: &SelfplayArgs) -> Result<(), Box<dyn Error>> {
    let mut board = Board::with_winning_points(args.points);
    let mut engine = AIEngine::with_config(DEFAULT_MAX_DEPTH, args.think_ms);

    for round in 1..=args.rounds {
        while !board.is_round_over() && board.turn_count() < MAX_ROUND_MOVES {
            let result = engine.think(&mut board);
            if result.apply(&mut board)?.is_none() {
                break;
            }
        }

        info!(
            "round {round}: {:?} wins after {} moves, points {} - {}",
            board.round_winner(),
            board.turn_count(),
            board.points(Side::First),
            board.points(Side::Second)
        );
        if let Some(winner) = board.winner() {
            println!("{winner:?} wins the match after {round} rounds");
            return Ok(());
        }
        if !board.is_round_over() {
            return Err(format!("round {round} did not finish").into());
        }
        // Alternate the refill edge between rounds
        board.reset(round % 2 == 0)?;
    }

    println!(
        "No winner after {} rounds: {} - {}",
        args.rounds,
        board.points(Side::First),
        board.points(Side::Second)
    );
    Ok(())
}

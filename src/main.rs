mod game;
mod geometry;
mod input;
mod render;
mod utils;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::{LevelFilter, error, info};
use macroquad::window::Conf;
use perimeter_board::config::{
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use perimeter_board::logging;
use perimeter_board::{BoardSize, DiceSource, RandomDice};

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tiles per side of the square board (limited by what fits the window).
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = board_size_parser())]
    board_size: usize,

    /// Seed for the dice, for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "board,turn,dice,input")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn board_size_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(MIN_BOARD_SIZE as u64..=MAX_BOARD_SIZE as u64)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Perimeter Board".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Perimeter Board...");

    let size = match BoardSize::new(args.board_size) {
        Ok(size) => size,
        Err(e) => {
            error!("Invalid --board-size: {}", e);
            std::process::exit(2);
        }
    };

    let dice: Box<dyn DiceSource> = match args.seed {
        Some(seed) => {
            info!("Dice seeded with {}", seed);
            Box::new(RandomDice::seeded(seed))
        }
        None => Box::new(RandomDice::from_entropy()),
    };

    let mut game = match game::Game::new(size, dice) {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to create game: {}", e);
            std::process::exit(1);
        }
    };

    let renderer = render::Renderer::new();
    game.run(&renderer).await;
}

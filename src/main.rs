//! Block Breaker headless driver
//!
//! Runs one round without a window: samples input, ticks the simulation,
//! forwards sound cues to a logging player and prints text frames.
//!
//! Usage:
//!   RUST_LOG=info cargo run -- --autopilot
//!   cargo run -- --config round.json --seed 7 --frame-every 100

use std::path::PathBuf;

use clap::Parser;

use block_breaker::audio::{LogCuePlayer, play_cues};
use block_breaker::renderer::{AsciiRenderer, draw};
use block_breaker::sim::{Layout, Outcome, RoundState, TickInput, tick};
use block_breaker::{ConfigError, RoundConfig};

#[derive(Parser)]
#[command(name = "block-breaker")]
#[command(about = "Play a headless block breaker round")]
struct Args {
    /// JSON round config (defaults to the classic board)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Generate the layout from this seed instead of using the configured one
    #[arg(long)]
    seed: Option<u64>,
    /// Rows in a generated layout
    #[arg(long, default_value_t = 3)]
    rows: u32,
    /// Columns in a generated layout
    #[arg(long, default_value_t = 6)]
    cols: u32,
    /// Stop after this many ticks if the round is still going
    #[arg(long, default_value_t = 5000)]
    max_ticks: u64,
    /// Steer the paddle under the ball
    #[arg(long)]
    autopilot: bool,
    /// Print a frame every N ticks (0 = final frame only)
    #[arg(long, default_value_t = 0)]
    frame_every: u64,
}

/// Frame size in characters
const SCREEN_COLS: usize = 64;
const SCREEN_ROWS: usize = 32;

fn main() -> Result<(), ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RoundConfig::load(path)?,
        None => RoundConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.layout = Layout::generate(seed, args.rows, args.cols, &config.playfield);
        config.validate()?;
    }

    let mut state = RoundState::new(&config);
    let mut cues = LogCuePlayer::new(config.audio.clone());
    let mut screen = AsciiRenderer::new(&state.playfield, SCREEN_COLS, SCREEN_ROWS);

    while state.is_active() && state.time_ticks < args.max_ticks {
        let input = if args.autopilot {
            autopilot(&state)
        } else {
            TickInput::default()
        };
        tick(&mut state, &input);

        let events = state.drain_events();
        play_cues(&events, &mut cues);

        if args.frame_every > 0 && state.time_ticks % args.frame_every == 0 {
            println!("tick {}", state.time_ticks);
            print_frame(&state, &mut screen);
        }
    }

    print_frame(&state, &mut screen);
    match state.outcome() {
        Outcome::Ongoing => println!(
            "Stopped after {} ticks with {} blocks left",
            state.time_ticks,
            state.blocks.active_count()
        ),
        outcome => println!(
            "{:?} after {} ticks, {} cues played",
            outcome,
            state.time_ticks,
            cues.history().len()
        ),
    }
    Ok(())
}

fn print_frame(state: &RoundState, screen: &mut AsciiRenderer) {
    screen.clear();
    draw(state, screen);
    println!("{}\n", screen.frame());
}

/// Keep the paddle centre under the ball
fn autopilot(state: &RoundState) -> TickInput {
    let paddle_centre = state.paddle.pos.x + state.paddle.width() / 2.0;
    let offset = state.ball.pos.x - paddle_centre;
    let dead_zone = state.paddle.speed / 2.0;
    TickInput {
        left: offset < -dead_zone,
        right: offset > dead_zone,
    }
}

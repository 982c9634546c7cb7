//! FoldGame terminal entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  TerminalInput   TerminalScreen   LogEventSink   JsonConfigFile │
//! │  (key edges)     (Presentation)   (EventSink)    (ConfigPort)   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              GameSession (pure logic)                  │    │
//! │  │  FoldEngine · RoundState · RoundStats                  │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (delegate-driven) · InputQueue · MonotonicClock     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use foldgame::adapters::config_file::JsonConfigFile;
use foldgame::adapters::log_sink::LogEventSink;
use foldgame::adapters::terminal::{TerminalInput, TerminalScreen, TerminalSession};
use foldgame::adapters::time::MonotonicClock;
use foldgame::app::ports::ConfigPort;
use foldgame::app::service::GameSession;
use foldgame::config::GameConfig;
use foldgame::events::InputQueue;
use foldgame::scheduler::Scheduler;

/// Fold the laundry with the arrow keys.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON config file (defaults are used when absent)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for garment and tint picks (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Logs go to stderr; redirect it (2>fold.log) and set RUST_LOG to watch.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => JsonConfigFile::new(path)
            .load()
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("FoldGame v{}", env!("CARGO_PKG_VERSION"));

    let terminal = TerminalSession::new().context("terminal setup")?;
    let result = run(config, rng, terminal.reports_releases());
    drop(terminal);
    result
}

fn run(config: GameConfig, rng: StdRng, reports_releases: bool) -> Result<()> {
    let frame = Duration::from_millis(u64::from(config.frame_interval_ms));

    let mut session = GameSession::new(config, rng);
    let mut screen = TerminalScreen::new();
    let mut sink = LogEventSink::new();
    let mut input = TerminalInput::new(reports_releases);
    let mut scheduler = Scheduler::new();
    let mut queue = InputQueue::new();
    let mut clock = MonotonicClock::new();

    session.start(&mut screen, &mut sink);
    screen.draw(&session.stats())?;

    loop {
        if input.poll_frame(frame, &mut queue)? {
            break;
        }

        // Tick before draining: a reset scheduled by this drain starts
        // accruing from this lap mark, not from the previous one.
        scheduler.tick(clock.lap_ms(), &mut queue);

        queue.drain(|event| {
            session.handle_command(event.into(), &mut scheduler, &mut screen, &mut sink);
        });

        screen.draw(&session.stats())?;
    }

    let stats = session.stats();
    info!(
        "Session over: {} rounds, {} folded, best streak {}",
        stats.played, stats.successes, stats.best_streak
    );
    Ok(())
}

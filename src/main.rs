//! Pong Deluxe headless driver
//!
//! Plays an attract-mode match (computer on both paddles) and prints the final
//! snapshot as JSON. Flags:
//!
//! - `--seed N`: RNG seed (default: time based)
//! - `--config PATH`: tuning JSON
//! - `--max-ticks N`: stop after this many ticks
//! - `--realtime`: pace ticks at ~60 Hz instead of running flat out

use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pong_deluxe::sim::{self, Command, GameEvent, GameState, MatchMode, Snapshot, TickInput};
use pong_deluxe::{FrameGate, Tuning};

const DEFAULT_MAX_TICKS: u64 = 216_000;

struct Options {
    seed: u64,
    config: Option<String>,
    max_ticks: u64,
    realtime: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut opts = Self {
            seed: time_seed(),
            config: None,
            max_ticks: DEFAULT_MAX_TICKS,
            realtime: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => match args.next().map(|v| v.parse()) {
                    Some(Ok(seed)) => opts.seed = seed,
                    _ => log::warn!("--seed needs an unsigned integer; ignoring"),
                },
                "--config" => opts.config = args.next(),
                "--max-ticks" => match args.next().map(|v| v.parse()) {
                    Some(Ok(n)) => opts.max_ticks = n,
                    _ => log::warn!("--max-ticks needs an unsigned integer; ignoring"),
                },
                "--realtime" => opts.realtime = true,
                other => log::warn!("Unknown argument: {}", other),
            }
        }
        opts
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn log_event(event: &GameEvent, state: &GameState) {
    match event {
        GameEvent::PointScored { scorer } => log::info!(
            "Point to P{} ({} - {})",
            scorer.number(),
            state.players[0].score,
            state.players[1].score
        ),
        GameEvent::MatchOver { .. }
        | GameEvent::Mayhem { .. }
        | GameEvent::OnFire { .. }
        | GameEvent::PowerupCollected { .. } => log::info!("{:?}", event),
        _ => log::trace!("{:?}", event),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let opts = Options::parse(std::env::args().skip(1));
    log::info!("Pong Deluxe (headless) starting with seed {}", opts.seed);

    let tuning = match &opts.config {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let mut state = GameState::new(tuning);
    let mut rng = sim::seeded_rng(opts.seed);

    let mut input = TickInput {
        commands: vec![Command::SelectSinglePlayer],
        idle_mode: true,
        ..Default::default()
    };
    let mut gate = FrameGate::new(Instant::now());
    let mut ticks = 0;

    while ticks < opts.max_ticks {
        if opts.realtime && !gate.poll(Instant::now()) {
            std::thread::sleep(gate.remaining(Instant::now()));
            continue;
        }

        let events = sim::tick(&mut state, &input, &mut rng);
        input.commands.clear();
        ticks += 1;

        for event in &events {
            log_event(event, &state);
        }
        if state.mode == MatchMode::GameOver {
            break;
        }
    }

    if state.mode != MatchMode::GameOver {
        log::warn!("Stopped after {} ticks without a winner", ticks);
    }

    match serde_json::to_string_pretty(&Snapshot::capture(&state)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}

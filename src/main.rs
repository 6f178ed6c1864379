//! Arena Chase headless runner
//!
//! Plays one match with a seeded random bot at a fixed frame rate and logs
//! what happens. Useful for balance checks without a renderer.
//!
//! Run with `--help` for the flags.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use arena_chase::consts::*;
use arena_chase::sim::{FrameSnapshot, KeyState, MatchState, TickInput, tick};
use arena_chase::{Difficulty, Settings};

#[derive(Parser, Debug)]
#[command(name = "arena-chase", about = "Play one headless Arena Chase match")]
struct Cli {
    /// Disable dash, super-jump and the wave
    #[arg(long)]
    hard: bool,

    /// Print the final frame snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Seed for the random bot
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Simulation frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Settings JSON to load (defaults are used if it cannot be read)
    #[arg(long)]
    settings: Option<PathBuf>,
}

/// Holds a random key combination for a random number of frames
struct Bot {
    rng: Pcg32,
    keys: KeyState,
    frames_left: u32,
    look: Vec2,
}

impl Bot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            keys: KeyState::default(),
            frames_left: 0,
            look: Vec2::ZERO,
        }
    }

    fn next_input(&mut self) -> TickInput {
        if self.frames_left == 0 {
            self.frames_left = self.rng.random_range(10..60);
            self.keys = KeyState {
                forward: self.rng.random_bool(0.6),
                back: self.rng.random_bool(0.15),
                left: self.rng.random_bool(0.3),
                right: self.rng.random_bool(0.3),
                jump: self.rng.random_bool(0.1),
                super_jump: self.rng.random_bool(0.05),
                dash: self.rng.random_bool(0.05),
            };
            self.look = Vec2::new(self.rng.random_range(-30.0..30.0), 0.0);
        }
        self.frames_left -= 1;
        TickInput {
            keys: self.keys,
            look: self.look,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Arena Chase (headless) starting...");

    let mut settings = match &cli.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if cli.hard {
        settings.difficulty = Difficulty::Hard;
    }

    let dt = 1.0 / cli.fps as f32;
    let mut state = MatchState::from_settings(&settings);
    let mut bot = Bot::new(cli.seed);
    log::info!("Seed {} at {} fps", cli.seed, cli.fps);

    let max_frames = (MATCH_DURATION / dt).ceil() as u64 + 1;
    let mut waves = 0u32;
    let mut stun_frames = 0u64;
    let frames_per_second = cli.fps as u64;

    while !state.phase.is_over() && state.frames < max_frames {
        let input = bot.next_input();
        let events = tick(&mut state, &input, dt);
        if events.wave_spawned {
            waves += 1;
        }
        if events.chaser_stunned {
            stun_frames += 1;
        }
        if state.frames % frames_per_second == 0 {
            let hud = FrameSnapshot::capture(&state).hud;
            log::debug!(
                "t-{}s gap {:.2} dash {}s super {}s",
                hud.time_left,
                state.separation(),
                hud.dash_cooldown,
                hud.super_jump_cooldown
            );
        }
    }

    log::info!(
        "{:?} after {:.2}s ({} frames, {} waves, {} stun frames)",
        state.phase,
        state.elapsed,
        state.frames,
        waves,
        stun_frames
    );

    if cli.json {
        match serde_json::to_string_pretty(&FrameSnapshot::capture(&state)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode snapshot: {e}"),
        }
    }
}

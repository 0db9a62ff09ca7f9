//! Geometry Fighter headless runner
//!
//! Drives a full session against the built-in headless host with a simple
//! auto-player tapping shapes. Useful for soak-testing balance changes.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use geometry_fighter::headless::HeadlessHost;
use geometry_fighter::persistence::{JsonFileStore, MemoryStore, SaveStore};
use geometry_fighter::sim::{Color, GamePhase, Session, TapOutcome};
use geometry_fighter::{Settings, Tuning};

#[derive(Debug, Parser)]
#[command(name = "geometry-fighter", about = "Run Geometry Fighter headless with an auto-player")]
struct Args {
    /// RNG seed for spawns (defaults to a random seed)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 60 * 120)]
    frames: u32,
    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Chance per frame that the auto-player taps
    #[arg(long, default_value_t = 0.05, value_parser = probability)]
    tap_rate: f64,
    /// Chance a tap goes for any shape instead of a colored one
    #[arg(long, default_value_t = 0.15, value_parser = probability)]
    blunder_rate: f64,
    /// Balance overrides (JSON)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Player settings (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Save file; progress is kept in memory when omitted
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Geometry Fighter (headless) starting...");

    let tuning = match &args.tuning {
        Some(path) => match Tuning::from_json_file(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("Bad tuning file {}: {}, using defaults", path.display(), err);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    let settings = args.settings.as_deref().map(Settings::load).unwrap_or_default();
    let store: Box<dyn SaveStore> = match &args.save {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::default()),
    };

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut session = Session::new(seed, tuning, settings, store);
    let mut host = HeadlessHost::new();
    session.setup(&mut host);

    let mut player = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    let dt = 1.0 / f64::from(args.fps.max(1));
    let mut runs = 0u32;

    for frame in 1..=args.frames {
        let time = f64::from(frame) * dt;
        host.step(dt as f32);
        let report = session.frame(&mut host, time);
        if report.returned_to_title {
            log::info!("[{:>7.2}s] {}", time, host.hud_text());
        }

        if !player.random_bool(args.tap_rate) {
            continue;
        }
        let point = pick_target(&host, &mut player, args.blunder_rate);
        match session.tap(&mut host, point) {
            TapOutcome::Started => runs += 1,
            TapOutcome::GameOver { final_score } => {
                log::info!("[{:>7.2}s] run {} over with {} points", time, runs, final_score);
            }
            outcome => log::debug!("[{:>7.2}s] tap {:?} -> {:?}", time, point, outcome),
        }
    }

    let state = session.state();
    println!("seed:        {}", session.seed());
    println!("runs:        {}", runs);
    println!("phase:       {:?}", state.phase);
    if state.phase == GamePhase::Playing {
        println!("score:       {} ({} lives left)", state.score, state.lives);
    }
    println!("high score:  {}", session.save_data().high_score);
    println!("games saved: {}", session.save_data().games_played);
    println!(
        "shapes:      {} spawned, {} removed, {} live",
        host.stats.spawned,
        host.stats.removed,
        session.shapes().len()
    );
    println!("explosions:  {}, camera shakes: {}", host.stats.explosions, host.stats.shakes);
}

/// Parse a probability in [0, 1]; NaN and out-of-range values are rejected
fn probability(arg: &str) -> Result<f64, String> {
    let value: f64 = arg.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in [0, 1]"))
    }
}

/// Aim at a colored shape in view, or at anything when blundering. When no
/// shape is up yet, tap the middle of the screen (starts a run from the title).
fn pick_target(host: &HeadlessHost, rng: &mut Pcg32, blunder_rate: f64) -> Vec2 {
    let blunder = rng.random_bool(blunder_rate);
    let candidates: Vec<_> = host
        .visible_shapes()
        .filter(|(_, pos, color)| pos.y > 0.0 && (blunder || *color != Color::BLACK))
        .map(|(_, pos, _)| pos.truncate())
        .collect();
    if candidates.is_empty() {
        return Vec2::ZERO;
    }
    candidates[rng.random_range(0..candidates.len())]
}

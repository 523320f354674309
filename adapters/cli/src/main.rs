#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Alien Invasion campaign.

mod session;

use std::time::Duration;

use alien_invasion_core::{stage_by_name, Config};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::session::{Outcome, Session};

/// Milliseconds of simulated time per frame.
const FRAME_MILLIS: u64 = 16;

/// Runs the campaign headlessly with an autofiring ship and prints the result.
#[derive(Debug, Parser)]
#[command(name = "alien-invasion", version, about)]
struct Args {
    /// Roster name of the stage to start from.
    #[arg(long, default_value = "1_1")]
    stage: String,

    /// Overrides the number of starting lives.
    #[arg(long)]
    lives: Option<u32>,

    /// Seed shared by placement rolls and boss behaviour.
    #[arg(long, default_value_t = 0xa11e_4a11)]
    seed: u64,

    /// Maximum number of frames to simulate before giving up.
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// Disables the autofire trigger, leaving the ship passive.
    #[arg(long)]
    no_autofire: bool,
}

/// Entry point for the Alien Invasion command-line interface.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let start = stage_by_name(&args.stage)
        .with_context(|| format!("stage {:?} is not in the roster", args.stage))?;

    tracing::info!(stage = start.name(), seed = args.seed, "starting campaign");

    let mut config = Config::default();
    if let Some(lives) = args.lives {
        config.starting_lives = lives;
    }
    config.placement_seed = config.placement_seed.wrapping_add(args.seed);

    let mut session = Session::new(config, args.seed, start);
    let dt = Duration::from_millis(FRAME_MILLIS);
    let autofire = !args.no_autofire;

    for frame in 0..args.frames {
        match session.step(dt, autofire) {
            Some(Outcome::Won) => {
                println!("campaign won after {frame} frames");
                return Ok(());
            }
            Some(Outcome::Destroyed) => {
                println!(
                    "ship destroyed on stage {} after {frame} frames",
                    session.stage_name()
                );
                return Ok(());
            }
            None => {}
        }
    }

    println!(
        "frame budget exhausted on stage {} with {} lives left",
        session.stage_name(),
        session.lives()
    );
    Ok(())
}

//! Headless chase demo: a pack of chasers closes in on a wandering player.
//!
//! Run: cargo run --bin chase -- --ticks 10
//! Set RUST_LOG=debug to see per-tick moves.

use std::path::PathBuf;

use clap::Parser;
use floodmap_demos::{ChaseConfig, ChaseDemo, DemoError};

#[derive(Parser, Debug)]
#[command(name = "chase", about = "Chasers descending a shared distance field")]
struct Args {
    /// JSON config file; omitted fields use the built-in level
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to run
    #[arg(long)]
    ticks: Option<u32>,
    /// Seed for the player's wandering
    #[arg(long)]
    seed: Option<u64>,
    /// Flood limit, 0 for unbounded
    #[arg(long)]
    limit: Option<i32>,
}

fn run(args: Args) -> Result<(), DemoError> {
    let mut config = match &args.config {
        Some(path) => ChaseConfig::load(path)?,
        None => ChaseConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }

    let mut demo = ChaseDemo::new(&config)?;
    println!("tick 0\n{}", demo.render());
    for _ in 0..config.ticks {
        let moved = demo.step()?;
        println!("tick {} ({moved} moved)\n{}", demo.tick(), demo.render());
        if demo.caught() {
            println!("caught after {} ticks", demo.tick());
            return Ok(());
        }
    }
    log::info!("player still free after {} ticks", config.ticks);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

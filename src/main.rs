//! Parcel Robots - Entry Point
//!
//! Runs a single delivery task with one robot, or compares robots over a
//! batch of random tasks.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use parcel_robots::core::error::Result;
use parcel_robots::robot::{Robot, RobotKind, Strategy};
use parcel_robots::simulation::{compare_kinds, run_robot};
use parcel_robots::world::random_state;
use parcel_robots::SimulationConfig;

/// Delivery robot simulation
#[derive(Parser, Debug)]
#[command(name = "parcel-robots")]
#[command(about = "Simulate parcel delivery robots on a village road graph")]
struct Args {
    /// TOML config replacing the built-in village
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Parcels per task
    #[arg(long, global = true)]
    parcels: Option<usize>,

    /// Turn ceiling per run
    #[arg(long, global = true)]
    max_turns: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one random task with a single robot
    Run {
        /// Robot: random, route, goal or optimized
        #[arg(long, default_value = "goal")]
        robot: RobotKind,

        /// Print every move
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// Compare robots on the same batch of random tasks
    Compare {
        /// First robot
        first: RobotKind,

        /// Second robot
        second: RobotKind,

        /// Number of tasks in the batch
        #[arg(long)]
        tasks: Option<usize>,

        /// Output format: json or text
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("parcel_robots=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(parcels) = args.parcels {
        config.parcel_count = parcels;
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = Some(max_turns);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Command::Compare { tasks: Some(tasks), .. } = &args.command {
        config.tasks = *tasks;
    }
    config.validate()?;

    // Determine seed
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Using seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match args.command {
        Command::Run { robot, verbose } => {
            let graph = config.graph()?;
            let robot = Robot::new(robot, &config.mail_route);
            let state = random_state(&graph, &config.start, config.parcel_count, &mut rng)?;

            println!("{} robot starting at {}", robot.name(), state.place());
            for parcel in state.parcels() {
                println!("  parcel at {} for {}", parcel.place, parcel.address);
            }

            let outcome = run_robot(&graph, state, &robot, robot.initial_memory(), config.max_turns, &mut rng)?;
            if verbose {
                for direction in &outcome.moves {
                    println!("Moved to {}", direction);
                }
            }
            println!("Done in {} turns", outcome.turns);
        }
        Command::Compare {
            first,
            second,
            format,
            ..
        } => {
            let comparison = compare_kinds(&config, &[first, second], &mut rng)?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                println!("{}", comparison);
            }
        }
    }

    Ok(())
}

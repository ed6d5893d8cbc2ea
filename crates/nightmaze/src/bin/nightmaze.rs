//! # NIGHTMAZE CLI
//!
//! Headless driver for the maze generator and the simulation.
//!
//! ```bash
//! # Write a 41x41 maze
//! nightmaze generate --width 41 --height 41 --seed 7 --output maze.txt
//!
//! # Summarise a maze file
//! nightmaze inspect maze.txt
//!
//! # Walk a scripted agent through a generated maze
//! RUST_LOG=nightmaze=debug nightmaze walk --steps 600 --seed 7
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nightmaze::procedural::{write_maze, MazeGenerator, MazeLayout, MazeSeed};
use nightmaze::{GameConfig, Simulation, StepEvent, StepInput};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Steps per simulated second in `walk`.
const STEP_RATE: f32 = 60.0;

/// Steps between scripted jumps in `walk`.
const JUMP_INTERVAL: u64 = 90;

#[derive(Parser)]
#[command(name = "nightmaze")]
#[command(about = "Maze generation and headless exploration")]
struct Cli {
    /// TOML game configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and write it in the text format
    Generate {
        /// Columns (overrides the config)
        #[arg(long)]
        width: Option<usize>,
        /// Rows (overrides the config)
        #[arg(long)]
        height: Option<usize>,
        /// Seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
        /// Destination file
        #[arg(long, short, default_value = "maze.txt")]
        output: PathBuf,
    },
    /// Load a maze file and print its layout summary
    Inspect {
        /// Maze file to read
        path: PathBuf,
        /// Seed for scattered objects
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Also print every building position
        #[arg(long)]
        positions: bool,
    },
    /// Run a scripted agent through a generated maze
    Walk {
        /// Number of fixed steps
        #[arg(long, default_value_t = 600)]
        steps: u64,
        /// Seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("nightmaze=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    match cli.command {
        Commands::Generate {
            width,
            height,
            seed,
            output,
        } => generate(config, width, height, seed, &output),
        Commands::Inspect {
            path,
            seed,
            positions,
        } => inspect(&config, &path, seed, positions),
        Commands::Walk { steps, seed } => walk(config, steps, seed),
    }
}

fn generate(
    mut config: GameConfig,
    width: Option<usize>,
    height: Option<usize>,
    seed: Option<u64>,
    output: &Path,
) -> Result<()> {
    if let Some(width) = width {
        config.generation.width = width;
    }
    if let Some(height) = height {
        config.generation.height = height;
    }
    if seed.is_some() {
        config.generation.seed = seed;
    }

    let seed = config.generation.resolve_seed();
    let maze = MazeGenerator::new(seed)
        .generate(config.generation.width, config.generation.height)
        .context("generating maze")?;
    write_maze(output, &maze.grid).context("writing maze")?;

    info!(
        "Seed {}: {} passages over {} carve steps",
        seed.value(),
        maze.grid.passage_count(),
        maze.carve_steps
    );
    println!("{}", output.display());
    Ok(())
}

fn inspect(config: &GameConfig, path: &Path, seed: u64, positions: bool) -> Result<()> {
    let layout = MazeLayout::load(path, config.layout.clone())
        .with_context(|| format!("reading {}", path.display()))?;
    let grid = layout.grid();
    let seed = MazeSeed::new(seed);

    println!("maze:      {}x{}", grid.width(), grid.height());
    println!("passages:  {}", grid.passage_count());
    println!("buildings: {}", layout.building_positions().len());
    println!("pickups:   {}", layout.seeded_pickup_positions(seed).len());
    println!("lights:    {}", layout.seeded_light_positions(seed).len());
    println!(
        "extents:   {:.1} x {:.1}",
        layout.maze_width(),
        layout.maze_height()
    );
    match layout.spawn_location() {
        Ok(spawn) => println!("spawn:     ({:.2}, {:.2}, {:.2})", spawn.x, spawn.y, spawn.z),
        Err(err) => println!("spawn:     none ({err})"),
    }

    if positions {
        let world = nightmaze::World::from_layout(&layout, seed)?;
        for coords in world.building_coords().chunks_exact(3) {
            println!("{:.2},{:.2},{:.2}", coords[0], coords[1], coords[2]);
        }
    }
    Ok(())
}

fn walk(mut config: GameConfig, steps: u64, seed: Option<u64>) -> Result<()> {
    if seed.is_some() {
        config.generation.seed = seed;
    }
    let (mut sim, seed) = Simulation::from_config(&config).context("building simulation")?;
    info!(
        "Walking {} steps, seed {}, {} pickups",
        steps,
        seed.value(),
        sim.remaining_pickups()
    );

    let mut turn = 0.0;
    for step in 0..steps {
        let input = StepInput {
            dt: 1.0 / STEP_RATE,
            forward: 1.0,
            yaw_delta: turn,
            jump: step % JUMP_INTERVAL == JUMP_INTERVAL - 1,
            interact: true,
            ..StepInput::default()
        };
        let outcome = sim.step(&input);

        turn = 0.0;
        for event in &outcome.events {
            if matches!(event, StepEvent::Bumped { .. }) {
                turn = 90.0;
            }
            println!("step {step:>5}: {event}");
        }
    }

    let stats = sim.stats();
    println!();
    println!("steps:     {}", stats.steps);
    println!("bumps:     {}", stats.bumps);
    println!("jumps:     {}", stats.jumps);
    println!("collected: {}", stats.collected);
    println!("remaining: {}", sim.remaining_pickups());
    let end = sim.agent().position;
    println!("position:  ({:.2}, {:.2}, {:.2})", end.x, end.y, end.z);
    Ok(())
}

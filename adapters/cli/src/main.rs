#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that searches a maze and meanders the path longer.

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use maze_meander_grid::MazeGrid;
use maze_meander_system_lengthening::lengthen;
use maze_meander_system_wave_search::find_path;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Searches a maze for a start-to-exit walk and then repeatedly rewires it
/// into a longer one.
#[derive(Debug, Parser)]
#[command(name = "maze-meander", version, about)]
struct Args {
    /// Maze file to load, one marker character per cell.
    maze: PathBuf,

    /// Number of lengthening attempts applied to the initial path.
    #[arg(long, default_value_t = 10_000)]
    iterations: u32,

    /// Recursion depth granted to every lengthening attempt.
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Seed for the random number generator; identical seeds replay identical runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Render only the final path instead of every improvement.
    #[arg(long)]
    quiet: bool,
}

/// Entry point for the maze meander command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.maze)
        .with_context(|| format!("failed to read maze file {}", args.maze.display()))?;
    let grid = MazeGrid::parse(&text)
        .with_context(|| format!("failed to parse maze file {}", args.maze.display()))?;

    let (start, exit) = grid.find_start_exit();
    let (Some(start), Some(exit)) = (start, exit) else {
        println!("Start or exit not found in the maze.");
        return Ok(());
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let Some(mut path) = find_path(&grid, start, exit, &mut rng) else {
        println!("No path found from start to exit.");
        return Ok(());
    };
    info!("initial path spans {} cells", path.len());

    for iteration in 0..args.iterations {
        let before = path.len();
        path = lengthen(&grid, path, args.depth, &mut rng);
        if path.len() > before {
            debug!(
                "iteration {iteration}: path grew from {before} to {} cells",
                path.len()
            );
            if !args.quiet {
                render::render_path(&grid, &path);
            }
        }
    }

    info!(
        "finished {} lengthening attempts, final path spans {} cells",
        args.iterations,
        path.len()
    );
    render::render_path(&grid, &path);
    Ok(())
}

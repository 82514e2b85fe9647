//! Game of Life CLI - Run a universe from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::Instant;

use game_of_life::{
    compute::{Universe, UniverseStats},
    schema::UniverseConfig,
};

/// Grids wider than this are summarized instead of printed.
const MAX_PRINT_WIDTH: usize = 160;

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life universe from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to universe configuration file");
        eprintln!("  steps        Number of generations (default: 100)");
        eprintln!();
        eprintln!("Print an example configuration with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = UniverseConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}");
        std::process::exit(1);
    });

    let mut universe = Universe::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error creating universe: {e}");
        std::process::exit(1);
    });

    println!("Game of Life");
    println!("============");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Seed: {:?}", config.seed.pattern);
    println!("Steps: {steps}");
    println!();

    let initial = UniverseStats::from_universe(&universe);
    println!("Initial population: {}", initial.population);
    println!();

    let start = Instant::now();

    for i in 0..steps {
        universe.step();

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = universe.stats();
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: population={}, density={:.4}, {:.1} steps/s",
                stats.generation,
                steps,
                stats.population,
                stats.density,
                (i + 1) as f32 / elapsed
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = universe.stats();

    println!();
    println!("Final population: {}", final_stats.population);
    println!("Time: {}", format_rate(steps, elapsed.as_secs_f32()));

    if universe.width() <= MAX_PRINT_WIDTH {
        println!();
        print!("{universe}");
    }
}

/// Elapsed time with throughput, omitting the rate when nothing ran.
fn format_rate(steps: u64, secs: f32) -> String {
    if steps == 0 || secs <= 0.0 {
        format!("{secs:.2}s")
    } else {
        format!("{secs:.2}s ({:.1} steps/s)", steps as f32 / secs)
    }
}

fn print_example_config() {
    let config = UniverseConfig::default();

    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("Example configuration (config.json):");
            println!("{json}");
        }
        Err(e) => eprintln!("Error serializing example config: {e}"),
    }
}

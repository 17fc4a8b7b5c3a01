//! Demo scene generator
//!
//! Writes a deterministic scatter scene as a JSON file for the demo viewer:
//!
//! ```text
//! dotboard-scenegen [COUNT] [SEED] [OUTPUT]
//! ```
//!
//! The same COUNT and SEED always produce the same file.

use anyhow::{Context, Result};
use std::env;

use dotboard::Scene;

const DEFAULT_COUNT: usize = 8;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_OUTPUT: &str = "scene.json";

struct Config {
    count: usize,
    seed: u64,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: DEFAULT_COUNT,
            seed: DEFAULT_SEED,
            output_file: DEFAULT_OUTPUT.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let scene = Scene::scatter(config.count, config.seed);
    let json = serde_json::to_string_pretty(&scene)?;
    std::fs::write(&config.output_file, json)
        .with_context(|| format!("failed to write {}", config.output_file))?;

    println!("Scene written to: {}", config.output_file);

    Ok(())
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        std::process::exit(0);
    }

    let mut config = Config::default();

    if let Some(count) = args.get(1) {
        config.count = count
            .parse()
            .with_context(|| format!("COUNT must be a non-negative integer, got '{}'", count))?;
    }
    if let Some(seed) = args.get(2) {
        config.seed = seed
            .parse()
            .with_context(|| format!("SEED must be a non-negative integer, got '{}'", seed))?;
    }
    if let Some(output) = args.get(3) {
        config.output_file = output.clone();
    }

    Ok(config)
}

fn print_usage(program: &str) {
    println!("Usage: {} [COUNT] [SEED] [OUTPUT]", program);
    println!();
    println!("  COUNT   Number of markers to generate (default: {})", DEFAULT_COUNT);
    println!("  SEED    Seed for reproducible placement (default: {})", DEFAULT_SEED);
    println!("  OUTPUT  Output file path (default: {})", DEFAULT_OUTPUT);
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use snake_body::game::{parse_script, GameConfig, GameEngine, RunReport};
use snake_body::logging;

#[derive(Parser)]
#[command(name = "snake_body")]
#[command(version, about = "Replay a move script against the snake core")]
struct Cli {
    /// Moves to play: U/D/L/R (or W/A/S), separated freely by spaces or commas
    script: String,

    /// JSON game configuration; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for fruit placement, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let moves = parse_script(&cli.script).context("Failed to parse move script")?;
    let mut engine = GameEngine::new(config);
    let report = engine.run(&moves);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", json);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &RunReport) {
    println!("Steps:  {}", report.steps);
    println!("Score:  {}", report.score);
    println!("Length: {}", report.snake.len());
    match report.collision_type {
        Some(collision) => println!("Result: died ({:?})", collision),
        None => println!("Result: alive"),
    }
    for (i, block) in report.snake.iter().enumerate() {
        let p = block.position();
        println!("  [{}] ({}, {})", i, p.x, p.y);
    }
}

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_search::{
    config::{Config, OutputFormat},
    game::parse_direction_list,
    utils::seed::rng_from_seed,
    GridGenerator, PuzzleConfig, WordSearch,
};

/// Generate a word-search puzzle.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// Words to hide, separated by commas
    #[arg(short, long, value_delimiter = ',', required_unless_present = "config")]
    words: Vec<String>,

    /// JSON puzzle configuration (words, grid_size, allowed_directions, concepts,
    /// time_limit, hide_words)
    #[arg(short, long, conflicts_with = "words")]
    config: Option<PathBuf>,

    /// Grid dimension
    #[arg(short, long)]
    size: Option<usize>,

    /// Allowed directions, e.g. `right,down,downRight`
    #[arg(short, long)]
    directions: Option<String>,

    /// Room seed: the same seed and configuration always give the same grid
    #[arg(long)]
    seed: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Hand the words to the generator without checking them first
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded");

    let mut puzzle_config = build_puzzle_config(&args, &config)?;

    if !args.no_validate {
        puzzle_config.words = puzzle_config
            .validate()
            .context("Puzzle configuration rejected")?;
    }

    let puzzle = match args.seed.as_deref().or(config.generator.seed.as_deref()) {
        Some(seed) => {
            tracing::info!("Using room seed {}", seed);
            GridGenerator::generate_for(&puzzle_config, &mut rng_from_seed(seed))?
        }
        None => GridGenerator::generate_for(&puzzle_config, &mut rand::rng())?,
    };

    if !puzzle.unplaced.is_empty() {
        tracing::warn!(
            "Only {} of {} words were placed (missing: {}). Try a larger grid or shorter words.",
            puzzle.placed.len(),
            puzzle_config.words.len(),
            puzzle.unplaced.join(", ")
        );
    }

    match args.output.unwrap_or(config.output) {
        OutputFormat::Text => print!("{}", render_text(&puzzle, &puzzle_config)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&puzzle)?),
    }

    Ok(())
}

/// Command-line flags win over the configuration file, which wins over the
/// environment.
fn build_puzzle_config(args: &Args, config: &Config) -> Result<PuzzleConfig> {
    let mut puzzle_config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<PuzzleConfig>(&raw)
                .with_context(|| format!("Invalid puzzle configuration in {}", path.display()))?
        }
        None => {
            let mut from_env = PuzzleConfig::new(args.words.clone(), config.generator.grid_size);
            from_env.allowed_directions = Some(config.generator.directions.iter().collect());
            from_env
        }
    };

    if let Some(size) = args.size {
        puzzle_config.grid_size = size;
    }
    if let Some(list) = &args.directions {
        let directions = parse_direction_list(list).context("Invalid --directions")?;
        puzzle_config.allowed_directions = Some(directions.iter().collect());
    }

    Ok(puzzle_config)
}

fn render_text(puzzle: &WordSearch, puzzle_config: &PuzzleConfig) -> String {
    let mut out = puzzle.to_string();
    out.push('\n');

    if let Some(limit) = puzzle_config.time_limit {
        out.push_str(&format!("Time limit: {}s\n", limit));
    }

    if puzzle_config.hide_words {
        out.push_str(&format!("Words to find: {}\n", puzzle.placed.len()));
        return out;
    }

    for placed in &puzzle.placed {
        out.push_str(&format!(
            "{} ({}, {}) {}",
            placed.word, placed.start.row, placed.start.col, placed.direction
        ));
        if let Some(concept) = puzzle_config.concept_for(&placed.word) {
            out.push_str(&format!(" - {}", concept));
        }
        out.push('\n');
    }

    for word in &puzzle.unplaced {
        out.push_str(&format!("{} (not placed)\n", word));
    }

    out
}

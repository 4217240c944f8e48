use anyhow::{Context, Result};
use std::env;

use crate::{
    game::parse_direction_list,
    models::{puzzle::DEFAULT_GRID_SIZE, DirectionSet},
};

#[derive(Debug, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    pub directions: DirectionSet,
    /// Room seed; every player of a room gets the same grid
    pub seed: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let generator = GeneratorConfig {
            grid_size: lookup("WORD_SEARCH_GRID_SIZE")
                .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
                .parse()
                .context("WORD_SEARCH_GRID_SIZE must be a number")?,
            directions: match lookup("WORD_SEARCH_DIRECTIONS") {
                Some(list) => parse_direction_list(&list).context(
                    "WORD_SEARCH_DIRECTIONS must be a comma separated list of directions",
                )?,
                None => DirectionSet::all(),
            },
            seed: lookup("WORD_SEARCH_SEED").filter(|seed| !seed.trim().is_empty()),
        };

        let output = lookup("WORD_SEARCH_OUTPUT")
            .map(|value| {
                <OutputFormat as clap::ValueEnum>::from_str(value.trim(), true)
                    .map_err(anyhow::Error::msg)
            })
            .transpose()
            .context("WORD_SEARCH_OUTPUT must be 'text' or 'json'")?
            .unwrap_or_default();

        Ok(Config { generator, output })
    }
}

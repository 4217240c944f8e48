pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use error::{GeneratorError, ValidationError};
pub use game::{FoundWords, GridGenerator, Scorer, SelectionOutcome, WordMatcher, WordValidator};
pub use models::{
    Direction, DirectionSet, Grid, GridCell, PlacedWord, Position, PuzzleConfig, WordSearch,
};

pub mod game;
pub mod puzzle;

pub use game::{
    // Directions and coordinates
    Direction, Position,
    // Generated puzzle
    Grid, GridCell, PlacedWord, WordSearch,
};
pub use puzzle::{DirectionSet, PuzzleConfig};

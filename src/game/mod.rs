// Puzzle engine: direction resolving, placement, word checks, scoring

pub mod directions;
pub mod grid;
pub mod matcher;
pub mod scorer;
pub mod validator;

pub use directions::{parse_direction_list, resolve_directions};
pub use grid::{GridGenerator, MAX_PLACEMENT_ATTEMPTS};
pub use matcher::{FoundWords, SelectionOutcome, WordMatcher};
pub use scorer::Scorer;
pub use validator::WordValidator;

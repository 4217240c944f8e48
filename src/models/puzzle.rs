use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::ValidationError, game::WordValidator, models::Direction};

pub const MIN_GRID_SIZE: usize = 10;
pub const MAX_GRID_SIZE: usize = 20;
pub const DEFAULT_GRID_SIZE: usize = 15;
pub const MIN_WORDS: usize = 1;
pub const MAX_WORDS: usize = 20;

/// The eight direction toggles a puzzle author can switch on or off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectionSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub up_left: bool,
    pub up_right: bool,
    pub down_left: bool,
    pub down_right: bool,
}

impl DirectionSet {
    pub fn all() -> Self {
        Direction::ALL.into_iter().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::UpLeft => self.up_left,
            Direction::UpRight => self.up_right,
            Direction::DownLeft => self.down_left,
            Direction::DownRight => self.down_right,
        }
    }

    pub fn set(&mut self, direction: Direction, enabled: bool) {
        let toggle = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::UpLeft => &mut self.up_left,
            Direction::UpRight => &mut self.up_right,
            Direction::DownLeft => &mut self.down_left,
            Direction::DownRight => &mut self.down_right,
        };
        *toggle = enabled;
    }

    /// Enabled directions in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::none();
        for direction in iter {
            set.set(direction, true);
        }
        set
    }
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

/// Unknown direction names are skipped with a warning instead of failing the
/// whole configuration.
fn lenient_directions<'de, D>(deserializer: D) -> Result<Option<Vec<Direction>>, D::Error>
where
    D: Deserializer<'de>,
{
    let names: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(names.map(|names| {
        names
            .iter()
            .filter_map(|name| match name.parse::<Direction>() {
                Ok(direction) => Some(direction),
                Err(e) => {
                    tracing::warn!("Ignoring allowed direction: {}", e);
                    None
                }
            })
            .collect()
    }))
}

/// Durable description of a puzzle. The grid itself is never stored; it is
/// regenerated from this at play or preview time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub words: Vec<String>,
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// `None` enables every direction.
    #[serde(
        default,
        deserialize_with = "lenient_directions",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_directions: Option<Vec<Direction>>,
    /// Optional hint shown next to a word, keyed by the uppercase word.
    #[serde(default)]
    pub concepts: HashMap<String, String>,
    /// Seconds the player gets to find every word
    #[serde(default)]
    pub time_limit: Option<u32>,
    /// Keep the word list off screen while playing
    #[serde(default)]
    pub hide_words: bool,
}

impl PuzzleConfig {
    pub fn new(words: Vec<String>, grid_size: usize) -> Self {
        Self {
            words,
            grid_size,
            allowed_directions: None,
            concepts: HashMap::new(),
            time_limit: None,
            hide_words: false,
        }
    }

    /// Seconds left at `elapsed`; `None` when the puzzle is untimed
    pub fn time_remaining(&self, elapsed: u32) -> Option<u32> {
        self.time_limit.map(|limit| limit.saturating_sub(elapsed))
    }

    pub fn is_time_up(&self, elapsed: u32) -> bool {
        self.time_remaining(elapsed) == Some(0)
    }

    pub fn direction_set(&self) -> DirectionSet {
        match &self.allowed_directions {
            Some(directions) => directions.iter().copied().collect(),
            None => DirectionSet::all(),
        }
    }

    pub fn concept_for(&self, word: &str) -> Option<&str> {
        self.concepts
            .get(&word.to_uppercase())
            .map(String::as_str)
            .filter(|concept| !concept.trim().is_empty())
    }

    /// Check the grid size and word list, returning the normalized words.
    pub fn validate(&self) -> Result<Vec<String>, ValidationError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ValidationError::GridSizeOutOfRange {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        if !(MIN_WORDS..=MAX_WORDS).contains(&self.words.len()) {
            return Err(ValidationError::WordCount {
                count: self.words.len(),
                min: MIN_WORDS,
                max: MAX_WORDS,
            });
        }

        WordValidator::new(self.grid_size).validate_list(&self.words)
    }
}

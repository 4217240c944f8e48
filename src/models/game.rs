use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// One of the eight compass directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    /// Every direction, in the order the resolver reports them.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    /// Row/column step applied for each successive letter
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Direction matching a unit step, if the step is one
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == (d_row, d_col))
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "downRight",
            Direction::UpLeft => "upLeft",
            Direction::DownLeft => "downLeft",
            Direction::UpRight => "upRight",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GeneratorError;

    /// Accepts `upLeft`, `up_left`, `up-left` and any casing of those.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|direction| direction.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| GeneratorError::UnknownDirection(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell reached after `steps` moves along `direction`. `None` when the
    /// walk leaves the non-negative quadrant; the upper bound is the caller's.
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        Some(Position {
            row: self.row.checked_add_signed(d_row.checked_mul(steps)?)?,
            col: self.col.checked_add_signed(d_col.checked_mul(steps)?)?,
        })
    }
}

/// A cell of a finished puzzle. `occupied` marks letters written by a placed
/// word; every other cell holds a filler letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub letter: char,
    pub occupied: bool,
}

pub type Grid = Vec<Vec<GridCell>>;

/// Where a word landed in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl PlacedWord {
    /// Cells covered by the word, first letter first
    pub fn positions(&self) -> Vec<Position> {
        (0..self.word.chars().count())
            .filter_map(|i| self.start.offset(self.direction, i))
            .collect()
    }

    pub fn end(&self) -> Option<Position> {
        let len = self.word.chars().count();
        if len == 0 {
            return None;
        }
        self.start.offset(self.direction, len - 1)
    }
}

/// A generated puzzle: the filled grid and the partition of the requested
/// words into those that were hidden and those that did not fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSearch {
    pub grid: Grid,
    pub placed: Vec<PlacedWord>,
    pub unplaced: Vec<String>,
}

impl WordSearch {
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.grid
            .get(position.row)?
            .get(position.col)
            .map(|cell| cell.letter)
    }

    pub fn is_fully_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn placement_of(&self, word: &str) -> Option<&PlacedWord> {
        self.placed.iter().find(|placed| placed.word == word)
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: Vec<String> = row.iter().map(|cell| cell.letter.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::DownRight.delta(), (1, 1));
        assert_eq!(Direction::UpLeft.delta(), (-1, -1));
        assert_eq!(Direction::DownLeft.delta(), (1, -1));
        assert_eq!(Direction::UpRight.delta(), (-1, 1));
    }

    #[test]
    fn test_direction_from_delta() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.delta();
            assert_eq!(Direction::from_delta(d_row, d_col), Some(direction));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("upLeft".parse::<Direction>(), Ok(Direction::UpLeft));
        assert_eq!("down_right".parse::<Direction>(), Ok(Direction::DownRight));
        assert_eq!(" UP-RIGHT ".parse::<Direction>(), Ok(Direction::UpRight));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(GeneratorError::UnknownDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&Direction::DownLeft).unwrap();
        assert_eq!(json, "\"downLeft\"");
        let parsed: Direction = serde_json::from_str("\"upRight\"").unwrap();
        assert_eq!(parsed, Direction::UpRight);
    }

    #[test]
    fn test_position_offset() {
        let start = Position::new(2, 2);
        assert_eq!(start.offset(Direction::UpLeft, 2), Some(Position::new(0, 0)));
        assert_eq!(start.offset(Direction::UpLeft, 3), None);
        assert_eq!(start.offset(Direction::DownLeft, 1), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_placed_word_positions() {
        let placed = PlacedWord {
            word: "CAT".to_string(),
            start: Position::new(0, 2),
            direction: Direction::DownLeft,
        };
        assert_eq!(
            placed.positions(),
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
        assert_eq!(placed.end(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_display_renders_rows() {
        let cell = |letter| GridCell { letter, occupied: false };
        let puzzle = WordSearch {
            grid: vec![vec![cell('A'), cell('B')], vec![cell('C'), cell('D')]],
            placed: Vec::new(),
            unplaced: Vec::new(),
        };
        assert_eq!(puzzle.to_string(), "A B\nC D\n");
        assert_eq!(puzzle.letter_at(Position::new(1, 0)), Some('C'));
        assert_eq!(puzzle.letter_at(Position::new(2, 0)), None);
    }
}

use std::collections::HashSet;

use crate::models::{Direction, Grid, PlacedWord, Position, WordSearch};

/// Result of checking a player's selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Found(String),
    AlreadyFound(String),
    NoMatch,
}

/// Words found so far in one play session
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    words: HashSet<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the word had already been found
    pub fn record(&mut self, word: &str) -> bool {
        self.words.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every placed word has been found
    pub fn is_complete(&self, puzzle: &WordSearch) -> bool {
        !puzzle.placed.is_empty()
            && puzzle
                .placed
                .iter()
                .all(|placed| self.words.contains(&placed.word))
    }
}

pub struct WordMatcher;

impl WordMatcher {
    /// Match the letters under a straight selection, read either way,
    /// against the placed words.
    pub fn match_selection<'a>(
        puzzle: &'a WordSearch,
        selection: &[Position],
    ) -> Option<&'a PlacedWord> {
        if !is_straight_line(selection) {
            return None;
        }

        let word = extract_word(&puzzle.grid, selection)?;
        let reversed: String = word.chars().rev().collect();

        puzzle
            .placed
            .iter()
            .find(|placed| placed.word == word || placed.word == reversed)
    }

    /// Match the selection against the recorded coordinates of each placed
    /// word, in either reading order.
    pub fn placement_for<'a>(
        puzzle: &'a WordSearch,
        selection: &[Position],
    ) -> Option<&'a PlacedWord> {
        puzzle.placed.iter().find(|placed| {
            let cells = placed.positions();
            cells.len() == selection.len()
                && (cells.iter().eq(selection.iter()) || cells.iter().rev().eq(selection.iter()))
        })
    }

    /// Check a selection and record it when it reveals a new word
    pub fn check(
        puzzle: &WordSearch,
        found: &mut FoundWords,
        selection: &[Position],
    ) -> SelectionOutcome {
        match Self::match_selection(puzzle, selection) {
            Some(placed) if found.record(&placed.word) => {
                tracing::debug!("Found {}", placed.word);
                SelectionOutcome::Found(placed.word.clone())
            }
            Some(placed) => SelectionOutcome::AlreadyFound(placed.word.clone()),
            None => SelectionOutcome::NoMatch,
        }
    }
}

/// At least two cells, each one unit step from the last along a single
/// direction.
pub fn is_straight_line(positions: &[Position]) -> bool {
    if positions.len() < 2 {
        return false;
    }

    let Some(direction) = step_direction(positions[0], positions[1]) else {
        return false;
    };

    positions
        .windows(2)
        .all(|pair| step_direction(pair[0], pair[1]) == Some(direction))
}

fn step_direction(from: Position, to: Position) -> Option<Direction> {
    let d_row = to.row as isize - from.row as isize;
    let d_col = to.col as isize - from.col as isize;
    Direction::from_delta(d_row, d_col)
}

/// Letters under the selected cells; `None` if any cell is off the grid
pub fn extract_word(grid: &Grid, positions: &[Position]) -> Option<String> {
    positions
        .iter()
        .map(|pos| grid.get(pos.row)?.get(pos.col).map(|cell| cell.letter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridCell;

    fn puzzle_from_rows(rows: &[&str], placed: Vec<PlacedWord>) -> WordSearch {
        let grid = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|letter| GridCell { letter, occupied: false })
                    .collect()
            })
            .collect();
        WordSearch {
            grid,
            placed,
            unplaced: Vec::new(),
        }
    }

    fn sample() -> WordSearch {
        // CAT across the top, DOG up the right column
        puzzle_from_rows(
            &["CATG", "XQZO", "WKJD", "MNPL"],
            vec![
                PlacedWord {
                    word: "CAT".to_string(),
                    start: Position::new(0, 0),
                    direction: Direction::Right,
                },
                PlacedWord {
                    word: "DOG".to_string(),
                    start: Position::new(2, 3),
                    direction: Direction::Up,
                },
            ],
        )
    }

    fn cells(list: &[(usize, usize)]) -> Vec<Position> {
        list.iter().map(|&(row, col)| Position::new(row, col)).collect()
    }

    #[test]
    fn test_straight_lines() {
        assert!(is_straight_line(&cells(&[(0, 0), (1, 1), (2, 2)])));
        assert!(is_straight_line(&cells(&[(2, 3), (1, 3)])));
        assert!(!is_straight_line(&cells(&[(0, 0)])));
        assert!(!is_straight_line(&cells(&[(0, 0), (0, 2)])));
        assert!(!is_straight_line(&cells(&[(0, 0), (0, 1), (1, 1)])));
        assert!(!is_straight_line(&cells(&[(0, 0), (0, 0)])));
    }

    #[test]
    fn test_extract_word() {
        let puzzle = sample();
        assert_eq!(
            extract_word(&puzzle.grid, &cells(&[(0, 0), (0, 1), (0, 2)])),
            Some("CAT".to_string())
        );
        assert_eq!(extract_word(&puzzle.grid, &cells(&[(0, 0), (9, 9)])), None);
    }

    #[test]
    fn test_match_forwards_and_backwards() {
        let puzzle = sample();
        let forwards = WordMatcher::match_selection(&puzzle, &cells(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(forwards.map(|p| p.word.as_str()), Some("CAT"));

        let backwards = WordMatcher::match_selection(&puzzle, &cells(&[(0, 2), (0, 1), (0, 0)]));
        assert_eq!(backwards.map(|p| p.word.as_str()), Some("CAT"));

        let dog = WordMatcher::match_selection(&puzzle, &cells(&[(2, 3), (1, 3), (0, 3)]));
        assert_eq!(dog.map(|p| p.word.as_str()), Some("DOG"));

        assert!(WordMatcher::match_selection(&puzzle, &cells(&[(0, 0), (0, 1)])).is_none());
    }

    #[test]
    fn test_placement_for_uses_coordinates() {
        let puzzle = sample();
        let hit = WordMatcher::placement_for(&puzzle, &cells(&[(0, 3), (1, 3), (2, 3)]));
        assert_eq!(hit.map(|p| p.word.as_str()), Some("DOG"));
        assert!(WordMatcher::placement_for(&puzzle, &cells(&[(1, 0), (1, 1), (1, 2)])).is_none());
    }

    #[test]
    fn test_check_tracks_found_words() {
        let puzzle = sample();
        let mut found = FoundWords::new();
        let cat = cells(&[(0, 0), (0, 1), (0, 2)]);

        assert_eq!(
            WordMatcher::check(&puzzle, &mut found, &cat),
            SelectionOutcome::Found("CAT".to_string())
        );
        assert_eq!(
            WordMatcher::check(&puzzle, &mut found, &cat),
            SelectionOutcome::AlreadyFound("CAT".to_string())
        );
        assert_eq!(
            WordMatcher::check(&puzzle, &mut found, &cells(&[(3, 0), (3, 1)])),
            SelectionOutcome::NoMatch
        );
        assert!(!found.is_complete(&puzzle));

        WordMatcher::check(&puzzle, &mut found, &cells(&[(0, 3), (1, 3), (2, 3)]));
        assert_eq!(found.len(), 2);
        assert!(found.is_complete(&puzzle));
    }

    #[test]
    fn test_empty_puzzle_is_never_complete() {
        let puzzle = puzzle_from_rows(&["ABC"], Vec::new());
        assert!(!FoundWords::new().is_complete(&puzzle));
    }
}

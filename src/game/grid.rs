use std::cmp::Reverse;

use rand::Rng;

use crate::{
    error::GeneratorError,
    game::directions::resolve_directions,
    models::{
        Direction, DirectionSet, Grid, GridCell, PlacedWord, Position, PuzzleConfig, WordSearch,
    },
    utils::letters::random_letter,
};

/// Random tries allotted to a single word before it is given up on
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

pub struct GridGenerator;

impl GridGenerator {
    /// Hide `words` in a fresh `grid_size` x `grid_size` grid.
    ///
    /// Words are attempted longest first. A word that finds no spot within
    /// [`MAX_PLACEMENT_ATTEMPTS`] lands in `unplaced`; that is not an error.
    /// Remaining cells are then filled with uniformly random letters.
    pub fn generate<S: AsRef<str>>(
        words: &[S],
        grid_size: usize,
        allowed: &DirectionSet,
        rng: &mut impl Rng,
    ) -> Result<WordSearch, GeneratorError> {
        let directions = resolve_directions(allowed)?;

        let mut board = Board::new(grid_size);
        let mut placed = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        for word in Self::placement_order(words) {
            match board.try_place(word, &directions, rng) {
                Some(placement) => {
                    tracing::debug!(
                        "Placed {} at ({}, {}) going {}",
                        placement.word,
                        placement.start.row,
                        placement.start.col,
                        placement.direction
                    );
                    placed.push(placement);
                }
                None => {
                    tracing::debug!(
                        "Gave up on {} after {} attempts",
                        word,
                        MAX_PLACEMENT_ATTEMPTS
                    );
                    unplaced.push(word.to_string());
                }
            }
        }

        let grid = board.fill(rng);

        tracing::info!(
            "Generated {}x{} grid: {} placed, {} unplaced",
            grid_size,
            grid_size,
            placed.len(),
            unplaced.len()
        );

        Ok(WordSearch {
            grid,
            placed,
            unplaced,
        })
    }

    /// Generate from a stored puzzle configuration, as-is
    pub fn generate_for(
        config: &PuzzleConfig,
        rng: &mut impl Rng,
    ) -> Result<WordSearch, GeneratorError> {
        Self::generate(&config.words, config.grid_size, &config.direction_set(), rng)
    }

    /// Longest words first; equal lengths keep their input order.
    fn placement_order<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
        let mut ordered: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        ordered.sort_by_key(|word| Reverse(word.chars().count()));
        ordered
    }
}

/// Working buffer owned by a single generation, row-major.
struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.size + position.col
    }

    /// Cell `steps` along from `start`, if still on the board
    fn step(&self, start: Position, direction: Direction, steps: usize) -> Option<Position> {
        start
            .offset(direction, steps)
            .filter(|p| p.row < self.size && p.col < self.size)
    }

    fn try_place(
        &mut self,
        word: &str,
        directions: &[Direction],
        rng: &mut impl Rng,
    ) -> Option<PlacedWord> {
        let letters: Vec<char> = word.chars().collect();
        if self.size == 0 || letters.is_empty() || directions.is_empty() {
            return None;
        }

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let direction = directions[rng.random_range(0..directions.len())];
            let start = Position {
                row: rng.random_range(0..self.size),
                col: rng.random_range(0..self.size),
            };

            if self.can_place(&letters, start, direction) {
                self.commit(&letters, start, direction);
                return Some(PlacedWord {
                    word: word.to_string(),
                    start,
                    direction,
                });
            }
        }

        None
    }

    /// Every letter must land on the board, on an empty cell or one that
    /// already holds the same letter.
    fn can_place(&self, letters: &[char], start: Position, direction: Direction) -> bool {
        letters.iter().enumerate().all(|(i, &letter)| {
            match self.step(start, direction, i) {
                Some(position) => match self.cells[self.index(position)] {
                    Some(existing) => existing == letter,
                    None => true,
                },
                None => false,
            }
        })
    }

    fn commit(&mut self, letters: &[char], start: Position, direction: Direction) {
        for (i, &letter) in letters.iter().enumerate() {
            if let Some(position) = self.step(start, direction, i) {
                let index = self.index(position);
                self.cells[index] = Some(letter);
            }
        }
    }

    /// Fill every empty cell and hand the grid out
    fn fill(self, rng: &mut impl Rng) -> Grid {
        let mut cells = self.cells.into_iter();
        let mut grid = Vec::with_capacity(self.size);

        for _ in 0..self.size {
            let mut row = Vec::with_capacity(self.size);
            for _ in 0..self.size {
                let cell = match cells.next().flatten() {
                    Some(letter) => GridCell {
                        letter,
                        occupied: true,
                    },
                    None => GridCell {
                        letter: random_letter(rng),
                        occupied: false,
                    },
                };
                row.push(cell);
            }
            grid.push(row);
        }

        grid
    }
}

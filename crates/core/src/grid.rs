//! Grid module - word-search letter grid and placement engine
//!
//! The grid is an N x N board where each cell is either empty or holds one letter.
//! Uses a flat row-major vector; coordinates are (row, col) with (0, 0) top-left.
//!
//! Placement is best-effort: each word gets a bounded number of random attempts
//! (start row, start col, direction) and is skipped if none fits. A word fits when
//! every letter lands inside the grid on a cell that is empty or already holds the
//! same letter, so crossing words may share letters but never overwrite them.

use arrayvec::ArrayVec;
use tracing::warn;

use crate::rng::RandomSource;
use crate::types::{Direction, Position, WordSearchGrid, ALPHABET, GRID_SIZE, PLACEMENT_ATTEMPTS};

/// Set of directions words may be placed along (at most the 8 compass steps)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionSet(ArrayVec<Direction, 8>);

impl DirectionSet {
    /// The four forward directions used by the scored generator
    pub fn forward() -> Self {
        Self(Direction::FORWARD.into_iter().collect())
    }

    /// All eight directions, including reversed words
    pub fn all() -> Self {
        Self(Direction::ALL.into_iter().collect())
    }

    /// Build a set from any directions; duplicates are dropped
    pub fn new(directions: impl IntoIterator<Item = Direction>) -> Self {
        let mut set = ArrayVec::new();
        for dir in directions {
            if !set.contains(&dir) {
                set.push(dir);
            }
        }
        Self(set)
    }

    /// Parse a direction-set name: `4`/`forward` or `8`/`all`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "4" | "forward" => Some(Self::forward()),
            "8" | "all" => Some(Self::all()),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0.contains(&dir)
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::forward()
    }
}

/// Placement parameters; the default is the scored 15x15 / 100 attempts / forward setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    pub size: usize,
    pub max_attempts: u32,
    pub directions: DirectionSet,
}

impl PlacementConfig {
    pub fn with_directions(directions: DirectionSet) -> Self {
        Self {
            directions,
            ..Self::default()
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            max_attempts: PLACEMENT_ATTEMPTS,
            directions: DirectionSet::forward(),
        }
    }
}

/// A word that made it onto the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// Index of the word in the input list
    pub index: usize,
    pub word: String,
    pub start: Position,
    pub direction: Direction,
    pub path: Vec<Position>,
}

/// The letter grid under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Calculate flat index from signed coordinates
    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let size = self.size as isize;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(row as usize * self.size + col as usize)
    }

    /// Get cell at position; None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Option<char>> {
        self.index(pos.row as isize, pos.col as isize)
            .map(|idx| self.cells[idx])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Cells covered by `len` letters starting at `start` along `dir`
    ///
    /// Returns None if any of them falls outside the grid.
    pub fn path(&self, start: Position, dir: Direction, len: usize) -> Option<Vec<Position>> {
        let (dr, dc) = dir.delta();
        (0..len as isize)
            .map(|i| {
                let row = start.row as isize + i * dr;
                let col = start.col as isize + i * dc;
                self.index(row, col)
                    .map(|_| Position::new(row as usize, col as usize))
            })
            .collect()
    }

    /// Check whether `word` fits at `start` along `dir`
    pub fn can_place(&self, word: &[char], start: Position, dir: Direction) -> bool {
        let Some(path) = self.path(start, dir, word.len()) else {
            return false;
        };
        path.iter().zip(word).all(|(&pos, &letter)| match self.get(pos) {
            Some(None) => true,
            Some(Some(existing)) => existing == letter,
            None => false,
        })
    }

    /// Write `word` into the grid and return its path
    ///
    /// Returns None (grid untouched) if the placement is not valid.
    pub fn commit(&mut self, word: &[char], start: Position, dir: Direction) -> Option<Vec<Position>> {
        // First check every cell, then write.
        if !self.can_place(word, start, dir) {
            return None;
        }
        let path = self.path(start, dir, word.len())?;
        for (pos, &letter) in path.iter().zip(word) {
            let idx = pos.row * self.size + pos.col;
            self.cells[idx] = Some(letter);
        }
        Some(path)
    }

    /// Try up to `max_attempts` random placements for one word
    ///
    /// Each attempt draws a start row, a start column and a direction, in that order.
    pub fn try_place<R: RandomSource + ?Sized>(
        &mut self,
        word: &[char],
        directions: &DirectionSet,
        max_attempts: u32,
        rng: &mut R,
    ) -> Option<(Position, Direction, Vec<Position>)> {
        if self.size == 0 || directions.is_empty() {
            return None;
        }
        let dirs = directions.as_slice();
        for _ in 0..max_attempts {
            let row = rng.next_index(self.size);
            let col = rng.next_index(self.size);
            let dir = dirs[rng.next_index(dirs.len())];
            let start = Position::new(row, col);
            if let Some(path) = self.commit(word, start, dir) {
                return Some((start, dir, path));
            }
        }
        None
    }

    /// Place words in input order; words that do not fit are skipped
    pub fn place_all<R: RandomSource + ?Sized>(
        &mut self,
        words: &[String],
        config: &PlacementConfig,
        rng: &mut R,
    ) -> Vec<PlacedWord> {
        let mut placed = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let letters: Vec<char> = word.chars().collect();
            if letters.is_empty() {
                warn!(index, "skipping empty word");
                continue;
            }
            if letters.len() > self.size {
                warn!(%word, len = letters.len(), size = self.size, "word longer than grid, skipped");
                continue;
            }
            match self.try_place(&letters, &config.directions, config.max_attempts, rng) {
                Some((start, direction, path)) => placed.push(PlacedWord {
                    index,
                    word: word.clone(),
                    start,
                    direction,
                    path,
                }),
                None => {
                    warn!(%word, attempts = config.max_attempts, "no valid placement found, word skipped");
                }
            }
        }
        placed
    }

    /// Fill every empty cell with a random letter A-Z and return the rows
    pub fn fill<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Vec<Vec<char>> {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(ALPHABET[rng.next_index(ALPHABET.len())]);
            }
        }
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.unwrap_or('A')).collect())
            .collect()
    }

    /// Finish the board: fill blanks and package the placed words
    pub fn into_board<R: RandomSource + ?Sized>(
        self,
        placed: &[PlacedWord],
        rng: &mut R,
    ) -> WordSearchGrid {
        let size = self.size;
        let cells = self.fill(rng);
        WordSearchGrid {
            size,
            cells,
            placed_words: placed.iter().map(|p| p.word.clone()).collect(),
            placement_positions: placed.iter().map(|p| p.path.clone()).collect(),
        }
    }
}

/// Place `words` into a fresh grid and fill the rest with random letters
pub fn place_words<R: RandomSource + ?Sized>(
    words: &[String],
    config: &PlacementConfig,
    rng: &mut R,
) -> WordSearchGrid {
    let mut grid = Grid::new(config.size);
    let placed = grid.place_all(words, config, rng);
    grid.into_board(&placed, rng)
}

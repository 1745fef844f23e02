//! Session module - transient play state of one word-search board
//!
//! Tracks which placed words the player has found, the running session score and
//! hints. Selections are straight lines between two cells; a line counts when its
//! letters spell an unfound placed word forwards or backwards.

use crate::generator::select_terms;
use crate::grid::{DirectionSet, Grid, PlacementConfig};
use crate::rng::RandomSource;
use crate::types::{
    GameResult, Position, TermPair, WordClue, WordSearchGrid, COMPLETION_BONUS_PER_SEC,
    COMPLETION_WINDOW_SECS, FOUND_POINTS_PER_LETTER, HINT_PENALTY, WORD_SEARCH_MAX_TERMS,
};

/// Cells from `start` to `end` inclusive, if they share a row, column or diagonal
///
/// Any other pair of cells selects only `start`.
pub fn cells_in_line(start: Position, end: Position) -> Vec<Position> {
    let d_row = end.row as isize - start.row as isize;
    let d_col = end.col as isize - start.col as isize;
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return vec![start];
    }

    let steps = d_row.abs().max(d_col.abs());
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    (0..=steps)
        .map(|i| {
            Position::new(
                (start.row as isize + i * step_row) as usize,
                (start.col as isize + i * step_col) as usize,
            )
        })
        .collect()
}

/// Result of one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Found {
        /// Index into the board's placed words
        index: usize,
        word: String,
        points: u32,
        complete: bool,
    },
    Miss,
}

#[derive(Debug, Clone)]
pub struct WordSearchSession {
    board: WordSearchGrid,
    /// Clue per placed word, same order as `board.placed_words`; empty for bare boards
    clues: Vec<WordClue>,
    found: Vec<bool>,
    score: u32,
    hints_used: u32,
    finished: bool,
}

impl WordSearchSession {
    pub fn new(board: WordSearchGrid) -> Self {
        let found = vec![false; board.placed_words.len()];
        Self {
            board,
            clues: Vec::new(),
            found,
            score: 0,
            hints_used: 0,
            finished: false,
        }
    }

    /// Start a play session from a term list
    ///
    /// Picks at most `WORD_SEARCH_MAX_TERMS` random terms, places their words in all
    /// eight directions and keeps the clues of the words that made it onto the board.
    pub fn from_terms<R: RandomSource + ?Sized>(terms: &[TermPair], rng: &mut R) -> Self {
        let picked = select_terms(terms, WORD_SEARCH_MAX_TERMS, rng);
        let words: Vec<String> = picked.iter().map(|c| c.word.clone()).collect();
        let config = PlacementConfig::with_directions(DirectionSet::all());

        let mut grid = Grid::new(config.size);
        let placed = grid.place_all(&words, &config, rng);
        let clues = placed.iter().map(|p| picked[p.index].clone()).collect();
        let board = grid.into_board(&placed, rng);

        Self {
            clues,
            ..Self::new(board)
        }
    }

    pub fn clues(&self) -> &[WordClue] {
        &self.clues
    }

    pub fn board(&self) -> &WordSearchGrid {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&f| f).count()
    }

    pub fn total_words(&self) -> usize {
        self.found.len()
    }

    pub fn is_complete(&self) -> bool {
        self.found.iter().all(|&f| f)
    }

    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    /// Found words, in placement order
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.board
            .placed_words
            .iter()
            .zip(&self.found)
            .filter(|&(_, &f)| f)
            .map(|(w, _)| w.as_str())
    }

    /// Check the line from `start` to `end` against the unfound words
    pub fn select(&mut self, start: Position, end: Position) -> Selection {
        let line = cells_in_line(start, end);
        let Some(forward) = self.board.read(&line) else {
            return Selection::Miss;
        };
        let backward: String = forward.chars().rev().collect();

        let hit = self
            .board
            .placed_words
            .iter()
            .enumerate()
            .find(|&(i, word)| !self.found[i] && (*word == forward || *word == backward))
            .map(|(i, word)| (i, word.clone()));

        match hit {
            Some((index, word)) => {
                self.found[index] = true;
                let points = FOUND_POINTS_PER_LETTER * word.chars().count() as u32;
                self.score = self.score.saturating_add(points);
                Selection::Found {
                    index,
                    word,
                    points,
                    complete: self.is_complete(),
                }
            }
            None => Selection::Miss,
        }
    }

    /// First cell of a random unfound word; costs `HINT_PENALTY` points
    pub fn hint<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let unfound: Vec<usize> = (0..self.found.len()).filter(|&i| !self.found[i]).collect();
        if unfound.is_empty() {
            return None;
        }
        let index = unfound[rng.next_index(unfound.len())];
        let first = self.board.placement_positions.get(index)?.first().copied()?;

        self.hints_used += 1;
        self.score = self.score.saturating_sub(HINT_PENALTY);
        Some(first)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// End the session and report the tally
    ///
    /// A complete board earns `2 x (300 - seconds)` bonus points, once. Later calls
    /// only report the tally.
    pub fn finish(&mut self, elapsed_seconds: u32) -> GameResult {
        if !self.finished && self.is_complete() {
            let bonus = COMPLETION_WINDOW_SECS.saturating_sub(elapsed_seconds)
                * COMPLETION_BONUS_PER_SEC;
            self.score = self.score.saturating_add(bonus);
        }
        self.finished = true;
        GameResult::new(
            self.total_words() as u32,
            self.found_count() as u32,
            elapsed_seconds,
        )
    }
}

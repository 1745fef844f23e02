//! Shared types module - game content data structures and constants
//!
//! This crate defines the plain data shared by the generators, the scorers and the
//! protocol adapter. Every type derives serde so the generated payloads can be
//! handed to a JSON boundary unchanged (field names are camelCase on the wire).
//!
//! # Game Modes
//!
//! | Mode | Tag | Minimum terms | Unit |
//! |------|-----|---------------|------|
//! | Memory | `memory` | 2 | pairs |
//! | Association | `association` | 2 | associations |
//! | Quiz | `quiz` | 4 | answers |
//! | Word search | `word-search` | 5 | words |
//!
//! # Word Search Constants
//!
//! - `GRID_SIZE`: 15 (the board is always 15x15)
//! - `PLACEMENT_ATTEMPTS`: 100 randomized attempts per word before it is skipped
//! - `ALPHABET`: A-Z, used to fill cells no word covers
//!
//! # Examples
//!
//! ```
//! use flashplay_types::{Direction, GameType, GRID_SIZE};
//!
//! // Parse a game tag
//! let game = GameType::from_str("word-search").unwrap();
//! assert_eq!(game, GameType::WordSearch);
//! assert_eq!(game.min_terms(), 5);
//! assert_eq!(GameType::from_str("bogus"), None);
//!
//! // Direction deltas are (row, col)
//! assert_eq!(Direction::DownLeft.delta(), (1, -1));
//! assert_eq!(GRID_SIZE, 15);
//! ```

use serde::{Deserialize, Serialize};

/// Word-search board edge length (15x15)
pub const GRID_SIZE: usize = 15;

/// Randomized placement attempts per word before the word is skipped
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// Letters used to fill cells that no placed word covers
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Wrong answers offered per quiz question (at most)
pub const QUIZ_DISTRACTORS: usize = 3;

/// Terms drawn for one word-search play session
pub const WORD_SEARCH_MAX_TERMS: usize = 10;

/// Session points per letter of a found word
pub const FOUND_POINTS_PER_LETTER: u32 = 10;

/// Session points deducted for each hint
pub const HINT_PENALTY: u32 = 50;

/// Seconds after which a finished session earns no completion bonus
pub const COMPLETION_WINDOW_SECS: u32 = 300;

/// Completion bonus points per second left in the window
pub const COMPLETION_BONUS_PER_SEC: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_search_defaults() {
        assert_eq!(GRID_SIZE, 15);
        assert_eq!(PLACEMENT_ATTEMPTS, 100);
        assert_eq!(ALPHABET.len(), 26);
        assert!(ALPHABET.iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn game_type_tags_roundtrip() {
        for game in GameType::ALL {
            assert_eq!(GameType::from_str(game.as_str()), Some(game));
        }
        assert_eq!(GameType::from_str("WORD-SEARCH"), Some(GameType::WordSearch));
        assert_eq!(GameType::from_str("bogus"), None);
    }

    #[test]
    fn minimum_terms_per_mode() {
        assert_eq!(GameType::Memory.min_terms(), 2);
        assert_eq!(GameType::Association.min_terms(), 2);
        assert_eq!(GameType::Quiz.min_terms(), 4);
        assert_eq!(GameType::WordSearch.min_terms(), 5);
    }

    #[test]
    fn forward_directions_never_point_up_or_left_on_rows() {
        for dir in Direction::FORWARD {
            let (dr, _) = dir.delta();
            assert!(dr >= 0);
        }
        assert_eq!(Direction::ALL.len(), 8);
    }

    #[test]
    fn position_serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Position = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(back, Position::new(1, 2));
    }

    #[test]
    fn game_result_accepts_mode_field_names() {
        let r: GameResult =
            serde_json::from_str(r#"{"totalPairs":5,"correctPairs":4,"timeInSeconds":90}"#)
                .unwrap();
        assert_eq!(r, GameResult::new(5, 4, 90));

        let r: GameResult =
            serde_json::from_str(r#"{"totalWords":10,"wordsFound":7,"timeInSeconds":610}"#)
                .unwrap();
        assert_eq!(r, GameResult::new(10, 7, 610));
    }
}

/// The four mini-game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "association")]
    Association,
    #[serde(rename = "quiz")]
    Quiz,
    #[serde(rename = "word-search")]
    WordSearch,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::Memory,
        GameType::Association,
        GameType::Quiz,
        GameType::WordSearch,
    ];

    /// Parse a game tag (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use flashplay_types::GameType;
    ///
    /// assert_eq!(GameType::from_str("quiz"), Some(GameType::Quiz));
    /// assert_eq!(GameType::from_str("Memory"), Some(GameType::Memory));
    /// assert_eq!(GameType::from_str("crossword"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Some(GameType::Memory),
            "association" => Some(GameType::Association),
            "quiz" => Some(GameType::Quiz),
            "word-search" => Some(GameType::WordSearch),
            _ => None,
        }
    }

    /// Wire tag
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Memory => "memory",
            GameType::Association => "association",
            GameType::Quiz => "quiz",
            GameType::WordSearch => "word-search",
        }
    }

    /// Minimum number of term pairs the generator accepts
    pub fn min_terms(self) -> usize {
        match self {
            GameType::Memory | GameType::Association => 2,
            GameType::Quiz => 4,
            GameType::WordSearch => 5,
        }
    }

    /// Fixed player-facing instructions echoed in every payload
    pub fn instructions(self) -> &'static str {
        match self {
            GameType::Memory => "Find the matching pairs of terms and definitions",
            GameType::Association => "Drag each term onto its matching definition",
            GameType::Quiz => "Select the correct definition for each term shown",
            GameType::WordSearch => "Find the words hidden in the grid",
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word placement direction
///
/// The first four are the "forward" directions used by the scored generator;
/// the remaining four are their reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
    Left,
    Up,
    UpLeft,
    UpRight,
}

impl Direction {
    /// Horizontal, vertical and both diagonals, forward only
    pub const FORWARD: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Forward directions plus their reverses
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// Step as (d_row, d_col)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Direction pointing the other way
    pub fn reverse(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
        }
    }
}

/// A grid cell coordinate, serialized as `[row, col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(p: Position) -> Self {
        [p.row, p.col]
    }
}

/// A user-authored term and its definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermPair {
    pub term: String,
    pub definition: String,
}

impl TermPair {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Which face of a pair a memory card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Term,
    Definition,
}

/// One memory card. Both cards of a pair share `pair_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub content: String,
    pub pair_id: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationEntry {
    pub id: usize,
    pub content: String,
}

/// A multiple-choice question; `answers[correct_answer_index]` is the true definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: usize,
    pub question: String,
    pub answers: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_answer_index).map(String::as_str)
    }
}

/// A filled word-search board
///
/// `placement_positions[i]` holds the path of `placed_words[i]`, one cell per letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchGrid {
    pub size: usize,
    pub cells: Vec<Vec<char>>,
    pub placed_words: Vec<String>,
    pub placement_positions: Vec<Vec<Position>>,
}

impl WordSearchGrid {
    /// Letter at `pos`, None if out of bounds
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Letters along a path, None if any cell is out of bounds
    pub fn read(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&p| self.letter_at(p)).collect()
    }
}

/// A placed word together with the term it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClue {
    pub word: String,
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryGame {
    pub cards: Vec<Card>,
    pub total_pairs: usize,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationGame {
    pub terms: Vec<AssociationEntry>,
    pub definitions: Vec<AssociationEntry>,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGame {
    pub questions: Vec<QuizQuestion>,
    pub total_questions: usize,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearchGame {
    pub grid: WordSearchGrid,
    pub clues: Vec<WordClue>,
    pub instructions: String,
}

/// Generated content for one game, tagged by `gameType` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gameType")]
pub enum GameContent {
    #[serde(rename = "memory")]
    Memory(MemoryGame),
    #[serde(rename = "association")]
    Association(AssociationGame),
    #[serde(rename = "quiz")]
    Quiz(QuizGame),
    #[serde(rename = "word-search")]
    WordSearch(WordSearchGame),
}

impl GameContent {
    pub fn game_type(&self) -> GameType {
        match self {
            GameContent::Memory(_) => GameType::Memory,
            GameContent::Association(_) => GameType::Association,
            GameContent::Quiz(_) => GameType::Quiz,
            GameContent::WordSearch(_) => GameType::WordSearch,
        }
    }

    pub fn instructions(&self) -> &str {
        match self {
            GameContent::Memory(g) => &g.instructions,
            GameContent::Association(g) => &g.instructions,
            GameContent::Quiz(g) => &g.instructions,
            GameContent::WordSearch(g) => &g.instructions,
        }
    }
}

/// Final tally of a finished game
///
/// Deserialization also accepts the per-mode field names the play surfaces send
/// (`totalPairs`/`correctPairs`, `totalQuestions`/`correctAnswers`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    #[serde(
        alias = "totalPairs",
        alias = "totalTerms",
        alias = "totalQuestions",
        alias = "totalWords"
    )]
    pub total_units: u32,
    #[serde(
        alias = "correctPairs",
        alias = "correctAssociations",
        alias = "correctAnswers",
        alias = "wordsFound"
    )]
    pub correct_units: u32,
    #[serde(alias = "timeInSeconds")]
    pub elapsed_seconds: u32,
}

impl GameResult {
    pub fn new(total_units: u32, correct_units: u32, elapsed_seconds: u32) -> Self {
        Self {
            total_units,
            correct_units,
            elapsed_seconds,
        }
    }
}

//! Core game content module - generators, placement engine and scorers
//!
//! This crate turns a flat list of term/definition pairs into mini-game content and
//! scores finished games. It has **no dependencies** on transport, storage or UI:
//!
//! - **Pure**: every operation works only on its inputs and a caller-supplied random source
//! - **Reproducible**: a seeded [`SimpleRng`] reproduces identical boards and shuffles
//! - **Best-effort placement**: words that do not fit the grid are skipped, never an error
//!
//! # Module Structure
//!
//! - [`rng`]: random source trait, seeded LCG, thread RNG and Fisher-Yates shuffle
//! - [`grid`]: word-search grid with bounded random placement and letter fill
//! - [`generator`]: memory, association, quiz and word-search builders plus tag dispatch
//! - [`scoring`]: per-mode score formulas plus tag dispatch
//! - [`session`]: word-search play state (line selection, found words, hints)
//! - [`error`]: generation errors
//!
//! # Example
//!
//! ```
//! use flashplay_core::{generate_game, calculate_score, PlacementConfig, SimpleRng};
//! use flashplay_core::types::{GameContent, GameResult, TermPair};
//!
//! let terms: Vec<TermPair> = ["atom", "cell", "gene", "ion", "lipid"]
//!     .iter()
//!     .map(|t| TermPair::new(*t, format!("definition of {t}")))
//!     .collect();
//!
//! let mut rng = SimpleRng::new(12345);
//! let game = generate_game("word-search", &terms, &PlacementConfig::default(), &mut rng).unwrap();
//! let GameContent::WordSearch(ws) = game else { unreachable!() };
//! assert_eq!(ws.grid.size, 15);
//!
//! assert_eq!(calculate_score("memory", &GameResult::new(5, 5, 100)), 900);
//! assert_eq!(calculate_score("bogus", &GameResult::new(5, 5, 100)), 0);
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod session;

pub use flashplay_types as types;

// Re-export commonly used types for convenience
pub use error::GameError;
pub use generator::{
    generate, generate_association, generate_game, generate_memory, generate_quiz,
    generate_word_search, normalize_word, select_terms,
};
pub use grid::{place_words, DirectionSet, Grid, PlacedWord, PlacementConfig};
pub use rng::{shuffle, shuffle_in_place, RandomSource, SimpleRng, ThreadRandom};
pub use scoring::{
    breakdown, calculate_association_score, calculate_memory_score, calculate_quiz_score,
    calculate_score, calculate_word_search_score, ScoreBreakdown,
};
pub use session::{cells_in_line, Selection, WordSearchSession};
